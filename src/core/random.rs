//! Random sources for jitter and splash
//!
//! The engine never reaches for a global RNG: every scene owns a
//! `RandomSource`, so a seed (or a fixed source) makes a run reproducible.

/// Seed used when a caller passes 0 (xorshift has a fixed point at 0).
pub const DEFAULT_SEED: u32 = 12345;

/// Anything that can hand out uniform samples in [0, 1).
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;

    /// Uniform sample in [-0.5, 0.5)
    #[inline]
    fn next_centered(&mut self) -> f32 {
        self.next_unit() - 0.5
    }
}

/// Random number generator (xorshift32)
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Seeded xorshift32 generator, the default source for scenes.
#[derive(Clone, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for XorShift32 {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        // Top 24 bits fit an f32 mantissa exactly.
        (xorshift32(&mut self.state) >> 8) as f32 / (1u32 << 24) as f32
    }
}

/// Always returns the same sample. `FixedRandom(0.5)` turns jitter and
/// splash off entirely.
#[derive(Clone, Copy, Debug)]
pub struct FixedRandom(pub f32);

impl FixedRandom {
    pub fn neutral() -> Self {
        FixedRandom(0.5)
    }
}

impl RandomSource for FixedRandom {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        self.0
    }
}
