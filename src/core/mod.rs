//! Core helpers shared by every other module: vector math, the random
//! source and console logging macros.

#[macro_use]
pub mod utils;
pub mod random;
pub mod vec2;

pub use random::{FixedRandom, RandomSource, XorShift32};
pub use vec2::Vec2;
