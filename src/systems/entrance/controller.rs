use crate::core::random::RandomSource;
use crate::core::vec2::Vec2;
use crate::systems::floaty::{Particle, Phase};

use super::track::EntranceTrack;

/// Drives every floaty that is not yet Active.
///
/// Track `i` belongs to particle `i`. Active particles are never touched,
/// so once a floaty hands over to physics the script has no further say.
#[derive(Clone, Debug, Default)]
pub struct EntranceController {
    tracks: Vec<EntranceTrack>,
    clock: f32,
    /// Floaties that have handed over to physics
    handed_over: usize,
    cancelled: bool,
}

impl EntranceController {
    pub fn new(tracks: Vec<EntranceTrack>) -> Self {
        Self {
            tracks,
            clock: 0.0,
            handed_over: 0,
            cancelled: false,
        }
    }

    /// Controller with nothing to animate
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn tracks(&self) -> &[EntranceTrack] {
        &self.tracks
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Stop for good. Floaties still scripted stay where they are.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Advance the clock by `dt` seconds and apply scripted poses.
    ///
    /// A floaty whose timeline is over runs Settling -> Active in the same
    /// call even when `dt` skipped the whole settle. Ids of floaties that
    /// became Active are appended to `activated`.
    pub fn advance<R: RandomSource + ?Sized>(
        &mut self,
        dt: f32,
        particles: &mut [Particle],
        rng: &mut R,
        splash: f32,
        activated: &mut Vec<u32>,
    ) {
        if self.cancelled {
            return;
        }
        if dt.is_finite() && dt > 0.0 {
            self.clock += dt;
        }

        for (p, track) in particles.iter_mut().zip(self.tracks.iter()) {
            if p.is_active() {
                continue;
            }

            let pose = track.sample(self.clock, p.target);
            match pose.phase {
                Phase::Entering => {
                    p.pos = pose.pos;
                    p.rotation = pose.rotation;
                    p.visible = pose.visible;
                }
                Phase::Settling => {
                    p.begin_settling();
                    p.pos = pose.pos;
                    p.rotation = pose.rotation;
                    p.visible = pose.visible;
                }
                Phase::Active => {
                    p.begin_settling();
                    let kick = Vec2::new(rng.next_centered() * splash, rng.next_centered() * splash);
                    if p.activate(kick) {
                        self.handed_over += 1;
                        activated.push(p.id);
                    }
                }
            }
        }
    }

    /// True once every track's floaty has handed over.
    pub fn is_finished(&self) -> bool {
        self.handed_over == self.tracks.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::random::{FixedRandom, XorShift32};
    use crate::domain::path::PathSpec;
    use crate::domain::scene::EntranceConfig;
    use crate::systems::floaty::Target;

    fn scene(n: usize) -> (EntranceController, Vec<Particle>) {
        let table = Arc::new(PathSpec::parse("M0,0 L100,0").unwrap().arc_length_table().unwrap());
        let config = EntranceConfig::default();
        let tracks = (0..n)
            .map(|i| EntranceTrack::new(table.clone(), i as f32 * config.stagger, &config))
            .collect();
        let particles = (0..n)
            .map(|i| Particle::new(i as u32, "X", 25.0, Target::new(10.0 * i as f32, 5.0, 0.0)))
            .collect();
        (EntranceController::new(tracks), particles)
    }

    #[test]
    fn phases_progress_in_order_exactly_once() {
        let (mut ctl, mut particles) = scene(1);
        let mut rng = FixedRandom::neutral();
        let mut activated = Vec::new();
        let mut seen = vec![particles[0].phase()];

        for _ in 0..200 {
            ctl.advance(1.0 / 60.0, &mut particles, &mut rng, 1.0, &mut activated);
            if *seen.last().unwrap() != particles[0].phase() {
                seen.push(particles[0].phase());
            }
        }

        assert_eq!(seen, vec![Phase::Entering, Phase::Settling, Phase::Active]);
        assert_eq!(activated, vec![0]);
        assert!(ctl.is_finished());
    }

    #[test]
    fn one_huge_step_still_lands_in_the_slot() {
        let (mut ctl, mut particles) = scene(3);
        let mut rng = XorShift32::new(3);
        let mut activated = Vec::new();

        ctl.advance(100.0, &mut particles, &mut rng, 1.0, &mut activated);

        assert_eq!(activated, vec![0, 1, 2]);
        assert!(ctl.is_finished());
        for p in &particles {
            assert_eq!(p.pos, p.target.pos);
            assert!(p.velocity.x.abs() <= 0.5 && p.velocity.y.abs() <= 0.5);
        }
    }

    #[test]
    fn staggered_floaties_wait_their_turn() {
        let (mut ctl, mut particles) = scene(2);
        let mut rng = FixedRandom::neutral();
        let mut activated = Vec::new();

        ctl.advance(0.5, &mut particles, &mut rng, 1.0, &mut activated);
        assert!(particles[0].visible);
        assert!(!particles[1].visible);
        assert!(!ctl.is_finished());
        assert_eq!(particles[1].pos, Vec2::ZERO);
    }

    #[test]
    fn cancelled_controller_never_moves_anything() {
        let (mut ctl, mut particles) = scene(1);
        let mut rng = FixedRandom::neutral();
        let mut activated = Vec::new();

        ctl.advance(0.5, &mut particles, &mut rng, 1.0, &mut activated);
        let parked = particles[0].pos;
        ctl.cancel();
        ctl.advance(10.0, &mut particles, &mut rng, 1.0, &mut activated);

        assert_eq!(ctl.clock(), 0.5);
        assert_eq!(particles[0].pos, parked);
        assert_eq!(particles[0].phase(), Phase::Entering);
        assert!(activated.is_empty());
    }
}
