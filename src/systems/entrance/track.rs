use std::sync::Arc;

use crate::core::vec2::Vec2;
use crate::domain::path::ArcLengthTable;
use crate::domain::scene::EntranceConfig;
use crate::systems::floaty::{Phase, Target};

use super::easing::Ease;

/// Where the script puts a floaty at a given time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptedPose {
    pub phase: Phase,
    pub pos: Vec2,
    pub rotation: f32,
    pub visible: bool,
}

/// One floaty's entrance timeline. Times are seconds on the scene's
/// entrance clock.
#[derive(Clone, Debug)]
pub struct EntranceTrack {
    approach: Arc<ArcLengthTable>,
    delay: f32,
    approach_duration: f32,
    settle_duration: f32,
    start_rotation: f32,
    spin_degrees: f32,
    approach_ease: Ease,
    settle_ease: Ease,
}

impl EntranceTrack {
    pub fn new(approach: Arc<ArcLengthTable>, delay: f32, config: &EntranceConfig) -> Self {
        Self {
            approach,
            delay: non_negative(delay),
            approach_duration: non_negative(config.approach_duration),
            settle_duration: non_negative(config.settle_duration),
            start_rotation: 0.0,
            spin_degrees: config.spin_degrees,
            approach_ease: config.approach_ease,
            settle_ease: config.settle_ease,
        }
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    /// Clock time at which the approach ends and the settle begins
    fn approach_end(&self) -> f32 {
        self.delay + self.approach_duration
    }

    /// Clock time at which the floaty becomes Active
    pub fn end_time(&self) -> f32 {
        self.approach_end() + self.settle_duration
    }

    /// Scripted pose at entrance clock `clock`
    pub fn sample(&self, clock: f32, target: Target) -> ScriptedPose {
        // Phase boundaries are absolute clock times, the same sums
        // `end_time` reports.
        if clock >= self.end_time() {
            return ScriptedPose {
                phase: Phase::Active,
                pos: target.pos,
                rotation: target.rotation,
                visible: true,
            };
        }

        if clock < self.delay {
            return ScriptedPose {
                phase: Phase::Entering,
                pos: self.approach.start(),
                rotation: self.start_rotation,
                visible: false,
            };
        }

        let approach_end = self.approach_end();
        if clock < approach_end {
            let eased = self.approach_ease.apply((clock - self.delay) / self.approach_duration);
            return ScriptedPose {
                phase: Phase::Entering,
                pos: self.approach.point_at_progress(eased),
                rotation: self.start_rotation + self.spin_degrees * eased,
                visible: true,
            };
        }

        let eased = self.settle_ease.apply((clock - approach_end) / self.settle_duration);
        let from_rotation = self.start_rotation + self.spin_degrees;
        ScriptedPose {
            phase: Phase::Settling,
            pos: self.approach.end().lerp(target.pos, eased),
            rotation: from_rotation + (target.rotation - from_rotation) * eased,
            visible: true,
        }
    }
}

fn non_negative(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}
