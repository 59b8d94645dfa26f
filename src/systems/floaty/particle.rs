use crate::core::vec2::Vec2;

/// Lifecycle phase. Transitions only go forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Phase {
    /// Following the approach path (or waiting, invisible, for its turn)
    Entering = 0,
    /// Easing from the end of the approach into the resting slot
    Settling = 1,
    /// Free-simulated
    Active = 2,
}

/// Resting slot a floaty is sprung towards
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub pos: Vec2,
    /// Degrees
    pub rotation: f32,
}

impl Target {
    pub fn new(x: f32, y: f32, rotation: f32) -> Self {
        Self { pos: Vec2::new(x, y), rotation }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    /// Index in the scene
    pub id: u32,
    pub label: String,

    // === Physics State ===
    pub pos: Vec2,
    /// Units per tick
    pub velocity: Vec2,
    /// Used for wall and pair collisions alike
    pub radius: f32,

    // === Presentation ===
    /// Degrees
    pub rotation: f32,
    pub visible: bool,

    pub target: Target,
    phase: Phase,
}

impl Particle {
    /// A floaty waiting for its entrance: invisible, at rest.
    pub fn new(id: u32, label: impl Into<String>, radius: f32, target: Target) -> Self {
        Self {
            id,
            label: label.into(),
            pos: Vec2::ZERO,
            velocity: Vec2::ZERO,
            radius,
            rotation: 0.0,
            visible: false,
            target,
            phase: Phase::Entering,
        }
    }

    /// A floaty that skips the entrance and is already under physics
    /// control at `pos`.
    pub fn settled(id: u32, pos: Vec2, radius: f32, target: Target) -> Self {
        Self {
            id,
            label: String::new(),
            pos,
            velocity: Vec2::ZERO,
            radius,
            rotation: target.rotation,
            visible: true,
            target,
            phase: Phase::Active,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Entering -> Settling. Returns false if already past Entering.
    pub(crate) fn begin_settling(&mut self) -> bool {
        if self.phase != Phase::Entering {
            return false;
        }
        self.phase = Phase::Settling;
        true
    }

    /// Settling -> Active: snap to the slot and take the splash velocity.
    /// Returns false unless the floaty was Settling.
    pub(crate) fn activate(&mut self, splash: Vec2) -> bool {
        if self.phase != Phase::Settling {
            return false;
        }
        self.pos = self.target.pos;
        self.rotation = self.target.rotation;
        self.velocity = splash;
        self.visible = true;
        self.phase = Phase::Active;
        true
    }

    /// Add to velocity. Ignored unless Active.
    pub fn apply_impulse(&mut self, impulse: Vec2) -> bool {
        if !self.is_active() || !impulse.is_finite() {
            return false;
        }
        self.velocity += impulse;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_only_move_forward() {
        let mut p = Particle::new(0, "A", 25.0, Target::new(120.0, 160.0, -15.0));
        assert_eq!(p.phase(), Phase::Entering);
        assert!(!p.visible);

        // Cannot skip Settling
        assert!(!p.activate(Vec2::new(0.1, 0.1)));
        assert_eq!(p.phase(), Phase::Entering);

        assert!(p.begin_settling());
        assert!(!p.begin_settling());
        assert!(p.activate(Vec2::new(0.1, -0.2)));
        assert_eq!(p.phase(), Phase::Active);
        assert_eq!(p.pos, Vec2::new(120.0, 160.0));
        assert_eq!(p.rotation, -15.0);
        assert_eq!(p.velocity, Vec2::new(0.1, -0.2));

        assert!(!p.activate(Vec2::ZERO));
        assert!(!p.begin_settling());
        assert_eq!(p.velocity, Vec2::new(0.1, -0.2));
    }

    #[test]
    fn impulses_only_reach_active_floaties() {
        let mut entering = Particle::new(1, "F", 25.0, Target::new(0.0, 0.0, 0.0));
        assert!(!entering.apply_impulse(Vec2::new(1.0, 0.0)));
        assert_eq!(entering.velocity, Vec2::ZERO);

        let mut active = Particle::settled(2, Vec2::ZERO, 25.0, Target::new(0.0, 0.0, 0.0));
        assert!(active.apply_impulse(Vec2::new(1.0, 0.0)));
        assert!(!active.apply_impulse(Vec2::new(f32::NAN, 0.0)));
        assert_eq!(active.velocity, Vec2::new(1.0, 0.0));
    }
}
