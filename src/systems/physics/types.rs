use crate::core::vec2::Vec2;

/// Scale between hover offset (units) and the velocity it adds
pub const PUSH_SCALE: f32 = 0.1;

/// Pointer as seen by one tick
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerState {
    /// No pointer over the scene; repulsion has no effect
    #[default]
    Absent,
    /// Scene-local coordinates
    At(Vec2),
}

impl PointerState {
    pub fn at(x: f32, y: f32) -> Self {
        let p = Vec2::new(x, y);
        // A NaN pointer would poison every velocity it touches.
        if p.is_finite() {
            PointerState::At(p)
        } else {
            PointerState::Absent
        }
    }

    pub fn position(&self) -> Option<Vec2> {
        match *self {
            PointerState::Absent => None,
            PointerState::At(p) => Some(p),
        }
    }
}
