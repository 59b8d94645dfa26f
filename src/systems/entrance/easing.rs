use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Easing curves used by the entrance timeline.
///
/// Names follow the page's tween library: `power2` is cubic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    Linear,
    #[default]
    SineInOut,
    Power2Out,
}

impl Ease {
    /// Map linear progress `t` (clamped to [0, 1]) onto the curve
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Ease::Linear => t,
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
        }
    }
}
