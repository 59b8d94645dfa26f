//! Scene description - the JSON the page hands to the engine
//!
//! Every field has a default, so `{}` is a valid (empty) scene and
//! `SceneConfig::pool()` is the landing page's pool with its eleven letters.

use serde::{Deserialize, Serialize};

use crate::core::random::DEFAULT_SEED;
use crate::systems::entrance::Ease;

use super::boundary::DEFAULT_SAMPLES;
use super::error::SceneError;

/// Pool outline
pub const POOL_PATH: &str = "M50,120 C100,200 350,240 400,200 C450,160 700,200 750,120 \
C700,40 450,10 400,50 C350,90 100,40 50,120 Z";

/// Slide path the letters roll down before landing in the pool
pub const SLIDE_PATH: &str = "M550,120 C550,250 650,280 700,450";

/// Letters and resting slots (x, y, rotation in degrees)
pub const POOL_FLOATIES: [(&str, f32, f32, f32); 11] = [
    ("A", 120.0, 160.0, -15.0),
    ("F", 160.0, 160.0, 10.0),
    ("T", 200.0, 155.0, -5.0),
    ("E", 260.0, 165.0, 15.0),
    ("R", 300.0, 150.0, -10.0),
    ("S", 380.0, 160.0, 5.0),
    ("C", 440.0, 155.0, -15.0),
    ("H", 500.0, 145.0, 10.0),
    ("O", 560.0, 150.0, -5.0),
    ("O", 620.0, 140.0, 15.0),
    ("L", 660.0, 155.0, -10.0),
];

pub const DEFAULT_RADIUS: f32 = 25.0;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneConfig {
    pub seed: u32,
    pub boundary: BoundaryConfig,
    /// Approach path shared by floaties without their own
    pub approach: String,
    pub entrance: EntranceConfig,
    pub physics: PhysicsParams,
    pub floaties: Vec<FloatyConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            boundary: BoundaryConfig::default(),
            approach: SLIDE_PATH.to_string(),
            entrance: EntranceConfig::default(),
            physics: PhysicsParams::default(),
            floaties: Vec::new(),
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// The landing page pool
    pub fn pool() -> Self {
        Self {
            floaties: POOL_FLOATIES
                .iter()
                .map(|&(label, x, y, rotation)| FloatyConfig {
                    label: label.to_string(),
                    x,
                    y,
                    rotation,
                    ..FloatyConfig::default()
                })
                .collect(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoundaryConfig {
    /// SVG path data, sampled when `points` is empty
    pub path: String,
    pub samples: usize,
    /// Explicit polygon, takes precedence over `path`
    pub points: Vec<[f32; 2]>,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            path: POOL_PATH.to_string(),
            samples: DEFAULT_SAMPLES,
            points: Vec::new(),
        }
    }
}

/// Entrance timeline, in seconds
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntranceConfig {
    /// Start of the first floaty's approach
    pub start_delay: f32,
    /// Gap between consecutive approach starts
    pub stagger: f32,
    pub approach_duration: f32,
    pub settle_duration: f32,
    /// Extra spin added over the approach
    pub spin_degrees: f32,
    pub approach_ease: Ease,
    pub settle_ease: Ease,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        // Pool fades in over 1.5s, a 1s pause follows; each approach then
        // overlaps the previous floaty's timeline by 1.45s.
        Self {
            start_delay: 1.05,
            stagger: 0.85,
            approach_duration: 1.5,
            settle_duration: 0.8,
            spin_degrees: 360.0,
            approach_ease: Ease::SineInOut,
            settle_ease: Ease::Power2Out,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsParams {
    /// Full width of the per-tick x jitter
    pub jitter_x: f32,
    /// Full width of the per-tick y jitter
    pub jitter_y: f32,
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    pub spring: f32,
    /// First damping pass
    pub drag: f32,
    /// Second damping pass
    pub friction: f32,
    /// Velocity kept after a wall bounce
    pub restitution: f32,
    /// Velocity nudge per unit of pair overlap
    pub pair_push: f32,
    /// Share of a pair's positional correction that moves the later particle
    pub pair_bias: f32,
    /// Full width of the handoff velocity per axis
    pub splash: f32,
    /// Direct push strength from the per-floaty hover hook
    pub push_strength: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            jitter_x: 0.03,
            jitter_y: 0.05,
            repulsion_radius: 100.0,
            repulsion_strength: 1.5,
            spring: 0.0005,
            drag: 0.98,
            friction: 0.92,
            restitution: 0.7,
            pair_push: 0.1,
            pair_bias: 0.5,
            splash: 1.0,
            push_strength: 1.5,
        }
    }
}

impl PhysicsParams {
    /// Same forces without ambient jitter
    pub fn without_jitter(self) -> Self {
        Self { jitter_x: 0.0, jitter_y: 0.0, ..self }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FloatyConfig {
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub radius: f32,
    /// Overrides the staggered start time
    pub delay: Option<f32>,
    /// Overrides the shared approach path
    pub approach: Option<String>,
}

impl Default for FloatyConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            radius: DEFAULT_RADIUS,
            delay: None,
            approach: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_the_default_scene() {
        let cfg = SceneConfig::from_json("{}").unwrap();
        assert_eq!(cfg.seed, DEFAULT_SEED);
        assert_eq!(cfg.boundary.samples, DEFAULT_SAMPLES);
        assert_eq!(cfg.physics, PhysicsParams::default());
        assert!(cfg.floaties.is_empty());
    }

    #[test]
    fn camel_case_overrides() {
        let cfg = SceneConfig::from_json(
            r#"{
                "physics": { "repulsionRadius": 80, "pairBias": 1.0 },
                "entrance": { "settleEase": "linear" },
                "floaties": [ { "label": "Q", "x": 10, "y": 20, "delay": 0.0 } ]
            }"#,
        )
        .unwrap();

        assert_eq!(cfg.physics.repulsion_radius, 80.0);
        assert_eq!(cfg.physics.pair_bias, 1.0);
        assert_eq!(cfg.physics.spring, 0.0005);
        assert_eq!(cfg.entrance.settle_ease, Ease::Linear);
        assert_eq!(cfg.floaties[0].radius, DEFAULT_RADIUS);
        assert_eq!(cfg.floaties[0].delay, Some(0.0));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(SceneConfig::from_json("{ nope"), Err(SceneError::Config(_))));
    }

    #[test]
    fn pool_round_trips_through_json() {
        let pool = SceneConfig::pool();
        assert_eq!(pool.floaties.len(), 11);

        let back = SceneConfig::from_json(&pool.to_json()).unwrap();
        let labels: String = back.floaties.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, "AFTERSCHOOL");
    }
}
