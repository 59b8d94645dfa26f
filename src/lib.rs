//! Floaty Engine - the landing page's letter pool, simulated in WASM
//!
//! Architecture:
//! - core/        - vectors, random sources, logging
//! - domain/      - path data, boundary polygon, scene config, errors
//! - systems/     - floaties, entrance script, physics
//! - simulation/  - orchestration and the JS-facing `Scene`

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("floaty engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Floats per floaty in `Scene::poses`
#[wasm_bindgen]
pub fn pose_stride() -> usize {
    simulation::POSE_STRIDE
}

// Re-export main types
pub use crate::core::random::{FixedRandom, RandomSource, XorShift32};
pub use crate::core::vec2::Vec2;
pub use domain::boundary::BoundaryShape;
pub use domain::error::SceneError;
pub use domain::scene::{PhysicsParams, SceneConfig};
pub use simulation::{Lifetime, PerfStats, Scene, SceneCore, POSE_STRIDE};
pub use systems::floaty::{Particle, Phase, Target};
pub use systems::physics::PointerState;
