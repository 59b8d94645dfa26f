//! Scene - the pool simulation
//!
//! SceneCore only orchestrates:
//! - entrance script is in systems/entrance
//! - forces and collisions are in systems/physics
//! - geometry and config live in domain/
//!
//! One `tick` per display frame: advance the entrance clock, step physics
//! for every Active floaty in index order, refresh the pose buffer.

use crate::core::random::{RandomSource, XorShift32};
use crate::core::vec2::Vec2;
use crate::domain::boundary::BoundaryShape;
use crate::domain::error::SceneError;
use crate::domain::scene::{PhysicsParams, SceneConfig};
use crate::systems::entrance::EntranceController;
use crate::systems::floaty::Particle;
use crate::systems::physics::PointerState;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "step/step_physics.rs"]
mod step_physics;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Scene;
pub use perf_stats::PerfStats;
pub use render_extract::POSE_STRIDE;

use perf_timer::PerfTimer;

/// Mount state. Only moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifetime {
    /// Built, not yet visible
    Idle,
    /// Ticking
    Running,
    /// Unmounted; ticks and scripts are dead
    TornDown,
}

/// The simulation world
pub struct SceneCore<R: RandomSource = XorShift32> {
    boundary: BoundaryShape,
    particles: Vec<Particle>,
    entrance: EntranceController,
    params: PhysicsParams,
    rng: R,

    // State
    lifetime: Lifetime,
    frame: u64,
    /// Ids that became Active during the last tick
    activated: Vec<u32>,
    /// x, y, rotation, visible per floaty (for JS rendering)
    poses: Vec<f32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SceneCore<XorShift32> {
    /// Build a scene seeded from `config.seed`
    pub fn new(config: &SceneConfig) -> Result<Self, SceneError> {
        init::create_scene_core(config, XorShift32::new(config.seed))
    }

    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let config = SceneConfig::from_json(json)?;
        Self::new(&config)
    }

    /// The landing page pool
    pub fn pool() -> Result<Self, SceneError> {
        Self::new(&SceneConfig::pool())
    }
}

impl<R: RandomSource> SceneCore<R> {
    /// Build a scene drawing jitter and splash from `rng`
    pub fn with_random(config: &SceneConfig, rng: R) -> Result<Self, SceneError> {
        init::create_scene_core(config, rng)
    }

    /// Scene whose floaties skip the entrance and start Active
    pub fn settled(boundary: BoundaryShape, particles: Vec<Particle>, params: PhysicsParams, rng: R) -> Self {
        init::create_settled_scene_core(boundary, particles, params, rng)
    }

    pub fn boundary(&self) -> &BoundaryShape { &self.boundary }

    pub fn particles(&self) -> &[Particle] { &self.particles }

    pub fn particle(&self, index: usize) -> Option<&Particle> { self.particles.get(index) }

    pub fn len(&self) -> usize { self.particles.len() }

    pub fn is_empty(&self) -> bool { self.particles.is_empty() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn lifetime(&self) -> Lifetime { self.lifetime }

    pub fn is_running(&self) -> bool { self.lifetime == Lifetime::Running }

    pub fn entrance(&self) -> &EntranceController { &self.entrance }

    /// Ids that became Active during the last tick
    pub fn activated(&self) -> &[u32] { &self.activated }

    /// Flat pose buffer, `POSE_STRIDE` floats per floaty
    pub fn poses(&self) -> &[f32] { &self.poses }

    pub fn params(&self) -> &PhysicsParams { &self.params }

    pub fn set_params(&mut self, params: PhysicsParams) {
        settings::set_params(self, params);
    }

    pub fn set_repulsion(&mut self, radius: f32, strength: f32) {
        settings::set_repulsion(self, radius, strength);
    }

    pub fn set_jitter(&mut self, x: f32, y: f32) {
        settings::set_jitter(self, x, y);
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Scene became visible: start ticking
    pub fn mount(&mut self) -> bool {
        commands::mount(self)
    }

    /// Scene went away: stop ticking and kill the entrance script
    pub fn unmount(&mut self) {
        commands::unmount(self)
    }

    /// Advance one display frame. `dt` is in seconds and only drives the
    /// entrance clock; physics moves one unit of time per tick.
    ///
    /// Returns false (and does nothing) unless the scene is Running.
    pub fn tick(&mut self, dt: f32, pointer: PointerState) -> bool {
        step::tick(self, dt, pointer)
    }

    /// Hover push on floaty `index`. `local` is the pointer inside the
    /// floaty's own box, origin at its top-left corner.
    ///
    /// Out-of-range or not-yet-Active floaties are ignored.
    pub fn push_floaty(&mut self, index: usize, local: Vec2) -> bool {
        commands::push_floaty(self, index, local)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
