use wasm_bindgen::prelude::*;

use crate::core::vec2::Vec2;
use crate::domain::scene::SceneConfig;
use crate::systems::physics::PointerState;

use super::perf_stats::PerfStats;
use super::SceneCore;

#[wasm_bindgen]
pub struct Scene {
    core: SceneCore,
    pointer: PointerState,
}

#[wasm_bindgen]
impl Scene {
    /// Build a scene from its JSON description
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<Scene, JsValue> {
        let core = SceneCore::from_json(config_json).map_err(|e| {
            console_warn!("scene rejected: {}", e);
            JsValue::from_str(&e.to_string())
        })?;
        Ok(Self { core, pointer: PointerState::Absent })
    }

    /// The landing page pool with its eleven letters
    pub fn pool() -> Result<Scene, JsValue> {
        let core = SceneCore::pool().map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core, pointer: PointerState::Absent })
    }

    /// Default pool description, as JSON, for tweaking from JS
    pub fn pool_config_json() -> String {
        SceneConfig::pool().to_json()
    }

    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize { self.core.len() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool { self.core.is_running() }

    pub fn mount(&mut self) -> bool {
        self.core.mount()
    }

    pub fn unmount(&mut self) {
        self.pointer = PointerState::Absent;
        self.core.unmount();
    }

    /// Pointer moved over the scene (scene-local coordinates)
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = PointerState::at(x, y);
    }

    /// Pointer left the scene
    pub fn clear_pointer(&mut self) {
        self.pointer = PointerState::Absent;
    }

    /// Advance one frame; `dt` in seconds
    pub fn tick(&mut self, dt: f32) -> bool {
        self.core.tick(dt, self.pointer)
    }

    /// Hover hook on a single floaty, `local_x`/`local_y` relative to its box
    pub fn push_floaty(&mut self, index: usize, local_x: f32, local_y: f32) -> bool {
        self.core.push_floaty(index, Vec2::new(local_x, local_y))
    }

    // === POSE BUFFER ===

    /// Pointer into WASM memory: x, y, rotation, visible per floaty
    pub fn poses_ptr(&self) -> *const f32 {
        self.core.poses().as_ptr()
    }

    /// Number of f32s behind `poses_ptr`
    pub fn poses_len(&self) -> usize {
        self.core.poses().len()
    }

    /// Copy of the pose buffer
    pub fn poses(&self) -> Vec<f32> {
        self.core.poses().to_vec()
    }

    /// 0 Entering, 1 Settling, 2 Active
    pub fn phase(&self, index: usize) -> Option<u8> {
        self.core.particle(index).map(|p| p.phase() as u8)
    }

    pub fn label(&self, index: usize) -> Option<String> {
        self.core.particle(index).map(|p| p.label.clone())
    }

    /// Indices that handed over to physics during the last tick
    pub fn activated(&self) -> Vec<u32> {
        self.core.activated().to_vec()
    }

    /// Boundary polygon as flat x, y pairs
    pub fn boundary_points(&self) -> Vec<f32> {
        self.core
            .boundary()
            .points()
            .iter()
            .flat_map(|p| [p.x, p.y])
            .collect()
    }

    // === TUNING ===

    pub fn set_repulsion(&mut self, radius: f32, strength: f32) {
        self.core.set_repulsion(radius, strength);
    }

    pub fn set_jitter(&mut self, x: f32, y: f32) {
        self.core.set_jitter(x, y);
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }
}
