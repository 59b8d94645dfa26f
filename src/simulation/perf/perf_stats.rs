use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) entrance_ms: f64,
    pub(super) physics_ms: f64,
    pub(super) boundary_contacts: u32,
    pub(super) pair_contacts: u32,
    pub(super) active_count: u32,
    pub(super) scripted_count: u32,
    pub(super) activated_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn entrance_ms(&self) -> f64 { self.entrance_ms }
    #[wasm_bindgen(getter)]
    pub fn physics_ms(&self) -> f64 { self.physics_ms }
    #[wasm_bindgen(getter)]
    pub fn boundary_contacts(&self) -> u32 { self.boundary_contacts }
    #[wasm_bindgen(getter)]
    pub fn pair_contacts(&self) -> u32 { self.pair_contacts }
    /// Floaties stepped by physics this tick
    #[wasm_bindgen(getter)]
    pub fn active_count(&self) -> u32 { self.active_count }
    /// Floaties still Entering or Settling
    #[wasm_bindgen(getter)]
    pub fn scripted_count(&self) -> u32 { self.scripted_count }
    #[wasm_bindgen(getter)]
    pub fn activated_count(&self) -> u32 { self.activated_count }
}
