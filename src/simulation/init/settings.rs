use crate::core::random::RandomSource;
use crate::domain::scene::PhysicsParams;

use super::perf_stats::PerfStats;
use super::SceneCore;

pub(super) fn set_params<R: RandomSource>(scene: &mut SceneCore<R>, params: PhysicsParams) {
    scene.params = params;
}

pub(super) fn set_repulsion<R: RandomSource>(scene: &mut SceneCore<R>, radius: f32, strength: f32) {
    scene.params.repulsion_radius = radius.max(0.0);
    scene.params.repulsion_strength = strength;
}

pub(super) fn set_jitter<R: RandomSource>(scene: &mut SceneCore<R>, x: f32, y: f32) {
    scene.params.jitter_x = x;
    scene.params.jitter_y = y;
}

pub(super) fn enable_perf_metrics<R: RandomSource>(scene: &mut SceneCore<R>, enabled: bool) {
    scene.perf_enabled = enabled;
}

pub(super) fn get_perf_stats<R: RandomSource>(scene: &SceneCore<R>) -> PerfStats {
    scene.perf_stats.clone()
}
