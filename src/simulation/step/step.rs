use crate::core::random::RandomSource;
use crate::systems::physics::PointerState;

use super::render_extract::extract_poses;
use super::perf_timer::timed;
use super::step_physics::step_physics;
use super::{Lifetime, PerfTimer, SceneCore};

pub(super) fn tick<R: RandomSource>(scene: &mut SceneCore<R>, dt: f32, pointer: PointerState) -> bool {
    if scene.lifetime != Lifetime::Running {
        return false;
    }

    let perf_on = scene.perf_enabled;
    if perf_on {
        scene.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    scene.activated.clear();

    // === ENTRANCE ===
    // Runs first so floaties finishing their script are in their slot
    // before physics looks at anyone.
    let ((), entrance_ms) = timed(perf_on, || advance_entrance(scene, dt));

    // === PHYSICS ===
    let (counts, physics_ms) = timed(perf_on, || step_physics(scene, pointer));

    extract_poses(scene);
    scene.frame += 1;

    if let Some(t) = step_start {
        let stats = &mut scene.perf_stats;
        stats.entrance_ms = entrance_ms;
        stats.physics_ms = physics_ms;
        stats.boundary_contacts = counts.boundary_contacts;
        stats.pair_contacts = counts.pair_contacts;
        stats.active_count = counts.active;
        stats.scripted_count = scene.particles.iter().filter(|p| !p.is_active()).count() as u32;
        stats.activated_count = scene.activated.len() as u32;
        stats.step_ms = t.elapsed_ms();
    }

    true
}

fn advance_entrance<R: RandomSource>(scene: &mut SceneCore<R>, dt: f32) {
    let splash = scene.params.splash;
    scene
        .entrance
        .advance(dt, &mut scene.particles, &mut scene.rng, splash, &mut scene.activated);
}
