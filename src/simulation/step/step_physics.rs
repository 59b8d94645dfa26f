use crate::core::random::RandomSource;
use crate::systems::floaty::Particle;
use crate::systems::physics::{apply_forces, resolve_boundary, resolve_pair, PointerState};

use super::SceneCore;

#[derive(Clone, Copy, Debug, Default)]
pub(super) struct PhysicsCounts {
    pub(super) active: u32,
    pub(super) boundary_contacts: u32,
    pub(super) pair_contacts: u32,
}

/// One physics step for every Active floaty, in index order.
///
/// Per floaty: forces and integration, then walls, then pairs with every
/// later floaty. Floaties handed over during this tick keep their slot
/// pose until the next tick.
pub(super) fn step_physics<R: RandomSource>(scene: &mut SceneCore<R>, pointer: PointerState) -> PhysicsCounts {
    let params = scene.params;
    let mut counts = PhysicsCounts::default();

    let SceneCore { particles, boundary, rng, activated, .. } = scene;
    let simulated = |p: &Particle| p.is_active() && !activated.contains(&p.id);

    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        let p = &mut head[i];
        if !simulated(p) {
            continue;
        }
        counts.active += 1;

        apply_forces(p, &params, pointer, &mut *rng);
        counts.boundary_contacts += resolve_boundary(p, boundary, params.restitution);

        for other in tail.iter_mut() {
            if simulated(other) && resolve_pair(p, other, &params) {
                counts.pair_contacts += 1;
            }
        }
    }

    counts
}
