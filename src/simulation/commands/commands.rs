use crate::core::random::RandomSource;
use crate::core::vec2::Vec2;
use crate::systems::physics::PUSH_SCALE;

use super::{Lifetime, SceneCore};

pub(super) fn mount<R: RandomSource>(scene: &mut SceneCore<R>) -> bool {
    if scene.lifetime != Lifetime::Idle {
        return false;
    }
    scene.lifetime = Lifetime::Running;
    console_log!("pool mounted ({} floaties)", scene.particles.len());
    true
}

pub(super) fn unmount<R: RandomSource>(scene: &mut SceneCore<R>) {
    if scene.lifetime == Lifetime::TornDown {
        return;
    }
    scene.lifetime = Lifetime::TornDown;
    scene.entrance.cancel();
    scene.activated.clear();
    console_log!("pool unmounted after {} frames", scene.frame);
}

pub(super) fn push_floaty<R: RandomSource>(scene: &mut SceneCore<R>, index: usize, local: Vec2) -> bool {
    if scene.lifetime == Lifetime::TornDown {
        return false;
    }
    let gain = scene.params.push_strength * PUSH_SCALE;
    let Some(p) = scene.particles.get_mut(index) else {
        return false;
    };
    // Offset from the floaty's center; pushing away from the cursor.
    let offset = local - Vec2::new(p.radius, p.radius);
    p.apply_impulse(-offset * gain)
}
