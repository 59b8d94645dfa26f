use crate::core::random::RandomSource;

use super::SceneCore;

/// Floats per floaty in the pose buffer: x, y, rotation (degrees), visible (0/1)
pub const POSE_STRIDE: usize = 4;

pub(super) fn extract_poses<R: RandomSource>(scene: &mut SceneCore<R>) {
    let len = scene.particles.len() * POSE_STRIDE;
    if scene.poses.len() != len {
        scene.poses.resize(len, 0.0);
    }

    for (slot, p) in scene.poses.chunks_exact_mut(POSE_STRIDE).zip(scene.particles.iter()) {
        slot[0] = p.pos.x;
        slot[1] = p.pos.y;
        slot[2] = p.rotation;
        slot[3] = if p.visible { 1.0 } else { 0.0 };
    }
}
