use crate::core::random::RandomSource;
use crate::core::vec2::EPSILON;
use crate::domain::scene::PhysicsParams;
use crate::systems::floaty::Particle;

use super::types::PointerState;

/// Small random kick so idle floaties keep bobbing
#[inline]
pub fn apply_jitter<R: RandomSource + ?Sized>(p: &mut Particle, params: &PhysicsParams, rng: &mut R) {
    p.velocity.x += rng.next_centered() * params.jitter_x;
    p.velocity.y += rng.next_centered() * params.jitter_y;
}

/// Push away from the pointer, stronger when closer, zero at the radius
#[inline]
pub fn apply_pointer_repulsion(p: &mut Particle, params: &PhysicsParams, pointer: PointerState) {
    let Some(at) = pointer.position() else {
        return;
    };
    let radius = params.repulsion_radius;
    let away = p.pos - at;
    let dist_sq = away.length_squared();
    if !(dist_sq < radius * radius) {
        return;
    }

    let dist = dist_sq.sqrt();
    // Pointer dead on the center: no direction to push in.
    if dist < EPSILON {
        return;
    }
    let falloff = 1.0 - dist / radius;
    p.velocity += away * (falloff * params.repulsion_strength / dist);
}

/// Pull towards the resting slot
#[inline]
pub fn apply_spring(p: &mut Particle, params: &PhysicsParams) {
    let pull = p.target.pos - p.pos;
    p.velocity += pull * params.spring;
}

#[inline]
pub fn apply_damping(p: &mut Particle, params: &PhysicsParams) {
    p.velocity *= params.drag;
    p.velocity *= params.friction;
}

#[inline]
pub fn integrate(p: &mut Particle) {
    p.pos += p.velocity;
}

/// All forces plus integration, in tick order
pub fn apply_forces<R: RandomSource + ?Sized>(
    p: &mut Particle,
    params: &PhysicsParams,
    pointer: PointerState,
    rng: &mut R,
) {
    apply_jitter(p, params, rng);
    apply_pointer_repulsion(p, params, pointer);
    apply_spring(p, params);
    apply_damping(p, params);
    integrate(p);
}
