use crate::core::vec2::EPSILON;
use crate::domain::boundary::BoundaryShape;
use crate::domain::scene::PhysicsParams;
use crate::systems::floaty::Particle;

/// Keep a floaty inside the boundary.
///
/// Each edge is tested in polygon order and any contact is resolved on the
/// spot (push out, reflect, damp), so a floaty wedged in a corner may be
/// moved by several edges in one call. Returns the number of contacts.
pub fn resolve_boundary(p: &mut Particle, boundary: &BoundaryShape, restitution: f32) -> u32 {
    let mut contacts = 0;
    let r_sq = p.radius * p.radius;

    for edge in boundary.edges() {
        // Zero-length edge: nothing to project onto.
        let Some(closest) = edge.closest_point(p.pos) else {
            continue;
        };

        let offset = p.pos - closest;
        let dist_sq = offset.length_squared();
        if dist_sq >= r_sq {
            continue;
        }

        let dist = dist_sq.sqrt();
        // Center sits on the wall: normal undefined, retry next tick.
        if dist < EPSILON {
            continue;
        }
        let normal = offset * (1.0 / dist);
        let overlap = p.radius - dist;

        p.pos += normal * overlap;

        let vel_dot = p.velocity.dot(normal);
        p.velocity -= normal * (2.0 * vel_dot);
        p.velocity *= restitution;

        contacts += 1;
    }

    contacts
}

/// Separate two overlapping floaties.
///
/// The positional correction is split by `pair_bias` (share moved by `b`),
/// then both velocities are nudged apart in proportion to the overlap.
/// Returns true if the pair was touching.
pub fn resolve_pair(a: &mut Particle, b: &mut Particle, params: &PhysicsParams) -> bool {
    let delta = b.pos - a.pos;
    let min_dist = a.radius + b.radius;
    let dist_sq = delta.length_squared();
    if dist_sq >= min_dist * min_dist {
        return false;
    }

    let dist = dist_sq.sqrt();
    // Stacked exactly on top of each other: no axis to separate along.
    if dist < EPSILON {
        return false;
    }
    let normal = delta * (1.0 / dist);
    let overlap = min_dist - dist;

    // NaN bias falls back to an even split.
    let bias = if params.pair_bias.is_finite() { params.pair_bias.clamp(0.0, 1.0) } else { 0.5 };
    a.pos -= normal * (overlap * (1.0 - bias));
    b.pos += normal * (overlap * bias);

    let nudge = normal * (overlap * params.pair_push);
    a.velocity -= nudge;
    b.velocity += nudge;

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vec2::Vec2;
    use crate::domain::boundary::Edge;
    use crate::systems::floaty::Target;

    fn floaty(x: f32, y: f32, radius: f32) -> Particle {
        Particle::settled(0, Vec2::new(x, y), radius, Target::new(x, y, 0.0))
    }

    fn distance_to(edge: Edge, p: Vec2) -> f32 {
        edge.closest_point(p).map(|c| c.distance(p)).unwrap_or(f32::INFINITY)
    }

    fn square() -> BoundaryShape {
        BoundaryShape::from_points(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(200.0, 0.0),
            Vec2::new(200.0, 200.0),
            Vec2::new(0.0, 200.0),
        ])
        .unwrap()
    }

    #[test]
    fn wall_contact_pushes_out_and_reflects() {
        let boundary = square();
        let mut p = floaty(190.0, 100.0, 25.0);
        p.velocity = Vec2::new(2.0, 0.5);

        let contacts = resolve_boundary(&mut p, &boundary, 0.7);
        assert_eq!(contacts, 1);

        for edge in boundary.edges() {
            assert!(distance_to(edge, p.pos) >= 25.0 - 1e-3);
        }
        assert!((p.pos.x - 175.0).abs() < 1e-4);
        // Normal component flipped and damped, tangential only damped.
        assert!((p.velocity.x + 1.4).abs() < 1e-5);
        assert!((p.velocity.y - 0.35).abs() < 1e-5);
    }

    #[test]
    fn corner_resolves_against_both_walls() {
        let boundary = square();
        let mut p = floaty(10.0, 12.0, 25.0);
        p.velocity = Vec2::new(-1.0, -1.0);

        let contacts = resolve_boundary(&mut p, &boundary, 0.7);
        assert_eq!(contacts, 2);
        for edge in boundary.edges() {
            assert!(distance_to(edge, p.pos) >= 25.0 - 1e-3);
        }
        assert!(p.velocity.x > 0.0 && p.velocity.y > 0.0);
    }

    #[test]
    fn clear_floaty_is_untouched() {
        let boundary = square();
        let mut p = floaty(100.0, 100.0, 25.0);
        p.velocity = Vec2::new(0.3, -0.2);
        let before = p.clone();

        assert_eq!(resolve_boundary(&mut p, &boundary, 0.7), 0);
        assert_eq!(p.pos, before.pos);
        assert_eq!(p.velocity, before.velocity);
    }

    #[test]
    fn zero_length_edges_and_centers_on_the_wall_are_skipped() {
        // Duplicate closing vertex makes a zero-length edge.
        let boundary = BoundaryShape::from_points(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(200.0, 0.0),
            Vec2::new(200.0, 200.0),
            Vec2::new(0.0, 200.0),
            Vec2::new(0.0, 0.0),
        ])
        .unwrap();
        let mut p = floaty(100.0, 100.0, 25.0);
        assert_eq!(resolve_boundary(&mut p, &boundary, 0.7), 0);

        let mut on_wall = floaty(100.0, 0.0, 25.0);
        resolve_boundary(&mut on_wall, &square(), 0.7);
        assert!(on_wall.pos.is_finite());
        assert!(on_wall.velocity.is_finite());
    }

    #[test]
    fn overlapping_pair_is_separated() {
        let params = PhysicsParams::default();
        let mut a = floaty(0.0, 0.0, 25.0);
        let mut b = floaty(10.0, 0.0, 25.0);

        assert!(resolve_pair(&mut a, &mut b, &params));
        assert!(a.pos.distance(b.pos) >= 50.0 - 1e-3);
        // Even split by default
        assert!((a.pos.x + 20.0).abs() < 1e-4);
        assert!((b.pos.x - 30.0).abs() < 1e-4);
        // overlap 40 * 0.1
        assert!((a.velocity.x + 4.0).abs() < 1e-4);
        assert!((b.velocity.x - 4.0).abs() < 1e-4);
    }

    #[test]
    fn pair_bias_can_move_one_side_only() {
        let params = PhysicsParams { pair_bias: 1.0, ..PhysicsParams::default() };
        let mut a = floaty(0.0, 0.0, 25.0);
        let mut b = floaty(0.0, 30.0, 25.0);

        assert!(resolve_pair(&mut a, &mut b, &params));
        assert_eq!(a.pos, Vec2::ZERO);
        assert!((b.pos.y - 50.0).abs() < 1e-4);
    }

    #[test]
    fn non_finite_bias_splits_evenly() {
        let params = PhysicsParams { pair_bias: f32::NAN, ..PhysicsParams::default() };
        let mut a = floaty(0.0, 0.0, 25.0);
        let mut b = floaty(10.0, 0.0, 25.0);

        assert!(resolve_pair(&mut a, &mut b, &params));
        assert!(a.pos.is_finite() && b.pos.is_finite());
        assert!((a.pos.x + 20.0).abs() < 1e-4);
        assert!((b.pos.x - 30.0).abs() < 1e-4);
    }

    #[test]
    fn separated_or_stacked_pairs_are_left_alone() {
        let params = PhysicsParams::default();

        let mut a = floaty(0.0, 0.0, 25.0);
        let mut b = floaty(60.0, 0.0, 25.0);
        assert!(!resolve_pair(&mut a, &mut b, &params));

        let mut c = floaty(5.0, 5.0, 25.0);
        let mut d = floaty(5.0, 5.0, 25.0);
        assert!(!resolve_pair(&mut c, &mut d, &params));
        assert_eq!(c.pos, d.pos);
        assert_eq!(c.velocity, Vec2::ZERO);
    }
}
