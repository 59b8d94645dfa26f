use super::*;
use crate::core::random::FixedRandom;
use crate::systems::floaty::{Phase, Target};

/// One floaty in a 400x400 box, slot well clear of the walls.
fn boxed_config(delay: f32) -> SceneConfig {
    SceneConfig::from_json(&format!(
        r#"{{
            "boundary": {{ "points": [[0,0],[400,0],[400,400],[0,400]] }},
            "approach": "M200,0 L200,100",
            "floaties": [ {{ "label": "A", "x": 200, "y": 200, "rotation": 10, "delay": {delay} }} ]
        }}"#
    ))
    .unwrap()
}

fn settled_pair() -> SceneCore<FixedRandom> {
    let boundary = BoundaryShape::regular_polygon(8, 300.0, Vec2::ZERO).unwrap();
    let particles = vec![
        Particle::settled(0, Vec2::new(-100.0, 0.0), 25.0, Target::new(-100.0, 0.0, 0.0)),
        Particle::settled(1, Vec2::new(100.0, 0.0), 25.0, Target::new(100.0, 0.0, 0.0)),
    ];
    SceneCore::settled(boundary, particles, PhysicsParams::default().without_jitter(), FixedRandom::neutral())
}

#[test]
fn tick_is_a_no_op_until_mounted() {
    let mut scene = SceneCore::with_random(&boxed_config(0.0), FixedRandom::neutral()).unwrap();
    assert_eq!(scene.lifetime(), Lifetime::Idle);

    assert!(!scene.tick(1.0, PointerState::Absent));
    assert_eq!(scene.frame(), 0);
    assert_eq!(scene.entrance().clock(), 0.0);

    assert!(scene.mount());
    assert!(!scene.mount());
    assert!(scene.tick(1.0 / 60.0, PointerState::Absent));
    assert_eq!(scene.frame(), 1);
}

#[test]
fn unmount_is_terminal() {
    let mut scene = SceneCore::with_random(&boxed_config(0.0), FixedRandom::neutral()).unwrap();
    scene.mount();
    scene.tick(0.5, PointerState::Absent);
    let parked = scene.particles()[0].pos;

    scene.unmount();
    scene.unmount();
    assert_eq!(scene.lifetime(), Lifetime::TornDown);
    assert!(scene.entrance().is_cancelled());

    assert!(!scene.mount());
    assert!(!scene.tick(10.0, PointerState::Absent));
    assert!(!scene.push_floaty(0, Vec2::ZERO));
    assert_eq!(scene.particles()[0].pos, parked);
    assert_eq!(scene.particles()[0].phase(), Phase::Entering);
    assert_eq!(scene.frame(), 1);
}

#[test]
fn freshly_activated_floaty_sits_in_its_slot_for_one_tick() {
    let mut scene = SceneCore::with_random(&boxed_config(0.0), FixedRandom(0.9)).unwrap();
    scene.enable_perf_metrics(true);
    scene.mount();

    scene.tick(100.0, PointerState::at(210.0, 200.0));
    assert_eq!(scene.activated(), &[0]);
    let p = &scene.particles()[0];
    assert_eq!(p.phase(), Phase::Active);
    assert_eq!(p.pos, Vec2::new(200.0, 200.0));
    assert_eq!(p.rotation, 10.0);
    // Splash: (0.9 - 0.5) * 1.0 on both axes
    assert!((p.velocity.x - 0.4).abs() < 1e-6);
    assert!((p.velocity.y - 0.4).abs() < 1e-6);

    let stats = scene.perf_stats();
    assert_eq!(stats.active_count(), 0);
    assert_eq!(stats.activated_count(), 1);
    assert_eq!(stats.scripted_count(), 0);

    scene.tick(1.0 / 60.0, PointerState::Absent);
    assert!(scene.activated().is_empty());
    assert_eq!(scene.perf_stats().active_count(), 1);
    assert_ne!(scene.particles()[0].pos, Vec2::new(200.0, 200.0));
}

#[test]
fn poses_mirror_particles() {
    let mut scene = SceneCore::with_random(&boxed_config(0.2), FixedRandom::neutral()).unwrap();
    assert_eq!(scene.poses().len(), POSE_STRIDE);
    // Parked at the top of the approach, hidden
    assert_eq!(scene.poses(), &[200.0, 0.0, 0.0, 0.0]);

    scene.mount();
    scene.tick(100.0, PointerState::Absent);
    assert_eq!(scene.poses(), &[200.0, 200.0, 10.0, 1.0]);
}

#[test]
fn push_hook_kicks_away_from_the_cursor() {
    let mut scene = settled_pair();

    // Cursor at the box's top-left corner: offset (-25, -25) from the center
    assert!(scene.push_floaty(0, Vec2::ZERO));
    let v = scene.particles()[0].velocity;
    assert!((v.x - 3.75).abs() < 1e-5);
    assert!((v.y - 3.75).abs() < 1e-5);

    // Dead center does nothing
    assert!(scene.push_floaty(1, Vec2::new(25.0, 25.0)));
    assert_eq!(scene.particles()[1].velocity, Vec2::ZERO);

    assert!(!scene.push_floaty(7, Vec2::ZERO));
}

#[test]
fn push_ignores_scripted_floaties() {
    let mut scene = SceneCore::with_random(&boxed_config(5.0), FixedRandom::neutral()).unwrap();
    scene.mount();
    scene.tick(0.1, PointerState::Absent);
    assert!(!scene.push_floaty(0, Vec2::ZERO));
    assert_eq!(scene.particles()[0].velocity, Vec2::ZERO);
}

#[test]
fn settled_floaties_at_rest_stay_at_rest() {
    let mut scene = settled_pair();
    scene.mount();
    for _ in 0..120 {
        scene.tick(1.0 / 60.0, PointerState::Absent);
    }
    assert_eq!(scene.particles()[0].pos, Vec2::new(-100.0, 0.0));
    assert_eq!(scene.particles()[1].pos, Vec2::new(100.0, 0.0));
}

#[test]
fn tuning_setters_update_params() {
    let mut scene = settled_pair();
    scene.set_repulsion(-5.0, 2.0);
    scene.set_jitter(0.1, 0.2);
    assert_eq!(scene.params().repulsion_radius, 0.0);
    assert_eq!(scene.params().repulsion_strength, 2.0);
    assert_eq!(scene.params().jitter_x, 0.1);
    assert_eq!(scene.params().jitter_y, 0.2);
}

#[test]
fn perf_stats_stay_zero_when_disabled() {
    let mut scene = settled_pair();
    scene.mount();
    scene.tick(1.0 / 60.0, PointerState::Absent);
    let stats = scene.perf_stats();
    assert_eq!(stats.active_count(), 0);
    assert_eq!(stats.step_ms(), 0.0);
}

#[test]
fn bad_radius_is_rejected() {
    let json = r#"{ "floaties": [ { "label": "A", "x": 1, "y": 1, "radius": 0 } ] }"#;
    assert!(matches!(
        SceneCore::from_json(json),
        Err(SceneError::InvalidRadius { index: 0, .. })
    ));
}

#[test]
fn settled_scene_has_no_entrance_left() {
    let scene = settled_pair();
    assert!(scene.entrance().is_finished());
    assert!(scene.entrance().tracks().is_empty());
}
