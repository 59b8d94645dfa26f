use std::sync::Arc;

use crate::core::random::RandomSource;
use crate::core::vec2::Vec2;
use crate::domain::boundary::BoundaryShape;
use crate::domain::error::SceneError;
use crate::domain::path::{ArcLengthTable, PathSpec};
use crate::domain::scene::{BoundaryConfig, PhysicsParams, SceneConfig};
use crate::systems::entrance::{EntranceController, EntranceTrack};
use crate::systems::floaty::{Particle, Target};

use super::perf_stats::PerfStats;
use super::render_extract::{extract_poses, POSE_STRIDE};
use super::{Lifetime, SceneCore};

pub(super) fn create_scene_core<R: RandomSource>(
    config: &SceneConfig,
    rng: R,
) -> Result<SceneCore<R>, SceneError> {
    let boundary = build_boundary(&config.boundary).map_err(|e| {
        console_warn!("pool boundary rejected: {}", e);
        e
    })?;

    let mut shared_approach: Option<Arc<ArcLengthTable>> = None;
    let mut particles = Vec::with_capacity(config.floaties.len());
    let mut tracks = Vec::with_capacity(config.floaties.len());

    for (i, floaty) in config.floaties.iter().enumerate() {
        if !(floaty.radius.is_finite() && floaty.radius > 0.0) {
            return Err(SceneError::InvalidRadius { index: i, radius: floaty.radius });
        }

        let approach = match &floaty.approach {
            Some(d) => Arc::new(PathSpec::parse(d)?.arc_length_table()?),
            None => match &shared_approach {
                Some(table) => table.clone(),
                None => {
                    let table = Arc::new(PathSpec::parse(&config.approach)?.arc_length_table()?);
                    shared_approach = Some(table.clone());
                    table
                }
            },
        };

        let delay = floaty
            .delay
            .unwrap_or(config.entrance.start_delay + i as f32 * config.entrance.stagger);

        let target = Target::new(floaty.x, floaty.y, floaty.rotation);
        let mut particle = Particle::new(i as u32, floaty.label.clone(), floaty.radius, target);
        // Parked, invisible, at the top of its slide
        particle.pos = approach.start();

        tracks.push(EntranceTrack::new(approach, delay, &config.entrance));
        particles.push(particle);
    }

    console_log!(
        "pool scene: {} floaties, {} boundary points",
        particles.len(),
        boundary.len()
    );

    Ok(assemble(boundary, particles, EntranceController::new(tracks), config.physics, rng))
}

pub(super) fn create_settled_scene_core<R: RandomSource>(
    boundary: BoundaryShape,
    mut particles: Vec<Particle>,
    params: PhysicsParams,
    rng: R,
) -> SceneCore<R> {
    for (i, p) in particles.iter_mut().enumerate() {
        p.id = i as u32;
    }
    assemble(boundary, particles, EntranceController::empty(), params, rng)
}

fn build_boundary(config: &BoundaryConfig) -> Result<BoundaryShape, SceneError> {
    if config.points.is_empty() {
        BoundaryShape::from_path_data(&config.path, config.samples)
    } else {
        let points = config.points.iter().map(|&[x, y]| Vec2::new(x, y)).collect();
        BoundaryShape::from_points(points)
    }
}

fn assemble<R: RandomSource>(
    boundary: BoundaryShape,
    particles: Vec<Particle>,
    entrance: EntranceController,
    params: PhysicsParams,
    rng: R,
) -> SceneCore<R> {
    let pose_len = particles.len() * POSE_STRIDE;
    let mut scene = SceneCore {
        boundary,
        particles,
        entrance,
        params,
        rng,
        lifetime: Lifetime::Idle,
        frame: 0,
        activated: Vec::new(),
        poses: vec![0.0; pose_len],
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };
    extract_poses(&mut scene);
    scene
}
