//! BoundaryShape - sampled polygon approximating the pool outline
//!
//! Built once per scene from a path, read-only afterwards. Edge `k` joins
//! point `k` to point `(k + 1) % n`, so the loop always closes even when the
//! source path was left open.

use std::f32::consts::TAU;

use crate::core::vec2::{Vec2, EPSILON};

use super::error::SceneError;
use super::path::PathSpec;

/// Samples taken along the source path
pub const DEFAULT_SAMPLES: usize = 60;

/// One wall segment of the boundary
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: Vec2,
    pub b: Vec2,
}

impl Edge {
    /// Closest point on the segment to `p` (clamped projection).
    ///
    /// `None` for a zero-length edge, which has no projection axis.
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Option<Vec2> {
        let seg = self.b - self.a;
        let seg_len_sq = seg.length_squared();
        if seg_len_sq < EPSILON * EPSILON {
            return None;
        }
        let t = ((p - self.a).dot(seg) / seg_len_sq).clamp(0.0, 1.0);
        Some(self.a + seg * t)
    }

    pub fn length(&self) -> f32 {
        self.a.distance(self.b)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryShape {
    points: Vec<Vec2>,
}

impl BoundaryShape {
    /// Sample `samples` points at equal arc-length spacing along `path`.
    pub fn from_path(path: &PathSpec, samples: usize) -> Result<Self, SceneError> {
        if samples < 3 {
            return Err(SceneError::TooFewSamples { got: samples });
        }
        let table = path.arc_length_table()?;
        let points = (0..samples)
            .map(|i| table.point_at_progress(i as f32 / samples as f32))
            .collect();
        Self::from_points(points)
    }

    pub fn from_path_data(d: &str, samples: usize) -> Result<Self, SceneError> {
        let path = PathSpec::parse(d)?;
        Self::from_path(&path, samples)
    }

    pub fn from_points(points: Vec<Vec2>) -> Result<Self, SceneError> {
        if points.len() < 3 {
            return Err(SceneError::TooFewPoints { got: points.len() });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(SceneError::NonFinitePoint { index });
        }
        Ok(Self { points })
    }

    /// Regular polygon with flat sides facing the axes: vertices sit at
    /// half-step angles, so for an octagon the edge midpoints lie on ±x/±y.
    pub fn regular_polygon(sides: usize, circumradius: f32, center: Vec2) -> Result<Self, SceneError> {
        if sides < 3 {
            return Err(SceneError::TooFewPoints { got: sides });
        }
        let step = TAU / sides as f32;
        let points = (0..sides)
            .map(|i| {
                let angle = (i as f32 + 0.5) * step;
                center + Vec2::new(angle.cos(), angle.sin()) * circumradius
            })
            .collect();
        Self::from_points(points)
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edges in polygon order, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.points.len();
        (0..n).map(move |k| Edge {
            a: self.points[k],
            b: self.points[(k + 1) % n],
        })
    }

    pub fn perimeter(&self) -> f32 {
        self.edges().map(|e| e.length()).sum()
    }

    /// Even-odd point-in-polygon test
    pub fn contains(&self, p: Vec2) -> bool {
        let mut inside = false;
        for e in self.edges() {
            let (a, b) = (e.a, e.b);
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }
}
