//! Error types for scene construction.
//!
//! Nothing in the per-tick path returns an error: degenerate geometry there
//! is skipped. Everything below is raised while a scene is being built, so
//! a broken scene never starts.

use std::fmt;

use super::path::PathParseError;

/// Errors that can occur while building a scene.
#[derive(Debug)]
pub enum SceneError {
    /// Path data could not be parsed.
    Path(PathParseError),
    /// Path has no drawable length.
    DegeneratePath,
    /// Fewer than 3 boundary samples were requested.
    TooFewSamples {
        /// Requested sample count
        got: usize,
    },
    /// A polygon needs at least 3 points.
    TooFewPoints {
        /// Number of points supplied
        got: usize,
    },
    /// A boundary point has a NaN or infinite coordinate.
    NonFinitePoint {
        /// Index of the offending point
        index: usize,
    },
    /// A floaty radius is zero, negative or not finite.
    InvalidRadius {
        /// Floaty index
        index: usize,
        /// The rejected radius
        radius: f32,
    },
    /// Scene JSON is malformed.
    Config(serde_json::Error),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Path(e) => write!(f, "Invalid path data: {}", e),
            SceneError::DegeneratePath => write!(f, "Path has zero length"),
            SceneError::TooFewSamples { got } => {
                write!(f, "Boundary needs at least 3 samples, got {}", got)
            }
            SceneError::TooFewPoints { got } => {
                write!(f, "Boundary needs at least 3 points, got {}", got)
            }
            SceneError::NonFinitePoint { index } => {
                write!(f, "Boundary point {} is not finite", index)
            }
            SceneError::InvalidRadius { index, radius } => {
                write!(f, "Floaty {} has invalid radius {}", index, radius)
            }
            SceneError::Config(e) => write!(f, "Invalid scene JSON: {}", e),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Path(e) => Some(e),
            SceneError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PathParseError> for SceneError {
    fn from(e: PathParseError) -> Self {
        SceneError::Path(e)
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(e: serde_json::Error) -> Self {
        SceneError::Config(e)
    }
}
