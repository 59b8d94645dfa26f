//! Floaty - one floating letter in the pool
//!
//! Position is owned by exactly one system at a time: the entrance script
//! while the floaty is Entering or Settling, the physics step once Active.

mod particle;

pub use particle::{Particle, Phase, Target};
