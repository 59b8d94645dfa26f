//! Physics System - free-floating letters in the pool
//!
//! Per Active floaty, every tick, in this order:
//! - forces: jitter, pointer repulsion, spring to slot, damping
//! - explicit Euler integration (one time unit per tick)
//! - wall collisions against each boundary edge, in polygon order
//! - pair collisions against every later Active floaty
//!
//! Resolution is sequential: each contact is applied before the next one is
//! tested. This is an approximation, not a simultaneous constraint solve.

mod types;
mod forces;
mod collision;

pub use collision::{resolve_boundary, resolve_pair};
pub use forces::{
    apply_damping, apply_forces, apply_jitter, apply_pointer_repulsion, apply_spring, integrate,
};
pub use types::{PointerState, PUSH_SCALE};
