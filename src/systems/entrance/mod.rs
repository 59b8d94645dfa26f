//! Entrance - scripted arrival of each floaty before physics takes over
//!
//! Entering: wait (invisible) for the staggered start, then roll along the
//! approach path while spinning. Settling: ease into the resting slot.
//! Active: snap to the slot, take a splash velocity, hand over to physics.

mod controller;
mod easing;
mod track;

pub use controller::EntranceController;
pub use easing::Ease;
pub use track::{EntranceTrack, ScriptedPose};
