//! The turn engine.
//!
//! - `shot`: distance rules and the `ShotResult` report
//! - `engine`: `Session`, which resolves shots, hazards and mulligans
//!
//! Every operation here is total: out-of-bounds shots and an empty
//! mulligan bag are outcomes, not errors.

pub mod engine;
pub mod shot;

pub use engine::{Session, SessionBuilder};
pub use shot::{dice_distance, speed_distance, HazardEvent, ShotOutcome, ShotResult};
