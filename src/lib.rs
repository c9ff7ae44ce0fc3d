//! # grid-golf
//!
//! A turn-based golf game on a procedurally generated hazard grid.
//!
//! ## Rules
//!
//! 1. **Dice Golf**: roll a d6 for every shot. Shooting off fairway adds a
//!    square, shooting out of sand loses one.
//!
//! 2. **Speed Golf**: each club carries a fixed distance (driver 6, iron 3,
//!    putter 1). Sand costs every club but the iron a square.
//!
//! 3. **Hazards**: water costs a penalty stroke and rolls the ball one
//!    square back toward the tee; slopes roll it back for free. Effects
//!    fire once, never in a chain.
//!
//! 4. **Mulligans**: six per round, each costing a stroke, each putting
//!    the ball back where the last shot started.
//!
//! ## Architecture
//!
//! - **Explicit sessions**: no global engine. A `Session` owns the course,
//!   the ball, the golfer and the dice.
//!
//! - **Deterministic**: a seed fixes both the course and the roll sequence.
//!   Any `DieRoller` can stand in for the dice.
//!
//! - **Total operations**: shots never fail. Out-of-bounds shots and an
//!   empty mulligan bag are reported outcomes.
//!
//! ## Modules
//!
//! - `core`: positions, actor state, RNG, configuration
//! - `course`: terrain table, the grid, course generation
//! - `equipment`: clubs and their distances
//! - `rules`: the turn engine
//! - `render`: ASCII course drawing
//! - `storage`: SQLite save games

pub mod core;
pub mod course;
pub mod equipment;
pub mod error;
pub mod render;
pub mod rules;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{
    BallState, DieRoller, Direction, GameMode, GameRng, GameRngState, PlayerState, Position,
    ScriptedDie, SessionConfig,
};

pub use crate::course::{Cell, Course, CourseError, CourseSize, HazardKind, LandingEffect};

pub use crate::equipment::ClubKind;

pub use crate::error::ParseError;

pub use crate::render::render_course;

pub use crate::rules::{HazardEvent, Session, SessionBuilder, ShotOutcome, ShotResult};

pub use crate::storage::{SaveRecord, SaveStore, StorageError};
