//! Core engine types: positions, actor state, RNG, configuration.
//!
//! These are the building blocks shared by the course, the turn engine
//! and the save store.

pub mod config;
pub mod player;
pub mod position;
pub mod rng;

pub use config::{GameMode, SessionConfig};
pub use player::{BallState, PlayerState, DEFAULT_MULLIGANS, DEFAULT_PLAYER_NAME};
pub use position::{Direction, Position};
pub use rng::{DieRoller, GameRng, GameRngState, ScriptedDie};
