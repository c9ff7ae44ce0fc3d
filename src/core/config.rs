//! Session configuration.
//!
//! A session is configured once at startup:
//! - `GameMode`: How shot distance is computed for the whole session
//! - `CourseSize`: Which grid to generate
//! - Seed, starting mulligans and the golfer's name
//!
//! Nothing here changes after the session starts.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::player::{DEFAULT_MULLIGANS, DEFAULT_PLAYER_NAME};
use crate::course::CourseSize;
use crate::error::{normalize_name, ParseError};

/// Rule used to compute how far a shot travels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Roll a d6; the lie adds or takes away a square.
    #[default]
    DiceGolf,
    /// Each club hits a fixed distance.
    SpeedGolf,
}

impl GameMode {
    /// Stable name used in save files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameMode::DiceGolf => "DICE_GOLF",
            GameMode::SpeedGolf => "SPEED_GOLF",
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "DICE_GOLF" | "DICE" => Ok(GameMode::DiceGolf),
            "SPEED_GOLF" | "SPEED" => Ok(GameMode::SpeedGolf),
            _ => Err(ParseError::UnknownMode(s.to_string())),
        }
    }
}

/// Configuration for a golf session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Distance rule for every shot.
    pub mode: GameMode,

    /// Course dimensions to generate.
    pub size: CourseSize,

    /// Seed for course generation and dice.
    /// Same seed produces the same course and roll sequence.
    pub seed: u64,

    /// Mulligans the golfer starts with.
    pub mulligans: u32,

    /// Golfer's display name.
    pub player_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::DiceGolf,
            size: CourseSize::Short,
            seed: 42,
            mulligans: DEFAULT_MULLIGANS,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
        }
    }
}

impl SessionConfig {
    /// Create a config for the given mode and course size.
    pub fn new(mode: GameMode, size: CourseSize) -> Self {
        Self {
            mode,
            size,
            ..Self::default()
        }
    }

    /// Set the distance rule.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the course size.
    #[must_use]
    pub fn with_size(mut self, size: CourseSize) -> Self {
        self.size = size;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting mulligans.
    #[must_use]
    pub fn with_mulligans(mut self, mulligans: u32) -> Self {
        self.mulligans = mulligans;
        self
    }

    /// Set the golfer's name.
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }
}
