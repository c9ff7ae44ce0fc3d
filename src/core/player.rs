//! Actor state: the golfer's counters and the ball.
//!
//! ## PlayerState
//!
//! Stroke total (never decreases) and mulligans remaining (never increases,
//! floors at zero).
//!
//! ## BallState
//!
//! The ball's cell. The turn engine keeps it inside the active course.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Mulligans a golfer starts a session with.
pub const DEFAULT_MULLIGANS: u32 = 6;

/// Name given to the golfer when none is configured.
pub const DEFAULT_PLAYER_NAME: &str = "Golfer1";

/// The golfer's running totals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    name: String,
    strokes: u32,
    mulligans_remaining: u32,
}

impl PlayerState {
    /// Create a golfer with zero strokes and `mulligans` do-overs.
    #[must_use]
    pub fn new(name: impl Into<String>, mulligans: u32) -> Self {
        Self {
            name: name.into(),
            strokes: 0,
            mulligans_remaining: mulligans,
        }
    }

    /// Rebuild a golfer from saved counters.
    #[must_use]
    pub fn restored(name: impl Into<String>, strokes: u32, mulligans_remaining: u32) -> Self {
        Self {
            name: name.into(),
            strokes,
            mulligans_remaining,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn strokes(&self) -> u32 {
        self.strokes
    }

    #[must_use]
    pub fn mulligans_remaining(&self) -> u32 {
        self.mulligans_remaining
    }

    /// Add `count` strokes to the total.
    pub fn add_strokes(&mut self, count: u32) {
        self.strokes = self.strokes.saturating_add(count);
    }

    /// Spend one mulligan.
    ///
    /// Returns false (and changes nothing) when none are left.
    pub fn spend_mulligan(&mut self) -> bool {
        if self.mulligans_remaining == 0 {
            return false;
        }
        self.mulligans_remaining -= 1;
        true
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NAME, DEFAULT_MULLIGANS)
    }
}

/// Where the ball currently rests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallState {
    position: Position,
}

impl BallState {
    #[must_use]
    pub const fn at(position: Position) -> Self {
        Self { position }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}
