//! Shot distance rules and shot reports.
//!
//! Distance is computed once per shot from the game mode, the club and
//! the terrain the ball is lying on. The numbers come from the terrain
//! table and the club table; nothing here hardcodes a terrain.

use serde::{Deserialize, Serialize};

use crate::core::Position;
use crate::course::HazardKind;
use crate::equipment::ClubKind;

/// Dice-golf distance: the roll adjusted by the lie.
///
/// Fairway adds one, sand takes one away. A missing lie (ball off the
/// grid) leaves the roll untouched.
#[must_use]
pub fn dice_distance(roll: i32, lie: Option<HazardKind>) -> i32 {
    roll + lie.map_or(0, |terrain| terrain.traits().dice_modifier)
}

/// Speed-golf distance: the club's carry adjusted by the lie.
///
/// Sand costs a square unless the club ignores bad lies.
#[must_use]
pub fn speed_distance(club: ClubKind, lie: Option<HazardKind>) -> i32 {
    let penalty = match lie {
        Some(terrain) if !club.ignores_lie() => terrain.traits().lie_penalty,
        _ => 0,
    };
    club.base_distance() + penalty
}

/// Where a shot ended up relative to the course.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// The ball came down on the course.
    Landed { terrain: HazardKind },
    /// The target was off the grid; the ball did not move.
    OutOfBounds,
}

/// A landing effect that fired after the ball came down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardEvent {
    /// Terrain the ball landed on.
    pub terrain: HazardKind,
    /// Penalty strokes charged.
    pub penalty: u32,
    /// Landing cell.
    pub from: Position,
    /// Where the ball rests after the effect.
    pub to: Position,
}

/// Everything a front end needs to narrate one shot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotResult {
    pub club: ClubKind,
    /// The die face, in dice golf.
    pub roll: Option<i32>,
    /// Squares travelled per unit of direction.
    pub distance: i32,
    /// Ball position before the shot.
    pub from: Position,
    /// Where the shot was aimed after scaling by distance.
    pub target: Position,
    pub outcome: ShotOutcome,
    pub hazard: Option<HazardEvent>,
    /// Ball position after the shot and any hazard effect.
    pub position: Position,
    /// Golfer's stroke total after the shot.
    pub strokes: u32,
}

impl ShotResult {
    /// Check if the shot stayed on the course.
    #[must_use]
    pub fn in_bounds(&self) -> bool {
        matches!(self.outcome, ShotOutcome::Landed { .. })
    }

    /// Strokes this shot cost, penalties included.
    #[must_use]
    pub fn stroke_cost(&self) -> u32 {
        1 + self.hazard.map_or(0, |event| event.penalty)
    }
}
