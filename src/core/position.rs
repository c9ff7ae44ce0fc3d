//! Grid coordinates and shot directions.
//!
//! ## Layout
//!
//! Courses are row-major with `y = 0` as the far row (where the hole sits)
//! and `y = height - 1` as the start row. Coordinates are signed so that a
//! shot can aim past the edge and be rejected by a bounds check instead of
//! wrapping around.
//!
//! ```
//! use grid_golf::core::{Direction, Position};
//!
//! let ball = Position::new(4, 12);
//! assert_eq!(ball.offset(Direction::NORTH, 3), Position::new(4, 9));
//! ```

use serde::{Deserialize, Serialize};

/// A cell coordinate on a course.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move `steps` times along `direction`.
    ///
    /// Saturates at the `i32` limits, which are never on a course.
    #[must_use]
    pub const fn offset(self, direction: Direction, steps: i32) -> Self {
        Self {
            x: self.x.saturating_add(direction.dx.saturating_mul(steps)),
            y: self.y.saturating_add(direction.dy.saturating_mul(steps)),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A shot direction as a `(dx, dy)` delta.
///
/// Usually one of the eight compass deltas, but callers may pass any
/// values: the engine scales the delta by the shot distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    /// Toward the hole row.
    pub const NORTH: Self = Self::new(0, -1);
    pub const NORTH_EAST: Self = Self::new(1, -1);
    pub const EAST: Self = Self::new(1, 0);
    pub const SOUTH_EAST: Self = Self::new(1, 1);
    /// Toward the start row. Also the "downhill" axis hazards push along.
    pub const SOUTH: Self = Self::new(0, 1);
    pub const SOUTH_WEST: Self = Self::new(-1, 1);
    pub const WEST: Self = Self::new(-1, 0);
    pub const NORTH_WEST: Self = Self::new(-1, -1);

    /// All eight compass deltas, clockwise from north.
    pub const COMPASS: [Self; 8] = [
        Self::NORTH,
        Self::NORTH_EAST,
        Self::EAST,
        Self::SOUTH_EAST,
        Self::SOUTH,
        Self::SOUTH_WEST,
        Self::WEST,
        Self::NORTH_WEST,
    ];

    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

impl From<(i32, i32)> for Direction {
    fn from((dx, dy): (i32, i32)) -> Self {
        Self::new(dx, dy)
    }
}
