//! The terrain grid a session is played on.
//!
//! ## Layout
//!
//! Row-major, `y = 0` is the far row holding the hole, `y = height - 1`
//! is the start row. A course is never modified once built.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::terrain::HazardKind;
use crate::core::{Direction, Position};
use crate::error::{normalize_name, ParseError};

/// The three course layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseSize {
    #[default]
    Short,
    Medium,
    Long,
}

impl CourseSize {
    pub const ALL: [CourseSize; 3] = [CourseSize::Short, CourseSize::Medium, CourseSize::Long];

    /// `(width, height)` of the grid.
    #[must_use]
    pub const fn dimensions(self) -> (i32, i32) {
        match self {
            CourseSize::Short => (8, 13),
            CourseSize::Medium => (10, 15),
            CourseSize::Long => (12, 17),
        }
    }

    /// Stable name used in save files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CourseSize::Short => "SHORT_COURSE",
            CourseSize::Medium => "MEDIUM_COURSE",
            CourseSize::Long => "LONG_COURSE",
        }
    }
}

impl std::fmt::Display for CourseSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CourseSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "SHORT_COURSE" | "SHORT" => Ok(CourseSize::Short),
            "MEDIUM_COURSE" | "MEDIUM" => Ok(CourseSize::Medium),
            "LONG_COURSE" | "LONG" => Ok(CourseSize::Long),
            _ => Err(ParseError::UnknownCourseSize(s.to_string())),
        }
    }
}

/// A single grid square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    terrain: HazardKind,
}

impl Cell {
    #[must_use]
    pub const fn new(terrain: HazardKind) -> Self {
        Self { terrain }
    }

    #[must_use]
    pub const fn terrain(&self) -> HazardKind {
        self.terrain
    }
}

/// Why a course could not be assembled from raw cells.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CourseError {
    #[error("course must be at least 1x1, got {width}x{height}")]
    Empty { width: i32, height: i32 },

    #[error("expected {expected} cells for the course, got {actual}")]
    CellCount { expected: usize, actual: usize },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, actual: usize },

    #[error("hole {hole} is outside the {width}x{height} course")]
    HoleOutOfBounds { hole: Position, width: i32, height: i32 },
}

/// A generated golf course.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    size: CourseSize,
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    hole: Position,
}

impl Course {
    /// Assemble a course from row-major terrain.
    ///
    /// `size` is recorded as-is; the grid does not have to match the
    /// standard dimensions, which lets callers build small practice holes.
    pub fn from_cells(
        size: CourseSize,
        width: i32,
        height: i32,
        terrain: Vec<HazardKind>,
        hole: Position,
    ) -> Result<Self, CourseError> {
        if width <= 0 || height <= 0 {
            return Err(CourseError::Empty { width, height });
        }

        let expected = (width as usize) * (height as usize);
        if terrain.len() != expected {
            return Err(CourseError::CellCount {
                expected,
                actual: terrain.len(),
            });
        }

        let course = Self::from_parts(size, width, height, terrain, hole);
        if !course.contains(hole) {
            return Err(CourseError::HoleOutOfBounds { hole, width, height });
        }

        Ok(course)
    }

    /// Assemble a course without validation.
    ///
    /// Callers guarantee `terrain.len() == width * height`, both dimensions
    /// positive, and the hole on the grid.
    pub(crate) fn from_parts(
        size: CourseSize,
        width: i32,
        height: i32,
        terrain: Vec<HazardKind>,
        hole: Position,
    ) -> Self {
        Self {
            size,
            width,
            height,
            cells: terrain.into_iter().map(Cell::new).collect(),
            hole,
        }
    }

    /// Assemble a course from a list of rows, far row first.
    pub fn from_rows(
        size: CourseSize,
        rows: Vec<Vec<HazardKind>>,
        hole: Position,
    ) -> Result<Self, CourseError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(CourseError::RaggedRow {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
        }

        let terrain = rows.into_iter().flatten().collect();
        Self::from_cells(size, width as i32, height as i32, terrain, hole)
    }

    #[must_use]
    pub fn size(&self) -> CourseSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Where the hole is cut.
    #[must_use]
    pub fn hole(&self) -> Position {
        self.hole
    }

    /// Where the ball is teed up: centre of the start row.
    #[must_use]
    pub fn start_position(&self) -> Position {
        Position::new(self.width / 2, self.height - 1)
    }

    /// Check if a position is on the course.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Bounds-checked cell lookup.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get((pos.y * self.width + pos.x) as usize)
    }

    /// Terrain at a position, if it is on the course.
    #[must_use]
    pub fn terrain(&self, pos: Position) -> Option<HazardKind> {
        self.cell(pos).map(Cell::terrain)
    }

    /// Iterate over every cell with its position, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, HazardKind)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let i = i as i32;
            (Position::new(i % width, i / width), cell.terrain())
        })
    }

    /// Iterate over rows, far row first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// In-bounds landing cells for a shot of `distance` in each compass direction.
    ///
    /// A zero distance lands where it started, so it yields just `from`.
    #[must_use]
    pub fn shot_targets(&self, from: Position, distance: i32) -> SmallVec<[Position; 8]> {
        if distance == 0 {
            let mut targets = SmallVec::new();
            if self.contains(from) {
                targets.push(from);
            }
            return targets;
        }

        Direction::COMPASS
            .iter()
            .map(|&direction| from.offset(direction, distance))
            .filter(|&target| self.contains(target))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::HazardKind::*;

    fn practice_hole() -> Course {
        Course::from_rows(
            CourseSize::Short,
            vec![
                vec![Fairway, Fairway, Fairway],
                vec![Water, Sand, Trees],
                vec![Fairway, Fairway, Fairway],
            ],
            Position::new(2, 0),
        )
        .unwrap()
    }

    #[test]
    fn test_course_size_dimensions() {
        assert_eq!(CourseSize::Short.dimensions(), (8, 13));
        assert_eq!(CourseSize::Medium.dimensions(), (10, 15));
        assert_eq!(CourseSize::Long.dimensions(), (12, 17));
    }

    #[test]
    fn test_course_size_names() {
        for size in CourseSize::ALL {
            assert_eq!(size.name().parse::<CourseSize>(), Ok(size));
        }
        assert_eq!("long".parse::<CourseSize>(), Ok(CourseSize::Long));
        assert!("par3".parse::<CourseSize>().is_err());
    }

    #[test]
    fn test_cell_lookup() {
        let course = practice_hole();

        assert_eq!(course.terrain(Position::new(0, 1)), Some(Water));
        assert_eq!(course.terrain(Position::new(1, 1)), Some(Sand));
        assert_eq!(course.terrain(Position::new(2, 1)), Some(Trees));
        assert_eq!(course.terrain(Position::new(3, 1)), None);
        assert_eq!(course.terrain(Position::new(-1, 0)), None);
        assert_eq!(course.terrain(Position::new(0, 3)), None);
    }

    #[test]
    fn test_start_position() {
        assert_eq!(practice_hole().start_position(), Position::new(1, 2));
    }

    #[test]
    fn test_iter_is_row_major() {
        let course = practice_hole();
        let cells: Vec<_> = course.iter().collect();

        assert_eq!(cells.len(), 9);
        assert_eq!(cells[3], (Position::new(0, 1), Water));
        assert_eq!(cells[5], (Position::new(2, 1), Trees));
        assert_eq!(course.rows().count(), 3);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Course::from_rows(
            CourseSize::Short,
            vec![vec![Fairway, Fairway], vec![Fairway]],
            Position::new(0, 0),
        )
        .unwrap_err();

        assert_eq!(err, CourseError::RaggedRow { row: 1, expected: 2, actual: 1 });
    }

    #[test]
    fn test_from_cells_rejects_bad_hole() {
        let err = Course::from_cells(
            CourseSize::Short,
            2,
            2,
            vec![Fairway; 4],
            Position::new(2, 0),
        )
        .unwrap_err();

        assert!(matches!(err, CourseError::HoleOutOfBounds { .. }));
    }

    #[test]
    fn test_from_cells_rejects_wrong_count() {
        let err = Course::from_cells(CourseSize::Short, 2, 2, vec![Fairway; 3], Position::new(0, 0))
            .unwrap_err();
        assert_eq!(err, CourseError::CellCount { expected: 4, actual: 3 });

        let err = Course::from_rows(CourseSize::Short, vec![], Position::new(0, 0)).unwrap_err();
        assert!(matches!(err, CourseError::Empty { .. }));
    }

    #[test]
    fn test_shot_targets_filters_out_of_bounds() {
        let course = practice_hole();

        // From the centre every direction stays on a 3x3 grid.
        assert_eq!(course.shot_targets(Position::new(1, 1), 1).len(), 8);

        // From a corner only three directions survive.
        let targets = course.shot_targets(Position::new(0, 2), 1);
        assert_eq!(targets.len(), 3);
        assert!(targets.contains(&Position::new(0, 1)));
        assert!(targets.contains(&Position::new(1, 1)));
        assert!(targets.contains(&Position::new(1, 2)));

        // Too long to stay on the grid at all.
        assert!(course.shot_targets(Position::new(1, 1), 5).is_empty());
    }

    #[test]
    fn test_shot_targets_zero_distance() {
        let course = practice_hole();
        let targets = course.shot_targets(Position::new(1, 1), 0);
        assert_eq!(targets.as_slice(), &[Position::new(1, 1)]);
    }
}
