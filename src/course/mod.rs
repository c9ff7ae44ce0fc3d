//! Courses: terrain, the grid, and how it is generated.
//!
//! - `terrain`: `HazardKind` and the table of what each terrain does
//! - `grid`: `Course`, `Cell`, `CourseSize`
//! - `generator`: uniform-random course generation

pub mod generator;
pub mod grid;
pub mod terrain;

pub use generator::generate;
pub use grid::{Cell, Course, CourseError, CourseSize};
pub use terrain::{HazardKind, LandingEffect, TerrainTraits};
