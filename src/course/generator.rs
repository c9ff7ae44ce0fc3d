//! Procedural course generation.
//!
//! Every cell draws its terrain independently and uniformly from the six
//! kinds. The start row and the hole row are then paved with fairway and
//! the hole is cut somewhere on the far row.

use super::grid::{Course, CourseSize};
use super::terrain::HazardKind;
use crate::core::{GameRng, Position};

/// Generate a course of the given size.
pub fn generate(size: CourseSize, rng: &mut GameRng) -> Course {
    let (width, height) = size.dimensions();

    let mut terrain: Vec<HazardKind> = (0..width * height)
        .map(|_| HazardKind::ALL[rng.gen_range_usize(0..HazardKind::ALL.len())])
        .collect();

    let row_len = width as usize;
    let start_row = (height as usize - 1) * row_len;
    terrain[start_row..].fill(HazardKind::Fairway);
    terrain[..row_len].fill(HazardKind::Fairway);

    let hole = Position::new(rng.gen_range(0..width), 0);

    log::debug!("generated {}x{} {} course, hole at {}", width, height, size, hole);

    Course::from_parts(size, width, height, terrain, hole)
}
