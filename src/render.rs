//! ASCII rendering of a course.
//!
//! ```text
//!   o : Ball
//!   ● : Hole
//!   ෴ : Rough
//!   · : Fairway
//!   › : Slope
//!   ᨒ : Sand trap
//!   ♒ : Water
//!   ↟ : Trees
//! ```

use crate::core::Position;
use crate::course::Course;

pub const BALL_SYMBOL: char = 'o';
pub const HOLE_SYMBOL: char = '●';

/// Draw the course one text line per row, far row first.
///
/// The ball is drawn over the hole when it sits on it.
pub fn render_course(course: &Course, ball: Option<Position>) -> String {
    let hole = course.hole();
    let mut out = String::with_capacity(((course.width() + 1) * course.height() * 3) as usize);

    for (y, row) in course.rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let pos = Position::new(x as i32, y as i32);
            let symbol = if Some(pos) == ball {
                BALL_SYMBOL
            } else if pos == hole {
                HOLE_SYMBOL
            } else {
                cell.terrain().symbol()
            };
            out.push(symbol);
        }
        out.push('\n');
    }

    out
}
