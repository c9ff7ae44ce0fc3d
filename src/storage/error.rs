//! Save store errors.

use crate::core::Position;
use crate::course::CourseError;
use crate::error::ParseError;

/// Anything that can go wrong reading or writing a save.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("no {table} row with id {id}")]
    NotFound { table: &'static str, id: i64 },

    #[error("bad stored name: {0}")]
    Parse(#[from] ParseError),

    #[error("stored course is malformed: {0}")]
    Course(#[from] CourseError),

    #[error("stored {field} value {value} is out of range")]
    OutOfRange { field: &'static str, value: i64 },

    #[error("saved ball position {0} is off the course")]
    BallOffCourse(Position),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Narrow a stored integer, naming the column on failure.
pub(crate) fn narrow<T: TryFrom<i64>>(field: &'static str, value: i64) -> Result<T> {
    T::try_from(value).map_err(|_| StorageError::OutOfRange { field, value })
}
