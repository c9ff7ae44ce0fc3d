//! Errors for reading game vocabulary back from text.
//!
//! The engine itself never fails; these only show up at the edges where
//! names come in from a command line or a database row.

/// A name did not match any known variant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown game mode {0:?} (expected DICE_GOLF or SPEED_GOLF)")]
    UnknownMode(String),

    #[error("unknown course size {0:?} (expected SHORT_COURSE, MEDIUM_COURSE or LONG_COURSE)")]
    UnknownCourseSize(String),

    #[error("unknown club {0:?} (expected DRIVER, IRON or PUTTER)")]
    UnknownClub(String),

    #[error("unknown hazard type {0:?}")]
    UnknownHazard(String),
}

/// Normalize a user or database supplied name for matching.
///
/// Accepts `dice-golf`, `Dice Golf` and `DICE_GOLF` alike.
pub(crate) fn normalize_name(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("dice-golf"), "DICE_GOLF");
        assert_eq!(normalize_name(" Speed Golf "), "SPEED_GOLF");
        assert_eq!(normalize_name("WATER"), "WATER");
    }

    #[test]
    fn test_error_messages() {
        let err = ParseError::UnknownClub("wedge".to_string());
        assert_eq!(
            err.to_string(),
            "unknown club \"wedge\" (expected DRIVER, IRON or PUTTER)"
        );
    }
}
