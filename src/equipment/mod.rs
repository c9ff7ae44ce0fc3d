//! Clubs and how far they hit.
//!
//! Clubs only matter in speed golf, where each one carries the ball a fixed
//! number of squares. Dice golf ignores the club entirely.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{normalize_name, ParseError};

/// A club in the bag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClubKind {
    Driver,
    Iron,
    Putter,
}

impl ClubKind {
    pub const ALL: [ClubKind; 3] = [ClubKind::Driver, ClubKind::Iron, ClubKind::Putter];

    /// Squares the club carries the ball from a clean lie.
    #[must_use]
    pub const fn base_distance(self) -> i32 {
        match self {
            ClubKind::Driver => 6,
            ClubKind::Iron => 3,
            ClubKind::Putter => 1,
        }
    }

    /// Whether the club plays out of a bad lie without losing distance.
    #[must_use]
    pub const fn ignores_lie(self) -> bool {
        matches!(self, ClubKind::Iron)
    }

    /// Stable name used in logs and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ClubKind::Driver => "DRIVER",
            ClubKind::Iron => "IRON",
            ClubKind::Putter => "PUTTER",
        }
    }
}

/// Base distance lookup.
#[must_use]
pub const fn base_distance(club: ClubKind) -> i32 {
    club.base_distance()
}

impl std::fmt::Display for ClubKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClubKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize_name(s);
        ClubKind::ALL
            .into_iter()
            .find(|club| club.name() == name)
            .ok_or_else(|| ParseError::UnknownClub(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_distances() {
        assert_eq!(base_distance(ClubKind::Driver), 6);
        assert_eq!(base_distance(ClubKind::Iron), 3);
        assert_eq!(base_distance(ClubKind::Putter), 1);
    }

    #[test]
    fn test_only_iron_ignores_lie() {
        assert!(ClubKind::Iron.ignores_lie());
        assert!(!ClubKind::Driver.ignores_lie());
        assert!(!ClubKind::Putter.ignores_lie());
    }

    #[test]
    fn test_club_names() {
        for club in ClubKind::ALL {
            assert_eq!(club.name().parse::<ClubKind>(), Ok(club));
        }
        assert_eq!("putter".parse::<ClubKind>(), Ok(ClubKind::Putter));
        assert!("wedge".parse::<ClubKind>().is_err());
    }
}
