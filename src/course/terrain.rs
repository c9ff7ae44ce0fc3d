//! Terrain kinds and their gameplay table.
//!
//! Every rule that depends on terrain reads from [`HazardKind::traits`]:
//! the display symbol, the pre-shot distance modifiers and what happens
//! after the ball lands. Adding a terrain means adding one row there.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Direction;
use crate::error::{normalize_name, ParseError};

/// The terrain of a single course cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HazardKind {
    Water,
    Sand,
    Slope,
    Trees,
    Rough,
    Fairway,
}

/// What landing on a terrain does to the ball.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandingEffect {
    /// Ball stays put.
    None,
    /// Ball stays put; the terrain is noted but has no mechanical effect.
    Obstructed,
    /// Ball is pushed one cell along `direction`, costing `penalty` strokes.
    Displace { direction: Direction, penalty: u32 },
}

/// One row of the terrain table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerrainTraits {
    /// Character drawn for the terrain.
    pub symbol: char,
    /// Added to a dice-golf roll when shooting from this terrain.
    pub dice_modifier: i32,
    /// Added to a speed-golf club distance when shooting from this terrain,
    /// unless the club plays cleanly out of bad lies.
    pub lie_penalty: i32,
    /// Applied once after the ball lands here.
    pub landing: LandingEffect,
}

impl HazardKind {
    /// All terrain kinds, in generation order.
    pub const ALL: [HazardKind; 6] = [
        HazardKind::Water,
        HazardKind::Sand,
        HazardKind::Slope,
        HazardKind::Trees,
        HazardKind::Rough,
        HazardKind::Fairway,
    ];

    /// The terrain table.
    #[must_use]
    pub const fn traits(self) -> TerrainTraits {
        match self {
            HazardKind::Water => TerrainTraits {
                symbol: '♒',
                dice_modifier: 0,
                lie_penalty: 0,
                landing: LandingEffect::Displace {
                    direction: Direction::SOUTH,
                    penalty: 1,
                },
            },
            HazardKind::Sand => TerrainTraits {
                symbol: 'ᨒ',
                dice_modifier: -1,
                lie_penalty: -1,
                landing: LandingEffect::None,
            },
            HazardKind::Slope => TerrainTraits {
                symbol: '›',
                dice_modifier: 0,
                lie_penalty: 0,
                landing: LandingEffect::Displace {
                    direction: Direction::SOUTH,
                    penalty: 0,
                },
            },
            HazardKind::Trees => TerrainTraits {
                symbol: '↟',
                dice_modifier: 0,
                lie_penalty: 0,
                landing: LandingEffect::Obstructed,
            },
            HazardKind::Rough => TerrainTraits {
                symbol: '෴',
                dice_modifier: 0,
                lie_penalty: 0,
                landing: LandingEffect::None,
            },
            HazardKind::Fairway => TerrainTraits {
                symbol: '·',
                dice_modifier: 1,
                lie_penalty: 0,
                landing: LandingEffect::None,
            },
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        self.traits().symbol
    }

    /// Stable name used in save files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            HazardKind::Water => "WATER",
            HazardKind::Sand => "SAND",
            HazardKind::Slope => "SLOPE",
            HazardKind::Trees => "TREES",
            HazardKind::Rough => "ROUGH",
            HazardKind::Fairway => "FAIRWAY",
        }
    }
}

impl std::fmt::Display for HazardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HazardKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize_name(s);
        HazardKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| ParseError::UnknownHazard(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dice_modifiers() {
        assert_eq!(HazardKind::Fairway.traits().dice_modifier, 1);
        assert_eq!(HazardKind::Sand.traits().dice_modifier, -1);
        for kind in [HazardKind::Water, HazardKind::Slope, HazardKind::Trees, HazardKind::Rough] {
            assert_eq!(kind.traits().dice_modifier, 0, "{} should not modify rolls", kind);
        }
    }

    #[test]
    fn test_only_sand_penalizes_clubs() {
        for kind in HazardKind::ALL {
            let expected = if kind == HazardKind::Sand { -1 } else { 0 };
            assert_eq!(kind.traits().lie_penalty, expected);
        }
    }

    #[test]
    fn test_landing_effects() {
        assert_eq!(
            HazardKind::Water.traits().landing,
            LandingEffect::Displace { direction: Direction::SOUTH, penalty: 1 }
        );
        assert_eq!(
            HazardKind::Slope.traits().landing,
            LandingEffect::Displace { direction: Direction::SOUTH, penalty: 0 }
        );
        assert_eq!(HazardKind::Trees.traits().landing, LandingEffect::Obstructed);
        assert_eq!(HazardKind::Sand.traits().landing, LandingEffect::None);
        assert_eq!(HazardKind::Rough.traits().landing, LandingEffect::None);
        assert_eq!(HazardKind::Fairway.traits().landing, LandingEffect::None);
    }

    #[test]
    fn test_symbols_are_distinct() {
        let symbols: Vec<char> = HazardKind::ALL.iter().map(|k| k.symbol()).collect();
        for (i, a) in symbols.iter().enumerate() {
            assert!(!symbols[i + 1..].contains(a));
        }
    }

    #[test]
    fn test_name_roundtrip() {
        for kind in HazardKind::ALL {
            assert_eq!(kind.name().parse::<HazardKind>(), Ok(kind));
        }
        assert_eq!("fairway".parse::<HazardKind>(), Ok(HazardKind::Fairway));
        assert!("lava".parse::<HazardKind>().is_err());
    }
}
