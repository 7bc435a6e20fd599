//! Scaling tiers and the stat saturation curve

use crate::attribute::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest attribute value; anything above behaves like 99
pub const MAX_STAT: i32 = 99;

/// Letter grade describing how strongly a weapon scales with an attribute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalingTier {
    S,
    A,
    B,
    C,
    D,
    E,
    /// No scaling, written "-" in the catalog
    #[default]
    #[serde(rename = "-")]
    None,
}

impl ScalingTier {
    /// All tiers from strongest to none
    pub const ALL: [ScalingTier; 7] = [
        ScalingTier::S,
        ScalingTier::A,
        ScalingTier::B,
        ScalingTier::C,
        ScalingTier::D,
        ScalingTier::E,
        ScalingTier::None,
    ];

    /// Multiplier applied to base damage at full saturation
    pub fn coefficient(self) -> f64 {
        match self {
            Self::S => 1.50,
            Self::A => 1.25,
            Self::B => 1.00,
            Self::C => 0.75,
            Self::D => 0.50,
            Self::E => 0.25,
            Self::None => 0.00,
        }
    }

    /// Catalog label ("S" through "E", or "-")
    pub fn label(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::None => "-",
        }
    }

    /// True for every tier except "-"
    pub fn scales(self) -> bool {
        self != Self::None
    }
}

impl fmt::Display for ScalingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for ScalingTier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "S" => Ok(Self::S),
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            "-" => Ok(Self::None),
            _ => Err(ParseError::UnknownTier(s.to_string())),
        }
    }
}

/// Fraction of an attribute's scaling power unlocked at `value`.
///
/// Four linear segments with breakpoints at 20, 50 and 80. A breakpoint
/// belongs to the segment below it. Non-positive values give 0 and values
/// above [`MAX_STAT`] are treated as 99, so the result is always in [0, 1].
pub fn saturation(value: i32) -> f64 {
    if value <= 0 {
        return 0.0;
    }
    let v = f64::from(value.min(MAX_STAT));

    if value <= 20 {
        v / 80.0
    } else if value <= 50 {
        0.25 + ((v - 20.0) / 30.0) * 0.50
    } else if value <= 80 {
        0.75 + ((v - 50.0) / 30.0) * 0.20
    } else {
        0.95 + ((v - 80.0) / 19.0) * 0.05
    }
}
