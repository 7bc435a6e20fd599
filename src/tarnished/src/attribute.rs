//! Damage attributes and character attribute values
//!
//! The five attributes that weapons scale with and require. Character
//! values are held in [`Attributes`], a fixed record where every attribute
//! is always present.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown attribute: {0:?}")]
    UnknownAttribute(String),

    #[error("Unknown scaling tier: {0:?}")]
    UnknownTier(String),
}

/// Attribute a weapon can scale with or require
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    Str,
    Dex,
    Int,
    Fai,
    Arc,
}

impl Attribute {
    /// All attributes in catalog order
    pub const ALL: [Attribute; 5] = [
        Attribute::Str,
        Attribute::Dex,
        Attribute::Int,
        Attribute::Fai,
        Attribute::Arc,
    ];

    /// Short code used by the weapon catalog ("Str", "Dex", ...)
    pub fn code(self) -> &'static str {
        match self {
            Self::Str => "Str",
            Self::Dex => "Dex",
            Self::Int => "Int",
            Self::Fai => "Fai",
            Self::Arc => "Arc",
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Dex => "Dexterity",
            Self::Int => "Intelligence",
            Self::Fai => "Faith",
            Self::Arc => "Arcane",
        }
    }

    /// Key used in saved build stat maps ("strength", "dexterity", ...)
    pub fn stat_key(self) -> &'static str {
        match self {
            Self::Str => "strength",
            Self::Dex => "dexterity",
            Self::Int => "intelligence",
            Self::Fai => "faith",
            Self::Arc => "arcane",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for Attribute {
    type Err = ParseError;

    /// Accepts catalog codes and full names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "str" | "strength" => Ok(Self::Str),
            "dex" | "dexterity" => Ok(Self::Dex),
            "int" | "intelligence" => Ok(Self::Int),
            "fai" | "faith" => Ok(Self::Fai),
            "arc" | "arcane" => Ok(Self::Arc),
            _ => Err(ParseError::UnknownAttribute(s.to_string())),
        }
    }
}

/// Character values for the five damage attributes.
///
/// Every attribute is always present; anything not set is 0. Values are
/// not range checked, the calculator is total over all integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub strength: i32,
    pub dexterity: i32,
    pub intelligence: i32,
    pub faith: i32,
    pub arcane: i32,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same value for every attribute
    pub fn uniform(value: i32) -> Self {
        Self {
            strength: value,
            dexterity: value,
            intelligence: value,
            faith: value,
            arcane: value,
        }
    }

    pub fn get(&self, attr: Attribute) -> i32 {
        match attr {
            Attribute::Str => self.strength,
            Attribute::Dex => self.dexterity,
            Attribute::Int => self.intelligence,
            Attribute::Fai => self.faith,
            Attribute::Arc => self.arcane,
        }
    }

    pub fn set(&mut self, attr: Attribute, value: i32) {
        match attr {
            Attribute::Str => self.strength = value,
            Attribute::Dex => self.dexterity = value,
            Attribute::Int => self.intelligence = value,
            Attribute::Fai => self.faith = value,
            Attribute::Arc => self.arcane = value,
        }
    }

    /// Builder-style setter
    pub fn with(mut self, attr: Attribute, value: i32) -> Self {
        self.set(attr, value);
        self
    }

    /// Iterate `(attribute, value)` pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL.into_iter().map(move |a| (a, self.get(a)))
    }

    /// Build from a loose key/value map such as a saved build's `stats`.
    ///
    /// Keys may be codes ("str") or full names ("strength"). Keys that are
    /// not damage attributes (vigor, mind, ...) are ignored, and missing
    /// attributes stay at 0.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, i32)>,
    {
        let mut attrs = Self::default();
        for (key, value) in pairs {
            if let Ok(attr) = key.parse::<Attribute>() {
                attrs.set(attr, value);
            }
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_parse() {
        assert_eq!("Str".parse::<Attribute>(), Ok(Attribute::Str));
        assert_eq!("dex".parse::<Attribute>(), Ok(Attribute::Dex));
        assert_eq!("INTELLIGENCE".parse::<Attribute>(), Ok(Attribute::Int));
        assert_eq!(" Faith ".parse::<Attribute>(), Ok(Attribute::Fai));
        assert_eq!("arcane".parse::<Attribute>(), Ok(Attribute::Arc));
        assert_eq!(
            "Vig".parse::<Attribute>(),
            Err(ParseError::UnknownAttribute("Vig".to_string()))
        );
    }

    #[test]
    fn test_attribute_codes_round_trip() {
        for attr in Attribute::ALL {
            assert_eq!(attr.code().parse::<Attribute>(), Ok(attr));
            assert_eq!(attr.stat_key().parse::<Attribute>(), Ok(attr));
        }
    }

    #[test]
    fn test_index_matches_order() {
        for (i, attr) in Attribute::ALL.iter().enumerate() {
            assert_eq!(attr.index(), i);
        }
    }

    #[test]
    fn test_attributes_default_zero() {
        let attrs = Attributes::new();
        for attr in Attribute::ALL {
            assert_eq!(attrs.get(attr), 0);
        }
    }

    #[test]
    fn test_attributes_set_get() {
        let attrs = Attributes::new()
            .with(Attribute::Str, 40)
            .with(Attribute::Arc, -3);
        assert_eq!(attrs.get(Attribute::Str), 40);
        assert_eq!(attrs.get(Attribute::Arc), -3);
        assert_eq!(attrs.get(Attribute::Dex), 0);
        assert_eq!(attrs.strength, 40);
    }

    #[test]
    fn test_attributes_from_pairs() {
        let attrs = Attributes::from_pairs([
            ("vigor", 40),
            ("strength", 22),
            ("dex", 18),
            ("mind", 10),
        ]);
        assert_eq!(attrs.get(Attribute::Str), 22);
        assert_eq!(attrs.get(Attribute::Dex), 18);
        assert_eq!(attrs.get(Attribute::Int), 0);
        assert_eq!(attrs.get(Attribute::Fai), 0);
    }

    #[test]
    fn test_attributes_from_pairs_later_key_wins() {
        let attrs = Attributes::from_pairs([("str", 10), ("strength", 40)]);
        assert_eq!(attrs.strength, 40);

        let map: std::collections::BTreeMap<&str, i32> =
            [("strength", 40), ("str", 10)].into_iter().collect();
        let attrs = Attributes::from_pairs(map.iter().map(|(k, v)| (*k, *v)));
        assert_eq!(attrs.strength, 40);
    }

    #[test]
    fn test_attributes_deserialize_missing_fields() {
        let attrs: Attributes = serde_json::from_str(r#"{"strength": 30}"#).unwrap();
        assert_eq!(attrs, Attributes::new().with(Attribute::Str, 30));
    }
}
