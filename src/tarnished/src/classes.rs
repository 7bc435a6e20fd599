//! Starting classes and rune level

use crate::attribute::{Attribute, Attributes};
use serde::{Deserialize, Serialize};

/// All eight character stats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterStats {
    pub vigor: i32,
    pub mind: i32,
    pub endurance: i32,
    pub strength: i32,
    pub dexterity: i32,
    pub intelligence: i32,
    pub faith: i32,
    pub arcane: i32,
}

impl CharacterStats {
    /// Stat keys in display order
    pub const KEYS: [&'static str; 8] = [
        "vigor",
        "mind",
        "endurance",
        "strength",
        "dexterity",
        "intelligence",
        "faith",
        "arcane",
    ];

    /// Same value for every stat
    pub fn uniform(value: i32) -> Self {
        Self {
            vigor: value,
            mind: value,
            endurance: value,
            strength: value,
            dexterity: value,
            intelligence: value,
            faith: value,
            arcane: value,
        }
    }

    pub fn get(&self, key: &str) -> Option<i32> {
        match key {
            "vigor" => Some(self.vigor),
            "mind" => Some(self.mind),
            "endurance" => Some(self.endurance),
            "strength" => Some(self.strength),
            "dexterity" => Some(self.dexterity),
            "intelligence" => Some(self.intelligence),
            "faith" => Some(self.faith),
            "arcane" => Some(self.arcane),
            _ => None,
        }
    }

    /// Set a stat by key. Returns false for unknown keys.
    pub fn set(&mut self, key: &str, value: i32) -> bool {
        let slot = match key {
            "vigor" => &mut self.vigor,
            "mind" => &mut self.mind,
            "endurance" => &mut self.endurance,
            "strength" => &mut self.strength,
            "dexterity" => &mut self.dexterity,
            "intelligence" => &mut self.intelligence,
            "faith" => &mut self.faith,
            "arcane" => &mut self.arcane,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Read a loose key/value map; missing stats are 0, unknown keys ignored.
    ///
    /// Damage attributes may also be keyed by their codes ("str", "dex",
    /// ...), the same keys [`Attributes::from_pairs`] accepts.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, i32)>,
    {
        let mut stats = Self::default();
        for (key, value) in pairs {
            if !stats.set(&key.to_ascii_lowercase(), value) {
                if let Ok(attr) = key.parse::<Attribute>() {
                    stats.set(attr.stat_key(), value);
                }
            }
        }
        stats
    }

    pub fn total(&self) -> i64 {
        Self::KEYS
            .iter()
            .filter_map(|k| self.get(k))
            .map(i64::from)
            .sum()
    }

    /// The five damage attributes used by the calculator
    pub fn attributes(&self) -> Attributes {
        Attributes {
            strength: self.strength,
            dexterity: self.dexterity,
            intelligence: self.intelligence,
            faith: self.faith,
            arcane: self.arcane,
        }
    }
}

/// Starting class information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartingClass {
    pub id: &'static str,
    pub name: &'static str,
    pub level: i32,
    pub stats: CharacterStats,
}

impl StartingClass {
    /// Stat total minus starting level; constant for every class
    pub fn baseline(&self) -> i64 {
        self.stats.total() - i64::from(self.level)
    }
}

const fn stats(values: [i32; 8]) -> CharacterStats {
    CharacterStats {
        vigor: values[0],
        mind: values[1],
        endurance: values[2],
        strength: values[3],
        dexterity: values[4],
        intelligence: values[5],
        faith: values[6],
        arcane: values[7],
    }
}

/// All starting classes
pub const STARTING_CLASSES: &[StartingClass] = &[
    StartingClass {
        id: "vagabond",
        name: "Vagabond",
        level: 9,
        stats: stats([15, 10, 11, 14, 13, 9, 9, 7]),
    },
    StartingClass {
        id: "warrior",
        name: "Warrior",
        level: 8,
        stats: stats([11, 12, 11, 10, 16, 10, 8, 9]),
    },
    StartingClass {
        id: "hero",
        name: "Hero",
        level: 7,
        stats: stats([14, 9, 12, 16, 9, 7, 8, 11]),
    },
    StartingClass {
        id: "bandit",
        name: "Bandit",
        level: 5,
        stats: stats([10, 11, 10, 9, 13, 9, 8, 14]),
    },
    StartingClass {
        id: "astrologer",
        name: "Astrologer",
        level: 6,
        stats: stats([9, 15, 9, 8, 12, 16, 7, 9]),
    },
    StartingClass {
        id: "prophet",
        name: "Prophet",
        level: 7,
        stats: stats([10, 14, 8, 11, 10, 7, 16, 10]),
    },
    StartingClass {
        id: "samurai",
        name: "Samurai",
        level: 9,
        stats: stats([12, 11, 13, 12, 15, 9, 8, 8]),
    },
    StartingClass {
        id: "prisoner",
        name: "Prisoner",
        level: 9,
        stats: stats([11, 12, 11, 11, 14, 14, 6, 9]),
    },
    StartingClass {
        id: "confessor",
        name: "Confessor",
        level: 10,
        stats: stats([10, 13, 10, 12, 12, 9, 14, 9]),
    },
    StartingClass {
        id: "wretch",
        name: "Wretch",
        level: 1,
        stats: stats([10, 10, 10, 10, 10, 10, 10, 10]),
    },
];

/// Stat total minus level of the Wretch, used when no class is chosen
pub const DEFAULT_BASELINE: i64 = 79;

/// Get class by id or display name (case-insensitive)
pub fn class_by_name(name: &str) -> Option<&'static StartingClass> {
    STARTING_CLASSES
        .iter()
        .find(|c| c.id.eq_ignore_ascii_case(name) || c.name.eq_ignore_ascii_case(name))
}

/// Rune level for a stat spread.
///
/// Level grows by one per point above the class's starting stats. Without
/// a class the Wretch baseline applies. Stats below the class baseline
/// give a level below the class's starting level.
pub fn rune_level(stats: &CharacterStats, class: Option<&StartingClass>) -> i64 {
    let baseline = class.map_or(DEFAULT_BASELINE, StartingClass::baseline);
    stats.total() - baseline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attribute;

    #[test]
    fn test_class_lookup() {
        assert_eq!(class_by_name("samurai").map(|c| c.level), Some(9));
        assert_eq!(class_by_name("Astrologer").map(|c| c.stats.intelligence), Some(16));
        assert!(class_by_name("Knight").is_none());
    }

    #[test]
    fn test_every_class_starts_at_its_level() {
        for class in STARTING_CLASSES {
            assert_eq!(
                rune_level(&class.stats, Some(class)),
                i64::from(class.level),
                "{}",
                class.name
            );
        }
    }

    #[test]
    fn test_baselines_match_wretch() {
        for class in STARTING_CLASSES {
            assert_eq!(class.baseline(), DEFAULT_BASELINE, "{}", class.name);
        }
    }

    #[test]
    fn test_rune_level_without_class() {
        assert_eq!(rune_level(&CharacterStats::uniform(10), None), 1);
        let mut stats = CharacterStats::uniform(10);
        stats.vigor = 40;
        stats.strength = 27;
        assert_eq!(rune_level(&stats, None), 1 + 30 + 17);
    }

    #[test]
    fn test_rune_level_below_baseline() {
        let stats = CharacterStats::default();
        assert_eq!(rune_level(&stats, class_by_name("hero")), -79);
    }

    #[test]
    fn test_stats_from_pairs() {
        let stats = CharacterStats::from_pairs([
            ("Vigor", 30),
            ("strength", 20),
            ("level", 50),
        ]);
        assert_eq!(stats.vigor, 30);
        assert_eq!(stats.strength, 20);
        assert_eq!(stats.mind, 0);
        assert_eq!(stats.total(), 50);
    }

    #[test]
    fn test_stats_from_pairs_codes() {
        let stats = CharacterStats::from_pairs([("vigor", 20), ("str", 40), ("DEX", 15), ("arc", 9)]);
        assert_eq!(stats.strength, 40);
        assert_eq!(stats.dexterity, 15);
        assert_eq!(stats.arcane, 9);
        // rune level agrees with the attack rating's reading of the same map
        assert_eq!(
            stats.attributes(),
            Attributes::from_pairs([("vigor", 20), ("str", 40), ("DEX", 15), ("arc", 9)])
        );
        assert_eq!(stats.total(), 84);
    }

    #[test]
    fn test_stats_set_unknown() {
        let mut stats = CharacterStats::default();
        assert!(stats.set("faith", 25));
        assert!(!stats.set("poise", 25));
        assert_eq!(stats.get("faith"), Some(25));
        assert_eq!(stats.get("poise"), None);
    }

    #[test]
    fn test_attributes_projection() {
        let class = class_by_name("prophet").unwrap();
        let attrs = class.stats.attributes();
        assert_eq!(attrs.get(Attribute::Fai), 16);
        assert_eq!(attrs.get(Attribute::Str), 11);
    }
}
