//! Weapon records as supplied by the catalog

use crate::attribute::Attribute;
use crate::scaling::ScalingTier;
use serde::{Deserialize, Serialize};

/// Base damage at +0
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Damage {
    pub physical: f64,
    pub magic: f64,
    pub fire: f64,
    pub lightning: f64,
    pub holy: f64,
    /// Critical multiplier. Shown to the user, never used for attack rating.
    pub critical: f64,
}

impl Damage {
    /// Sum of the five damage types (critical excluded)
    pub fn base_total(&self) -> f64 {
        self.physical + self.magic + self.fire + self.lightning + self.holy
    }

    /// `(name, value)` pairs for the five damage types
    pub fn components(&self) -> [(&'static str, f64); 5] {
        [
            ("physical", self.physical),
            ("magic", self.magic),
            ("fire", self.fire),
            ("lightning", self.lightning),
            ("holy", self.holy),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScalingEntry {
    pub attribute: Attribute,
    pub tier: ScalingTier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequirementEntry {
    pub attribute: Attribute,
    pub value: u32,
}

/// A weapon from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub damage: Damage,
    pub scaling: Vec<ScalingEntry>,
    #[serde(default)]
    pub requirements: Vec<RequirementEntry>,
    /// Upgrades with somber stones (to +10) rather than regular ones (to +25)
    #[serde(default)]
    pub is_somber: bool,
}

impl Weapon {
    /// Scaling tier for an attribute, "-" if the weapon lists none
    pub fn tier_for(&self, attr: Attribute) -> ScalingTier {
        self.scaling
            .iter()
            .find(|s| s.attribute == attr)
            .map(|s| s.tier)
            .unwrap_or_default()
    }

    /// Requirement for an attribute, 0 if the weapon lists none
    pub fn requirement_for(&self, attr: Attribute) -> u32 {
        self.requirements
            .iter()
            .find(|r| r.attribute == attr)
            .map(|r| r.value)
            .unwrap_or(0)
    }

    /// Maximum upgrade level for this weapon's smithing path
    pub fn max_upgrade(&self) -> u8 {
        if self.is_somber {
            10
        } else {
            25
        }
    }

    /// Compact scaling summary such as "Str C / Dex D"
    pub fn scaling_summary(&self) -> String {
        let parts: Vec<String> = Attribute::ALL
            .iter()
            .filter_map(|&a| {
                let tier = self.tier_for(a);
                tier.scales().then(|| format!("{} {}", a, tier))
            })
            .collect();
        if parts.is_empty() {
            "-".to_string()
        } else {
            parts.join(" / ")
        }
    }
}
