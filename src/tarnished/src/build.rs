//! Saved character builds
//!
//! [`Build`] mirrors a row of the hosted `builds` table. Storing and
//! fetching rows is left to the hosting service; this module only reads
//! them and derives the numbers a build page shows.

use crate::calculator::attack_rating;
use crate::catalog::WeaponCatalog;
use crate::classes::{class_by_name, rune_level, CharacterStats};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A saved loadout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Build {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_public: bool,
    /// Stat name to value, e.g. `{"vigor": 40, "strength": 27}`
    pub stats: BTreeMap<String, i32>,

    pub weapon_r_id: Option<String>,
    /// Left hand may hold a weapon or a shield
    pub weapon_l_id: Option<String>,

    pub armor_head_id: Option<String>,
    pub armor_chest_id: Option<String>,
    pub armor_arms_id: Option<String>,
    pub armor_legs_id: Option<String>,

    pub talisman_1_id: Option<String>,
    pub talisman_2_id: Option<String>,
    pub talisman_3_id: Option<String>,
    pub talisman_4_id: Option<String>,

    pub class_id: Option<String>,

    pub created_at: String,
}

/// Derived numbers for a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildSummary {
    pub level: i64,
    /// None when the slot is empty or the weapon is not in the catalog
    pub right_hand_ar: Option<u32>,
    pub left_hand_ar: Option<u32>,
}

impl Build {
    pub fn character_stats(&self) -> CharacterStats {
        CharacterStats::from_pairs(self.stats.iter().map(|(k, v)| (k.as_str(), *v)))
    }

    /// Equipped talisman ids, skipping empty slots
    pub fn talismans(&self) -> Vec<&str> {
        [
            &self.talisman_1_id,
            &self.talisman_2_id,
            &self.talisman_3_id,
            &self.talisman_4_id,
        ]
        .into_iter()
        .filter_map(|t| t.as_deref())
        .collect()
    }

    pub fn summary(&self, catalog: &WeaponCatalog) -> BuildSummary {
        let stats = self.character_stats();
        let class = self.class_id.as_deref().and_then(class_by_name);
        if let (Some(id), None) = (&self.class_id, class) {
            tracing::warn!(build = %self.id, class = %id, "unknown class, using default baseline");
        }
        let attributes = stats.attributes();

        let hand_ar = |slot: &Option<String>| {
            slot.as_deref()
                .and_then(|id| catalog.get(id))
                .map(|w| attack_rating(w, &attributes))
        };

        BuildSummary {
            level: rune_level(&stats, class),
            right_hand_ar: hand_ar(&self.weapon_r_id),
            left_hand_ar: hand_ar(&self.weapon_l_id),
        }
    }
}
