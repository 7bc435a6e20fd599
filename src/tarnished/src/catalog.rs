//! Weapon catalog
//!
//! Loads the `weapons.json` dataset produced by the upstream data scripts
//! and validates it into typed [`Weapon`] records. Tier and attribute
//! labels are checked here, once, so a bad label is reported with the
//! weapon it came from instead of surfacing later as a wrong number.

use crate::attribute::Attribute;
use crate::scaling::ScalingTier;
use crate::weapon::{Damage, RequirementEntry, ScalingEntry, Weapon};
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default dataset location
pub const DEFAULT_CATALOG_PATH: &str = "share/weapons.json";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Weapon {weapon:?}: unknown scaling tier {tier:?} for {attribute}")]
    InvalidTier {
        weapon: String,
        attribute: String,
        tier: String,
    },

    #[error("Weapon {weapon:?}: unknown attribute {code:?}")]
    InvalidAttribute { weapon: String, code: String },

    #[error("Weapon {weapon:?}: {attribute} is listed more than once in {list}")]
    DuplicateAttribute {
        weapon: String,
        attribute: Attribute,
        list: &'static str,
    },

    #[error("Weapon {weapon:?}: {field} damage must be a non-negative number")]
    InvalidDamage { weapon: String, field: &'static str },

    #[error("Duplicate weapon id: {0}")]
    DuplicateId(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWeapon {
    id: String,
    name: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    weight: f64,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    damage: Damage,
    #[serde(default)]
    scaling: Vec<RawScaling>,
    #[serde(default)]
    requirements: Vec<RawRequirement>,
    #[serde(default)]
    is_somber: bool,
}

#[derive(Debug, Deserialize)]
struct RawScaling {
    attribute: String,
    tier: String,
}

#[derive(Debug, Deserialize)]
struct RawRequirement {
    attribute: String,
    value: u32,
}

impl RawWeapon {
    fn validate(self) -> Result<Weapon, CatalogError> {
        for (field, value) in self.damage.components() {
            if !(value.is_finite() && value >= 0.0) {
                return Err(CatalogError::InvalidDamage {
                    weapon: self.name,
                    field,
                });
            }
        }

        let mut scaling: Vec<ScalingEntry> = Vec::with_capacity(Attribute::ALL.len());
        for raw in &self.scaling {
            let attribute = self.parse_attribute(&raw.attribute)?;
            if scaling.iter().any(|s| s.attribute == attribute) {
                return Err(self.duplicate(attribute, "scaling"));
            }
            let tier = raw
                .tier
                .parse::<ScalingTier>()
                .map_err(|_| CatalogError::InvalidTier {
                    weapon: self.name.clone(),
                    attribute: raw.attribute.clone(),
                    tier: raw.tier.clone(),
                })?;
            scaling.push(ScalingEntry { attribute, tier });
        }
        // every attribute gets an entry, absent ones do not scale
        for attribute in Attribute::ALL {
            if !scaling.iter().any(|s| s.attribute == attribute) {
                scaling.push(ScalingEntry {
                    attribute,
                    tier: ScalingTier::None,
                });
            }
        }

        let mut requirements: Vec<RequirementEntry> = Vec::with_capacity(self.requirements.len());
        for raw in &self.requirements {
            let attribute = self.parse_attribute(&raw.attribute)?;
            if requirements.iter().any(|r| r.attribute == attribute) {
                return Err(self.duplicate(attribute, "requirements"));
            }
            requirements.push(RequirementEntry {
                attribute,
                value: raw.value,
            });
        }

        Ok(Weapon {
            id: self.id,
            name: self.name,
            category: self.category.unwrap_or_default(),
            weight: self.weight,
            image: self.image.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            damage: self.damage,
            scaling,
            requirements,
            is_somber: self.is_somber,
        })
    }

    fn duplicate(&self, attribute: Attribute, list: &'static str) -> CatalogError {
        CatalogError::DuplicateAttribute {
            weapon: self.name.clone(),
            attribute,
            list,
        }
    }

    fn parse_attribute(&self, code: &str) -> Result<Attribute, CatalogError> {
        code.parse().map_err(|_| CatalogError::InvalidAttribute {
            weapon: self.name.clone(),
            code: code.to_string(),
        })
    }
}

/// Parse and validate a single weapon from JSON
pub fn weapon_from_json(json: &str) -> Result<Weapon, CatalogError> {
    let raw: RawWeapon = serde_json::from_str(json)?;
    raw.validate()
}

/// Lowercase and drop everything but ASCII letters and digits, so
/// "Hand Axe" and "hand-axe" compare equal
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// In-memory weapon catalog, in dataset order
#[derive(Debug, Clone, Default)]
pub struct WeaponCatalog {
    weapons: Vec<Weapon>,
    by_id: HashMap<String, usize>,
}

impl WeaponCatalog {
    /// Build a catalog from already validated weapons
    pub fn from_weapons(weapons: Vec<Weapon>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(weapons.len());
        for (idx, weapon) in weapons.iter().enumerate() {
            if by_id.insert(weapon.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateId(weapon.id.clone()));
            }
        }
        Ok(Self { weapons, by_id })
    }

    /// Parse a JSON array of weapons
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawWeapon> = serde_json::from_str(json)?;
        let weapons = raw
            .into_iter()
            .map(RawWeapon::validate)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = weapons.len(), "parsed weapon catalog");
        Self::from_weapons(weapons)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        tracing::debug!(path = %path.display(), "loading weapon catalog");
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        if catalog.is_empty() {
            tracing::warn!(path = %path.display(), "weapon catalog is empty");
        }
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Weapon> {
        self.weapons.iter()
    }

    /// Get weapon by id
    pub fn get(&self, id: &str) -> Option<&Weapon> {
        self.by_id.get(id).map(|&idx| &self.weapons[idx])
    }

    /// Find a weapon by id, then by exact name (ignoring case), then by
    /// normalized name
    pub fn find(&self, key: &str) -> Option<&Weapon> {
        if let Some(w) = self.get(key) {
            return Some(w);
        }
        if let Some(w) = self.weapons.iter().find(|w| w.name.eq_ignore_ascii_case(key)) {
            return Some(w);
        }
        let wanted = normalize_name(key);
        if wanted.is_empty() {
            return None;
        }
        self.weapons.iter().find(|w| normalize_name(&w.name) == wanted)
    }

    /// Weapons whose name contains `query`, case-insensitively
    pub fn search(&self, query: &str) -> Vec<&Weapon> {
        let query = query.to_lowercase();
        self.weapons
            .iter()
            .filter(|w| w.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Weapons in a category (case-insensitive)
    pub fn by_category(&self, category: &str) -> Vec<&Weapon> {
        self.weapons
            .iter()
            .filter(|w| w.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Distinct categories, sorted
    pub fn categories(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self
            .weapons
            .iter()
            .map(|w| w.category.as_str())
            .filter(|c| !c.is_empty())
            .collect();
        set.into_iter().collect()
    }
}
