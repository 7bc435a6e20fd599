//! # tarnished
//!
//! Elden Ring reference library - attack rating, weapon catalog, and
//! leveling data.
//!
//! This library provides functionality to:
//! - Compute a weapon's Attack Rating (AR) from a character's attributes
//! - Load and query the weapon catalog dataset
//! - Work out rune level from stats and starting class
//! - Recommend zones for a rune level
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use tarnished::{attack_rating, Attribute, Attributes, WeaponCatalog};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = WeaponCatalog::load(Path::new("share/weapons.json"))?;
//! let weapon = catalog.find("Longsword").ok_or("no such weapon")?;
//!
//! let attrs = Attributes::new()
//!     .with(Attribute::Str, 40)
//!     .with(Attribute::Dex, 18);
//! println!("{}: {}", weapon.name, attack_rating(weapon, &attrs));
//! # Ok(())
//! # }
//! ```

pub mod attribute;
pub mod build;
pub mod calculator;
pub mod catalog;
pub mod classes;
pub mod guide;
pub mod scaling;
pub mod weapon;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
#[doc(inline)]
pub use attribute::{Attribute, Attributes, ParseError};
#[doc(inline)]
pub use build::{Build, BuildSummary};
#[doc(inline)]
pub use calculator::{
    attack_rating, breakdown, meets_requirements, ArBreakdown, ScalingContribution,
    UnmetRequirement, REQUIREMENT_PENALTY,
};
#[doc(inline)]
pub use catalog::{CatalogError, WeaponCatalog, DEFAULT_CATALOG_PATH};
#[doc(inline)]
pub use scaling::{saturation, ScalingTier, MAX_STAT};
#[doc(inline)]
pub use weapon::{Damage, RequirementEntry, ScalingEntry, Weapon};

// Reference data (classes, zones)
#[doc(inline)]
pub use classes::{class_by_name, rune_level, CharacterStats, StartingClass, STARTING_CLASSES};
#[doc(inline)]
pub use guide::{recommend, zone_by_id, zone_status, Zone, ZoneStatus, ZONES};
