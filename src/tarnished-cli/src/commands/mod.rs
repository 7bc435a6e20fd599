//! Command handlers for tarnished CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod ar;
pub mod classes;
pub mod configure;
pub mod guide;
pub mod level;
pub mod weapons;

use crate::config::Config;
use anyhow::{bail, Context, Result};
use std::path::Path;
use tarnished::{Weapon, WeaponCatalog};

/// Load the catalog from the flag, configured, or default location
pub fn load_catalog(config: &Config, flag: Option<&Path>) -> Result<WeaponCatalog> {
    let path = config.catalog_path(flag);
    WeaponCatalog::load(&path)
        .with_context(|| format!("Failed to load weapon catalog from {}", path.display()))
}

/// Look up a weapon, suggesting close names when there is no exact match
pub fn find_weapon<'a>(catalog: &'a WeaponCatalog, key: &str) -> Result<&'a Weapon> {
    if let Some(weapon) = catalog.find(key) {
        return Ok(weapon);
    }

    let suggestions: Vec<&str> = catalog
        .search(key)
        .into_iter()
        .take(5)
        .map(|w| w.name.as_str())
        .collect();
    if suggestions.is_empty() {
        bail!("No weapon matching {:?}", key);
    }
    bail!(
        "No weapon matching {:?}. Did you mean: {}?",
        key,
        suggestions.join(", ")
    );
}
