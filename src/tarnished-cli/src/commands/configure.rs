//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting default catalog and stats.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;
use tarnished::{rune_level, CharacterStats};

/// Handle the configure command
///
/// # Arguments
/// * `catalog` - Optional weapons.json path to set as default
/// * `stats` - `name=value` assignments for default stats
/// * `show` - If true, show current configuration
pub fn handle(catalog: Option<PathBuf>, stats: &[String], show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if apply(&mut config, catalog, stats)? {
        config.save()?;
        show_config(&config);
        if let Ok(path) = Config::config_path() {
            println!("Config saved to: {}", path.display());
        }
    } else {
        show_usage();
    }

    Ok(())
}

/// Apply changes to the config. Returns true if anything was set.
///
/// Every assignment is validated before the config is touched.
pub fn apply(config: &mut Config, catalog: Option<PathBuf>, stats: &[String]) -> Result<bool> {
    let mut updated = config.clone();
    for assignment in stats {
        updated.set_stat(assignment)?;
    }

    let changed = catalog.is_some() || !stats.is_empty();
    if let Some(path) = catalog {
        updated.set_catalog(path);
    }
    *config = updated;
    Ok(changed)
}

/// Display current configuration
fn show_config(config: &Config) {
    match &config.catalog {
        Some(path) => println!("Catalog: {}", path.display()),
        None => println!("Catalog: {} (default)", config.catalog_path(None).display()),
    }

    if config.stats.is_empty() {
        println!("No default stats configured");
    } else {
        let stats = config.character_stats();
        println!("Stats:");
        for key in CharacterStats::KEYS {
            println!("  {:<13}{:>3}", key, stats.get(key).unwrap_or(0));
        }
        println!("Rune level: {}", rune_level(&stats, None));
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: tarnished configure --catalog PATH/TO/weapons.json");
    println!("   or: tarnished configure --stat strength=40 --stat dexterity=18");
    println!("   or: tarnished configure --show");
    println!();
    println!("Configured stats are used by `ar` and `weapons show` when no");
    println!("attribute flags are given.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_nothing() {
        let mut config = Config::default();
        assert!(!apply(&mut config, None, &[]).unwrap());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_apply_catalog_and_stats() {
        let mut config = Config::default();
        let stats = vec!["strength=40".to_string(), "Vigor = 30".to_string()];
        let changed = apply(&mut config, Some(PathBuf::from("/data/weapons.json")), &stats).unwrap();

        assert!(changed);
        assert_eq!(config.catalog, Some(PathBuf::from("/data/weapons.json")));
        assert_eq!(config.stats.get("strength"), Some(&40));
        assert_eq!(config.stats.get("vigor"), Some(&30));
    }

    #[test]
    fn test_apply_invalid_stat_leaves_config() {
        let mut config = Config::default();
        config.set_stat("faith=20").unwrap();
        let stats = vec!["faith=25".to_string(), "poise=10".to_string()];

        assert!(apply(&mut config, Some(PathBuf::from("x.json")), &stats).is_err());
        assert_eq!(config.stats.get("faith"), Some(&20));
        assert_eq!(config.catalog, None);
    }

    #[test]
    fn test_show_usage_does_not_panic() {
        show_usage();
    }
}
