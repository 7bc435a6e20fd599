//! Configuration management for tarnished CLI

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tarnished::{Attributes, CharacterStats, DEFAULT_CATALOG_PATH};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Default weapons.json location
    pub catalog: Option<PathBuf>,

    /// Default character stats, keyed by stat name
    #[serde(default)]
    pub stats: BTreeMap<String, i32>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("tarnished");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Catalog to use: explicit flag, then config, then the default path
    pub fn catalog_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.catalog.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH))
    }

    /// Configured stats; anything unset is 0
    pub fn character_stats(&self) -> CharacterStats {
        CharacterStats::from_pairs(self.stats.iter().map(|(k, v)| (k.as_str(), *v)))
    }

    pub fn attributes(&self) -> Attributes {
        self.character_stats().attributes()
    }

    /// Set a default stat from a `name=value` assignment
    pub fn set_stat(&mut self, assignment: &str) -> Result<()> {
        let (name, value) = assignment
            .split_once('=')
            .with_context(|| format!("Expected NAME=VALUE, got {:?}", assignment))?;
        let name = name.trim().to_ascii_lowercase();
        if !CharacterStats::KEYS.contains(&name.as_str()) {
            bail!(
                "Unknown stat {:?} (expected one of: {})",
                name,
                CharacterStats::KEYS.join(", ")
            );
        }
        let value: i32 = value
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {}: {:?}", name, value))?;
        self.stats.insert(name, value);
        Ok(())
    }

    pub fn set_catalog(&mut self, path: PathBuf) {
        self.catalog = Some(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarnished::Attribute;

    #[test]
    fn test_load_missing_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set_catalog(PathBuf::from("/data/weapons.json"));
        config.set_stat("strength=40").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.catalog, Some(PathBuf::from("/data/weapons.json")));
        assert_eq!(loaded.attributes().get(Attribute::Str), 40);
    }

    #[test]
    fn test_set_stat_validation() {
        let mut config = Config::default();
        assert!(config.set_stat("Faith = 25").is_ok());
        assert_eq!(config.stats.get("faith"), Some(&25));
        assert!(config.set_stat("poise=10").is_err());
        assert!(config.set_stat("strength").is_err());
        assert!(config.set_stat("strength=lots").is_err());
    }

    #[test]
    fn test_catalog_precedence() {
        let mut config = Config::default();
        assert_eq!(config.catalog_path(None), PathBuf::from(DEFAULT_CATALOG_PATH));

        config.set_catalog(PathBuf::from("configured.json"));
        assert_eq!(config.catalog_path(None), PathBuf::from("configured.json"));
        assert_eq!(
            config.catalog_path(Some(Path::new("flag.json"))),
            PathBuf::from("flag.json")
        );
    }
}
