//! Core CLI definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::weapons::WeaponsCommand;

#[derive(Parser)]
#[command(name = "tarnished")]
#[command(about = "Elden Ring weapon and build calculator", long_about = None)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Damage attribute overrides; unset values fall back to the configured stats
#[derive(Args, Debug, Clone, Default)]
pub struct AttributeArgs {
    /// Strength
    #[arg(long = "str")]
    pub strength: Option<i32>,

    /// Dexterity
    #[arg(long = "dex")]
    pub dexterity: Option<i32>,

    /// Intelligence
    #[arg(long = "int")]
    pub intelligence: Option<i32>,

    /// Faith
    #[arg(long = "fai")]
    pub faith: Option<i32>,

    /// Arcane
    #[arg(long = "arc")]
    pub arcane: Option<i32>,
}

/// All eight stats; unset values fall back to the class or configured stats
#[derive(Args, Debug, Clone, Default)]
pub struct StatArgs {
    #[arg(long)]
    pub vigor: Option<i32>,

    #[arg(long)]
    pub mind: Option<i32>,

    #[arg(long)]
    pub endurance: Option<i32>,

    #[arg(long = "str")]
    pub strength: Option<i32>,

    #[arg(long = "dex")]
    pub dexterity: Option<i32>,

    #[arg(long = "int")]
    pub intelligence: Option<i32>,

    #[arg(long = "fai")]
    pub faith: Option<i32>,

    #[arg(long = "arc")]
    pub arcane: Option<i32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Attack rating for a weapon at the given attributes
    #[command(visible_alias = "a")]
    Ar {
        /// Weapon id or name
        weapon: String,

        #[command(flatten)]
        attributes: AttributeArgs,

        /// Path to weapons.json (uses configured catalog if not provided)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Show per-attribute scaling and requirement details
        #[arg(short, long)]
        breakdown: bool,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse the weapon catalog
    #[command(visible_alias = "w")]
    Weapons {
        /// Path to weapons.json (uses configured catalog if not provided)
        #[arg(long, global = true)]
        catalog: Option<PathBuf>,

        #[command(subcommand)]
        command: WeaponsCommand,
    },

    /// Rune level for a stat spread
    #[command(visible_alias = "l")]
    Level {
        /// Starting class (e.g. "Samurai"); its stats fill unset values
        #[arg(short, long)]
        class: Option<String>,

        #[command(flatten)]
        stats: StatArgs,
    },

    /// Leveling guide - which zones suit a rune level
    #[command(visible_alias = "g")]
    Guide {
        /// Current rune level
        #[arg(allow_negative_numbers = true)]
        level: i64,

        /// Also show zones far below the current level
        #[arg(short, long)]
        all: bool,
    },

    /// List starting classes and their base stats
    Classes,

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default weapons.json path
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Set a default stat, e.g. --stat strength=40 (repeatable)
        #[arg(long = "stat", value_name = "NAME=VALUE")]
        stats: Vec<String>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_negative_level() {
        let cli = Cli::try_parse_from(["tarnished", "guide", "-3"]).unwrap();
        assert!(matches!(cli.command, Commands::Guide { level: -3, all: false }));

        let cli = Cli::try_parse_from(["tarnished", "guide", "-5", "--all"]).unwrap();
        assert!(matches!(cli.command, Commands::Guide { level: -5, all: true }));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
