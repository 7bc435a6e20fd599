//! Weapon catalog command CLI definitions

use clap::Subcommand;

/// Output format for weapon listings
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Subcommand)]
pub enum WeaponsCommand {
    /// List weapons, optionally filtered by category
    List {
        /// Filter by category (e.g. "Katana")
        #[arg(long)]
        category: Option<String>,

        /// Output format: table (default), csv, json
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show details for a weapon
    Show {
        /// Weapon id or name
        weapon: String,
    },

    /// Search weapons by name
    Search {
        /// Text to look for in weapon names
        query: String,
    },

    /// List weapon categories
    Categories,
}
