//! CLI argument definitions for tarnished
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod weapons;

pub use self::core::{AttributeArgs, Cli, Commands, StatArgs};
pub use self::weapons::{OutputFormat, WeaponsCommand};
