//! Rune level command handlers

use crate::cli::StatArgs;
use crate::config::Config;
use anyhow::{Context, Result};
use tarnished::{class_by_name, rune_level, CharacterStats, StartingClass, STARTING_CLASSES};

/// Apply explicit flags over the base stats
pub fn resolve_stats(args: &StatArgs, base: CharacterStats) -> CharacterStats {
    let mut stats = base;
    let overrides = [
        ("vigor", args.vigor),
        ("mind", args.mind),
        ("endurance", args.endurance),
        ("strength", args.strength),
        ("dexterity", args.dexterity),
        ("intelligence", args.intelligence),
        ("faith", args.faith),
        ("arcane", args.arcane),
    ];
    for (key, value) in overrides {
        if let Some(v) = value {
            stats.set(key, v);
        }
    }
    stats
}

fn lookup_class(name: &str) -> Result<&'static StartingClass> {
    class_by_name(name).with_context(|| {
        let names: Vec<&str> = STARTING_CLASSES.iter().map(|c| c.name).collect();
        format!("Unknown class {:?} (expected one of: {})", name, names.join(", "))
    })
}

/// Handle the level command
///
/// Unset stats come from the starting class when one is given, otherwise
/// from the configured stats.
pub fn handle(class: Option<&str>, args: &StatArgs) -> Result<()> {
    let class = class.map(lookup_class).transpose()?;
    let base = match class {
        Some(c) => c.stats,
        None => Config::load()?.character_stats(),
    };
    let stats = resolve_stats(args, base);

    print!("{}", format_level(&stats, class));
    Ok(())
}

pub fn format_level(stats: &CharacterStats, class: Option<&StartingClass>) -> String {
    let level = rune_level(stats, class);
    let mut out = String::new();
    for key in CharacterStats::KEYS {
        out.push_str(&format!("  {:<13}{:>3}\n", key, stats.get(key).unwrap_or(0)));
    }
    match class {
        Some(c) => out.push_str(&format!(
            "Rune level: {} (from {} base level {})\n",
            level, c.name, c.level
        )),
        None => out.push_str(&format!("Rune level: {}\n", level)),
    }
    if class.is_some_and(|c| level < i64::from(c.level)) {
        out.push_str("Note: some stats are below the class's starting values\n");
    }
    out
}
