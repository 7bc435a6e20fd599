//! Leveling guide command handlers

use anyhow::Result;
use std::fmt::Write as _;
use tarnished::{recommend, ZoneStatus};

/// Handle the guide command
pub fn handle(level: i64, all: bool) -> Result<()> {
    print!("{}", format_guide(level, all));
    Ok(())
}

fn marker(status: ZoneStatus) -> &'static str {
    match status {
        ZoneStatus::UnderLeveled => "!",
        ZoneStatus::OnLevel => "*",
        ZoneStatus::OverLeveled => " ",
    }
}

pub fn format_guide(level: i64, all: bool) -> String {
    let zones = recommend(level, all);
    let mut out = String::new();
    let _ = writeln!(out, "Leveling guide for rune level {}", level);
    let _ = writeln!(out);

    for (zone, status) in &zones {
        let _ = writeln!(
            out,
            "{} {:<32} {:>3}-{:<3}  +{:<2}  {}",
            marker(*status),
            zone.name,
            zone.min_level,
            zone.max_level,
            zone.upgrade_level,
            status
        );
        if *status == ZoneStatus::OnLevel {
            let _ = writeln!(out, "    {}", zone.description);
            let _ = writeln!(out, "    Bosses: {}", zone.bosses.join(", "));
        }
    }

    let on_level = zones
        .iter()
        .filter(|(_, s)| *s == ZoneStatus::OnLevel)
        .count();
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} zone(s) on level, {} shown",
        on_level,
        zones.len()
    );
    out
}
