//! Attack rating command handlers

use super::{find_weapon, load_catalog};
use crate::cli::AttributeArgs;
use crate::config::Config;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;
use tarnished::{breakdown, ArBreakdown, Attribute, Attributes, Weapon};

/// Apply explicit flags over the base attributes
pub fn resolve_attributes(args: &AttributeArgs, base: Attributes) -> Attributes {
    let overrides = [
        (Attribute::Str, args.strength),
        (Attribute::Dex, args.dexterity),
        (Attribute::Int, args.intelligence),
        (Attribute::Fai, args.faith),
        (Attribute::Arc, args.arcane),
    ];
    overrides
        .into_iter()
        .fold(base, |attrs, (attr, value)| match value {
            Some(v) => attrs.with(attr, v),
            None => attrs,
        })
}

/// Handle the ar command
pub fn handle(
    weapon: &str,
    args: &AttributeArgs,
    catalog_flag: Option<&Path>,
    show_breakdown: bool,
    json: bool,
) -> Result<()> {
    let config = Config::load()?;
    let catalog = load_catalog(&config, catalog_flag)?;
    let weapon = find_weapon(&catalog, weapon)?;
    let attrs = resolve_attributes(args, config.attributes());
    tracing::debug!(weapon = %weapon.id, ?attrs, "computing attack rating");

    let result = breakdown(weapon, &attrs);

    if json {
        let out = serde_json::to_string_pretty(&result).context("Failed to serialize breakdown")?;
        println!("{}", out);
    } else if show_breakdown {
        print!("{}", format_breakdown(weapon, &attrs, &result));
    } else {
        println!("{}: {}", weapon.name, result.total);
    }

    Ok(())
}

/// Multi-line explanation of an attack rating
pub fn format_breakdown(weapon: &Weapon, attrs: &Attributes, result: &ArBreakdown) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", weapon.name, weapon.category);

    let stats: Vec<String> = attrs.iter().map(|(a, v)| format!("{} {}", a, v)).collect();
    let _ = writeln!(out, "  Attributes:   {}", stats.join("  "));

    let damage: Vec<String> = weapon
        .damage
        .components()
        .iter()
        .filter(|(_, v)| *v > 0.0)
        .map(|(name, v)| format!("{} {}", name, v))
        .collect();
    let _ = writeln!(
        out,
        "  Base damage:  {} ({})",
        result.base_total,
        if damage.is_empty() {
            "none".to_string()
        } else {
            damage.join(", ")
        }
    );

    if result.penalized {
        for unmet in &result.unmet {
            let _ = writeln!(
                out,
                "  Requirement:  {} {} needed, have {}",
                unmet.attribute, unmet.required, unmet.actual
            );
        }
        let _ = writeln!(out, "  Requirements not met: damage reduced to 60%, no scaling");
    } else {
        for c in &result.contributions {
            let _ = writeln!(
                out,
                "  Scaling:      {} {} at {} ({:.1}%) -> +{:.2}",
                c.attribute,
                c.tier,
                c.value,
                c.saturation * 100.0,
                c.bonus
            );
        }
        if result.contributions.is_empty() {
            let _ = writeln!(out, "  Scaling:      none");
        }
    }

    let _ = writeln!(out, "  Attack rating: {}", result.total);
    out
}
