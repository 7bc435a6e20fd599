//! Weapon catalog command handlers

use super::{find_weapon, load_catalog};
use crate::cli::{OutputFormat, WeaponsCommand};
use crate::config::Config;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;
use tarnished::{attack_rating, Attribute, Attributes, Weapon};

/// Handle the weapons command
pub fn handle(command: WeaponsCommand, catalog_flag: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let catalog = load_catalog(&config, catalog_flag)?;

    match command {
        WeaponsCommand::List { category, format } => {
            let weapons: Vec<&Weapon> = match category.as_deref() {
                Some(cat) => catalog.by_category(cat),
                None => catalog.iter().collect(),
            };
            print!("{}", format_list(&weapons, format)?);
        }
        WeaponsCommand::Show { weapon } => {
            let weapon = find_weapon(&catalog, &weapon)?;
            print!("{}", format_details(weapon, &config.attributes()));
        }
        WeaponsCommand::Search { query } => {
            let hits = catalog.search(&query);
            if hits.is_empty() {
                println!("No weapons matching {:?}", query);
            } else {
                print!("{}", format_list(&hits, OutputFormat::Table)?);
            }
        }
        WeaponsCommand::Categories => {
            for category in catalog.categories() {
                println!("{:<24} {}", category, catalog.by_category(category).len());
            }
        }
    }

    Ok(())
}

/// Render weapons as a table, CSV, or JSON
pub fn format_list(weapons: &[&Weapon], format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Table => {
            let _ = writeln!(
                out,
                "{:<28} {:<20} {:>6} {:>6}  Scaling",
                "Name", "Category", "Base", "Weight"
            );
            for w in weapons {
                let _ = writeln!(
                    out,
                    "{:<28} {:<20} {:>6} {:>6}  {}",
                    w.name,
                    w.category,
                    w.damage.base_total(),
                    w.weight,
                    w.scaling_summary()
                );
            }
            let _ = writeln!(out, "\n{} weapon(s)", weapons.len());
        }
        OutputFormat::Csv => {
            let _ = writeln!(out, "id,name,category,base,weight,scaling");
            for w in weapons {
                let _ = writeln!(
                    out,
                    "{},{},{},{},{},{}",
                    csv_field(&w.id),
                    csv_field(&w.name),
                    csv_field(&w.category),
                    w.damage.base_total(),
                    w.weight,
                    csv_field(&w.scaling_summary())
                );
            }
        }
        OutputFormat::Json => {
            out = serde_json::to_string_pretty(weapons).context("Failed to serialize weapons")?;
            out.push('\n');
        }
    }
    Ok(out)
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Full weapon description with AR at the configured stats
pub fn format_details(weapon: &Weapon, attrs: &Attributes) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", weapon.name);
    let _ = writeln!(out, "  Category:     {}", weapon.category);
    let _ = writeln!(out, "  Weight:       {}", weapon.weight);
    let _ = writeln!(
        out,
        "  Upgrades:     +{} ({})",
        weapon.max_upgrade(),
        if weapon.is_somber { "somber" } else { "regular" }
    );

    let _ = writeln!(out, "  Damage:");
    for (name, value) in weapon.damage.components() {
        let _ = writeln!(out, "    {:<10} {}", name, value);
    }
    let _ = writeln!(out, "    {:<10} {}", "critical", weapon.damage.critical);

    let _ = writeln!(out, "  Scaling / Requirements:");
    for attr in Attribute::ALL {
        let _ = writeln!(
            out,
            "    {:<4} {:<2} {:>3}",
            attr,
            weapon.tier_for(attr),
            weapon.requirement_for(attr)
        );
    }

    if *attrs != Attributes::default() {
        let _ = writeln!(out, "  AR at configured stats: {}", attack_rating(weapon, attrs));
    }

    if !weapon.description.is_empty() {
        let _ = writeln!(out, "\n  {}", weapon.description);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::catalog;

    #[test]
    fn test_format_list_table() {
        let catalog = catalog();
        let weapons: Vec<&Weapon> = catalog.iter().collect();
        let text = format_list(&weapons, OutputFormat::Table).unwrap();
        assert!(text.contains("Moonveil"));
        assert!(text.contains("Dex E / Int C"));
        assert!(text.contains("3 weapon(s)"));
    }

    #[test]
    fn test_format_list_csv() {
        let catalog = catalog();
        let weapons = catalog.by_category("Katana");
        let text = format_list(&weapons, OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "moonveil,Moonveil,Katana,160,6.5,Dex E / Int C");
    }

    #[test]
    fn test_format_list_json() {
        let catalog = catalog();
        let weapons = catalog.search("sword");
        let text = format_list(&weapons, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("Margit, the Fell"), "\"Margit, the Fell\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_format_details() {
        let catalog = catalog();
        let weapon = catalog.get("moonveil").unwrap();

        let text = format_details(weapon, &Attributes::default());
        assert!(text.contains("+10 (somber)"));
        assert!(text.contains("Int  C   23"));
        assert!(!text.contains("AR at configured stats"));

        let attrs = Attributes::uniform(30);
        let text = format_details(weapon, &attrs);
        assert!(text.contains("AR at configured stats:"));
    }
}
