//! Starting class listing

use anyhow::Result;
use std::fmt::Write as _;
use tarnished::{CharacterStats, STARTING_CLASSES};

/// Handle the classes command
pub fn handle() -> Result<()> {
    print!("{}", format_classes());
    Ok(())
}

pub fn format_classes() -> String {
    let mut out = String::new();
    let _ = write!(out, "{:<12} {:>3}", "Class", "Lvl");
    for key in CharacterStats::KEYS {
        let _ = write!(out, " {:>4}", &key[..3].to_ascii_uppercase());
    }
    out.push('\n');

    for class in STARTING_CLASSES {
        let _ = write!(out, "{:<12} {:>3}", class.name, class.level);
        for key in CharacterStats::KEYS {
            let _ = write!(out, " {:>4}", class.stats.get(key).unwrap_or(0));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_classes() {
        let text = format_classes();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), STARTING_CLASSES.len() + 1);
        assert!(lines[0].contains("VIG"));
        assert!(lines[0].contains("ARC"));

        let astrologer: Vec<&str> = lines
            .iter()
            .find(|l| l.starts_with("Astrologer"))
            .unwrap()
            .split_whitespace()
            .collect();
        assert_eq!(astrologer, ["Astrologer", "6", "9", "15", "9", "8", "12", "16", "7", "9"]);
    }
}
