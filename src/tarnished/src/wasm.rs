//! WebAssembly bindings for tarnished
//!
//! JavaScript-friendly wrappers so the web front end can recompute attack
//! rating on every stat change without a round trip.

use crate::attribute::Attributes;
use crate::calculator::{attack_rating as rust_attack_rating, breakdown};
use crate::catalog::weapon_from_json;
use crate::classes::{class_by_name, rune_level as rust_rune_level, CharacterStats};
use crate::scaling::{saturation, ScalingTier};
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

// Sorted keys, so "strength" is applied after "str" when both are given
fn stat_map(stats_json: &str) -> Result<BTreeMap<String, i32>, serde_json::Error> {
    serde_json::from_str(stats_json)
}

fn parse_stats(stats_json: &str) -> Result<BTreeMap<String, i32>, JsValue> {
    stat_map(stats_json).map_err(|e| JsValue::from_str(&format!("Invalid stats: {}", e)))
}

/// Attack rating for a weapon
///
/// # Arguments
/// * `weapon_json` - Weapon record in catalog JSON shape
/// * `stats_json` - Object of stat name to value, e.g. `{"strength": 40}`
#[wasm_bindgen(js_name = attackRating)]
pub fn attack_rating(weapon_json: &str, stats_json: &str) -> Result<u32, JsValue> {
    let weapon = weapon_from_json(weapon_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid weapon: {}", e)))?;
    let stats = parse_stats(stats_json)?;
    let attrs = Attributes::from_pairs(stats.iter().map(|(k, v)| (k.as_str(), *v)));
    Ok(rust_attack_rating(&weapon, &attrs))
}

/// Attack rating breakdown as a JSON string
#[wasm_bindgen(js_name = attackRatingBreakdown)]
pub fn attack_rating_breakdown(weapon_json: &str, stats_json: &str) -> Result<String, JsValue> {
    let weapon = weapon_from_json(weapon_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid weapon: {}", e)))?;
    let stats = parse_stats(stats_json)?;
    let attrs = Attributes::from_pairs(stats.iter().map(|(k, v)| (k.as_str(), *v)));
    serde_json::to_string(&breakdown(&weapon, &attrs))
        .map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
}

#[wasm_bindgen(js_name = statSaturation)]
pub fn stat_saturation(value: i32) -> f64 {
    saturation(value)
}

#[wasm_bindgen(js_name = scalingCoefficient)]
pub fn scaling_coefficient(tier: &str) -> Result<f64, JsValue> {
    tier.parse::<ScalingTier>()
        .map(ScalingTier::coefficient)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rune level for a stat object, optionally relative to a starting class
#[wasm_bindgen(js_name = runeLevel)]
pub fn rune_level(stats_json: &str, class: Option<String>) -> Result<f64, JsValue> {
    let stats = parse_stats(stats_json)?;
    let stats = CharacterStats::from_pairs(stats.iter().map(|(k, v)| (k.as_str(), *v)));
    let class = match class.as_deref() {
        Some(name) => Some(
            class_by_name(name)
                .ok_or_else(|| JsValue::from_str(&format!("Unknown class: {}", name)))?,
        ),
        None => None,
    };
    Ok(rust_rune_level(&stats, class) as f64)
}

/// Starting class names
#[wasm_bindgen(js_name = startingClasses)]
pub fn starting_classes() -> js_sys::Array {
    crate::classes::STARTING_CLASSES
        .iter()
        .map(|c| JsValue::from_str(c.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_map_full_name_wins() {
        for json in [r#"{"str": 10, "strength": 40}"#, r#"{"strength": 40, "str": 10}"#] {
            let stats = stat_map(json).unwrap();
            let attrs = Attributes::from_pairs(stats.iter().map(|(k, v)| (k.as_str(), *v)));
            assert_eq!(attrs.strength, 40);
        }
    }
}
