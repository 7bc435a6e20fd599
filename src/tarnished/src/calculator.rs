//! Attack Rating calculator
//!
//! Attack rating is the weapon's summed base damage plus a scaling bonus
//! for every attribute the weapon scales with:
//!
//! ```text
//! bonus(attr) = base_total * coefficient(tier) * saturation(value)
//! AR          = floor(base_total + sum(bonus))
//! ```
//!
//! If the character misses any attribute requirement, no bonus is computed
//! and the result is `floor(base_total * 0.6)` instead.

use crate::attribute::{Attribute, Attributes};
use crate::scaling::{saturation, ScalingTier};
use crate::weapon::Weapon;
use serde::Serialize;

/// Damage multiplier when any requirement is unmet
pub const REQUIREMENT_PENALTY: f64 = 0.6;

/// Attack rating for `weapon` wielded with `attributes`.
pub fn attack_rating(weapon: &Weapon, attributes: &Attributes) -> u32 {
    let base_total = weapon.damage.base_total();

    if !meets_requirements(weapon, attributes) {
        return to_rating(base_total * REQUIREMENT_PENALTY);
    }

    let scaling_bonus: f64 = weapon
        .scaling
        .iter()
        .filter(|s| s.tier.scales())
        .map(|s| scaling_bonus(base_total, s.tier, attributes.get(s.attribute)))
        .sum();

    to_rating(base_total + scaling_bonus)
}

/// True if every nonzero requirement is met
pub fn meets_requirements(weapon: &Weapon, attributes: &Attributes) -> bool {
    unmet_requirements(weapon, attributes).next().is_none()
}

/// Requirements the character falls short of
pub fn unmet_requirements<'a>(
    weapon: &'a Weapon,
    attributes: &'a Attributes,
) -> impl Iterator<Item = UnmetRequirement> + 'a {
    weapon
        .requirements
        .iter()
        .filter(|r| r.value > 0)
        .filter_map(move |r| {
            let actual = attributes.get(r.attribute);
            (i64::from(actual) < i64::from(r.value)).then_some(UnmetRequirement {
                attribute: r.attribute,
                required: r.value,
                actual,
            })
        })
}

fn scaling_bonus(base_total: f64, tier: ScalingTier, value: i32) -> f64 {
    base_total * tier.coefficient() * saturation(value)
}

fn to_rating(value: f64) -> u32 {
    // float-to-int casts saturate, and base damage is never negative
    value.floor() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnmetRequirement {
    pub attribute: Attribute,
    pub required: u32,
    pub actual: i32,
}

/// One attribute's share of the scaling bonus
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScalingContribution {
    pub attribute: Attribute,
    pub tier: ScalingTier,
    pub value: i32,
    pub saturation: f64,
    pub bonus: f64,
}

/// Attack rating with the numbers behind it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArBreakdown {
    pub base_total: f64,
    /// Empty when requirements are unmet, since no bonus is computed
    pub contributions: Vec<ScalingContribution>,
    pub unmet: Vec<UnmetRequirement>,
    pub scaling_bonus: f64,
    pub penalized: bool,
    pub total: u32,
}

/// Same result as [`attack_rating`], keeping the intermediate values
pub fn breakdown(weapon: &Weapon, attributes: &Attributes) -> ArBreakdown {
    let base_total = weapon.damage.base_total();
    let unmet: Vec<UnmetRequirement> = unmet_requirements(weapon, attributes).collect();

    if !unmet.is_empty() {
        tracing::trace!(weapon = %weapon.id, unmet = unmet.len(), "requirements not met");
        return ArBreakdown {
            base_total,
            contributions: Vec::new(),
            unmet,
            scaling_bonus: 0.0,
            penalized: true,
            total: to_rating(base_total * REQUIREMENT_PENALTY),
        };
    }

    let contributions: Vec<ScalingContribution> = weapon
        .scaling
        .iter()
        .filter(|s| s.tier.scales())
        .map(|s| {
            let value = attributes.get(s.attribute);
            ScalingContribution {
                attribute: s.attribute,
                tier: s.tier,
                value,
                saturation: saturation(value),
                bonus: scaling_bonus(base_total, s.tier, value),
            }
        })
        .collect();
    let scaling_bonus = contributions.iter().map(|c| c.bonus).sum();

    ArBreakdown {
        base_total,
        contributions,
        unmet,
        scaling_bonus,
        penalized: false,
        total: to_rating(base_total + scaling_bonus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weapon::tests::physical_weapon;
    use crate::weapon::Damage;

    fn str_b_weapon() -> Weapon {
        physical_weapon(
            100.0,
            &[(Attribute::Str, ScalingTier::B)],
            &[(Attribute::Str, 12)],
        )
    }

    #[test]
    fn test_str_40_scenario() {
        let attrs = Attributes::new().with(Attribute::Str, 40);
        assert_eq!(attack_rating(&str_b_weapon(), &attrs), 158);
    }

    #[test]
    fn test_unmet_requirement_scenario() {
        let attrs = Attributes::new().with(Attribute::Str, 5);
        assert_eq!(attack_rating(&str_b_weapon(), &attrs), 60);
    }

    #[test]
    fn test_requirement_exactly_met() {
        let attrs = Attributes::new().with(Attribute::Str, 12);
        // 100 + 100 * 1.0 * (12 / 80)
        assert_eq!(attack_rating(&str_b_weapon(), &attrs), 115);
    }

    #[test]
    fn test_zero_damage_is_zero() {
        let mut w = str_b_weapon();
        w.damage = Damage::default();
        for attrs in [
            Attributes::new(),
            Attributes::uniform(99),
            Attributes::new().with(Attribute::Str, 5),
        ] {
            assert_eq!(attack_rating(&w, &attrs), 0);
        }
    }

    #[test]
    fn test_no_requirements_never_penalized() {
        let w = physical_weapon(
            120.0,
            &[(Attribute::Dex, ScalingTier::A), (Attribute::Arc, ScalingTier::E)],
            &[],
        );
        for value in [-5, 0, 1, 10, 99] {
            let attrs = Attributes::uniform(value);
            assert!(attack_rating(&w, &attrs) >= 120);
            assert!(!breakdown(&w, &attrs).penalized);
        }
    }

    #[test]
    fn test_penalty_ignores_other_attributes() {
        let w = physical_weapon(
            143.0,
            &[(Attribute::Str, ScalingTier::S), (Attribute::Dex, ScalingTier::S)],
            &[(Attribute::Str, 20), (Attribute::Dex, 30)],
        );
        let expected = (143.0_f64 * 0.6).floor() as u32;
        let cases = [
            Attributes::new().with(Attribute::Str, 99).with(Attribute::Dex, 29),
            Attributes::new().with(Attribute::Str, 19).with(Attribute::Dex, 99),
            Attributes::uniform(0),
            Attributes::uniform(-40),
        ];
        for attrs in cases {
            assert_eq!(attack_rating(&w, &attrs), expected);
        }
    }

    #[test]
    fn test_all_dash_tiers_give_base() {
        let mut w = physical_weapon(87.0, &[], &[(Attribute::Int, 10)]);
        w.damage.magic = 40.5;
        let attrs = Attributes::uniform(60);
        assert_eq!(attack_rating(&w, &attrs), 127);
    }

    #[test]
    fn test_critical_excluded() {
        let mut w = physical_weapon(100.0, &[], &[]);
        w.damage.critical = 500.0;
        assert_eq!(attack_rating(&w, &Attributes::new()), 100);
    }

    #[test]
    fn test_missing_requirement_entries_are_zero() {
        let mut w = str_b_weapon();
        w.requirements.clear();
        assert_eq!(attack_rating(&w, &Attributes::new()), 100);
    }

    #[test]
    fn test_monotonic_per_attribute() {
        let w = physical_weapon(
            110.0,
            &[
                (Attribute::Str, ScalingTier::C),
                (Attribute::Dex, ScalingTier::B),
                (Attribute::Fai, ScalingTier::S),
            ],
            &[(Attribute::Str, 10), (Attribute::Dex, 10), (Attribute::Fai, 10)],
        );
        for attr in [Attribute::Str, Attribute::Dex, Attribute::Fai] {
            let base = Attributes::uniform(10);
            let mut prev = attack_rating(&w, &base);
            for value in 11..=99 {
                let ar = attack_rating(&w, &base.with(attr, value));
                assert!(ar >= prev, "{} dropped at {}", attr, value);
                prev = ar;
            }
        }
    }

    #[test]
    fn test_values_above_cap() {
        let w = str_b_weapon();
        let capped = attack_rating(&w, &Attributes::new().with(Attribute::Str, 99));
        let over = attack_rating(&w, &Attributes::new().with(Attribute::Str, 150));
        assert_eq!(capped, 200);
        assert_eq!(over, capped);
    }

    #[test]
    fn test_multiple_scaling_attributes_sum() {
        let w = physical_weapon(
            100.0,
            &[(Attribute::Str, ScalingTier::D), (Attribute::Dex, ScalingTier::C)],
            &[],
        );
        let attrs = Attributes::new()
            .with(Attribute::Str, 20)
            .with(Attribute::Dex, 50);
        // 100 + 100*0.5*0.25 + 100*0.75*0.75 = 168.75
        assert_eq!(attack_rating(&w, &attrs), 168);
    }

    #[test]
    fn test_breakdown_matches_attack_rating() {
        let w = physical_weapon(
            97.0,
            &[
                (Attribute::Str, ScalingTier::E),
                (Attribute::Int, ScalingTier::A),
                (Attribute::Arc, ScalingTier::D),
            ],
            &[(Attribute::Int, 18)],
        );
        for value in [0, 5, 17, 18, 33, 64, 80, 99, 140] {
            let attrs = Attributes::uniform(value);
            assert_eq!(breakdown(&w, &attrs).total, attack_rating(&w, &attrs));
        }
    }

    #[test]
    fn test_breakdown_details() {
        let ok = breakdown(&str_b_weapon(), &Attributes::new().with(Attribute::Str, 40));
        assert!(!ok.penalized);
        assert_eq!(ok.contributions.len(), 1);
        assert_eq!(ok.contributions[0].attribute, Attribute::Str);
        assert!((ok.contributions[0].bonus - 58.333_333_333).abs() < 1e-6);
        assert!(ok.unmet.is_empty());

        let bad = breakdown(&str_b_weapon(), &Attributes::new().with(Attribute::Str, 5));
        assert!(bad.penalized);
        assert!(bad.contributions.is_empty());
        assert_eq!(
            bad.unmet,
            vec![UnmetRequirement {
                attribute: Attribute::Str,
                required: 12,
                actual: 5,
            }]
        );
        assert_eq!(bad.total, 60);
    }
}
