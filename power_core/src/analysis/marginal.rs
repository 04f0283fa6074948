//! Marginal-value analysis - finite-difference attribute worth
//!
//! Probes the enhanced evaluator with one-unit deltas to answer "how many
//! points of B is one point of A worth right now".

use super::AnalysisError;
use crate::buff::BuffCatalog;
use crate::character::{AttributeDelta, Character};
use crate::power::combat_power_enhanced;
use crate::resolve::{accumulate_buffs, resolve_with_totals};
use crate::types::AttributeId;

/// Probe size for ignore-defense. A single point is imperceptible there, so
/// it is compared in 30-point batches.
pub const IGNORE_DEFENSE_UNIT: f64 = 30.0;

/// Result of comparing the marginal worth of two attributes
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeComparison {
    pub attribute_a: AttributeId,
    pub attribute_b: AttributeId,
    /// Probe size used for attribute A (30 for ignore-defense, 1 otherwise)
    pub unit_a: f64,
    /// Combat power before any probe
    pub base_power: f64,
    /// Power gained by one probe of A
    pub marginal_a: f64,
    /// Power gained by one point of B
    pub marginal_b: f64,
    /// How many points of B one probe of A is worth. `None` when B has no
    /// measurable effect here (zero or non-finite denominator) - display as
    /// "not comparable", never feed onward into arithmetic.
    pub conversion_rate: Option<f64>,
}

impl AttributeComparison {
    /// One-line conclusion for the comparison panel
    pub fn summary(&self) -> String {
        match self.conversion_rate {
            Some(rate) => format!(
                "{} point(s) of {} is worth about {:.2} point(s) of {}",
                self.unit_a, self.attribute_a, rate, self.attribute_b
            ),
            None => format!(
                "{} has no measurable effect on this character; not comparable",
                self.attribute_b
            ),
        }
    }
}

/// Compare the marginal value of two attributes for a character under a set
/// of active buffs.
///
/// Comparing an attribute with itself is rejected up front.
pub fn compare_attributes(
    character: &Character,
    catalog: &BuffCatalog,
    active: &[&str],
    attribute_a: AttributeId,
    attribute_b: AttributeId,
) -> Result<AttributeComparison, AnalysisError> {
    if attribute_a == attribute_b {
        return Err(AnalysisError::SameAttribute(attribute_a));
    }

    let buffs = accumulate_buffs(catalog, active);
    let base_power = combat_power_enhanced(&resolve_with_totals(character, &buffs, None));

    let unit_a = if attribute_a == AttributeId::IgnoreDefenseRate {
        IGNORE_DEFENSE_UNIT
    } else {
        1.0
    };
    let delta_a = AttributeDelta::new().with(attribute_a, unit_a);
    let marginal_a =
        combat_power_enhanced(&resolve_with_totals(character, &buffs, Some(&delta_a))) - base_power;

    let delta_b = AttributeDelta::new().with(attribute_b, 1.0);
    let marginal_b =
        combat_power_enhanced(&resolve_with_totals(character, &buffs, Some(&delta_b))) - base_power;

    let rate = marginal_a / marginal_b;
    let conversion_rate = if marginal_b == 0.0 || !rate.is_finite() {
        None
    } else {
        Some(rate)
    };

    Ok(AttributeComparison {
        attribute_a,
        attribute_b,
        unit_a,
        base_power,
        marginal_a,
        marginal_b,
        conversion_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_character() -> Character {
        Character {
            main_attribute_base: 1000.0,
            base_attack: 1000.0,
            ignore_defense_rate: 90.0,
            ..Character::default()
        }
    }

    #[test]
    fn test_same_attribute_rejected_before_computation() {
        let err = compare_attributes(
            &sample_character(),
            &BuffCatalog::new(),
            &[],
            AttributeId::BaseAttack,
            AttributeId::BaseAttack,
        )
        .unwrap_err();
        assert_eq!(err, AnalysisError::SameAttribute(AttributeId::BaseAttack));
    }

    #[test]
    fn test_ratio_is_finite_positive_and_deterministic() {
        let character = sample_character();
        let catalog = BuffCatalog::new();

        let first = compare_attributes(
            &character,
            &catalog,
            &[],
            AttributeId::MainAttributeBase,
            AttributeId::BaseAttack,
        )
        .unwrap();
        let second = compare_attributes(
            &character,
            &catalog,
            &[],
            AttributeId::MainAttributeBase,
            AttributeId::BaseAttack,
        )
        .unwrap();

        let rate = first.conversion_rate.unwrap();
        assert!(rate.is_finite());
        assert!(rate > 0.0);
        // Pure arithmetic: repeated calls agree bit for bit.
        assert_eq!(
            rate.to_bits(),
            second.conversion_rate.unwrap().to_bits()
        );
        assert_eq!(first.base_power.to_bits(), second.base_power.to_bits());
    }

    #[test]
    fn test_conversion_rate_tracks_the_cross_term() {
        // Power is proportional to attack * 4 * main. At main 1000 and
        // attack 500, +1 main moves power by attack * 4 = 2000 units of the
        // shared scale while +1 attack moves it by 4 * main = 4000, so one
        // point of main is worth half a point of attack.
        let character = Character {
            main_attribute_base: 1000.0,
            base_attack: 500.0,
            ignore_defense_rate: 90.0,
            ..Character::default()
        };
        let comparison = compare_attributes(
            &character,
            &BuffCatalog::new(),
            &[],
            AttributeId::MainAttributeBase,
            AttributeId::BaseAttack,
        )
        .unwrap();
        assert!((comparison.conversion_rate.unwrap() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_ignore_defense_probes_thirty_points() {
        let comparison = compare_attributes(
            &sample_character(),
            &BuffCatalog::new(),
            &[],
            AttributeId::IgnoreDefenseRate,
            AttributeId::BaseAttack,
        )
        .unwrap();
        assert_eq!(comparison.unit_a, IGNORE_DEFENSE_UNIT);
        assert!(comparison.marginal_a > 0.0);
    }

    #[test]
    fn test_zero_denominator_reports_not_comparable() {
        // An all-zero character clamps to 0 power everywhere; both marginals
        // vanish and no conversion exists.
        let comparison = compare_attributes(
            &Character::default(),
            &BuffCatalog::new(),
            &[],
            AttributeId::MainAttributeBase,
            AttributeId::BaseAttack,
        )
        .unwrap();
        assert_eq!(comparison.marginal_b, 0.0);
        assert_eq!(comparison.conversion_rate, None);
        assert!(comparison.summary().contains("not comparable"));
    }
}
