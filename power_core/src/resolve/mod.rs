//! AttributeAccumulator - merges a sheet with buffs and hypothetical deltas
//!
//! Resolution is call-scoped: nothing here is cached or mutated in place, so
//! UI sliders can toggle buffs and what-if deltas freely without stale state.

pub mod ignore_defense;

use crate::buff::BuffCatalog;
use crate::character::{AttributeDelta, Character};
use crate::types::{Accumulation, AttributeId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Per-attribute totals contributed by a set of active buffs.
///
/// Additive attributes hold plain sums; the ignore-defense entry holds the
/// multiplicatively folded aggregate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuffTotals {
    values: BTreeMap<AttributeId, f64>,
}

impl BuffTotals {
    /// Total contribution for an attribute, 0 when no active buff touches it
    pub fn get(&self, id: AttributeId) -> f64 {
        self.values.get(&id).copied().unwrap_or(0.0)
    }

    fn add(&mut self, id: AttributeId, value: f64) {
        let entry = self.values.entry(id).or_insert(0.0);
        match id.accumulation() {
            Accumulation::Additive => *entry += value,
            Accumulation::MultiplicativeComplement => {
                *entry = ignore_defense::fold_rate(*entry, value);
            }
        }
    }
}

/// Fold the effects of every active buff into per-attribute totals.
///
/// Unknown ids are skipped silently and duplicate activations count once.
/// Effects within a buff apply in listed order, buffs in activation order;
/// only the ignore-defense fold cares, and it is commutative anyway.
pub fn accumulate_buffs(catalog: &BuffCatalog, active: &[&str]) -> BuffTotals {
    let mut totals = BuffTotals::default();
    let mut seen = BTreeSet::new();

    for id in active {
        if !seen.insert(*id) {
            continue;
        }
        let Some(buff) = catalog.get(id) else {
            continue;
        };
        for effect in &buff.effects {
            totals.add(effect.attribute, effect.value);
        }
    }

    totals
}

/// The fully merged numeric view of a character used as evaluator input.
///
/// Ephemeral by contract: recomputed from scratch on every query, never
/// persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAttributes {
    pub main_stat: f64,
    pub secondary_stat: f64,
    pub attack_power: f64,
    pub damage_percent: f64,
    pub critical_damage: f64,
    pub boss_damage: f64,
    pub final_damage_percent: f64,
    pub critical_rate: f64,
    pub ignore_defense_rate: f64,
    /// Carried through for the sheet-score formula; buffs never touch it
    pub weapon_coefficient: f64,
}

/// Resolve a character against a buff catalog and an optional what-if delta.
///
/// A default (all-zero) character resolves to the all-zero bundle; resolution
/// is a total function and never fails.
pub fn resolve(
    character: &Character,
    catalog: &BuffCatalog,
    active: &[&str],
    delta: Option<&AttributeDelta>,
) -> ResolvedAttributes {
    let buffs = accumulate_buffs(catalog, active);
    resolve_with_totals(character, &buffs, delta)
}

/// Resolve with pre-accumulated buff totals.
///
/// Analyses that probe many deltas against the same buff set reuse the totals
/// instead of re-folding the catalog per probe.
pub fn resolve_with_totals(
    character: &Character,
    buffs: &BuffTotals,
    delta: Option<&AttributeDelta>,
) -> ResolvedAttributes {
    use AttributeId::*;

    let d = |id: AttributeId| delta.map_or(0.0, |delta| delta.get(id));
    let total = |id: AttributeId| character.attribute(id) + buffs.get(id) + d(id);

    let main_base = total(MainAttributeBase);
    let main_percent = total(MainAttributePercent);
    let main_extra = total(MainAttributeExtra);
    let main_stat = main_base * (1.0 + main_percent / 100.0) + main_extra;

    let secondary_base = total(SecondaryAttributeBase);
    let secondary_percent = total(SecondaryAttributePercent);
    let secondary_extra = total(SecondaryAttributeExtra);
    let secondary_stat = secondary_base * (1.0 + secondary_percent / 100.0) + secondary_extra;

    // additional_attack is buff- and delta-immune: only the sheet value counts.
    let attack_power = total(BaseAttack) * (1.0 + total(AttackPercentage) / 100.0)
        + character.additional_attack;

    let ignore_defense_rate = ignore_defense::combine(
        character.attribute(IgnoreDefenseRate),
        buffs.get(IgnoreDefenseRate),
        d(IgnoreDefenseRate),
    );

    ResolvedAttributes {
        main_stat,
        secondary_stat,
        attack_power,
        damage_percent: total(DamagePercentage),
        critical_damage: total(CriticalDamage),
        boss_damage: total(BossDamage),
        final_damage_percent: total(FinalDamagePercentage),
        critical_rate: total(CriticalRate),
        ignore_defense_rate,
        weapon_coefficient: character.weapon_coefficient,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buff::{Buff, BuffCatalog, BuffCategory};

    fn attack_buff(id: &str, value: f64) -> Buff {
        Buff::new(id, id, BuffCategory::Potion).with_effect(AttributeId::BaseAttack, value)
    }

    #[test]
    fn test_default_character_resolves_to_zero_bundle() {
        let resolved = resolve(&Character::default(), &BuffCatalog::new(), &[], None);
        assert_eq!(resolved, ResolvedAttributes::default());
    }

    #[test]
    fn test_buff_effects_are_additive() {
        let catalog = BuffCatalog::from_buffs([
            attack_buff("a", 10.0),
            attack_buff("b", 10.0),
            attack_buff("c", 20.0),
        ]);
        let character = Character::default();

        let two_small = resolve(&character, &catalog, &["a", "b"], None);
        let one_big = resolve(&character, &catalog, &["c"], None);
        assert_eq!(two_small.attack_power, one_big.attack_power);
        assert_eq!(two_small.attack_power, 20.0);
    }

    #[test]
    fn test_unknown_ids_ignored_and_duplicates_count_once() {
        let catalog = BuffCatalog::from_buffs([attack_buff("a", 10.0)]);
        let resolved = resolve(&Character::default(), &catalog, &["a", "a", "nope"], None);
        assert_eq!(resolved.attack_power, 10.0);
    }

    #[test]
    fn test_main_stat_composite() {
        let character = Character {
            main_attribute_base: 1000.0,
            main_attribute_percent: 20.0,
            main_attribute_extra: 50.0,
            ..Character::default()
        };
        let resolved = resolve(&character, &BuffCatalog::new(), &[], None);
        assert!((resolved.main_stat - 1250.0).abs() < 1e-9);
    }

    #[test]
    fn test_attack_power_composite_with_buff_and_delta() {
        let catalog = BuffCatalog::from_buffs([attack_buff("a", 30.0)]);
        let character = Character {
            base_attack: 900.0,
            attack_percentage: 50.0,
            additional_attack: 200.0,
            ..Character::default()
        };
        let delta = AttributeDelta::new().with(AttributeId::BaseAttack, 70.0);

        let resolved = resolve(&character, &catalog, &["a"], Some(&delta));
        // (900 + 30 + 70) * 1.5 + 200
        assert!((resolved.attack_power - 1700.0).abs() < 1e-9);
    }

    #[test]
    fn test_additional_attack_is_buff_and_delta_immune() {
        let catalog = BuffCatalog::from_buffs([attack_buff("a", 100.0)]);
        let character = Character {
            additional_attack: 50.0,
            ..Character::default()
        };
        let resolved = resolve(&character, &catalog, &["a"], None);
        // Buffed base attack scales, the flat 50 rides along unchanged.
        assert!((resolved.attack_power - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_ignore_defense_goes_through_the_combinator() {
        let pen = |id: &str| {
            Buff::new(id, id, BuffCategory::Potion).with_effect(AttributeId::IgnoreDefenseRate, 20.0)
        };
        let catalog = BuffCatalog::from_buffs([pen("p1"), pen("p2")]);
        let resolved = resolve(&Character::default(), &catalog, &["p1", "p2"], None);
        // 20 and 20 fold to 36, not 40.
        assert!((resolved.ignore_defense_rate - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_delta_on_ignore_defense_divides_the_complement() {
        let character = Character {
            ignore_defense_rate: 50.0,
            ..Character::default()
        };
        let delta = AttributeDelta::new().with(AttributeId::IgnoreDefenseRate, -10.0);
        let resolved = resolve(&character, &BuffCatalog::new(), &[], Some(&delta));
        assert!((resolved.ignore_defense_rate - 44.444444444444444).abs() < 1e-9);
    }

    #[test]
    fn test_percent_fields_accept_buffs_and_deltas() {
        let catalog = BuffCatalog::from_buffs([Buff::new("p", "p", BuffCategory::Skill)
            .with_effect(AttributeId::MainAttributePercent, 10.0)]);
        let character = Character {
            main_attribute_base: 100.0,
            main_attribute_percent: 10.0,
            ..Character::default()
        };
        let delta = AttributeDelta::new().with(AttributeId::MainAttributePercent, 5.0);

        let resolved = resolve(&character, &catalog, &["p"], Some(&delta));
        assert!((resolved.main_stat - 125.0).abs() < 1e-9);
    }
}
