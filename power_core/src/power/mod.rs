//! Combat-power evaluation - the two damage-formula strategies
//!
//! Two variants survive from the game community's formula history: a coarse
//! sheet score that floors every stat before combining, and the enhanced
//! expected-damage form every comparative analysis runs on. They disagree at
//! the margins and are kept as separately named strategies so both stay
//! exercised and tested.

use crate::resolve::ResolvedAttributes;

/// Reference boss defense all comparative analysis is standardized against.
/// A fixed target, not a character property.
pub const DEFAULT_BOSS_DEFENSE: f64 = 380.0;

/// Damage multiplier of a critical hit before bonus critical damage (135%)
const CRIT_BASE_MULTIPLIER: f64 = 1.35;

/// Sheet score: weapon-scaled attack times the stat blend, floored at every
/// stage. Boss damage, crit and defense do not participate.
pub fn combat_power_simple(resolved: &ResolvedAttributes) -> f64 {
    // Sheets saved before the weapon coefficient existed carry 0 here; the
    // sheet score has always treated that as 1.
    let coefficient = if resolved.weapon_coefficient > 0.0 {
        resolved.weapon_coefficient
    } else {
        1.0
    };

    (coefficient
        * resolved.attack_power.floor()
        * (4.0 * resolved.main_stat.floor() + resolved.secondary_stat.floor())
        * 0.01
        * (1.0 + resolved.damage_percent / 100.0)
        * (1.0 + resolved.final_damage_percent / 100.0))
        .floor()
}

/// Expected damage against the reference boss defense of 380
pub fn combat_power_enhanced(resolved: &ResolvedAttributes) -> f64 {
    combat_power_enhanced_vs(resolved, DEFAULT_BOSS_DEFENSE)
}

/// Expected damage against a specific boss defense.
///
/// Unlike the sheet score this form keeps stats unfloored, blends boss and
/// generic damage additively, folds in the crit expectation and scales by the
/// defense term. Over-applied defense clamps to 0, never negative.
pub fn combat_power_enhanced_vs(resolved: &ResolvedAttributes, boss_defense: f64) -> f64 {
    let mut damage = resolved.attack_power
        * (4.0 * resolved.main_stat + resolved.secondary_stat)
        * 0.01
        * (1.0 + resolved.final_damage_percent / 100.0);
    damage *= 1.0 + resolved.boss_damage / 100.0 + resolved.damage_percent / 100.0;
    damage *= crit_expectation(resolved.critical_rate, resolved.critical_damage);

    let defense_scale = 1.0 - 0.01 * boss_defense * (1.0 - resolved.ignore_defense_rate / 100.0);
    let power = 1000.0 * damage * defense_scale;
    if power > 0.0 {
        power
    } else {
        0.0
    }
}

/// Expected damage multiplier over the crit / non-crit split.
/// Above 100% crit rate every hit crits and the expectation collapses to the
/// crit multiplier itself.
fn crit_expectation(critical_rate: f64, critical_damage: f64) -> f64 {
    let crit_multiplier = CRIT_BASE_MULTIPLIER + critical_damage / 100.0;
    if critical_rate > 100.0 {
        crit_multiplier
    } else {
        1.0 - critical_rate / 100.0 + critical_rate / 100.0 * crit_multiplier
    }
}
