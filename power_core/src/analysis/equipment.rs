//! Equipment-swap analysis - net and per-attribute combat-power impact

use crate::buff::BuffCatalog;
use crate::character::{AttributeDelta, Character};
use crate::power::combat_power_enhanced;
use crate::resolve::{accumulate_buffs, resolve_with_totals};
use crate::types::AttributeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Categorical outcome of an equipment swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Improve,
    Neutral,
    Worsen,
}

/// Result of evaluating a multi-attribute equipment change
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentComparison {
    /// Combat power with the current gear
    pub base_power: f64,
    /// Combat power with the swap applied
    pub new_power: f64,
    /// Raw combat-power difference (`new_power - base_power`)
    pub net_change: f64,
    /// Marginal impact of each changed attribute taken alone.
    ///
    /// The damage formula has cross-terms (attack times main stat, the
    /// defense scaling), so these do NOT sum to `net_change`. That is a
    /// property of the model, not an error to correct.
    pub per_attribute_impact: BTreeMap<AttributeId, f64>,
    pub verdict: Verdict,
}

impl EquipmentComparison {
    /// Relative change in per-mille, the display unit the comparison panel
    /// uses. Zero when there is no baseline to compare against.
    pub fn relative_change_per_mille(&self) -> f64 {
        if self.base_power > 0.0 {
            1000.0 * (self.new_power - self.base_power) / self.base_power
        } else {
            0.0
        }
    }
}

/// Evaluate an equipment swap expressed as an attribute delta.
///
/// Total function: any delta against any character produces a comparison,
/// even a nonsensical one.
pub fn compare_equipment(
    character: &Character,
    catalog: &BuffCatalog,
    active: &[&str],
    delta: &AttributeDelta,
) -> EquipmentComparison {
    let buffs = accumulate_buffs(catalog, active);

    let base_power = combat_power_enhanced(&resolve_with_totals(character, &buffs, None));
    let new_power = combat_power_enhanced(&resolve_with_totals(character, &buffs, Some(delta)));
    let net_change = new_power - base_power;

    let mut per_attribute_impact = BTreeMap::new();
    for (attribute, value) in delta.iter() {
        if value == 0.0 {
            continue;
        }
        let single = AttributeDelta::new().with(attribute, value);
        let power = combat_power_enhanced(&resolve_with_totals(character, &buffs, Some(&single)));
        per_attribute_impact.insert(attribute, power - base_power);
    }

    let verdict = if net_change > 0.0 {
        Verdict::Improve
    } else if net_change < 0.0 {
        Verdict::Worsen
    } else {
        Verdict::Neutral
    };

    EquipmentComparison {
        base_power,
        new_power,
        net_change,
        per_attribute_impact,
        verdict,
    }
}
