//! Character - the immutable input record for an evaluation call

use crate::types::{AttributeId, PrimaryAttribute};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A saved character sheet.
///
/// The external form layer owns creation, editing and range validation; the
/// engine treats this as an immutable input per call. Every numeric field
/// defaults to 0 when absent in persisted data, so the core never has to
/// handle a missing value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    /// Opaque identifier assigned by the persistence layer
    pub id: String,
    /// Display name (unique by id, not by name)
    pub name: String,
    /// Display tier only; never enters the damage formula
    pub level: u32,
    /// Which raw category counts as the main stat
    pub main_attribute: PrimaryAttribute,
    /// Which raw category counts as the secondary stat
    pub secondary_attribute: PrimaryAttribute,
    /// Gear scalar for the sheet-score formula; a zero value is treated as 1
    /// there (sheets saved before the field existed)
    pub weapon_coefficient: f64,
    pub main_attribute_base: f64,
    pub main_attribute_percent: f64,
    pub main_attribute_extra: f64,
    pub secondary_attribute_base: f64,
    pub secondary_attribute_percent: f64,
    pub secondary_attribute_extra: f64,
    pub base_attack: f64,
    pub attack_percentage: f64,
    /// Flat attack added after the percentage scaling. Buffs and deltas never
    /// touch this field; only the sheet value counts.
    pub additional_attack: f64,
    pub damage_percentage: f64,
    pub final_damage_percentage: f64,
    pub boss_damage: f64,
    pub critical_rate: f64,
    pub critical_damage: f64,
    pub ignore_defense_rate: f64,
}

impl Character {
    /// Deserialize a character record handed over from the key-value store.
    ///
    /// Missing numeric fields come back as 0, which is the defaulting
    /// boundary the rest of the engine relies on.
    pub fn from_json(content: &str) -> Result<Character, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Sheet value of a delta-targetable attribute
    pub fn attribute(&self, id: AttributeId) -> f64 {
        match id {
            AttributeId::MainAttributeBase => self.main_attribute_base,
            AttributeId::MainAttributePercent => self.main_attribute_percent,
            AttributeId::MainAttributeExtra => self.main_attribute_extra,
            AttributeId::SecondaryAttributeBase => self.secondary_attribute_base,
            AttributeId::SecondaryAttributePercent => self.secondary_attribute_percent,
            AttributeId::SecondaryAttributeExtra => self.secondary_attribute_extra,
            AttributeId::BaseAttack => self.base_attack,
            AttributeId::AttackPercentage => self.attack_percentage,
            AttributeId::DamagePercentage => self.damage_percentage,
            AttributeId::FinalDamagePercentage => self.final_damage_percentage,
            AttributeId::BossDamage => self.boss_damage,
            AttributeId::CriticalRate => self.critical_rate,
            AttributeId::CriticalDamage => self.critical_damage,
            AttributeId::IgnoreDefenseRate => self.ignore_defense_rate,
        }
    }
}

/// A hypothetical adjustment applied on top of a character's sheet.
///
/// Partial by design: attributes not present count as 0. Used to model
/// "what if this stat were different" questions and equipment swaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeDelta(BTreeMap<AttributeId, f64>);

impl AttributeDelta {
    /// Create an empty delta
    pub fn new() -> Self {
        AttributeDelta::default()
    }

    /// Add an adjustment, builder style
    pub fn with(mut self, id: AttributeId, value: f64) -> Self {
        self.set(id, value);
        self
    }

    /// Set the adjustment for an attribute
    pub fn set(&mut self, id: AttributeId, value: f64) {
        self.0.insert(id, value);
    }

    /// Adjustment for an attribute, 0 when absent
    pub fn get(&self, id: AttributeId) -> f64 {
        self.0.get(&id).copied().unwrap_or(0.0)
    }

    /// Iterate over the adjustments in attribute order
    pub fn iter(&self) -> impl Iterator<Item = (AttributeId, f64)> + '_ {
        self.0.iter().map(|(id, value)| (*id, *value))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
