//! Core types for the combat-power engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// How contributions to an attribute are folded together during resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accumulation {
    /// Plain sum of sheet value, buff effects and hypothetical delta
    Additive,
    /// Multiplicative fold against the miss-complement (ignore-defense rule)
    MultiplicativeComplement,
}

/// Identifier for a numeric character attribute that buffs and deltas can target
///
/// Serialized names match the camelCase keys the companion UI persists, so
/// catalog files and saved deltas round-trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeId {
    MainAttributeBase,
    MainAttributePercent,
    MainAttributeExtra,
    SecondaryAttributeBase,
    SecondaryAttributePercent,
    SecondaryAttributeExtra,
    BaseAttack,
    AttackPercentage,
    DamagePercentage,
    FinalDamagePercentage,
    BossDamage,
    CriticalRate,
    CriticalDamage,
    IgnoreDefenseRate,
}

impl AttributeId {
    /// Get all attribute ids
    pub fn all() -> &'static [AttributeId] {
        &[
            AttributeId::MainAttributeBase,
            AttributeId::MainAttributePercent,
            AttributeId::MainAttributeExtra,
            AttributeId::SecondaryAttributeBase,
            AttributeId::SecondaryAttributePercent,
            AttributeId::SecondaryAttributeExtra,
            AttributeId::BaseAttack,
            AttributeId::AttackPercentage,
            AttributeId::DamagePercentage,
            AttributeId::FinalDamagePercentage,
            AttributeId::BossDamage,
            AttributeId::CriticalRate,
            AttributeId::CriticalDamage,
            AttributeId::IgnoreDefenseRate,
        ]
    }

    /// The accumulation rule for this attribute.
    ///
    /// Ignore-defense is the only attribute whose contributions do not add;
    /// it folds through the miss-complement instead.
    pub fn accumulation(&self) -> Accumulation {
        match self {
            AttributeId::IgnoreDefenseRate => Accumulation::MultiplicativeComplement,
            _ => Accumulation::Additive,
        }
    }

    /// Whether the attribute is expressed in percent
    pub fn is_percentage(&self) -> bool {
        matches!(
            self,
            AttributeId::MainAttributePercent
                | AttributeId::SecondaryAttributePercent
                | AttributeId::AttackPercentage
                | AttributeId::DamagePercentage
                | AttributeId::FinalDamagePercentage
                | AttributeId::BossDamage
                | AttributeId::CriticalRate
                | AttributeId::CriticalDamage
                | AttributeId::IgnoreDefenseRate
        )
    }

    /// Human-readable label, used by analysis summaries
    pub fn label(&self) -> &'static str {
        match self {
            AttributeId::MainAttributeBase => "main attribute",
            AttributeId::MainAttributePercent => "main attribute %",
            AttributeId::MainAttributeExtra => "extra main attribute",
            AttributeId::SecondaryAttributeBase => "secondary attribute",
            AttributeId::SecondaryAttributePercent => "secondary attribute %",
            AttributeId::SecondaryAttributeExtra => "extra secondary attribute",
            AttributeId::BaseAttack => "attack",
            AttributeId::AttackPercentage => "attack %",
            AttributeId::DamagePercentage => "damage %",
            AttributeId::FinalDamagePercentage => "final damage %",
            AttributeId::BossDamage => "boss damage %",
            AttributeId::CriticalRate => "critical rate %",
            AttributeId::CriticalDamage => "critical damage %",
            AttributeId::IgnoreDefenseRate => "ignore defense %",
        }
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw attribute category a character can pick as its main or secondary stat.
///
/// The choice is free (it does not have to match any class) and is purely a
/// labeling concern; the damage formula only sees the resolved main and
/// secondary totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryAttribute {
    #[default]
    Strength,
    Dexterity,
    Intelligence,
    Luck,
}
