//! power_core - Core combat-power valuation library for character sheets
//!
//! This library provides:
//! - Character / AttributeDelta: Saved sheet values and hypothetical changes
//! - BuffCatalog: Named buffs whose effects target attributes
//! - Resolution: Accumulating sheet, buffs and delta into effective attributes
//! - Evaluation: The simple and enhanced combat-power formulas
//! - Analysis: Marginal value, equipment swaps and growth projections

pub mod analysis;
pub mod buff;
pub mod character;
pub mod config;
pub mod power;
pub mod prelude;
pub mod resolve;
pub mod types;

// Re-export core types for convenience
pub use analysis::{
    analyze_growth, compare_attributes, compare_equipment, AnalysisError, AttributeComparison,
    EquipmentComparison, GrowthAnalysis, GrowthCurve, GrowthKind, GrowthPoint,
    GrowthRecommendation, Verdict,
};
pub use buff::{Buff, BuffCatalog, BuffCategory, BuffEffect};
pub use character::{AttributeDelta, Character};
pub use config::builtin_catalog;
pub use power::{
    combat_power_enhanced, combat_power_enhanced_vs, combat_power_simple, DEFAULT_BOSS_DEFENSE,
};
pub use resolve::{accumulate_buffs, resolve, resolve_with_totals, BuffTotals, ResolvedAttributes};
pub use types::{Accumulation, AttributeId, PrimaryAttribute};
