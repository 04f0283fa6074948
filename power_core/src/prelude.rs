//! Prelude module for convenient imports
//!
//! ```rust
//! use power_core::prelude::*;
//! ```

// Core types
pub use crate::character::{AttributeDelta, Character};
pub use crate::types::{Accumulation, AttributeId, PrimaryAttribute};

// Buffs
pub use crate::buff::{Buff, BuffCatalog, BuffCategory, BuffEffect};

// Resolution
pub use crate::resolve::{accumulate_buffs, resolve, ResolvedAttributes};

// Evaluation
pub use crate::power::{
    combat_power_enhanced, combat_power_enhanced_vs, combat_power_simple, DEFAULT_BOSS_DEFENSE,
};

// Analysis
pub use crate::analysis::{
    analyze_growth, compare_attributes, compare_equipment, AttributeComparison,
    EquipmentComparison, GrowthCurve, GrowthKind, GrowthRecommendation, Verdict,
};

// Config
pub use crate::config::builtin_catalog;
