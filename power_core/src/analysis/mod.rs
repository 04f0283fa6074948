//! Comparative analyses built on top of the enhanced evaluator

pub mod equipment;
pub mod growth;
pub mod marginal;

pub use equipment::{compare_equipment, EquipmentComparison, Verdict};
pub use growth::{
    analyze_growth, GrowthAnalysis, GrowthCurve, GrowthKind, GrowthPoint, GrowthRecommendation,
};
pub use marginal::{compare_attributes, AttributeComparison, IGNORE_DEFENSE_UNIT};

use crate::types::AttributeId;
use thiserror::Error;

/// An analysis request rejected before any computation ran
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("cannot compare attribute '{0}' with itself")]
    SameAttribute(AttributeId),
}
