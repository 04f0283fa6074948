//! Growth-curve projection - diminishing-returns trend model
//!
//! A deliberately simplified projection used for trend charts: each attribute
//! family gets a flat growth increment and a closed-form power multiplier.
//! It does not agree with the full evaluator and must never be read as
//! authoritative combat power.

use serde::{Deserialize, Serialize};

/// Number of increments a projection runs through by default
pub const DEFAULT_GROWTH_STEPS: u32 = 20;

/// First point whose efficiency fell below this fraction of the efficiency
/// two steps earlier is flagged as the falloff point
const FALLOFF_RATIO: f64 = 0.7;

/// Attribute family a growth projection runs over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthKind {
    MainStat,
    Attack,
    BossDamage,
    CritDamage,
    AllStat,
}

impl GrowthKind {
    /// Percentage-valued families grow by flat points and are charted per
    /// single point instead of per 5-point batch
    pub fn is_percentage(&self) -> bool {
        matches!(
            self,
            GrowthKind::BossDamage | GrowthKind::CritDamage | GrowthKind::AllStat
        )
    }

    /// Value gained per step: 5% of the starting value for main stat, 3% for
    /// attack, a flat 2 points for percentage families
    fn increment(&self, start_value: f64) -> f64 {
        match self {
            GrowthKind::MainStat => (start_value * 0.05).floor(),
            GrowthKind::Attack => (start_value * 0.03).floor(),
            _ => 2.0,
        }
    }

    /// Simplified power multiplier at a given value
    fn multiplier(&self, value: f64, start_value: f64) -> f64 {
        match self {
            GrowthKind::MainStat => 1.0 + value / (start_value * 5.0),
            GrowthKind::Attack => 1.0 + value / (start_value * 4.0),
            _ => 1.0 + value / 100.0,
        }
    }

    fn efficiency_divisor(&self) -> f64 {
        if self.is_percentage() {
            1.0
        } else {
            5.0
        }
    }
}

/// One sampled point on a growth projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub step: u32,
    /// Attribute value at this step
    pub value: f64,
    /// Projected combat power (simplified model, floored)
    pub combat_power: f64,
    /// Power gained since the previous step
    pub marginal_gain: f64,
    /// Gain normalized by the family's investment unit
    pub marginal_efficiency: f64,
}

/// Lazy projection of one attribute through successive increments.
///
/// Finite (`steps + 1` points including the baseline) and restartable: every
/// construction recomputes from scratch, no state is shared between runs.
#[derive(Debug, Clone)]
pub struct GrowthCurve {
    kind: GrowthKind,
    start_value: f64,
    base_power: f64,
    steps: u32,
    step: u32,
    value: f64,
    previous_power: f64,
}

impl GrowthCurve {
    /// Project `start_value` through the default 20 increments
    pub fn new(start_value: f64, kind: GrowthKind, base_power: f64) -> Self {
        GrowthCurve {
            kind,
            start_value,
            base_power,
            steps: DEFAULT_GROWTH_STEPS,
            step: 0,
            value: start_value,
            previous_power: base_power,
        }
    }

    /// Override the number of increments, builder style
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }
}

impl Iterator for GrowthCurve {
    type Item = GrowthPoint;

    fn next(&mut self) -> Option<GrowthPoint> {
        if self.step > self.steps {
            return None;
        }

        let point = if self.step == 0 {
            GrowthPoint {
                step: 0,
                value: self.start_value,
                combat_power: self.base_power,
                marginal_gain: 0.0,
                marginal_efficiency: 0.0,
            }
        } else {
            self.value += self.kind.increment(self.start_value);
            let power = (self.base_power * self.kind.multiplier(self.value, self.start_value)).floor();
            let gain = power - self.previous_power;
            GrowthPoint {
                step: self.step,
                value: self.value,
                combat_power: power,
                marginal_gain: gain,
                marginal_efficiency: gain / self.kind.efficiency_divisor(),
            }
        };

        self.previous_power = point.combat_power;
        self.step += 1;
        Some(point)
    }
}

/// Trend analysis over a completed projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthAnalysis {
    /// Point with the highest marginal efficiency
    pub peak: GrowthPoint,
    /// First point (from step 2 on) whose efficiency dropped below 70% of
    /// the efficiency two steps earlier, if the projection has one
    pub falloff: Option<GrowthPoint>,
}

/// Investment advice derived from where the projection stands relative to
/// its peak and falloff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthRecommendation {
    /// No falloff detected; keep investing in this attribute
    KeepInvesting,
    /// Past the peak but the falloff lies ahead; plan to diversify
    DiversifySoon,
    /// Efficiency already collapsed; invest elsewhere first
    SwitchFocus,
}

impl GrowthAnalysis {
    pub fn recommendation(&self) -> GrowthRecommendation {
        match self.falloff {
            None => GrowthRecommendation::KeepInvesting,
            Some(falloff) if self.peak.step < falloff.step => {
                GrowthRecommendation::DiversifySoon
            }
            Some(_) => GrowthRecommendation::SwitchFocus,
        }
    }
}

/// Scan a projection for its efficiency peak and falloff point.
/// Returns `None` for an empty projection.
pub fn analyze_growth(points: &[GrowthPoint]) -> Option<GrowthAnalysis> {
    let mut peak = *points.first()?;
    let mut falloff = None;

    for i in 1..points.len() {
        if points[i].marginal_efficiency > peak.marginal_efficiency {
            peak = points[i];
        }
        if i > 1
            && falloff.is_none()
            && points[i].marginal_efficiency < points[i - 2].marginal_efficiency * FALLOFF_RATIO
        {
            falloff = Some(points[i]);
        }
    }

    Some(GrowthAnalysis { peak, falloff })
}
