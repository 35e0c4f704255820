use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::level::EngagementLevel;

/// Per-category sub-scores.
///
/// Each part is clamped to its own cap after all additive adjustments
/// within the category: time 0–30, interaction 0–30, action 0–25,
/// loyalty 0–15. The caps sum to 100, so a fully clamped breakdown can
/// never push the total past the ceiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBreakdown {
    pub time: u32,
    pub interaction: u32,
    pub action: u32,
    pub loyalty: u32,
}

impl ScoreBreakdown {
    /// Sum of the four parts.
    pub fn sum(&self) -> u32 {
        self.time + self.interaction + self.action + self.loyalty
    }
}

/// Complete engagement score for one visitor session.
///
/// Transient value: computed on demand from an [`super::EngagementFactors`]
/// bundle, never persisted by the engine itself. Callers may store
/// `total` to feed later trend comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EngagementScore {
    /// Weighted total, 0–100.
    pub total: u32,
    pub breakdown: ScoreBreakdown,
    /// Derived solely from `total` via fixed thresholds.
    pub level: EngagementLevel,
    /// Observations, in rule-declaration order.
    pub insights: Vec<String>,
    /// Suggested follow-up actions, in rule-declaration order.
    pub recommendations: Vec<String>,
}
