//! Weighted additive scoring formula.
//!
//! ```text
//! total = min(time + interaction + action + loyalty, 100)
//! ```
//!
//! Caps: time 30, interaction 30, action 25, loyalty 15. Each sub-score
//! is clamped to its cap after all additive adjustments within the
//! category, so the parts always sum to at most 100.

use tusk_core::constants::TOTAL_CAP;
use tusk_core::{EngagementConfig, EngagementFactors, ScoreBreakdown};

use crate::factors;

/// Compute the four capped sub-scores for a factor bundle.
pub fn compute_breakdown(f: &EngagementFactors, config: &EngagementConfig) -> ScoreBreakdown {
    ScoreBreakdown {
        time: factors::time::calculate(f, config),
        interaction: factors::interaction::calculate(f),
        action: factors::action::calculate(f),
        loyalty: factors::loyalty::calculate(f),
    }
}

/// Total score: sum of the capped parts, clamped to [0, 100].
///
/// The caps sum to exactly 100, so the clamp is a guard rather than a
/// reachable branch.
pub fn total(breakdown: &ScoreBreakdown) -> u32 {
    breakdown.sum().min(TOTAL_CAP)
}
