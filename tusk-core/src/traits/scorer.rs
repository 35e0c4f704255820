use crate::engagement::{EngagementFactors, EngagementScore};
use crate::errors::TuskResult;

/// Engagement scoring behind a trait so hosts can swap implementations
/// (e.g., a recorded-score replay in tests).
pub trait IEngagementScorer: Send + Sync {
    /// Score one visitor session's factor bundle.
    fn score(&self, factors: &EngagementFactors) -> TuskResult<EngagementScore>;
}
