//! EngagementEngine: factors → breakdown → level → insights/recommendations.

use tracing::debug;

use tusk_core::traits::IEngagementScorer;
use tusk_core::{
    EngagementConfig, EngagementFactors, EngagementLevel, EngagementScore, LeaderboardEntry,
    SessionSummary, Trend, TuskResult,
};

use crate::{formula, insights, leaderboard, recommendations, trend};

/// Engagement scoring engine.
///
/// Pure and stateless beyond its config: the same factor bundle always
/// produces the same score, and concurrent callers share nothing.
pub struct EngagementEngine {
    config: EngagementConfig,
}

impl EngagementEngine {
    /// Create an engine with the default config.
    pub fn new() -> Self {
        Self {
            config: EngagementConfig::default(),
        }
    }

    /// Create an engine with a custom config.
    pub fn with_config(config: EngagementConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngagementConfig {
        &self.config
    }

    /// Score one visitor session.
    ///
    /// Total over its input domain: out-of-range values are clamped at
    /// the point of use, never rejected.
    pub fn calculate(&self, factors: &EngagementFactors) -> EngagementScore {
        let breakdown = formula::compute_breakdown(factors, &self.config);
        let total = formula::total(&breakdown);
        let level = EngagementLevel::classify(total);
        let insights = insights::generate(factors, &breakdown, total);
        let recommendations = recommendations::generate(factors, &breakdown, total);

        debug!(total, ?level, "scored session");

        EngagementScore {
            total,
            breakdown,
            level,
            insights,
            recommendations,
        }
    }

    /// Score a batch of factor bundles.
    pub fn calculate_batch(&self, bundles: &[EngagementFactors]) -> Vec<EngagementScore> {
        bundles.iter().map(|f| self.calculate(f)).collect()
    }

    /// Compare a current total against an optional prior total.
    pub fn calculate_trend(&self, current: u32, previous: Option<u32>) -> Trend {
        trend::calculate(current, previous)
    }

    /// Build a ranked leaderboard from pre-grouped visitor summaries.
    ///
    /// `limit = None` uses the config's default leaderboard size.
    pub fn build_leaderboard(
        &self,
        sessions: &[SessionSummary],
        limit: Option<usize>,
    ) -> Vec<LeaderboardEntry> {
        let limit = limit.unwrap_or(self.config.default_leaderboard_limit);
        leaderboard::build(self, sessions, limit)
    }
}

impl Default for EngagementEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IEngagementScorer for EngagementEngine {
    fn score(&self, factors: &EngagementFactors) -> TuskResult<EngagementScore> {
        Ok(self.calculate(factors))
    }
}
