//! Leaderboard aggregation: score each visitor summary, rank, truncate.

use tracing::debug;

use tusk_core::{LeaderboardEntry, SessionSummary};

use crate::engine::EngagementEngine;

/// Build a ranked leaderboard from pre-grouped visitor summaries.
///
/// Each summary is scored once, then entries are sorted by total
/// descending with deterministic tie-breaks: more sessions first, then
/// more recent last visit, then visitor id ascending. Truncated to
/// `limit`.
pub fn build(
    engine: &EngagementEngine,
    sessions: &[SessionSummary],
    limit: usize,
) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = sessions
        .iter()
        .map(|s| LeaderboardEntry {
            visitor_id: s.visitor_id.clone(),
            email: s.email.clone(),
            visits: s.factors.total_sessions,
            total_duration_secs: s.factors.view_duration_secs,
            pages_viewed: s.factors.pages_viewed,
            last_visit: s.last_visit,
            score: engine.calculate(&s.factors),
        })
        .collect();

    entries.sort_by(|a, b| {
        b.score
            .total
            .cmp(&a.score.total)
            .then_with(|| b.visits.cmp(&a.visits))
            .then_with(|| b.last_visit.cmp(&a.last_visit))
            .then_with(|| a.visitor_id.cmp(&b.visitor_id))
    });
    entries.truncate(limit);

    debug!(entries = entries.len(), limit, "built leaderboard");

    entries
}
