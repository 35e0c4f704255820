use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::engagement::EngagementFactors;

/// Pre-grouped per-visitor rollup supplied by the analytics store.
///
/// Grouping (by fingerprint or email) is the collector's responsibility;
/// the leaderboard aggregator assumes one summary per distinct visitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSummary {
    /// Visitor fingerprint, or email when identity is known.
    pub visitor_id: String,
    /// Email, when the visitor identified themselves.
    pub email: Option<String>,
    /// Aggregated behavioral facts across this visitor's sessions.
    pub factors: EngagementFactors,
    /// Timestamp of the visitor's most recent visit.
    pub last_visit: DateTime<Utc>,
}
