use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::engagement::EngagementScore;

/// One ranked row of a document/link leaderboard. Display value only;
/// never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LeaderboardEntry {
    pub visitor_id: String,
    pub email: Option<String>,
    /// Distinct sessions this visitor has had.
    pub visits: u32,
    /// Total viewing time across sessions, seconds.
    pub total_duration_secs: u64,
    pub pages_viewed: u32,
    pub last_visit: DateTime<Utc>,
    pub score: EngagementScore,
}
