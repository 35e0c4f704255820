use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Raw behavioral facts for one visitor session, assembled by the
/// session collector from the analytics store.
///
/// Every field defaults to zero/false, so a partially populated bundle
/// deserializes and scores without error. Percentages are 0–100;
/// out-of-range or non-finite values are clamped by the accessors, not
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct EngagementFactors {
    /// Total seconds spent viewing the document in the current session.
    pub view_duration_secs: u64,
    /// Average dwell time per page viewed, seconds.
    pub avg_time_per_page_secs: f64,
    /// Distinct sessions this visitor has had with this document/link.
    pub total_sessions: u32,
    /// Pages the visitor opened.
    pub pages_viewed: u32,
    /// Total pages in the document. 0 when unknown.
    pub total_pages: u32,
    /// Completion percentage, 0–100. May be pre-computed by the
    /// collector or derived via [`Self::derived_completion_rate`].
    pub completion_rate: f64,
    /// Average of per-page maximum scroll depth, 0–100.
    pub avg_scroll_depth: f64,
    /// Download actions taken across the session(s).
    pub downloads: u32,
    /// Print actions taken across the session(s).
    pub prints: u32,
    pub feedback_submitted: bool,
    pub nda_accepted: bool,
    /// True when `previous_visits` > 0.
    pub is_returning_visitor: bool,
    /// Prior visits, excluding the current one.
    pub previous_visits: u32,
    /// Collector flag: view duration below the "too fast to be genuine"
    /// threshold.
    pub rapid_bounce: bool,
    /// Collector flag: unusually high sustained interaction.
    pub deep_engagement: bool,
}

/// Clamp a 0–100 percentage into a [0, 1] ratio. Non-finite and
/// negative values map to 0.
fn pct_ratio(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    (value / 100.0).min(1.0)
}

impl EngagementFactors {
    /// Completion percentage derived from the page counts.
    /// 0 when the page total is unknown.
    pub fn derived_completion_rate(&self) -> f64 {
        if self.total_pages == 0 {
            return 0.0;
        }
        (self.pages_viewed.min(self.total_pages) as f64 / self.total_pages as f64) * 100.0
    }

    /// Completion rate as a [0, 1] ratio, clamped at the boundary.
    pub fn completion_ratio(&self) -> f64 {
        pct_ratio(self.completion_rate)
    }

    /// Average scroll depth as a [0, 1] ratio, clamped at the boundary.
    pub fn scroll_ratio(&self) -> f64 {
        pct_ratio(self.avg_scroll_depth)
    }

    /// Pages viewed over total pages, clamped to [0, 1].
    /// 0 when the page total is unknown.
    pub fn pages_ratio(&self) -> f64 {
        if self.total_pages == 0 {
            return 0.0;
        }
        (self.pages_viewed as f64 / self.total_pages as f64).min(1.0)
    }
}
