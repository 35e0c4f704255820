use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Direction of change between two totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

/// Strict two-point comparison of a current total against a prior one.
/// No smoothing, no history window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Trend {
    pub direction: TrendDirection,
    /// `current − previous`; 0 when no baseline exists.
    pub delta: i64,
}
