/// Engagement engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cap for the time sub-score (view duration + per-page dwell).
pub const TIME_CAP: u32 = 30;

/// Cap for the interaction sub-score (completion + scroll + page coverage).
pub const INTERACTION_CAP: u32 = 30;

/// Cap for the action sub-score (downloads, prints, NDA, feedback).
pub const ACTION_CAP: u32 = 25;

/// Cap for the loyalty sub-score (return visits, session history).
pub const LOYALTY_CAP: u32 = 15;

/// Overall score ceiling. The four sub-score caps sum to exactly this.
pub const TOTAL_CAP: u32 = 100;

/// Inclusive lower bound for the Excellent level.
pub const LEVEL_EXCELLENT_MIN: u32 = 80;

/// Inclusive lower bound for the Good level.
pub const LEVEL_GOOD_MIN: u32 = 60;

/// Inclusive lower bound for the Average level.
pub const LEVEL_AVERAGE_MIN: u32 = 40;

/// Inclusive lower bound for the Low level. Anything below is Poor.
pub const LEVEL_LOW_MIN: u32 = 20;
