//! Default values for the scoring configuration.

/// Points subtracted from the time sub-score on a rapid bounce.
pub const DEFAULT_RAPID_BOUNCE_PENALTY: u32 = 5;

/// Points added to the time sub-score on deep engagement.
pub const DEFAULT_DEEP_ENGAGEMENT_BONUS: u32 = 5;

/// Leaderboard size when the caller does not pass a limit.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;
