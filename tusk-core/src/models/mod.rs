pub mod leaderboard_entry;
pub mod session_summary;

pub use leaderboard_entry::LeaderboardEntry;
pub use session_summary::SessionSummary;
