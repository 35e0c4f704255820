//! # tusk-core
//!
//! Foundation crate for the Tusk engagement engine.
//! Defines domain types, errors, config, constants, and traits.
//! The engine crate and any host bindings depend on this.

pub mod config;
pub mod constants;
pub mod engagement;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EngagementConfig;
pub use engagement::{
    EngagementFactors, EngagementLevel, EngagementScore, ScoreBreakdown, Trend, TrendDirection,
};
pub use errors::{TuskError, TuskResult};
pub use models::{LeaderboardEntry, SessionSummary};
pub use traits::IEngagementScorer;
