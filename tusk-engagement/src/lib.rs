//! # tusk-engagement
//!
//! Engagement scoring engine for document view sessions: four-factor
//! weighted scoring, level classification, insight and recommendation
//! generation, trend comparison, and leaderboard ranking.
//!
//! Everything here is pure and synchronous. The engine holds no state
//! beyond its config and performs no I/O; concurrent callers need no
//! coordination.

pub mod engine;
pub mod factors;
pub mod formula;
pub mod insights;
pub mod leaderboard;
pub mod recommendations;
pub mod trend;

pub use engine::EngagementEngine;
