//! Error types for the Tusk engagement engine.
//!
//! Scoring itself is total over its input domain and never fails —
//! out-of-range values are clamped at the point of use. These variants
//! cover the fallible outer surfaces: config parsing/validation and
//! `IEngagementScorer` implementations backed by something that can fail.

/// Unified result alias used across the workspace.
pub type TuskResult<T> = Result<T, TuskError>;

/// Errors surfaced by the engagement engine's outer surfaces.
#[derive(Debug, thiserror::Error)]
pub enum TuskError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("invalid factors: {reason}")]
    InvalidFactors { reason: String },
}
