//! Test that generates TypeScript bindings from Rust types via ts-rs.
//!
//! Run with: cargo test -p tusk-core export_bindings
//! Generated files appear in tusk-core/bindings/*.ts
//!
//! CI should run this and then `git diff --exit-code` to catch drift.

#[test]
fn export_bindings() {
    // ts-rs generates .ts files for every type with #[ts(export)].
    // This test ensures all exported types compile with their TS derive
    // and are importable from the crate root.
    use tusk_core::{
        EngagementFactors, EngagementLevel, EngagementScore, LeaderboardEntry, ScoreBreakdown,
        SessionSummary, Trend, TrendDirection,
    };

    let _ = std::any::type_name::<EngagementFactors>();
    let _ = std::any::type_name::<EngagementLevel>();
    let _ = std::any::type_name::<EngagementScore>();
    let _ = std::any::type_name::<ScoreBreakdown>();
    let _ = std::any::type_name::<Trend>();
    let _ = std::any::type_name::<TrendDirection>();
    let _ = std::any::type_name::<SessionSummary>();
    let _ = std::any::type_name::<LeaderboardEntry>();
}
