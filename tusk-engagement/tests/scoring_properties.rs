//! Property tests for the scoring engine: boundedness, breakdown
//! consistency, monotonicity, and purity over arbitrary factor bundles.

use proptest::prelude::*;

use tusk_core::constants::{ACTION_CAP, INTERACTION_CAP, LOYALTY_CAP, TIME_CAP};
use tusk_core::{EngagementFactors, EngagementLevel};
use tusk_engagement::EngagementEngine;

fn arb_factors() -> impl Strategy<Value = EngagementFactors> {
    (
        (
            0u64..100_000,       // view_duration_secs
            -10.0f64..500.0,     // avg_time_per_page_secs (incl. invalid negatives)
            0u32..50,            // total_sessions
            0u32..500,           // pages_viewed
            0u32..200,           // total_pages
        ),
        (
            -50.0f64..200.0,     // completion_rate (beyond the 0–100 domain)
            -50.0f64..200.0,     // avg_scroll_depth
            0u32..20,            // downloads
            0u32..20,            // prints
            0u32..50,            // previous_visits
        ),
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()),
    )
        .prop_map(
            |(
                (view_duration_secs, avg_time_per_page_secs, total_sessions, pages_viewed, total_pages),
                (completion_rate, avg_scroll_depth, downloads, prints, previous_visits),
                (feedback_submitted, nda_accepted, is_returning_visitor, rapid_bounce, deep_engagement),
            )| EngagementFactors {
                view_duration_secs,
                avg_time_per_page_secs,
                total_sessions,
                pages_viewed,
                total_pages,
                completion_rate,
                avg_scroll_depth,
                downloads,
                prints,
                feedback_submitted,
                nda_accepted,
                is_returning_visitor,
                previous_visits,
                rapid_bounce,
                deep_engagement,
            },
        )
}

proptest! {
    // ── Boundedness ──────────────────────────────────────────────────────

    #[test]
    fn total_bounded_zero_to_one_hundred(factors in arb_factors()) {
        let engine = EngagementEngine::new();
        let score = engine.calculate(&factors);
        prop_assert!(score.total <= 100);
    }

    #[test]
    fn sub_scores_respect_their_caps(factors in arb_factors()) {
        let engine = EngagementEngine::new();
        let b = engine.calculate(&factors).breakdown;
        prop_assert!(b.time <= TIME_CAP);
        prop_assert!(b.interaction <= INTERACTION_CAP);
        prop_assert!(b.action <= ACTION_CAP);
        prop_assert!(b.loyalty <= LOYALTY_CAP);
    }

    // ── Breakdown sum ────────────────────────────────────────────────────

    #[test]
    fn breakdown_parts_sum_to_total(factors in arb_factors()) {
        let engine = EngagementEngine::new();
        let score = engine.calculate(&factors);
        // Caps sum to exactly 100, so the ceiling clamp never separates
        // the total from the parts.
        prop_assert_eq!(score.breakdown.sum(), score.total);
    }

    // ── Monotonicity ─────────────────────────────────────────────────────

    #[test]
    fn longer_viewing_never_lowers_the_time_score(
        factors in arb_factors(),
        extra in 0u64..10_000,
    ) {
        let engine = EngagementEngine::new();
        let longer = EngagementFactors {
            view_duration_secs: factors.view_duration_secs + extra,
            ..factors.clone()
        };
        prop_assert!(
            engine.calculate(&longer).breakdown.time
                >= engine.calculate(&factors).breakdown.time
        );
    }

    #[test]
    fn more_downloads_never_lower_the_action_score(
        factors in arb_factors(),
        extra in 0u32..10,
    ) {
        let engine = EngagementEngine::new();
        let more = EngagementFactors {
            downloads: factors.downloads + extra,
            ..factors.clone()
        };
        prop_assert!(
            engine.calculate(&more).breakdown.action
                >= engine.calculate(&factors).breakdown.action
        );
    }

    #[test]
    fn more_previous_visits_never_lower_the_loyalty_score(
        factors in arb_factors(),
        extra in 0u32..10,
    ) {
        let engine = EngagementEngine::new();
        let more = EngagementFactors {
            previous_visits: factors.previous_visits + extra,
            ..factors.clone()
        };
        prop_assert!(
            engine.calculate(&more).breakdown.loyalty
                >= engine.calculate(&factors).breakdown.loyalty
        );
    }

    // ── Purity & level consistency ───────────────────────────────────────

    #[test]
    fn scoring_is_idempotent(factors in arb_factors()) {
        let engine = EngagementEngine::new();
        prop_assert_eq!(engine.calculate(&factors), engine.calculate(&factors));
    }

    #[test]
    fn level_always_matches_classify_of_total(factors in arb_factors()) {
        let engine = EngagementEngine::new();
        let score = engine.calculate(&factors);
        prop_assert_eq!(score.level, EngagementLevel::classify(score.total));
    }
}
