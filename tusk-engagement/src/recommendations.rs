//! Recommendation rules: engagement gaps → suggested follow-up actions.
//!
//! Same shape and guarantees as the insight table, but an independent
//! rule set with no shared state: declaration order, all-true-fire,
//! empty vec when nothing applies.

use tusk_core::{EngagementFactors, ScoreBreakdown};

struct RecommendationRule {
    predicate: fn(&EngagementFactors, &ScoreBreakdown, u32) -> bool,
    message: &'static str,
}

const RULES: &[RecommendationRule] = &[
    RecommendationRule {
        predicate: |_, _, total| total < 40,
        message: "Consider a personal follow-up to re-engage this visitor",
    },
    RecommendationRule {
        predicate: |f, _, _| f.rapid_bounce,
        message: "Revisit the opening pages; this visitor bounced early",
    },
    RecommendationRule {
        predicate: |f, _, total| total >= 60 && f.downloads == 0,
        message: "Send a downloadable version for offline review",
    },
    RecommendationRule {
        predicate: |f, _, total| total >= 40 && f.completion_ratio() < 0.5,
        message: "Share a shorter summary that front-loads the key pages",
    },
    RecommendationRule {
        predicate: |f, _, total| total >= 60 && !f.feedback_submitted,
        message: "Ask for feedback while interest is high",
    },
    RecommendationRule {
        predicate: |f, _, total| f.nda_accepted && total >= 80,
        message: "Prioritize this visitor for direct sales outreach",
    },
];

/// Evaluate all recommendation rules against a factor bundle and its
/// score. Empty vec when no rule fires; order is stable.
pub fn generate(
    factors: &EngagementFactors,
    breakdown: &ScoreBreakdown,
    total: u32,
) -> Vec<String> {
    RULES
        .iter()
        .filter(|rule| (rule.predicate)(factors, breakdown, total))
        .map(|rule| rule.message.to_string())
        .collect()
}
