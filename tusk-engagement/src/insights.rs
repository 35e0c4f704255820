//! Insight rules: an ordered table of predicate → message pairs.
//!
//! Every rule whose predicate holds contributes its message, in
//! declaration order. Rules are independent; none suppresses or
//! reorders another's output. Adding or removing an insight is a data
//! change here, not a control-flow change.

use tusk_core::{EngagementFactors, ScoreBreakdown};

/// A single insight rule.
struct InsightRule {
    predicate: fn(&EngagementFactors, &ScoreBreakdown, u32) -> bool,
    message: &'static str,
}

const RULES: &[InsightRule] = &[
    InsightRule {
        predicate: |f, _, _| f.view_duration_secs >= 600 && f.completion_ratio() >= 0.9,
        message: "Read through the entire document in a long session",
    },
    InsightRule {
        predicate: |f, _, _| f.view_duration_secs < 60 && f.completion_ratio() < 0.3,
        message: "Short visit with low completion; may not have engaged with the full content",
    },
    InsightRule {
        predicate: |f, _, _| (f.downloads > 0 || f.prints > 0) && f.completion_ratio() < 1.0,
        message: "Saved a copy before finishing; likely reading offline",
    },
    InsightRule {
        predicate: |f, _, _| f.is_returning_visitor && f.total_sessions >= 2,
        message: "Returning visitor with multiple sessions; shows sustained interest",
    },
    InsightRule {
        predicate: |f, _, _| f.nda_accepted,
        message: "Accepted the NDA, signaling serious intent",
    },
    InsightRule {
        predicate: |f, _, _| f.feedback_submitted,
        message: "Left feedback on the document",
    },
    InsightRule {
        predicate: |f, _, _| f.rapid_bounce,
        message: "Bounced within seconds of opening the document",
    },
    InsightRule {
        predicate: |f, _, _| f.deep_engagement,
        message: "Unusually deep, sustained interaction with the content",
    },
    InsightRule {
        predicate: |f, _, _| f.scroll_ratio() >= 0.9,
        message: "Scrolled nearly every page to the bottom",
    },
];

/// Evaluate all insight rules against a factor bundle and its score.
///
/// Never returns an error; an empty vec means no rule fired. Order is
/// stable across calls with identical input.
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
