use tusk_core::constants::INTERACTION_CAP;
use tusk_core::EngagementFactors;

/// Interaction sub-score: completion, scroll depth, and page coverage,
/// each floor-scaled into its point range, clamped to [0, 30].
///
/// All three terms degrade to 0 when the page total is unknown or the
/// percentages are absent — never an error.
pub fn calculate(factors: &EngagementFactors) -> u32 {
    let completion = (factors.completion_ratio() * 15.0).floor() as u32;
    let scroll = (factors.scroll_ratio() * 10.0).floor() as u32;
    let pages = (factors.pages_ratio() * 5.0).floor() as u32;

    (completion + scroll + pages).min(INTERACTION_CAP)
}
