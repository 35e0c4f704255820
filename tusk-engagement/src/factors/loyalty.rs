use tusk_core::constants::LOYALTY_CAP;
use tusk_core::EngagementFactors;

/// Loyalty sub-score: returning-visitor flag, prior-visit history, and
/// session count, clamped to [0, 15].
pub fn calculate(factors: &EngagementFactors) -> u32 {
    let mut points = 0;

    if factors.is_returning_visitor {
        points += 5;
    }

    points += match factors.previous_visits {
        v if v >= 5 => 5,
        v if v >= 3 => 4,
        2 => 3,
        1 => 2,
        _ => 0,
    };

    points += match factors.total_sessions {
        s if s >= 5 => 5,
        s if s >= 3 => 4,
        2 => 3,
        1 => 1,
        _ => 0,
    };

    points.min(LOYALTY_CAP)
}
