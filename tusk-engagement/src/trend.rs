//! Two-point trend comparison.

use tusk_core::{Trend, TrendDirection};

/// Compare a current total against an optional prior total.
///
/// Without a baseline the trend is Stable with delta 0. Otherwise
/// `delta = current − previous` and the sign decides the direction.
pub fn calculate(current: u32, previous: Option<u32>) -> Trend {
    let Some(previous) = previous else {
        return Trend {
            direction: TrendDirection::Stable,
            delta: 0,
        };
    };

    let delta = i64::from(current) - i64::from(previous);
    let direction = match delta {
        d if d > 0 => TrendDirection::Improving,
        d if d < 0 => TrendDirection::Declining,
        _ => TrendDirection::Stable,
    };

    Trend { direction, delta }
}
