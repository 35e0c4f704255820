use tusk_core::constants::TIME_CAP;
use tusk_core::{EngagementConfig, EngagementFactors};

/// View duration tier points (cap 15).
///
/// Any session earns the 1-point floor; real reading time climbs the
/// tiers up to 10 minutes.
fn duration_points(secs: u64) -> u32 {
    match secs {
        s if s >= 600 => 15,
        s if s >= 300 => 12,
        s if s >= 180 => 9,
        s if s >= 60 => 6,
        s if s >= 30 => 3,
        _ => 1,
    }
}

/// Average per-page dwell tier points (cap 10).
///
/// A session with no per-page dwell at all earns nothing here; any
/// positive dwell earns at least the 1-point floor.
fn per_page_points(secs: f64) -> u32 {
    if !secs.is_finite() || secs <= 0.0 {
        return 0;
    }
    if secs >= 60.0 {
        10
    } else if secs >= 30.0 {
        7
    } else if secs >= 15.0 {
        4
    } else {
        1
    }
}

/// Time sub-score: duration tier + per-page tier, then the bounce
/// penalty (floored at 0) and deep-engagement bonus, clamped to [0, 30].
pub fn calculate(factors: &EngagementFactors, config: &EngagementConfig) -> u32 {
    let mut points =
        duration_points(factors.view_duration_secs) + per_page_points(factors.avg_time_per_page_secs);

    if factors.rapid_bounce {
        points = points.saturating_sub(config.rapid_bounce_penalty);
    }
    if factors.deep_engagement {
        points += config.deep_engagement_bonus;
    }

    points.min(TIME_CAP)
}
