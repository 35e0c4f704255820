use tusk_core::constants::ACTION_CAP;
use tusk_core::EngagementFactors;

/// Action sub-score: downloads, prints, NDA acceptance, and feedback,
/// clamped to [0, 25].
pub fn calculate(factors: &EngagementFactors) -> u32 {
    let downloads = match factors.downloads {
        d if d >= 3 => 10,
        2 => 7,
        1 => 5,
        _ => 0,
    };
    let prints = match factors.prints {
        p if p >= 2 => 5,
        1 => 3,
        _ => 0,
    };

    let mut points = downloads + prints;
    if factors.nda_accepted {
        points += 5;
    }
    if factors.feedback_submitted {
        points += 5;
    }

    points.min(ACTION_CAP)
}
