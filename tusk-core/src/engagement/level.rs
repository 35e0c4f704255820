use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{LEVEL_AVERAGE_MIN, LEVEL_EXCELLENT_MIN, LEVEL_GOOD_MIN, LEVEL_LOW_MIN};

/// Five-level engagement taxonomy.
///
/// Variants are declared worst to best so the derived `Ord` matches the
/// quality ordering: `Poor < Low < Average < Good < Excellent`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum EngagementLevel {
    Poor,
    Low,
    Average,
    Good,
    Excellent,
}

impl EngagementLevel {
    /// Classify a total score. Thresholds are inclusive lower bounds,
    /// checked high to low.
    pub fn classify(total: u32) -> Self {
        if total >= LEVEL_EXCELLENT_MIN {
            Self::Excellent
        } else if total >= LEVEL_GOOD_MIN {
            Self::Good
        } else if total >= LEVEL_AVERAGE_MIN {
            Self::Average
        } else if total >= LEVEL_LOW_MIN {
            Self::Low
        } else {
            Self::Poor
        }
    }

    /// Display label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Engagement",
            Self::Good => "Good Engagement",
            Self::Average => "Average Engagement",
            Self::Low => "Low Engagement",
            Self::Poor => "Poor Engagement",
        }
    }

    /// Icon key consumed by the frontend icon set.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Excellent => "award",
            Self::Good => "trending-up",
            Self::Average => "minus",
            Self::Low => "trending-down",
            Self::Poor => "alert-circle",
        }
    }

    /// Theme color key consumed by the frontend.
    pub fn color(self) -> &'static str {
        match self {
            Self::Excellent => "green",
            Self::Good => "blue",
            Self::Average => "yellow",
            Self::Low => "orange",
            Self::Poor => "red",
        }
    }
}

impl fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
