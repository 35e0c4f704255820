use serde::{Deserialize, Serialize};

use crate::constants::TIME_CAP;
use crate::errors::{TuskError, TuskResult};

use super::defaults;

/// Engagement scoring configuration.
///
/// Sub-score caps and level thresholds are contract constants and not
/// configurable; only the collector-flag adjustments and the default
/// leaderboard size are tunable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementConfig {
    /// Points subtracted from the time sub-score when the collector
    /// flags a rapid bounce. Floored at 0, never below.
    pub rapid_bounce_penalty: u32,
    /// Points added to the time sub-score when the collector flags
    /// deep sustained engagement.
    pub deep_engagement_bonus: u32,
    /// Leaderboard size used when the caller passes no explicit limit.
    pub default_leaderboard_limit: usize,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            rapid_bounce_penalty: defaults::DEFAULT_RAPID_BOUNCE_PENALTY,
            deep_engagement_bonus: defaults::DEFAULT_DEEP_ENGAGEMENT_BONUS,
            default_leaderboard_limit: defaults::DEFAULT_LEADERBOARD_LIMIT,
        }
    }
}

impl EngagementConfig {
    /// Parse a config from TOML, falling back to defaults for missing
    /// fields, then validate.
    pub fn from_toml_str(raw: &str) -> TuskResult<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| TuskError::Config {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject adjustments that could not fit inside the time sub-score.
    pub fn validate(&self) -> TuskResult<()> {
        if self.rapid_bounce_penalty > TIME_CAP {
            return Err(TuskError::Config {
                message: format!(
                    "rapid_bounce_penalty {} exceeds time cap {}",
                    self.rapid_bounce_penalty, TIME_CAP
                ),
            });
        }
        if self.deep_engagement_bonus > TIME_CAP {
            return Err(TuskError::Config {
                message: format!(
                    "deep_engagement_bonus {} exceeds time cap {}",
                    self.deep_engagement_bonus, TIME_CAP
                ),
            });
        }
        Ok(())
    }
}
