pub mod factors;
pub mod level;
pub mod score;
pub mod trend;

pub use factors::EngagementFactors;
pub use level::EngagementLevel;
pub use score::{EngagementScore, ScoreBreakdown};
pub use trend::{Trend, TrendDirection};
