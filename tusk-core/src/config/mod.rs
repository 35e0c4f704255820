pub mod defaults;

mod engagement_config;

pub use engagement_config::EngagementConfig;
