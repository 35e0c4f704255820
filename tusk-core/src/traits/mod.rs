mod scorer;

pub use scorer::IEngagementScorer;
