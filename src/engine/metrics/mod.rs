pub mod calculator;
pub mod model;

pub use calculator::derive_metrics;
pub use model::CampaignMetrics;
