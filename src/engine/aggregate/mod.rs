pub mod merge;
pub mod processor;
pub mod stats;
pub mod worker;

pub use merge::{ChunkPartial, merge_partials};
pub use processor::ParallelAggregator;
pub use stats::CampaignStats;
