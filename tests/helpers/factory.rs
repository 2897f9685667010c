pub use super::factories::{
    ChunkFactory, CsvFileFactory, LayoutFactory, MetricsFactory, StatsFactory,
};

pub struct Factory;

impl Factory {
    pub fn chunk() -> ChunkFactory {
        ChunkFactory::new()
    }

    pub fn layout() -> LayoutFactory {
        LayoutFactory::new()
    }

    pub fn stats() -> StatsFactory {
        StatsFactory::new()
    }

    pub fn metrics(campaign_id: &str) -> MetricsFactory {
        MetricsFactory::new(campaign_id)
    }

    pub fn csv_file() -> CsvFileFactory {
        CsvFileFactory::new()
    }
}
