pub mod chunk_factory;
pub mod csv_file_factory;
pub mod layout_factory;
pub mod metrics_factory;

pub use chunk_factory::ChunkFactory;
pub use csv_file_factory::CsvFileFactory;
pub use layout_factory::LayoutFactory;
pub use metrics_factory::MetricsFactory;
pub use stats_factory::StatsFactory;

#[cfg(test)]
mod chunk_factory_test;
#[cfg(test)]
mod csv_file_factory_test;
#[cfg(test)]
mod metrics_factory_test;
