use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::info;

use crate::engine::aggregate::ParallelAggregator;
use crate::engine::errors::AnalyzeError;
use crate::engine::metrics::derive_metrics;
use crate::engine::rank::{top_by_highest_ctr, top_by_lowest_cpa};
use crate::engine::sink::write_metrics;
use crate::engine::source::ChunkedCsvReader;
use crate::shared::config::CONFIG;

const LOG_TARGET: &str = "engine::analyzer";

/// What a finished run produced, for reporting at the CLI surface.
#[derive(Debug)]
pub struct RunSummary {
    pub records: usize,
    pub campaigns: usize,
    pub elapsed: Duration,
    pub stats_file: PathBuf,
    pub top_ctr_file: PathBuf,
    pub top_cpa_file: PathBuf,
}

/// End-to-end pipeline: read and chunk, aggregate in parallel, derive
/// metrics, rank, write the three result files.
pub struct CampaignAnalyzer {
    reader: ChunkedCsvReader,
    aggregator: ParallelAggregator,
    top_k: usize,
}

impl CampaignAnalyzer {
    pub fn new(chunk_size: usize, num_workers: usize, top_k: usize) -> Self {
        Self {
            reader: ChunkedCsvReader::new(chunk_size),
            aggregator: ParallelAggregator::new(num_workers),
            top_k,
        }
    }

    /// Builds an analyzer from the global configuration.
    pub fn from_config() -> Self {
        let engine = &CONFIG.engine;
        Self::new(engine.chunk_size, engine.num_workers, engine.top_k)
    }

    /// Runs the whole pipeline for one input file.
    ///
    /// Output files land in `output_dir`, which must already exist. Writes
    /// happen in order and are not rolled back: if a later file fails, the
    /// earlier ones stay on disk.
    pub async fn analyze(
        &self,
        input: &Path,
        output_dir: &Path,
    ) -> Result<RunSummary, AnalyzeError> {
        let started = Instant::now();

        info!(target: LOG_TARGET, input = %input.display(), "Reading and chunking input file");
        let (chunks, layout) = self.reader.read_and_chunk(input)?;
        let records: usize = chunks.iter().map(|c| c.len()).sum();

        info!(
            target: LOG_TARGET,
            chunks = chunks.len(),
            records,
            workers = self.aggregator.num_workers(),
            "Aggregating campaign statistics"
        );
        let totals = self.aggregator.process_chunks(chunks, layout).await?;

        info!(target: LOG_TARGET, campaigns = totals.len(), "Deriving campaign metrics");
        let mut metrics = derive_metrics(totals);
        // Hash order would leak into the population file otherwise.
        metrics.sort_by(|a, b| a.campaign_id.cmp(&b.campaign_id));

        let stats_file = output_dir.join("campaign_stats.csv");
        info!(target: LOG_TARGET, path = %stats_file.display(), "Writing campaign statistics");
        write_metrics(&stats_file, &metrics)?;

        info!(target: LOG_TARGET, k = self.top_k, "Ranking campaigns by highest CTR");
        let top_ctr_file = output_dir.join(format!("top{}_ctr.csv", self.top_k));
        let top_ctr = top_by_highest_ctr(&metrics, self.top_k);
        write_metrics(&top_ctr_file, &top_ctr)?;

        info!(target: LOG_TARGET, k = self.top_k, "Ranking campaigns by lowest CPA");
        let top_cpa_file = output_dir.join(format!("top{}_cpa.csv", self.top_k));
        let top_cpa = top_by_lowest_cpa(&metrics, self.top_k);
        write_metrics(&top_cpa_file, &top_cpa)?;

        let summary = RunSummary {
            records,
            campaigns: metrics.len(),
            elapsed: started.elapsed(),
            stats_file,
            top_ctr_file,
            top_cpa_file,
        };
        info!(
            target: LOG_TARGET,
            records = summary.records,
            campaigns = summary.campaigns,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "Analysis complete"
        );
        Ok(summary)
    }
}
