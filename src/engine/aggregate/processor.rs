use std::collections::HashMap;
use std::thread;

use crossbeam::channel;
use tracing::{debug, error, info};

use crate::engine::aggregate::merge::{ChunkPartial, merge_partials};
use crate::engine::aggregate::stats::CampaignStats;
use crate::engine::aggregate::worker::run_worker;
use crate::engine::errors::AggregateError;
use crate::engine::source::{ColumnLayout, RecordChunk};

const LOG_TARGET: &str = "engine::aggregate::processor";

/// Fans chunks out to a fixed pool of blocking workers and merges their
/// per-chunk partials into the final per-campaign totals.
///
/// Workers share nothing but the two channels: each folds its chunks into a
/// private partial, so no locks guard the hot accumulation path. The single
/// synchronization point is the merge, which starts only after every worker
/// has retired.
pub struct ParallelAggregator {
    num_workers: usize,
}

impl ParallelAggregator {
    /// `num_workers = 0` falls back to the number of available cores.
    pub fn new(num_workers: usize) -> Self {
        let num_workers = if num_workers == 0 {
            thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
        } else {
            num_workers
        };
        Self { num_workers }
    }

    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Aggregates all chunks into per-campaign totals.
    pub async fn process_chunks(
        &self,
        chunks: Vec<RecordChunk>,
        layout: ColumnLayout,
    ) -> Result<HashMap<String, CampaignStats>, AggregateError> {
        if chunks.is_empty() {
            return Ok(HashMap::new());
        }

        let total = chunks.len();
        // Both channels hold every chunk, so feeding the queue up front and
        // sending partials out can never block a worker.
        let (chunk_tx, chunk_rx) = channel::bounded::<RecordChunk>(total);
        let (partial_tx, partial_rx) = channel::bounded::<ChunkPartial>(total);

        for chunk in chunks {
            // The local receiver is still alive and capacity covers every
            // chunk, so this send cannot fail or block.
            let _ = chunk_tx.send(chunk);
        }
        drop(chunk_tx);

        let workers = self.num_workers.min(total);
        info!(
            target: LOG_TARGET,
            workers,
            chunks = total,
            "Starting aggregation worker pool"
        );

        let mut handles = Vec::with_capacity(workers);
        for worker_id in 0..workers {
            let chunk_rx = chunk_rx.clone();
            let partial_tx = partial_tx.clone();
            handles.push(tokio::task::spawn_blocking(move || {
                run_worker(worker_id, chunk_rx, partial_tx, layout);
            }));
        }
        drop(chunk_rx);
        drop(partial_tx);

        // Full barrier: no partial is merged before every worker has
        // finished its last chunk.
        for handle in handles {
            handle.await.map_err(|err| {
                error!(target: LOG_TARGET, error = %err, "Aggregation worker panicked");
                AggregateError::WorkerPanicked(err.to_string())
            })?;
        }

        let partials: Vec<ChunkPartial> = partial_rx.try_iter().collect();
        debug!(
            target: LOG_TARGET,
            partials = partials.len(),
            "Worker pool drained, merging partials"
        );

        Ok(merge_partials(partials))
    }
}
