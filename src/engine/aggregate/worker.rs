use crossbeam::channel::{Receiver, Sender};
use csv::StringRecord;
use tracing::{debug, error, warn};

use crate::engine::aggregate::merge::ChunkPartial;
use crate::engine::source::{ColumnLayout, RecordChunk};

const LOG_TARGET: &str = "engine::aggregate::worker";

/// Field values extracted from one record through the resolved layout.
struct ParsedRecord<'a> {
    campaign_id: &'a str,
    impressions: i64,
    clicks: i64,
    spend: f64,
    conversions: i64,
}

/// Extracts and parses the required fields of one record. `None` means a
/// field was missing or failed to parse and the record must not count.
fn parse_record<'a>(record: &'a StringRecord, layout: &ColumnLayout) -> Option<ParsedRecord<'a>> {
    Some(ParsedRecord {
        campaign_id: record.get(layout.campaign_id)?,
        impressions: record.get(layout.impressions)?.parse().ok()?,
        clicks: record.get(layout.clicks)?.parse().ok()?,
        spend: record.get(layout.spend)?.parse().ok()?,
        conversions: record.get(layout.conversions)?.parse().ok()?,
    })
}

/// Folds one chunk into a private per-campaign partial.
///
/// A record counts only if every required field parses. A bad record is
/// skipped whole; none of its fields leak into the totals and the rest of
/// the chunk continues as normal.
pub fn fold_chunk(chunk: &RecordChunk, layout: &ColumnLayout) -> ChunkPartial {
    let mut partial = ChunkPartial::default();
    let mut skipped = 0usize;

    for (offset, record) in chunk.records.iter().enumerate() {
        let Some(parsed) = parse_record(record, layout) else {
            skipped += 1;
            debug!(
                target: LOG_TARGET,
                line = chunk.line_of(offset),
                "Skipping record with unparsable fields"
            );
            continue;
        };
        partial
            .campaigns
            .entry(parsed.campaign_id.to_string())
            .or_default()
            .update(
                parsed.impressions,
                parsed.clicks,
                parsed.spend,
                parsed.conversions,
            );
    }

    if skipped > 0 {
        warn!(
            target: LOG_TARGET,
            skipped,
            start_line = chunk.start_line,
            "Skipped unparsable records in chunk"
        );
    }

    partial
}

/// Drains the shared chunk queue until it closes, sending one partial per
/// chunk downstream. Runs on a blocking thread; all workers of the pool
/// pull from the same queue, so chunk distribution is demand-driven.
pub fn run_worker(
    worker_id: usize,
    chunks: Receiver<RecordChunk>,
    partials: Sender<ChunkPartial>,
    layout: ColumnLayout,
) {
    debug!(target: LOG_TARGET, worker_id, "Aggregation worker started");

    let mut processed = 0usize;
    while let Ok(chunk) = chunks.recv() {
        let partial = fold_chunk(&chunk, &layout);
        processed += 1;
        if partials.send(partial).is_err() {
            error!(
                target: LOG_TARGET,
                worker_id, "Partial receiver dropped, worker stopping early"
            );
            return;
        }
    }

    debug!(
        target: LOG_TARGET,
        worker_id, processed, "Aggregation worker finished"
    );
}
