use std::fs::File;
use std::path::Path;

use csv::Reader;
use tracing::info;

use crate::engine::errors::SourceError;
use crate::engine::source::chunk::RecordChunk;
use crate::engine::source::layout::ColumnLayout;

const LOG_TARGET: &str = "engine::source::reader";

/// Reads a campaign CSV file and cuts its records into fixed-size chunks.
///
/// The whole file is materialized up front so the worker pool can be fed
/// from a queue of known length. Every chunk except possibly the last holds
/// exactly `chunk_size` records; an under-filled tail chunk is handed out
/// like any other.
pub struct ChunkedCsvReader {
    chunk_size: usize,
}

impl ChunkedCsvReader {
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    /// Resolves the column layout from the header row, then groups all data
    /// records into chunks. An unreadable file, an unresolvable header or a
    /// structurally broken CSV row aborts the run.
    pub fn read_and_chunk(
        &self,
        path: &Path,
    ) -> Result<(Vec<RecordChunk>, ColumnLayout), SourceError> {
        let file = File::open(path)?;
        let mut reader = Reader::from_reader(file);

        let layout = ColumnLayout::from_header(reader.headers()?)?;

        let mut chunks = Vec::new();
        let mut current = Vec::with_capacity(self.chunk_size);
        // Line 1 is the header; the first data record sits on line 2.
        let mut start_line: u64 = 2;

        for (idx, record) in reader.into_records().enumerate() {
            current.push(record?);
            if current.len() >= self.chunk_size {
                let filled = std::mem::replace(&mut current, Vec::with_capacity(self.chunk_size));
                chunks.push(RecordChunk::new(start_line, filled));
                start_line = idx as u64 + 3;
            }
        }
        if !current.is_empty() {
            chunks.push(RecordChunk::new(start_line, current));
        }

        info!(
            target: LOG_TARGET,
            path = %path.display(),
            chunks = chunks.len(),
            chunk_size = self.chunk_size,
            "Input file read and chunked"
        );

        Ok((chunks, layout))
    }
}
