use csv::StringRecord;

use crate::engine::source::RecordChunk;

pub struct ChunkFactory {
    start_line: u64,
    records: Vec<StringRecord>,
}

impl ChunkFactory {
    pub fn new() -> Self {
        Self {
            start_line: 2,
            records: Vec::new(),
        }
    }

    pub fn with_start_line(mut self, start_line: u64) -> Self {
        self.start_line = start_line;
        self
    }

    /// Appends one record; field order follows the canonical header
    /// (campaign_id, impressions, clicks, spend, conversions) unless the
    /// test pairs the chunk with a reordered layout.
    pub fn with_row(mut self, fields: &[&str]) -> Self {
        self.records.push(StringRecord::from(fields.to_vec()));
        self
    }

    pub fn create(self) -> RecordChunk {
        RecordChunk::new(self.start_line, self.records)
    }
}
