use csv::StringRecord;

/// A bounded run of data records cut from the input file.
///
/// Chunks are the unit of work handed to aggregation workers. `start_line`
/// is the 1-based file line of the first record (the header is line 1), kept
/// so skipped records can be reported with their position in the source file.
#[derive(Debug, Clone, Default)]
pub struct RecordChunk {
    pub start_line: u64,
    pub records: Vec<StringRecord>,
}

impl RecordChunk {
    pub fn new(start_line: u64, records: Vec<StringRecord>) -> Self {
        Self { start_line, records }
    }

    /// File line of the record at `offset` within this chunk.
    pub fn line_of(&self, offset: usize) -> u64 {
        self.start_line + offset as u64
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
