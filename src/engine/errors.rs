use std::io;
use thiserror::Error;

/// Errors raised while reading and chunking the input file.
///
/// All of these are fatal: if the file cannot be opened or its header does
/// not resolve, no aggregation is attempted.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input file is empty, expected a header row")]
    EmptyInput,

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),
}

/// Errors raised by the parallel aggregation stage.
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("Aggregation worker failed: {0}")]
    WorkerPanicked(String),
}

/// Errors raised while writing result files.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Any failure that aborts an analysis run.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Input error: {0}")]
    Source(#[from] SourceError),

    #[error("Aggregation error: {0}")]
    Aggregate(#[from] AggregateError),

    #[error("Output error: {0}")]
    Sink(#[from] SinkError),
}
