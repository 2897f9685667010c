pub mod chunk;
pub mod layout;
pub mod reader;

pub use chunk::RecordChunk;
pub use layout::ColumnLayout;
pub use reader::ChunkedCsvReader;
