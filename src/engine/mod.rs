pub mod aggregate;
pub mod analyzer;
pub mod errors;
pub mod metrics;
pub mod rank;
pub mod sink;
pub mod source;

pub use errors::*;
