pub mod ranker;
pub mod top_k;

pub use ranker::{top_by_highest_ctr, top_by_lowest_cpa};
pub use top_k::BoundedTopK;
