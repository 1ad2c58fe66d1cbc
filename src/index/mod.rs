pub mod stats;
pub mod store;
pub mod suffix_array;

pub use store::{CorpusStats, CorpusStore};
pub use suffix_array::SuffixIndex;
