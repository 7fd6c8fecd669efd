// The fuzzy filter engine
//
// Given a list of heterogeneous records and a free-text query, score each
// record over a configurable set of text fields and return the records
// that pass a similarity threshold, best match first.
//
// # Architecture
//
// ```text
// records + query → fold (normalize) → per-field scoring → max across
// fields → threshold → stable sort by score
// ```
//
// The core functions are pure: no I/O, no mutation of inputs, no state
// between calls. Memoization for per-keystroke callers lives in a
// separate opt-in wrapper (`cache`).
//
// # Example
//
// ```rust
// use setu_filter::engine::filter::filter;
// use setu_filter::engine::record::Record;
//
// let records = vec![Record::new().with("title", "NCF 2023 Hindi Manual")];
// let hits = filter(&records, "hindi", &["title"], 0.4);
// assert_eq!(hits.len(), 1);
// ```

pub mod cache;
pub mod filter;
pub mod options;
pub mod record;
pub mod score;

// Re-export commonly used types for convenience
pub use cache::FilterCache;
pub use filter::{filter, filter_with, rank, rank_with, RankedMatch};
pub use options::{FilterOptions, OptionsError};
pub use record::{FieldValue, Record, Searchable};
pub use score::QueryScorer;
