//! SetuFilter - fuzzy record filtering for the Shiksha Setu dashboards
//!
//! Scores heterogeneous records (manuals, modules, clusters, teacher
//! contacts) against a free-text query across configurable text fields
//! and returns the records that pass a similarity threshold, best match
//! first.
//!
//! # Features
//! - Pure, stateless filter: a function of (records, query, fields, threshold)
//! - Containment-first scoring with edit-distance and token-overlap fallback
//! - Unicode-aware normalization (NFC, code-point lowercasing) for Indic scripts
//! - Parallel scoring for large record lists
//! - Opt-in memo cache for per-keystroke callers
//!
//! # Example
//!
//! ```
//! use setu_filter::{filter, Record};
//! use setu_filter::views::{DEFAULT_THRESHOLD, MANUAL_FIELDS};
//!
//! let manuals = vec![
//!     Record::new()
//!         .with("title", "NCF 2023 Hindi Manual")
//!         .with("filename", "ncf_hindi.pdf"),
//!     Record::new()
//!         .with("title", "Science Manual English")
//!         .with("filename", "science_en.pdf"),
//! ];
//!
//! let hits = filter(&manuals, "hindi", MANUAL_FIELDS, DEFAULT_THRESHOLD);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].text("title"), Some("NCF 2023 Hindi Manual"));
//! ```

pub mod algorithms;
pub mod engine;
pub mod views;

// Re-exports for the common path: build records, filter them, render
pub use algorithms::{EditDistance, Similarity};
pub use engine::{
    filter, filter_with, rank, rank_with, FieldValue, FilterCache, FilterOptions, OptionsError,
    QueryScorer, Record, RankedMatch, Searchable,
};
