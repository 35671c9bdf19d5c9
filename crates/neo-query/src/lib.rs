//! # neo-query
//!
//! Query engine for NEO close-approach search. Compiles loosely-typed
//! requests into selectors and runs them against a [`neo_index::RecordStore`].
//!
//! Includes:
//! - Request → selector builder ([`builder`])
//! - Filter compiler and predicates ([`filter`])
//! - Search engine with date resolution and projection ([`engine`])
//! - Result writer (display, CSV, JSON) ([`writer`])

pub mod builder;
pub mod engine;
pub mod filter;
pub mod selector;
pub mod writer;

pub use builder::{build, RawQuery};
pub use engine::{SearchEngine, SearchResult};
pub use filter::{compile_filters, partition, Filter, FilterField, Operator, PartitionedFilters};
pub use selector::{DateSelection, Selector};
pub use writer::{format_results, write_csv_file, OutputFormat};
