// Digitalization Index Query System - Core Library
// Exposes the dataset, query, and distribution modules for the CLI,
// API server, and tests.

pub mod dataset;
pub mod distribution;
pub mod query;

// Re-export commonly used types
pub use dataset::{Dataset, IndexRecord, KeywordRecord, LoadError, TableKind};
pub use distribution::{index_by_year, year_distributions, YearDistribution};
pub use query::{DatasetSummary, LookupOutcome, QueryService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
