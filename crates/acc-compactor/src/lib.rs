//! Accession compactor — sorts accession identifiers and folds consecutive
//! runs into `first-last` ranges.
//!
//! Stages:
//! 1. Ordering — plain lexicographic sort of the full accession string
//! 2. Scan — split each neighbour into prefix + digit suffix
//! 3. Compact — close a run whenever two neighbours are not consecutive

pub mod accession;
pub mod adapter;
pub mod compactor;
pub mod error;
pub mod token;

pub use accession::ParsedAccession;
pub use compactor::{compact, compact_to_strings, is_consecutive, sort_accessions, CompactionResult, RangeCompactor};
pub use error::{AccessionError, CompactError, Result};
pub use token::OutputToken;
