//! Kurator Extractor
//!
//! Scans tabular sources for distinct values, composite keys, tokens and
//! counts, and classifies field names against Darwin Core.
//!
//! # Architecture
//!
//! ```text
//! TabularReader → Extractor → distinct values / tokens → VocabularyFile
//! ```
//!
//! # Key Features
//!
//! - **Distinct values**: one field, verbatim, first-seen order
//! - **Composite values**: several fields joined by a separator, first-seen or sorted
//! - **Token counts**: whitespace tokens with total and per-row counts
//! - **Standardization**: key values replaced by their vocabulary standard
//! - **Term classification**: header fields that are not Darwin Core terms
//! - **Collectors**: geography and Darwin Cloud vocabulary feeds
//!
//! # Example Usage
//!
//! ```no_run
//! use kurator_extractor::{Extractor, ExtractorConfig};
//! use kurator_tabular::TabularReader;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::new(ExtractorConfig::default());
//! let mut source = TabularReader::open("occurrences.csv")?;
//! let months = extractor.distinct_single_values(&mut source, "month")?;
//! println!("{} distinct months", months.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod classifier;
mod collect;
mod config;
mod darwinize;
mod error;
mod extractor;
mod standardize;
mod types;

#[cfg(test)]
mod tests;

pub use classifier::{classify_not_in_reference, terms_not_in_dwc, TermClassification, TermClassifier};
pub use config::{ExtractorConfig, KeyOrder};
pub use darwinize::{darwinize_file, darwinize_header};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use standardize::{Standardized, ORIGINAL_SUFFIX};
pub use types::KeySpec;
