//! Kurator Storage Layer
//!
//! Implements the `VocabularyStore` trait over append-only delimited text files.
//!
//! # Architecture
//!
//! - One vocabulary per file; the first column is the key
//! - Keys are verbatim values or composite keys such as `country|stateProvince`
//! - Files only grow: new keys are appended, existing rows are never rewritten
//!
//! # Examples
//!
//! ```no_run
//! use kurator_store::append_new;
//!
//! let candidates = vec!["Oceania|US|Hawaii".to_string()];
//! let added = append_new("geography.txt", Some(candidates.as_slice()), "geography").unwrap();
//! assert_eq!(added, candidates);
//! ```

#![warn(missing_docs)]

mod dict;
mod error;
mod file;

pub use dict::VocabularyDict;
pub use error::StoreError;
pub use file::{append_new, append_new_with, load_existing_keys, VocabularyFile};
