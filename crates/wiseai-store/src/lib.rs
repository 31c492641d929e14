//! # wiseai-store
//!
//! Quote storage for the WiseAI recommendation core.
//!
//! This crate provides:
//! - The immutable [`QuoteStore`] shared by every request
//! - The JSON quote-store artifact format with load-time validation
//! - [`IndexBuilder`], which turns raw quote records into an artifact
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::path::Path;
//! use wiseai_store::QuoteStore;
//!
//! let store = QuoteStore::load(Path::new("data/quotes.json"), 50)?;
//! println!("{} quotes", store.len());
//! ```

pub mod artifact;
pub mod index;
pub mod store;

pub mod test_fixtures;

// Re-export core types
pub use wiseai_core::*;

pub use artifact::{QuoteRecord, QuoteStoreArtifact, VectorModelInfo};
pub use index::{parse_records, IndexBuilder, IndexReport, RawQuoteRecord, RawTags};
pub use store::QuoteStore;
