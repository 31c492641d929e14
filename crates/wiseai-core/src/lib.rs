//! # wiseai-core
//!
//! Core types, traits, and abstractions for the WiseAI recommendation core.
//!
//! This crate provides the data model (quotes, the emotion vocabulary,
//! classification results, recommendation responses), the static
//! emotion → problem-category table, text normalization, and the traits the
//! other crates implement so artifacts and randomness can be injected.

pub mod artifact;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod problems;
pub mod text;
pub mod traits;

// Re-export commonly used types at crate root
pub use artifact::{compute_checksum, ArtifactInfo};
pub use error::{Error, Result};
pub use models::*;
pub use problems::{ProblemMapper, GENERAL_PROBLEM};
pub use traits::*;
