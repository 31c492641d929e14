//! # wiseai-search
//!
//! Quote ranking for the WiseAI recommendation core.
//!
//! Given the problem categories of a detected emotion and the user's raw
//! text, [`QuoteRanker`] selects candidates from the shared quote store,
//! scores them as a weighted mean of category priority, lexical overlap and
//! (when vectors are available) cosine similarity, then orders them.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use wiseai_search::{QuoteRanker, RankerConfig};
//!
//! let ranker = QuoteRanker::new(store, Arc::new(ThreadRandom))
//!     .with_config(RankerConfig::default());
//! let outcome = ranker.rank(categories, "I feel stuck", 5);
//! ```

pub mod cosine;
pub mod ranker;
pub mod weights;

// Re-export core types
pub use wiseai_core::*;

pub use cosine::similarity_score;
pub use ranker::{QuoteRanker, RankOutcome};
pub use weights::{RankerConfig, RankingWeights};
