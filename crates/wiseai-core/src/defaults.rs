//! Centralized default constants for the WiseAI recommendation core.
//!
//! **This module is the single source of truth** for shared default values.
//! Crates reference these constants instead of defining their own magic
//! numbers; environment overrides are applied on top of them by
//! `wiseai-engine`'s configuration layer.

// =============================================================================
// RECOMMENDATION
// =============================================================================

/// Default number of quotes returned per recommendation.
pub const RECOMMEND_LIMIT: usize = 5;

/// Upper bound on the number of quotes a single request may ask for.
pub const RECOMMEND_LIMIT_MAX: usize = 50;

/// Classifications below this confidence are logged and counted as low
/// confidence. The pipeline itself is unchanged.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.2;

/// Default number of quotes returned by a catalog sample.
pub const QUOTE_SAMPLE_LIMIT: usize = 100;

// =============================================================================
// QUOTES
// =============================================================================

/// Maximum words for a quote to be served. Longer quotes are dropped at load.
pub const MAX_QUOTE_WORDS: usize = 50;

/// Maximum words for a raw record to survive index building.
///
/// Looser than [`MAX_QUOTE_WORDS`] so an artifact can be reused with a
/// larger serving limit without being rebuilt.
pub const INDEX_MAX_QUOTE_WORDS: usize = 65;

/// Author recorded when a quote has none.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Score at which a classification saturates to full confidence.
///
/// Confidence is the winner's score divided by the smaller of its total
/// feature weight and this value.
pub const CONFIDENCE_SATURATION: f64 = 3.0;

/// Version string reported for the built-in keyword lexicon.
pub const BUILTIN_LEXICON_VERSION: &str = "builtin-2026.10";

// =============================================================================
// RANKING
// =============================================================================

/// Weight of the category-priority term.
pub const CATEGORY_WEIGHT: f32 = 0.5;

/// Weight of the lexical-overlap term.
pub const LEXICAL_WEIGHT: f32 = 0.3;

/// Weight of the vector-similarity term (dropped when vectors are absent).
pub const SEMANTIC_WEIGHT: f32 = 0.2;

/// Distinct keyword hits at which the lexical term saturates at 1.0.
pub const LEXICAL_SATURATION_HITS: usize = 3;

/// Score distance within which candidates count as tied for shuffling.
pub const NEAR_TIE_EPSILON: f32 = 1e-6;

// =============================================================================
// EMBEDDING
// =============================================================================

/// Name of the deterministic bag-of-words embedder.
pub const HASHING_EMBEDDER_NAME: &str = "hashing-bow";

/// Default dimension of the bag-of-words embedder.
pub const EMBED_DIMENSION: usize = 256;
