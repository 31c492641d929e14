//! Structured logging schema and field name constants for WiseAI.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation can query by the same names across subsystems.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Request could not be served (empty store) |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events (artifact loaded), operation completions |
//! | DEBUG | Decision points, intermediate values, config choices |
//! | TRACE | Per-quote scoring, high-volume data |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation ID of a recommendation request (UUIDv7).
pub const REQUEST_ID: &str = "request_id";

/// Subsystem originating the log event.
/// Values: "engine", "search", "store", "inference"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "quote_ranker", "keyword_classifier", "index_builder"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "recommend", "rank", "classify", "load"
pub const OPERATION: &str = "op";

// ─── Classification fields ─────────────────────────────────────────────────

/// Detected emotion label.
pub const EMOTION: &str = "emotion";

/// Classification confidence in [0, 1].
pub const CONFIDENCE: &str = "confidence";

/// Primary problem category slug.
pub const PROBLEM: &str = "problem";

// ─── Ranking fields ────────────────────────────────────────────────────────

/// Ranking path taken ("exact-match", "semantic", "fallback-random").
pub const METHOD: &str = "method";

/// Number of candidates considered before truncation.
pub const CANDIDATE_COUNT: &str = "candidate_count";

/// Number of results returned.
pub const RESULT_COUNT: &str = "result_count";

/// Relevance score of a single quote.
pub const SCORE: &str = "score";

/// Position of a quote in the store.
pub const QUOTE_INDEX: &str = "quote_index";

// ─── Artifact fields ───────────────────────────────────────────────────────

/// Path of an artifact file.
pub const ARTIFACT_PATH: &str = "artifact_path";

/// Content checksum of an artifact (`blake3:<hex>`).
pub const ARTIFACT_CHECKSUM: &str = "artifact_checksum";

/// Version string declared by an artifact.
pub const ARTIFACT_VERSION: &str = "artifact_version";

/// Number of quotes held by a store.
pub const QUOTE_COUNT: &str = "quote_count";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Byte length of the raw input text.
pub const INPUT_LEN: &str = "input_len";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
