//! # wiseai-inference
//!
//! Text-side models for the WiseAI recommendation core.
//!
//! This crate provides:
//! - Weighted-keyword emotion classifier with a JSON model artifact
//! - Built-in lexicon used when no artifact is configured
//! - Deterministic feature-hashing query embedder
//! - Insight text generation keyed by emotion and problem category
//! - Random sources (thread, seeded, fixed)
//!
//! # Feature Flags
//!
//! - `mock`: expose [`mock::MockClassifier`] to dependent crates' tests
//!
//! # Example
//!
//! ```rust
//! use wiseai_inference::{EmotionClassifier, EmotionLabel, KeywordClassifier};
//!
//! let classifier = KeywordClassifier::builtin();
//! let result = classifier.classify("I'm so grateful today");
//! assert_eq!(result.emotion, EmotionLabel::Gratitude);
//! ```

pub mod classifier;
pub mod embedding;
pub mod insight;
pub mod lexicon;
pub mod random;

// Mock classifier for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core types
pub use wiseai_core::*;

pub use classifier::{EmotionFeatures, KeywordClassifier, KeywordModel, WeightedFeature};
pub use embedding::HashingEmbedder;
pub use insight::{InsightGenerator, DEFAULT_INSIGHT};
pub use random::{FixedRandom, SeededRandom, ThreadRandom};
