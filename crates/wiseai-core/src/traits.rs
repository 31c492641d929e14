//! Core traits for WiseAI abstractions.
//!
//! These traits are the seams where artifacts and randomness are injected
//! into the engine, so every component can be swapped for a mock in tests.

use crate::models::{ClassificationResult, EmotionLabel};

/// Maps free text to a distribution over the emotion vocabulary.
///
/// Implementations must never fail per request: text without any usable
/// signal classifies as [`EmotionLabel::Neutral`] with zero confidence.
pub trait EmotionClassifier: Send + Sync {
    /// Classify raw user text.
    fn classify(&self, text: &str) -> ClassificationResult;

    /// Labels this classifier can emit with non-zero confidence.
    fn labels(&self) -> Vec<EmotionLabel>;

    /// Name/version identifier of the underlying model.
    fn name(&self) -> &str;
}

/// Derives a query vector from raw text for similarity scoring.
pub trait QueryEmbedder: Send + Sync {
    /// Embed text. Returns `None` when the text carries nothing to embed.
    fn embed(&self, text: &str) -> Option<Vec<f32>>;

    /// Length of produced vectors.
    fn dimension(&self) -> usize;

    /// Identifier matched against a store's declared vector model.
    fn name(&self) -> &str;
}

/// Single source of randomness for template choice and near-tie shuffling.
///
/// Shared across concurrent requests, so implementations synchronize any
/// internal state themselves.
pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..bound`. `bound` is always at least 1.
    fn pick(&self, bound: usize) -> usize;
}

/// Shuffle a slice in place with a [`RandomSource`] (Fisher-Yates).
pub fn shuffle_with<T>(items: &mut [T], rng: &dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.pick(i + 1).min(i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Always picks the highest index, which leaves Fisher-Yates a no-op.
    struct LastIndex;

    impl RandomSource for LastIndex {
        fn pick(&self, bound: usize) -> usize {
            bound - 1
        }
    }

    /// Cycles through indices, clamped to the bound.
    struct Counter(AtomicUsize);

    impl RandomSource for Counter {
        fn pick(&self, bound: usize) -> usize {
            self.0.fetch_add(1, Ordering::Relaxed) % bound
        }
    }

    #[test]
    fn test_shuffle_with_identity_source_keeps_order() {
        let mut items = vec![1, 2, 3, 4, 5];
        shuffle_with(&mut items, &LastIndex);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_shuffle_with_is_a_permutation() {
        let mut items: Vec<u32> = (0..20).collect();
        shuffle_with(&mut items, &Counter(AtomicUsize::new(7)));
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_with_empty_and_single() {
        let mut empty: Vec<u8> = vec![];
        shuffle_with(&mut empty, &LastIndex);
        assert!(empty.is_empty());

        let mut single = vec![42];
        shuffle_with(&mut single, &Counter(AtomicUsize::new(0)));
        assert_eq!(single, vec![42]);
    }
}
