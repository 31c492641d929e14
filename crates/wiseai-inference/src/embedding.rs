//! Deterministic bag-of-words query embedder.
//!
//! Content words are feature-hashed into a fixed number of signed buckets
//! with BLAKE3 and the result is L2-normalized. The same embedder is used by
//! the index builder for quote vectors and by the ranker for query vectors,
//! so both sides live in the same space.

use wiseai_core::defaults::{EMBED_DIMENSION, HASHING_EMBEDDER_NAME};
use wiseai_core::text::content_words;
use wiseai_core::QueryEmbedder;

/// Feature-hashing embedder over content words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingEmbedder {
    dimension: usize,
}

impl HashingEmbedder {
    /// Create an embedder producing vectors of `dimension` components.
    /// A dimension of zero is raised to one.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    fn bucket(&self, word: &str) -> (usize, f32) {
        let hash = blake3::hash(word.as_bytes());
        let bytes = hash.as_bytes();
        let mut index_bytes = [0u8; 8];
        index_bytes.copy_from_slice(&bytes[..8]);
        let index = (u64::from_le_bytes(index_bytes) % self.dimension as u64) as usize;
        let sign = if bytes[8] & 1 == 0 { 1.0 } else { -1.0 };
        (index, sign)
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(EMBED_DIMENSION)
    }
}

impl QueryEmbedder for HashingEmbedder {
    fn embed(&self, text: &str) -> Option<Vec<f32>> {
        let words = content_words(text);
        if words.is_empty() {
            return None;
        }

        let mut vector = vec![0.0f32; self.dimension];
        for word in &words {
            let (index, sign) = self.bucket(word);
            vector[index] += sign;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm == 0.0 {
            // Every word cancelled out in its bucket.
            return None;
        }
        for x in &mut vector {
            *x /= norm;
        }
        Some(vector)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        HASHING_EMBEDDER_NAME
    }
}
