//! Immutable, process-wide quote collection.
//!
//! Loaded once from an artifact and shared behind an `Arc`. Besides the
//! quotes themselves the store keeps the padded normalized text of every
//! quote (for whole-word lexical matching) and a per-emotion index.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};

use wiseai_core::artifact::read_artifact;
use wiseai_core::text::{normalize, padded};
use wiseai_core::{ArtifactInfo, EmotionLabel, Error, Quote, RandomSource, Result};

use crate::artifact::{QuoteStoreArtifact, VectorModelInfo};

/// Version reported for stores assembled in memory.
const IN_MEMORY_VERSION: &str = "in-memory";

#[derive(Debug, Clone)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
    /// Padded normalized text, parallel to `quotes`.
    normalized: Vec<String>,
    by_emotion: BTreeMap<EmotionLabel, Vec<usize>>,
    vector_model: Option<VectorModelInfo>,
    info: ArtifactInfo,
    dropped: usize,
}

impl QuoteStore {
    /// Load and validate an artifact file. Quotes longer than `max_words`
    /// are dropped with a warning.
    pub fn load(path: &Path, max_words: usize) -> Result<Self> {
        let start = Instant::now();
        let (content, checksum) = read_artifact(path)?;
        let artifact = QuoteStoreArtifact::from_json(&content)
            .map_err(|e| Error::Artifact(format!("{}: {}", path.display(), e)))?;

        let mut store = Self::from_artifact(artifact, max_words)?;
        store.info.checksum = Some(checksum);
        store.info.path = Some(path.display().to_string());

        info!(
            subsystem = "store",
            component = "quote_store",
            op = "load",
            artifact_path = %path.display(),
            artifact_version = %store.info.version,
            artifact_checksum = store.info.checksum.as_deref().unwrap_or(""),
            quote_count = store.len(),
            dropped = store.dropped,
            vectors = store.has_vectors(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Quote store loaded"
        );
        Ok(store)
    }

    /// Build from an already-parsed artifact.
    pub fn from_artifact(artifact: QuoteStoreArtifact, max_words: usize) -> Result<Self> {
        let version = artifact.version.clone();
        let (quotes, vector_model) = artifact.into_quotes()?;

        let total = quotes.len();
        let kept: Vec<Quote> = quotes
            .into_iter()
            .enumerate()
            .filter_map(|(index, quote)| {
                let words = quote.word_count();
                if words > max_words {
                    warn!(
                        subsystem = "store",
                        component = "quote_store",
                        quote_index = index,
                        words,
                        max_words,
                        "Quote exceeds word limit, dropped"
                    );
                    None
                } else {
                    Some(quote)
                }
            })
            .collect();
        let dropped = total - kept.len();

        Ok(Self::build(
            kept,
            vector_model,
            ArtifactInfo::builtin(version),
            dropped,
        ))
    }

    /// Build from quotes held in memory. Vectors on the quotes are ignored
    /// for scoring since no vector model is declared.
    pub fn from_quotes(quotes: Vec<Quote>) -> Self {
        Self::build(quotes, None, ArtifactInfo::builtin(IN_MEMORY_VERSION), 0)
    }

    /// Build from in-memory quotes carrying vectors of `model`.
    pub fn from_quotes_with_vectors(quotes: Vec<Quote>, model: VectorModelInfo) -> Result<Self> {
        for (index, quote) in quotes.iter().enumerate() {
            if let Some(vector) = &quote.vector {
                if vector.len() != model.dimension {
                    return Err(Error::Artifact(format!(
                        "quote {} vector has {} components, expected {}",
                        index,
                        vector.len(),
                        model.dimension
                    )));
                }
            }
        }
        Ok(Self::build(
            quotes,
            Some(model),
            ArtifactInfo::builtin(IN_MEMORY_VERSION),
            0,
        ))
    }

    fn build(
        quotes: Vec<Quote>,
        vector_model: Option<VectorModelInfo>,
        info: ArtifactInfo,
        dropped: usize,
    ) -> Self {
        let normalized = quotes.iter().map(|q| padded(&normalize(&q.text))).collect();
        let mut by_emotion: BTreeMap<EmotionLabel, Vec<usize>> = BTreeMap::new();
        for (index, quote) in quotes.iter().enumerate() {
            by_emotion.entry(quote.emotion).or_default().push(index);
        }
        Self {
            quotes,
            normalized,
            by_emotion,
            vector_model,
            info,
            dropped,
        }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Quote> {
        self.quotes.get(index)
    }

    /// All quotes in insertion order.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.iter()
    }

    /// Padded normalized text of the quote at `index`, for use with
    /// `wiseai_core::text::contains_phrase`.
    pub fn normalized_text(&self, index: usize) -> &str {
        self.normalized.get(index).map(String::as_str).unwrap_or("")
    }

    /// Indices of quotes labelled `emotion`, in insertion order.
    pub fn indices_for(&self, emotion: EmotionLabel) -> &[usize] {
        self.by_emotion
            .get(&emotion)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Quote count for every label of the vocabulary (zero included).
    pub fn emotion_counts(&self) -> BTreeMap<EmotionLabel, usize> {
        EmotionLabel::ALL
            .iter()
            .map(|label| (*label, self.indices_for(*label).len()))
            .collect()
    }

    /// Up to `n` distinct quotes chosen uniformly with `rng`.
    pub fn sample(&self, n: usize, rng: &dyn RandomSource) -> Vec<&Quote> {
        let take = n.min(self.quotes.len());
        let mut indices: Vec<usize> = (0..self.quotes.len()).collect();
        // Partial Fisher-Yates: only the first `take` slots are needed.
        for i in 0..take {
            let remaining = indices.len() - i;
            let j = i + rng.pick(remaining).min(remaining - 1);
            indices.swap(i, j);
        }
        indices[..take].iter().map(|i| &self.quotes[*i]).collect()
    }

    pub fn vector_model(&self) -> Option<&VectorModelInfo> {
        self.vector_model.as_ref()
    }

    /// Whether vectors can be used for similarity scoring.
    pub fn has_vectors(&self) -> bool {
        self.vector_model.is_some() && self.quotes.iter().any(|q| q.vector.is_some())
    }

    pub fn info(&self) -> &ArtifactInfo {
        &self.info
    }

    /// Quotes dropped at load for exceeding the word limit.
    pub fn dropped_count(&self) -> usize {
        self.dropped
    }
}
