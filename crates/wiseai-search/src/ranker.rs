//! Candidate selection and scoring of quotes against problem categories.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, trace, warn};

use wiseai_core::defaults::RECOMMEND_LIMIT_MAX;
use wiseai_core::text::{content_words, contains_phrase};
use wiseai_core::{
    shuffle_with, ProblemCategory, QueryEmbedder, Quote, RandomSource, RankedQuote,
    RankingMethod,
};
use wiseai_store::QuoteStore;

use crate::cosine::similarity_score;
use crate::weights::RankerConfig;

/// Result of one ranking pass.
#[derive(Debug, Clone)]
pub struct RankOutcome {
    pub quotes: Vec<RankedQuote>,
    pub method: RankingMethod,
    /// Quotes scored before truncation.
    pub candidate_count: usize,
}

#[derive(Debug, Clone, Copy)]
struct Scored {
    index: usize,
    score: f32,
}

/// Scores and orders quotes from a shared [`QuoteStore`].
pub struct QuoteRanker {
    store: Arc<QuoteStore>,
    embedder: Option<Arc<dyn QueryEmbedder>>,
    rng: Arc<dyn RandomSource>,
    config: RankerConfig,
}

impl QuoteRanker {
    pub fn new(store: Arc<QuoteStore>, rng: Arc<dyn RandomSource>) -> Self {
        Self {
            store,
            embedder: None,
            rng,
            config: RankerConfig::default(),
        }
    }

    /// Attach a query embedder. It is only used when it produces vectors of
    /// the model the store declares.
    pub fn with_embedder(mut self, embedder: Arc<dyn QueryEmbedder>) -> Self {
        if let Some(model) = self.store.vector_model() {
            if model.name != embedder.name() || model.dimension != embedder.dimension() {
                warn!(
                    subsystem = "search",
                    component = "quote_ranker",
                    store_model = %model.name,
                    store_dimension = model.dimension,
                    embedder = embedder.name(),
                    embedder_dimension = embedder.dimension(),
                    "Embedder does not match store vectors, similarity disabled"
                );
            }
        }
        self.embedder = Some(embedder);
        self
    }

    pub fn with_config(mut self, config: RankerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<QuoteStore> {
        &self.store
    }

    /// Whether vector similarity can contribute to scores.
    pub fn semantic_enabled(&self) -> bool {
        match (&self.embedder, self.store.vector_model()) {
            (Some(embedder), Some(model)) => {
                self.store.has_vectors()
                    && model.name == embedder.name()
                    && model.dimension == embedder.dimension()
            }
            _ => false,
        }
    }

    /// Rank quotes for `categories` (ordered by priority) and the user's raw
    /// text. `limit` is clamped to [1, 50]. The result is never padded and
    /// is non-empty whenever the store is.
    pub fn rank(
        &self,
        categories: &[ProblemCategory],
        raw_text: &str,
        limit: usize,
    ) -> RankOutcome {
        let start = Instant::now();
        let limit = limit.clamp(1, RECOMMEND_LIMIT_MAX);
        let specific: Vec<&ProblemCategory> =
            categories.iter().filter(|c| !c.is_general()).collect();

        let mut candidates: Vec<usize> = (0..self.store.len())
            .filter(|i| {
                let quote = &self.store.quotes()[*i];
                specific
                    .iter()
                    .any(|c| c.emotion == quote.emotion || quote.tags.contains(c.problem))
            })
            .collect();

        let fallback = candidates.is_empty();
        if fallback {
            if !specific.is_empty() {
                warn!(
                    subsystem = "search",
                    component = "quote_ranker",
                    category_count = specific.len(),
                    "No quote matches requested categories, ranking whole store"
                );
            }
            candidates = (0..self.store.len()).collect();
        }

        let terms = query_terms(categories, raw_text);
        let query_vector = if self.semantic_enabled() {
            self.embedder.as_ref().and_then(|e| e.embed(raw_text))
        } else {
            None
        };

        let mut scored: Vec<Scored> = candidates
            .iter()
            .map(|&index| Scored {
                index,
                score: self.score(index, &specific, &terms, query_vector.as_deref()),
            })
            .collect();
        let candidate_count = scored.len();

        // Stable: equal scores keep store order.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        if self.config.shuffle_near_ties {
            self.shuffle_near_ties(&mut scored, limit);
        }
        scored.truncate(limit);

        let method = if fallback {
            RankingMethod::FallbackRandom
        } else if query_vector.is_some() {
            RankingMethod::Semantic
        } else {
            RankingMethod::ExactMatch
        };

        debug!(
            subsystem = "search",
            component = "quote_ranker",
            op = "rank",
            method = %method,
            candidate_count,
            result_count = scored.len(),
            term_count = terms.len(),
            top_score = scored.first().map(|s| s.score).unwrap_or(0.0),
            duration_ms = start.elapsed().as_millis() as u64,
            "Quotes ranked"
        );

        RankOutcome {
            quotes: scored
                .into_iter()
                .map(|s| RankedQuote {
                    quote: self.store.quotes()[s.index].clone(),
                    relevance_score: s.score,
                })
                .collect(),
            method,
            candidate_count,
        }
    }

    fn score(
        &self,
        index: usize,
        specific: &[&ProblemCategory],
        terms: &[String],
        query_vector: Option<&[f32]>,
    ) -> f32 {
        let quote = &self.store.quotes()[index];
        let category = category_score(quote, specific);

        let text = self.store.normalized_text(index);
        let hits = terms.iter().filter(|t| contains_phrase(text, t)).count();
        let saturation = self.config.lexical_saturation.max(1);
        let lexical = hits.min(saturation) as f32 / saturation as f32;

        // A quote without a vector drops the similarity term.
        let semantic = query_vector
            .and_then(|q| quote.vector.as_deref().map(|v| similarity_score(q, v)));

        let score = self.config.weights.combine(category, lexical, semantic);
        trace!(
            subsystem = "search",
            component = "quote_ranker",
            quote_index = index,
            category,
            lexical,
            semantic = semantic.unwrap_or(0.0),
            score,
            "Quote scored"
        );
        score
    }

    /// Shuffle runs of near-equal scores that reach into the top `limit`.
    /// A run is every consecutive entry within epsilon of the run's first
    /// entry, so runs never merge across a strictly lower score.
    fn shuffle_near_ties(&self, scored: &mut [Scored], limit: usize) {
        let epsilon = self.config.near_tie_epsilon;
        let mut start = 0;
        while start < scored.len() && start < limit {
            let leader = scored[start].score;
            let mut end = start + 1;
            while end < scored.len() && leader - scored[end].score <= epsilon {
                end += 1;
            }
            if end - start > 1 {
                shuffle_with(&mut scored[start..end], self.rng.as_ref());
            }
            start = end;
        }
    }
}

/// Category priority term: half for an emotion match, half scaled by the
/// position of the best matching tag among the requested categories.
fn category_score(quote: &Quote, specific: &[&ProblemCategory]) -> f32 {
    if specific.is_empty() {
        return 0.0;
    }
    let emotion_part = if specific.iter().any(|c| c.emotion == quote.emotion) {
        0.5
    } else {
        0.0
    };
    let n = specific.len();
    let tag_part = specific
        .iter()
        .position(|c| quote.tags.contains(c.problem))
        .map(|i| 0.5 * (n - i) as f32 / n as f32)
        .unwrap_or(0.0);
    emotion_part + tag_part
}

/// Distinct lexical query terms: content words of the raw text followed by
/// the categories' search terms.
fn query_terms(categories: &[ProblemCategory], raw_text: &str) -> Vec<String> {
    let mut terms = content_words(raw_text);
    for term in categories.iter().flat_map(|c| c.search_terms.iter()) {
        if !terms.iter().any(|t| t == term) {
            terms.push(term.to_string());
        }
    }
    terms
}
