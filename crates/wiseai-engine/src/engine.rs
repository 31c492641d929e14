//! Recommendation pipeline: classify → map → rank → insight → assemble.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, error, info};
use uuid::Uuid;

use wiseai_core::defaults::QUOTE_SAMPLE_LIMIT;
use wiseai_core::{
    ArtifactInfo, EmotionClassifier, EmotionLabel, Error, ProblemMapper, QueryEmbedder, Quote,
    RandomSource, RecommendationResponse, Result,
};
use wiseai_inference::{
    HashingEmbedder, InsightGenerator, KeywordClassifier, SeededRandom, ThreadRandom,
};
use wiseai_search::QuoteRanker;
use wiseai_store::QuoteStore;

use crate::config::EngineConfig;
use crate::stats::{EngineStats, StatsSnapshot};

/// One row of the emotion catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionCatalogEntry {
    pub emotion: EmotionLabel,
    pub quote_count: usize,
    /// Problem slugs in priority order.
    pub problems: Vec<&'static str>,
}

/// Health report for operators.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    /// "ok", or "degraded" when the store is empty.
    pub status: &'static str,
    pub quote_count: usize,
    /// Labels with at least one quote.
    pub emotion_classes: usize,
    pub store: ArtifactInfo,
    pub classifier: ArtifactInfo,
    pub vectors_enabled: bool,
    pub stats: StatsSnapshot,
}

/// Orchestrates classification, ranking and insight generation.
///
/// `Send + Sync`; share one instance behind an `Arc` across requests.
pub struct RecommendationEngine {
    store: Arc<QuoteStore>,
    classifier: Arc<dyn EmotionClassifier>,
    classifier_info: ArtifactInfo,
    mapper: ProblemMapper,
    ranker: QuoteRanker,
    insight: InsightGenerator,
    rng: Arc<dyn RandomSource>,
    config: EngineConfig,
    stats: EngineStats,
}

impl RecommendationEngine {
    pub fn builder() -> RecommendationEngineBuilder {
        RecommendationEngineBuilder::default()
    }

    /// Load artifacts named by `config` and assemble an engine.
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let store_path = config.store_path.clone().ok_or_else(|| {
            Error::Config("WISEAI_STORE_PATH is not set".to_string())
        })?;
        let store = QuoteStore::load(&store_path, config.max_quote_words)?;
        let classifier = match &config.classifier_path {
            Some(path) => KeywordClassifier::load(path)?,
            None => {
                info!(
                    subsystem = "engine",
                    artifact_version = wiseai_core::defaults::BUILTIN_LEXICON_VERSION,
                    "No classifier artifact configured, using built-in lexicon"
                );
                KeywordClassifier::builtin()
            }
        };

        let embedder = HashingEmbedder::new(config.embed_dimension);
        Self::builder()
            .store(Arc::new(store))
            .keyword_classifier(classifier)
            .embedder(Arc::new(embedder))
            .config(config)
            .build()
    }

    /// Recommend quotes for free-form text. Only an empty store fails.
    pub fn recommend(&self, raw_text: &str, limit: usize) -> Result<RecommendationResponse> {
        let start = Instant::now();
        let request_id = Uuid::now_v7();

        if self.store.is_empty() {
            self.stats.record_no_quotes();
            error!(
                subsystem = "engine",
                op = "recommend",
                request_id = %request_id,
                "No quotes available"
            );
            return Err(Error::NoQuotesAvailable);
        }

        let classification = self.classifier.classify(raw_text);
        if classification.confidence < self.config.low_confidence_threshold {
            self.stats.record_low_confidence();
            debug!(
                subsystem = "engine",
                request_id = %request_id,
                emotion = %classification.emotion,
                confidence = classification.confidence,
                threshold = self.config.low_confidence_threshold,
                "Low-confidence classification"
            );
        }

        let categories = self.mapper.map_to_categories(classification.emotion);
        let outcome = self.ranker.rank(categories, raw_text, limit);
        let problem = categories
            .first()
            .filter(|c| !c.is_general())
            .map(|c| c.problem);
        let insight = self.insight.generate(classification.emotion, problem);
        self.stats.record_method(outcome.method);

        info!(
            subsystem = "engine",
            op = "recommend",
            request_id = %request_id,
            emotion = %classification.emotion,
            confidence = classification.confidence,
            problem = problem.unwrap_or(""),
            method = %outcome.method,
            candidate_count = outcome.candidate_count,
            result_count = outcome.quotes.len(),
            input_len = raw_text.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Recommendation served"
        );

        Ok(RecommendationResponse {
            request_id,
            insight,
            quotes: outcome.quotes,
            detected_emotion: classification.emotion,
            confidence: classification.confidence,
            emotion_probabilities: classification.distribution,
            problem: problem.map(str::to_string),
            method: outcome.method,
            generated_at: Utc::now(),
        })
    }

    /// [`Self::recommend`] with the configured default limit.
    pub fn recommend_default(&self, raw_text: &str) -> Result<RecommendationResponse> {
        self.recommend(raw_text, self.config.default_limit)
    }

    /// Every vocabulary label with its quote count and problem categories.
    pub fn emotion_catalog(&self) -> Vec<EmotionCatalogEntry> {
        let counts = self.store.emotion_counts();
        EmotionLabel::ALL
            .iter()
            .map(|emotion| EmotionCatalogEntry {
                emotion: *emotion,
                quote_count: counts.get(emotion).copied().unwrap_or(0),
                problems: self
                    .mapper
                    .map_to_categories(*emotion)
                    .iter()
                    .map(|c| c.problem)
                    .collect(),
            })
            .collect()
    }

    /// Random sample of at most `n` quotes (default 100).
    pub fn sample_quotes(&self, n: Option<usize>) -> Vec<Quote> {
        self.store
            .sample(n.unwrap_or(QUOTE_SAMPLE_LIMIT), self.rng.as_ref())
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn health(&self) -> HealthReport {
        let counts = self.store.emotion_counts();
        HealthReport {
            status: if self.store.is_empty() { "degraded" } else { "ok" },
            quote_count: self.store.len(),
            emotion_classes: counts.values().filter(|c| **c > 0).count(),
            store: self.store.info().clone(),
            classifier: self.classifier_info.clone(),
            vectors_enabled: self.ranker.semantic_enabled(),
            stats: self.stats.snapshot(),
        }
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<QuoteStore> {
        &self.store
    }
}

/// Builder injecting every dependency of a [`RecommendationEngine`].
#[derive(Default)]
pub struct RecommendationEngineBuilder {
    store: Option<Arc<QuoteStore>>,
    classifier: Option<(Arc<dyn EmotionClassifier>, ArtifactInfo)>,
    embedder: Option<Arc<dyn QueryEmbedder>>,
    rng: Option<Arc<dyn RandomSource>>,
    config: Option<EngineConfig>,
    templates: Vec<(EmotionLabel, Vec<String>)>,
}

impl RecommendationEngineBuilder {
    pub fn store(mut self, store: Arc<QuoteStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Any classifier; health reports it by name only.
    pub fn classifier(mut self, classifier: Arc<dyn EmotionClassifier>) -> Self {
        let info = ArtifactInfo::builtin(classifier.name());
        self.classifier = Some((classifier, info));
        self
    }

    /// A keyword classifier, reported with its artifact identity.
    pub fn keyword_classifier(mut self, classifier: KeywordClassifier) -> Self {
        let info = classifier.info().clone();
        self.classifier = Some((Arc::new(classifier), info));
        self
    }

    pub fn embedder(mut self, embedder: Arc<dyn QueryEmbedder>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    pub fn random_source(mut self, rng: Arc<dyn RandomSource>) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the insight templates of one emotion.
    pub fn insight_templates(mut self, emotion: EmotionLabel, templates: Vec<String>) -> Self {
        self.templates.push((emotion, templates));
        self
    }

    pub fn build(self) -> Result<RecommendationEngine> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let store = self
            .store
            .ok_or_else(|| Error::Config("a quote store is required".to_string()))?;
        let (classifier, classifier_info) = self.classifier.unwrap_or_else(|| {
            let classifier = KeywordClassifier::builtin();
            let info = classifier.info().clone();
            (Arc::new(classifier) as Arc<dyn EmotionClassifier>, info)
        });
        let rng: Arc<dyn RandomSource> = match (self.rng, config.random_seed) {
            (Some(rng), _) => rng,
            (None, Some(seed)) => Arc::new(SeededRandom::new(seed)),
            (None, None) => Arc::new(ThreadRandom),
        };

        let mut ranker =
            QuoteRanker::new(store.clone(), rng.clone()).with_config(config.ranker.clone());
        if let Some(embedder) = self.embedder {
            if store.has_vectors() {
                ranker = ranker.with_embedder(embedder);
            }
        }

        let mut insight = InsightGenerator::new(rng.clone());
        for (emotion, templates) in self.templates {
            insight = insight.with_templates(emotion, templates);
        }

        info!(
            subsystem = "engine",
            quote_count = store.len(),
            classifier = classifier.name(),
            vectors_enabled = ranker.semantic_enabled(),
            shuffle_near_ties = config.ranker.shuffle_near_ties,
            "Recommendation engine ready"
        );

        Ok(RecommendationEngine {
            store,
            classifier,
            classifier_info,
            mapper: ProblemMapper::new(),
            ranker,
            insight,
            rng,
            config,
            stats: EngineStats::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiseai_inference::mock::MockClassifier;
    use wiseai_inference::FixedRandom;
    use wiseai_store::test_fixtures::fixture_store;

    fn engine_with(classifier: MockClassifier) -> RecommendationEngine {
        RecommendationEngine::builder()
            .store(Arc::new(fixture_store()))
            .classifier(Arc::new(classifier))
            .random_source(Arc::new(FixedRandom(0)))
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_store() {
        let err = RecommendationEngine::builder().build().err().unwrap();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        let config = EngineConfig {
            default_limit: 0,
            ..Default::default()
        };
        let err = RecommendationEngine::builder()
            .store(Arc::new(fixture_store()))
            .config(config)
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_classifier_is_called_once_per_request() {
        let mock = MockClassifier::new().with_default(EmotionLabel::Hope, 0.9);
        let engine = engine_with(mock.clone());
        engine.recommend("anything", 3).unwrap();
        assert_eq!(mock.classify_call_count(), 1);
        assert_eq!(mock.get_calls()[0].input, "anything");
    }

    #[test]
    fn test_low_confidence_is_counted_not_changed() {
        let mock = MockClassifier::new().with_default(EmotionLabel::Grief, 0.1);
        let engine = engine_with(mock);
        let response = engine.recommend("text", 3).unwrap();
        assert_eq!(response.detected_emotion, EmotionLabel::Grief);
        assert_eq!(response.quotes[0].quote.emotion, EmotionLabel::Grief);
        assert_eq!(engine.stats().low_confidence, 1);
    }

    #[test]
    fn test_problem_is_primary_category() {
        let mock = MockClassifier::new().with_default(EmotionLabel::Motivation, 0.8);
        let response = engine_with(mock).recommend("x", 3).unwrap();
        assert_eq!(response.problem.as_deref(), Some("lack-of-direction"));

        let neutral = engine_with(MockClassifier::new()).recommend("x", 3).unwrap();
        assert!(neutral.problem.is_none());
    }

    #[test]
    fn test_insight_template_override() {
        let engine = RecommendationEngine::builder()
            .store(Arc::new(fixture_store()))
            .classifier(Arc::new(MockClassifier::new()))
            .random_source(Arc::new(FixedRandom(0)))
            .insight_templates(EmotionLabel::Neutral, vec!["Custom.".to_string()])
            .build()
            .unwrap();
        assert_eq!(engine.recommend("", 1).unwrap().insight, "Custom.");
    }

    #[test]
    fn test_emotion_catalog_covers_vocabulary() {
        let engine = engine_with(MockClassifier::new());
        let catalog = engine.emotion_catalog();
        assert_eq!(catalog.len(), EmotionLabel::ALL.len());
        let motivation = catalog
            .iter()
            .find(|e| e.emotion == EmotionLabel::Motivation)
            .unwrap();
        assert_eq!(motivation.quote_count, 3);
        assert_eq!(motivation.problems[0], "lack-of-direction");
        let total: usize = catalog.iter().map(|e| e.quote_count).sum();
        assert_eq!(total, engine.store().len());
    }

    #[test]
    fn test_sample_quotes_bounds() {
        let engine = engine_with(MockClassifier::new());
        assert_eq!(engine.sample_quotes(Some(4)).len(), 4);
        assert_eq!(engine.sample_quotes(None).len(), engine.store().len());
        assert!(engine.sample_quotes(Some(0)).is_empty());
    }

    #[test]
    fn test_health_report() {
        let engine = engine_with(MockClassifier::new());
        engine.recommend("x", 1).unwrap();
        let health = engine.health();
        assert_eq!(health.status, "ok");
        assert_eq!(health.quote_count, 10);
        assert_eq!(health.classifier.version, "mock");
        assert!(!health.vectors_enabled);
        assert_eq!(health.stats.requests, 1);
    }

    #[test]
    fn test_from_config_requires_store_path() {
        let err = RecommendationEngine::from_config(EngineConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, Error::Config(_)));
    }
}
