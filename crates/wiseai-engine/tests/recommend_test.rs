//! End-to-end recommendation tests against the fixture quote store.

use std::sync::Arc;

use wiseai_engine::{
    EmotionLabel, EngineConfig, Error, Quote, RankingMethod, RecommendationEngine,
    RecommendationResponse,
};
use wiseai_inference::{FixedRandom, SeededRandom, ThreadRandom};
use wiseai_search::RankerConfig;
use wiseai_store::test_fixtures::{fixture_store, write_artifact};
use wiseai_store::QuoteStore;

const LOST: &str = "I feel completely lost and don't know what to do with my life";
const GRATEFUL: &str = "I am so grateful for everything in my life right now";

fn deterministic_config() -> EngineConfig {
    EngineConfig {
        ranker: RankerConfig::deterministic(),
        ..Default::default()
    }
}

fn engine(config: EngineConfig) -> RecommendationEngine {
    RecommendationEngine::builder()
        .store(Arc::new(fixture_store()))
        .random_source(Arc::new(ThreadRandom))
        .config(config)
        .build()
        .unwrap()
}

fn assert_distribution(response: &RecommendationResponse) {
    let total: f64 = response.emotion_probabilities.values().sum();
    assert!((total - 1.0).abs() < 1e-6, "distribution sums to {}", total);
    assert_eq!(
        response.confidence,
        response.emotion_probabilities[&response.detected_emotion]
    );
}

#[test]
fn test_scenario_lack_of_direction() {
    let response = engine(EngineConfig::default()).recommend_default(LOST).unwrap();
    assert_eq!(response.detected_emotion, EmotionLabel::Motivation);
    assert_eq!(response.problem.as_deref(), Some("lack-of-direction"));
    assert!(!response.quotes.is_empty());
    assert!(!response.insight.is_empty());
    assert_eq!(response.method, RankingMethod::ExactMatch);
    assert!(response.quotes[0].quote.tags.contains("lack-of-direction"));
    assert_distribution(&response);
}

#[test]
fn test_scenario_empty_input() {
    let engine = engine(EngineConfig::default());
    let response = engine.recommend_default("").unwrap();
    assert_eq!(response.detected_emotion, EmotionLabel::Neutral);
    assert_eq!(response.confidence, 0.0);
    assert_eq!(response.method, RankingMethod::FallbackRandom);
    assert!(!response.quotes.is_empty());
    assert!(response.problem.is_none());
    assert_distribution(&response);
}

#[test]
fn test_scenario_gratitude() {
    let response = engine(EngineConfig::default()).recommend_default(GRATEFUL).unwrap();
    assert_eq!(response.detected_emotion, EmotionLabel::Gratitude);
    let top = &response.quotes[0].quote;
    assert!(top.emotion == EmotionLabel::Gratitude || top.tags.contains("appreciation"));
}

#[test]
fn test_scenario_top_result_stable_under_shuffle() {
    let baseline = engine(deterministic_config()).recommend_default(LOST).unwrap();
    let top_score = baseline.quotes[0].relevance_score;

    let shuffling = engine(EngineConfig::default());
    for _ in 0..10 {
        let response = shuffling.recommend_default(LOST).unwrap();
        assert_eq!(response.quotes[0].relevance_score, top_score);
        for pair in response.quotes.windows(2) {
            assert!(pair[0].relevance_score >= pair[1].relevance_score);
        }
    }
}

#[test]
fn test_non_empty_quotes_for_any_input() {
    let engine = engine(EngineConfig::default());
    let long = "word ".repeat(5000);
    for text in [
        "x",
        "🙂🙂🙂",
        "so angry at everyone",
        "asdf qwer zxcv",
        "I miss my father every day",
        long.as_str(),
    ] {
        let response = engine.recommend(text, 3).unwrap();
        assert!(!response.quotes.is_empty(), "{:?}", text);
        assert!(response.quotes.len() <= 3);
        assert_distribution(&response);
    }
}

#[test]
fn test_idempotent_without_shuffle() {
    let engine = engine(deterministic_config());
    let a = engine.recommend(LOST, 5).unwrap();
    let b = engine.recommend(LOST, 5).unwrap();
    assert_eq!(a.detected_emotion, b.detected_emotion);
    assert_eq!(a.method, b.method);
    assert_eq!(a.quotes, b.quotes);
    assert_ne!(a.request_id, b.request_id);
}

#[test]
fn test_fallback_draws_from_full_store() {
    // Anger has no quotes or tags in the fixture store.
    let engine = engine(deterministic_config());
    let response = engine.recommend("I am furious and full of rage", 50).unwrap();
    assert_eq!(response.detected_emotion, EmotionLabel::Anger);
    assert_eq!(response.method, RankingMethod::FallbackRandom);
    assert_eq!(response.quotes.len(), engine.store().len());
}

#[test]
fn test_tie_break_is_insertion_order() {
    let store = QuoteStore::from_quotes(vec![
        Quote::new("A first thought.", "a", EmotionLabel::Hope),
        Quote::new("A second thought.", "b", EmotionLabel::Hope),
    ]);
    let engine = RecommendationEngine::builder()
        .store(Arc::new(store))
        .random_source(Arc::new(FixedRandom(0)))
        .config(deterministic_config())
        .build()
        .unwrap();
    let response = engine.recommend("hopeful", 2).unwrap();
    assert_eq!(response.detected_emotion, EmotionLabel::Hope);
    assert_eq!(
        response.quotes[0].relevance_score,
        response.quotes[1].relevance_score
    );
    assert_eq!(response.quotes[0].quote.text, "A first thought.");
}

#[test]
fn test_empty_store_is_fatal() {
    let engine = RecommendationEngine::builder()
        .store(Arc::new(QuoteStore::from_quotes(vec![])))
        .build()
        .unwrap();
    let err = engine.recommend(LOST, 5).unwrap_err();
    assert!(matches!(err, Error::NoQuotesAvailable));
    assert!(err.is_no_quotes());
    assert_eq!(engine.health().status, "degraded");
    assert_eq!(engine.stats().no_quotes, 1);
}

#[test]
fn test_seeded_engines_agree() {
    let build = || {
        RecommendationEngine::builder()
            .store(Arc::new(fixture_store()))
            .random_source(Arc::new(SeededRandom::new(99)))
            .build()
            .unwrap()
    };
    let (a, b) = (build(), build());
    for text in ["", LOST, GRATEFUL] {
        let ra = a.recommend(text, 5).unwrap();
        let rb = b.recommend(text, 5).unwrap();
        assert_eq!(ra.quotes, rb.quotes);
        assert_eq!(ra.insight, rb.insight);
    }
}

#[test]
fn test_response_serializes_wire_names() {
    let response = engine(EngineConfig::default()).recommend_default("").unwrap();
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["detected_emotion"], "neutral");
    assert_eq!(json["method"], "fallback-random");
    assert!(json["quotes"][0]["relevance_score"].is_number());
    assert!(json["quotes"][0]["text"].is_string());
    assert!(json.get("problem").is_none());
}

#[test]
fn test_from_config_loads_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let store_path = write_artifact(dir.path(), &fixture_store());
    let config = EngineConfig {
        store_path: Some(store_path),
        random_seed: Some(1),
        ..Default::default()
    };
    let engine = RecommendationEngine::from_config(config).unwrap();
    let health = engine.health();
    assert_eq!(health.quote_count, 10);
    assert!(health.store.checksum.is_some());
    assert!(health.classifier.checksum.is_none());
    assert_eq!(
        engine.recommend_default(GRATEFUL).unwrap().detected_emotion,
        EmotionLabel::Gratitude
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_share_one_engine() {
    let engine = Arc::new(engine(EngineConfig::default()));
    let mut handles = Vec::new();
    for i in 0..32 {
        let engine = engine.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let text = if i % 2 == 0 { LOST } else { GRATEFUL };
            engine.recommend(text, 3)
        }));
    }
    for handle in handles {
        let response = handle.await.unwrap().unwrap();
        assert!(!response.quotes.is_empty());
    }
    assert_eq!(engine.stats().requests, 32);
}
