//! Integration tests for loading quote-store artifacts from disk.

use std::fs;

use wiseai_inference::{HashingEmbedder, KeywordClassifier};
use wiseai_store::test_fixtures::{fixture_store, write_artifact, FIXTURE_VERSION};
use wiseai_store::{
    parse_records, EmotionLabel, Error, IndexBuilder, QuoteStore, QuoteStoreArtifact,
};

#[test]
fn test_load_roundtrips_fixture_store() {
    let dir = tempfile::tempdir().unwrap();
    let original = fixture_store();
    let path = write_artifact(dir.path(), &original);

    let loaded = QuoteStore::load(&path, 50).unwrap();
    assert_eq!(loaded.len(), original.len());
    assert_eq!(loaded.quotes(), original.quotes());
    assert_eq!(loaded.info().version, FIXTURE_VERSION);
    assert_eq!(loaded.info().path.as_deref(), Some(path.to_str().unwrap()));
}

#[test]
fn test_checksum_changes_with_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_artifact(dir.path(), &fixture_store());
    let first = QuoteStore::load(&path, 50).unwrap();
    let again = QuoteStore::load(&path, 50).unwrap();
    assert_eq!(first.info().checksum, again.info().checksum);

    let mut content = fs::read_to_string(&path).unwrap();
    content = content.replace(FIXTURE_VERSION, "fixture-2");
    fs::write(&path, content).unwrap();
    let changed = QuoteStore::load(&path, 50).unwrap();
    assert_ne!(first.info().checksum, changed.info().checksum);
}

#[test]
fn test_malformed_artifact_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    fs::write(&path, r#"{"version":"1","quotes":[{"text":"x","emotion":"boredom"}]}"#).unwrap();
    assert!(matches!(
        QuoteStore::load(&path, 50).unwrap_err(),
        Error::Artifact(_)
    ));
}

#[test]
fn test_missing_artifact_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        QuoteStore::load(&dir.path().join("absent.json"), 50).unwrap_err(),
        Error::Io(_)
    ));
}

#[test]
fn test_empty_artifact_loads_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    fs::write(&path, r#"{"version":"empty","quotes":[]}"#).unwrap();
    let store = QuoteStore::load(&path, 50).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_index_build_then_load() {
    let records = parse_records(
        r#"[
            {"quote":"Gratitude turns what we have into enough.","author":"Anonymous"},
            {"quote":"Gratitude turns what we have into enough!","author":"Someone"},
            {"quote":"Hope is being able to see that there is light despite all of the darkness.","author":"Desmond Tutu","category":"general"},
            {"text":"Fall seven times, stand up eight.","tags":"resilience, setback","emotion":"resilience"}
        ]"#,
    )
    .unwrap();

    let classifier = KeywordClassifier::builtin();
    let embedder = HashingEmbedder::new(64);
    let (artifact, report) = IndexBuilder::new(&classifier, "test-index")
        .with_embedder(&embedder)
        .build(records);
    assert_eq!(report.duplicates, 1);
    assert_eq!(report.kept, 3);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    fs::write(&path, artifact.to_json_pretty().unwrap()).unwrap();

    let store = QuoteStore::load(&path, 50).unwrap();
    assert_eq!(store.len(), 3);
    assert!(store.has_vectors());
    assert_eq!(store.quotes()[0].emotion, EmotionLabel::Gratitude);
    assert_eq!(store.quotes()[2].emotion, EmotionLabel::Resilience);
    assert!(store.quotes()[2].tags.contains("setback"));

    let reparsed = QuoteStoreArtifact::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(reparsed.version, "test-index");
}
