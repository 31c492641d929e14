//! Test fixtures shared by unit and integration tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wiseai_store::test_fixtures::{fixture_store, write_artifact};
//!
//! let store = fixture_store();
//! let dir = tempfile::tempdir().unwrap();
//! let path = write_artifact(dir.path(), &store);
//! ```

use std::path::{Path, PathBuf};

use wiseai_core::{EmotionLabel, Quote};

use crate::artifact::{QuoteRecord, QuoteStoreArtifact};
use crate::store::QuoteStore;

/// Version written by [`write_artifact`].
pub const FIXTURE_VERSION: &str = "fixture-1";

/// A small labelled corpus spanning several emotions.
///
/// Order matters: tests rely on insertion order for tie-breaking.
pub fn fixture_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The purpose of life is a life of purpose.",
            "Robert Byrne",
            EmotionLabel::Motivation,
        )
        .with_tag("lack-of-direction"),
        Quote::new(
            "Not all those who wander are lost.",
            "J.R.R. Tolkien",
            EmotionLabel::Motivation,
        )
        .with_tag("lack-of-direction"),
        Quote::new(
            "The secret of getting ahead is getting started.",
            "Mark Twain",
            EmotionLabel::Motivation,
        )
        .with_tag("procrastination"),
        Quote::new(
            "Gratitude turns what we have into enough.",
            "Anonymous",
            EmotionLabel::Gratitude,
        )
        .with_tag("appreciation"),
        Quote::new(
            "Enjoy the little things, for one day you may look back and realize they were the big things.",
            "Robert Brault",
            EmotionLabel::Gratitude,
        )
        .with_tag("appreciation"),
        Quote::new(
            "What we have once enjoyed we can never lose.",
            "Helen Keller",
            EmotionLabel::Grief,
        )
        .with_tag("loss-of-loved-one"),
        Quote::new(
            "Nothing diminishes anxiety faster than action.",
            "Walter Anderson",
            EmotionLabel::Anxiety,
        )
        .with_tag("overthinking"),
        Quote::new(
            "Fall seven times, stand up eight.",
            "Japanese Proverb",
            EmotionLabel::Resilience,
        )
        .with_tag("setback"),
        Quote::new(
            "Once you choose hope, anything is possible.",
            "Christopher Reeve",
            EmotionLabel::Hope,
        )
        .with_tag("uncertain-future"),
        Quote::new(
            "Every day is a new beginning.",
            "Anonymous",
            EmotionLabel::Neutral,
        ),
    ]
}

/// [`QuoteStore`] over [`fixture_quotes`].
pub fn fixture_store() -> QuoteStore {
    QuoteStore::from_quotes(fixture_quotes())
}

/// Artifact holding the quotes of `store`.
pub fn artifact_for(store: &QuoteStore) -> QuoteStoreArtifact {
    QuoteStoreArtifact {
        version: FIXTURE_VERSION.to_string(),
        vector_model: store.vector_model().cloned(),
        quotes: store.iter().map(QuoteRecord::from_quote).collect(),
    }
}

/// Write `store` as an artifact file `quotes.json` under `dir`.
pub fn write_artifact(dir: &Path, store: &QuoteStore) -> PathBuf {
    let path = dir.join("quotes.json");
    let json = artifact_for(store)
        .to_json_pretty()
        .expect("fixture artifact serializes");
    std::fs::write(&path, json).expect("fixture artifact is writable");
    path
}
