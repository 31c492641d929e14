//! Quote-store artifact assembly from raw quote records.
//!
//! Pipeline, per record in input order:
//! 1. drop empty text and exact duplicates (by normalized text, first wins)
//! 2. drop quotes over the word limit
//! 3. keep a valid specific emotion label, otherwise label with the
//!    classifier (text plus raw tags)
//! 4. derive problem-category tags from category search terms
//! 5. attach a vector when an embedder is configured

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use wiseai_core::defaults::{DEFAULT_AUTHOR, INDEX_MAX_QUOTE_WORDS};
use wiseai_core::text::{contains_phrase, normalize, padded};
use wiseai_core::{
    EmotionClassifier, EmotionLabel, Error, ProblemMapper, QueryEmbedder, Result,
};

use crate::artifact::{QuoteRecord, QuoteStoreArtifact, VectorModelInfo};

/// Distinct search-term hits needed to tag a quote with a category of
/// another emotion. Categories of the quote's own emotion need one.
const CROSS_EMOTION_TAG_HITS: usize = 2;

/// Raw tags arrive either as a list or as one comma-separated string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTags {
    List(Vec<String>),
    Text(String),
}

impl Default for RawTags {
    fn default() -> Self {
        RawTags::List(Vec::new())
    }
}

impl RawTags {
    fn values(&self) -> Vec<String> {
        match self {
            RawTags::List(tags) => tags.clone(),
            RawTags::Text(text) => text.split(',').map(str::to_string).collect(),
        }
    }
}

/// One input record for index building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawQuoteRecord {
    #[serde(alias = "text")]
    pub quote: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: RawTags,
    #[serde(default, alias = "category")]
    pub emotion: Option<String>,
}

impl RawQuoteRecord {
    pub fn new(quote: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            author: None,
            tags: RawTags::default(),
            emotion: None,
        }
    }
}

/// Parse a JSON array of raw quote records.
pub fn parse_records(json: &str) -> Result<Vec<RawQuoteRecord>> {
    serde_json::from_str(json)
        .map_err(|e| Error::InvalidInput(format!("Invalid raw quote records: {}", e)))
}

/// Counters describing one index build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexReport {
    pub input: usize,
    pub kept: usize,
    pub empty: usize,
    pub duplicates: usize,
    pub too_long: usize,
    pub labelled: usize,
    pub vectors: usize,
}

/// Assembles a [`QuoteStoreArtifact`] from raw records.
pub struct IndexBuilder<'a> {
    classifier: &'a dyn EmotionClassifier,
    embedder: Option<&'a dyn QueryEmbedder>,
    mapper: ProblemMapper,
    max_words: usize,
    version: String,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(classifier: &'a dyn EmotionClassifier, version: impl Into<String>) -> Self {
        Self {
            classifier,
            embedder: None,
            mapper: ProblemMapper::new(),
            max_words: INDEX_MAX_QUOTE_WORDS,
            version: version.into(),
        }
    }

    pub fn with_embedder(mut self, embedder: &'a dyn QueryEmbedder) -> Self {
        self.embedder = Some(embedder);
        self
    }

    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    pub fn build(&self, records: Vec<RawQuoteRecord>) -> (QuoteStoreArtifact, IndexReport) {
        let mut report = IndexReport {
            input: records.len(),
            ..Default::default()
        };
        let mut seen = HashSet::new();
        let mut quotes = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            let text = record.quote.trim().to_string();
            let normalized = normalize(&text);
            if normalized.is_empty() {
                report.empty += 1;
                continue;
            }
            if !seen.insert(normalized.clone()) {
                report.duplicates += 1;
                continue;
            }
            if text.split_whitespace().count() > self.max_words {
                report.too_long += 1;
                continue;
            }

            let raw_tags = record.tags.values();
            let emotion = match self.declared_emotion(index, record.emotion.as_deref()) {
                Some(emotion) => emotion,
                None => {
                    report.labelled += 1;
                    let input = format!("{} {}", text, raw_tags.join(" "));
                    self.classifier.classify(&input).emotion
                }
            };

            let tags = self.derive_tags(emotion, &padded(&normalized), &raw_tags);
            let vector = self.embedder.and_then(|e| e.embed(&text));
            if vector.is_some() {
                report.vectors += 1;
            }

            let author = record
                .author
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

            quotes.push(QuoteRecord {
                text,
                author: Some(author),
                emotion: emotion.as_str().to_string(),
                tags: tags.into_iter().collect(),
                vector,
            });
        }

        report.kept = quotes.len();
        let vector_model = self.embedder.map(|e| VectorModelInfo {
            name: e.name().to_string(),
            dimension: e.dimension(),
        });

        info!(
            subsystem = "store",
            component = "index_builder",
            op = "build",
            input = report.input,
            kept = report.kept,
            duplicates = report.duplicates,
            too_long = report.too_long,
            labelled = report.labelled,
            classifier = self.classifier.name(),
            "Quote index built"
        );

        (
            QuoteStoreArtifact {
                version: self.version.clone(),
                vector_model,
                quotes,
            },
            report,
        )
    }

    /// A usable specific label from the record, if any. `general` and
    /// missing labels are relabelled; unknown ones too, with a warning.
    fn declared_emotion(&self, index: usize, label: Option<&str>) -> Option<EmotionLabel> {
        let label = label?.trim();
        if label.is_empty() {
            return None;
        }
        match label.parse::<EmotionLabel>() {
            Ok(EmotionLabel::Neutral) => None,
            Ok(emotion) => Some(emotion),
            Err(_) => {
                warn!(
                    subsystem = "store",
                    component = "index_builder",
                    quote_index = index,
                    label,
                    "Unknown emotion label, relabelling with classifier"
                );
                None
            }
        }
    }

    fn derive_tags(
        &self,
        emotion: EmotionLabel,
        padded_text: &str,
        raw_tags: &[String],
    ) -> BTreeSet<String> {
        let mut tags = BTreeSet::new();

        for raw in raw_tags {
            let slug = raw.trim().to_lowercase();
            if let Some(category) = self.mapper.find_problem(&slug) {
                if !category.is_general() {
                    tags.insert(slug);
                }
            }
        }

        for category in self.mapper.all_categories().filter(|c| !c.is_general()) {
            let hits = category
                .search_terms
                .iter()
                .filter(|term| contains_phrase(padded_text, term))
                .count();
            let needed = if category.emotion == emotion {
                1
            } else {
                CROSS_EMOTION_TAG_HITS
            };
            if hits >= needed {
                tags.insert(category.problem.to_string());
            }
        }

        debug!(
            subsystem = "store",
            component = "index_builder",
            emotion = %emotion,
            tag_count = tags.len(),
            "Derived problem tags"
        );
        tags
    }
}
