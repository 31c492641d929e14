//! On-disk quote-store artifact format and structural validation.
//!
//! ```json
//! {
//!   "version": "2026.10.1",
//!   "vector_model": { "name": "hashing-bow", "dimension": 256 },
//!   "quotes": [
//!     { "text": "...", "author": "...", "emotion": "hope",
//!       "tags": ["lack-of-direction"], "vector": [0.1, ...] }
//!   ]
//! }
//! ```
//!
//! Validation is structural only. Any violation is fatal at load time.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use wiseai_core::defaults::DEFAULT_AUTHOR;
use wiseai_core::{EmotionLabel, Error, Quote, Result};

/// Embedding model the stored quote vectors were produced with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorModelInfo {
    pub name: String,
    pub dimension: usize,
}

/// One quote as stored in the artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub emotion: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector: Option<Vec<f32>>,
}

/// Complete quote-store artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteStoreArtifact {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_model: Option<VectorModelInfo>,
    pub quotes: Vec<QuoteRecord>,
}

impl QuoteRecord {
    pub fn from_quote(quote: &Quote) -> Self {
        Self {
            text: quote.text.clone(),
            author: Some(quote.author.clone()),
            emotion: quote.emotion.as_str().to_string(),
            tags: quote.tags.iter().cloned().collect(),
            vector: quote.vector.clone(),
        }
    }
}

impl QuoteStoreArtifact {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::Artifact(format!("Invalid quote-store artifact: {}", e)))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate every record and convert to [`Quote`]s, preserving order.
    pub fn into_quotes(self) -> Result<(Vec<Quote>, Option<VectorModelInfo>)> {
        if let Some(model) = &self.vector_model {
            if model.dimension == 0 {
                return Err(Error::Artifact(format!(
                    "vector model '{}' declares dimension 0",
                    model.name
                )));
            }
        }

        let mut quotes = Vec::with_capacity(self.quotes.len());
        for (index, record) in self.quotes.into_iter().enumerate() {
            quotes.push(record.into_quote(index, self.vector_model.as_ref())?);
        }
        Ok((quotes, self.vector_model))
    }
}

impl QuoteRecord {
    fn into_quote(self, index: usize, model: Option<&VectorModelInfo>) -> Result<Quote> {
        let text = self.text.trim().to_string();
        if text.is_empty() {
            return Err(Error::Artifact(format!("quote {} has empty text", index)));
        }

        let emotion: EmotionLabel = self.emotion.parse().map_err(|_| {
            Error::Artifact(format!(
                "quote {} has unknown emotion '{}'",
                index, self.emotion
            ))
        })?;

        if let Some(vector) = &self.vector {
            let model = model.ok_or_else(|| {
                Error::Artifact(format!(
                    "quote {} has a vector but the artifact declares no vector_model",
                    index
                ))
            })?;
            if vector.len() != model.dimension {
                return Err(Error::Artifact(format!(
                    "quote {} vector has {} components, expected {}",
                    index,
                    vector.len(),
                    model.dimension
                )));
            }
            if vector.iter().any(|x| !x.is_finite()) {
                return Err(Error::Artifact(format!(
                    "quote {} vector has a non-finite component",
                    index
                )));
            }
        }

        let author = self
            .author
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

        let tags: BTreeSet<String> = self
            .tags
            .into_iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        Ok(Quote {
            text,
            author,
            emotion,
            tags,
            vector: self.vector,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(json: &str) -> Result<(Vec<Quote>, Option<VectorModelInfo>)> {
        QuoteStoreArtifact::from_json(json)?.into_quotes()
    }

    #[test]
    fn test_minimal_artifact() {
        let (quotes, model) = artifact(
            r#"{"version":"1","quotes":[{"text":" Keep going. ","emotion":"resilience"}]}"#,
        )
        .unwrap();
        assert!(model.is_none());
        assert_eq!(quotes[0].text, "Keep going.");
        assert_eq!(quotes[0].author, "Anonymous");
        assert_eq!(quotes[0].emotion, EmotionLabel::Resilience);
    }

    #[test]
    fn test_general_emotion_is_neutral() {
        let (quotes, _) =
            artifact(r#"{"version":"1","quotes":[{"text":"Hi","emotion":"general"}]}"#).unwrap();
        assert_eq!(quotes[0].emotion, EmotionLabel::Neutral);
    }

    #[test]
    fn test_tags_are_lowercased() {
        let (quotes, _) = artifact(
            r#"{"version":"1","quotes":[{"text":"Hi","emotion":"hope","tags":["Lack-Of-Direction",""]}]}"#,
        )
        .unwrap();
        assert_eq!(quotes[0].tags.len(), 1);
        assert!(quotes[0].tags.contains("lack-of-direction"));
    }

    #[test]
    fn test_vectors_validated_against_model() {
        let ok = artifact(
            r#"{"version":"1","vector_model":{"name":"m","dimension":2},
                "quotes":[{"text":"Hi","emotion":"hope","vector":[0.6,0.8]}]}"#,
        );
        assert!(ok.is_ok());

        let cases = [
            r#"{"version":"1","quotes":[{"text":"Hi","emotion":"hope","vector":[1.0]}]}"#,
            r#"{"version":"1","vector_model":{"name":"m","dimension":2},
                "quotes":[{"text":"Hi","emotion":"hope","vector":[1.0]}]}"#,
            r#"{"version":"1","vector_model":{"name":"m","dimension":0},"quotes":[]}"#,
        ];
        for json in cases {
            assert!(matches!(artifact(json).unwrap_err(), Error::Artifact(_)), "{}", json);
        }
    }

    #[test]
    fn test_structural_errors_are_fatal() {
        let cases = [
            r#"{"version":"1","quotes":[{"text":"  ","emotion":"hope"}]}"#,
            r#"{"version":"1","quotes":[{"text":"Hi","emotion":"melancholy"}]}"#,
            r#"{"version":"1","quotes":[{"text":"Hi"}]}"#,
            r#"{"quotes":[]}"#,
            "not json",
        ];
        for json in cases {
            assert!(matches!(artifact(json).unwrap_err(), Error::Artifact(_)), "{}", json);
        }
    }

    #[test]
    fn test_record_from_quote_keeps_fields() {
        let quote = Quote::new("Breathe.", "Anonymous", EmotionLabel::Mindfulness)
            .with_tag("racing-thoughts");
        let record = QuoteRecord::from_quote(&quote);
        assert_eq!(record.emotion, "mindfulness");
        assert_eq!(record.tags, vec!["racing-thoughts".to_string()]);
    }
}
