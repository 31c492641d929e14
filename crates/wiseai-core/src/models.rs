//! Data model for quotes, classifications, and recommendation responses.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

// =============================================================================
// EMOTION VOCABULARY
// =============================================================================

/// Closed vocabulary of emotion labels.
///
/// Declaration order is the tie-break priority: when two labels score the
/// same, the one declared first wins. `Neutral` is last and is only chosen
/// when there is no signal at all.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Grief,
    Depression,
    Anxiety,
    Anger,
    Loneliness,
    Motivation,
    Resilience,
    Mindfulness,
    Gratitude,
    Happiness,
    Love,
    Hope,
    Wisdom,
    #[default]
    Neutral,
}

impl EmotionLabel {
    /// Every label, in priority order.
    pub const ALL: [EmotionLabel; 14] = [
        EmotionLabel::Grief,
        EmotionLabel::Depression,
        EmotionLabel::Anxiety,
        EmotionLabel::Anger,
        EmotionLabel::Loneliness,
        EmotionLabel::Motivation,
        EmotionLabel::Resilience,
        EmotionLabel::Mindfulness,
        EmotionLabel::Gratitude,
        EmotionLabel::Happiness,
        EmotionLabel::Love,
        EmotionLabel::Hope,
        EmotionLabel::Wisdom,
        EmotionLabel::Neutral,
    ];

    /// Lower-case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grief => "grief",
            Self::Depression => "depression",
            Self::Anxiety => "anxiety",
            Self::Anger => "anger",
            Self::Loneliness => "loneliness",
            Self::Motivation => "motivation",
            Self::Resilience => "resilience",
            Self::Mindfulness => "mindfulness",
            Self::Gratitude => "gratitude",
            Self::Happiness => "happiness",
            Self::Love => "love",
            Self::Hope => "hope",
            Self::Wisdom => "wisdom",
            Self::Neutral => "neutral",
        }
    }

    /// Position in the priority order (0 = highest priority).
    pub fn priority(&self) -> usize {
        Self::ALL
            .iter()
            .position(|label| label == self)
            .unwrap_or(Self::ALL.len())
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        // "general" is the catch-all label used by older quote datasets.
        if lowered == "general" {
            return Ok(Self::Neutral);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == lowered)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown emotion label: {}", s)))
    }
}

// =============================================================================
// QUOTES
// =============================================================================

/// A recommendable quote. Immutable once loaded into a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub emotion: EmotionLabel,
    /// Problem-category slugs derived at index-build time.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Optional embedding used for similarity scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector: Option<Vec<f32>>,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>, emotion: EmotionLabel) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            emotion,
            tags: BTreeSet::new(),
            vector: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_vector(mut self, vector: Vec<f32>) -> Self {
        self.vector = Some(vector);
        self
    }

    /// Whitespace-delimited word count of the quote text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

// =============================================================================
// PROBLEM CATEGORIES
// =============================================================================

/// A life-situation category associated with an emotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemCategory {
    pub emotion: EmotionLabel,
    /// Short slug, e.g. `lack-of-direction`.
    pub problem: &'static str,
    /// Short slug naming the suggested approach.
    pub solution: &'static str,
    /// One supportive sentence appended to insights.
    pub guidance: &'static str,
    /// Keywords that bias ranking toward quotes mentioning them.
    pub search_terms: &'static [&'static str],
}

impl ProblemCategory {
    /// The generic "no specific problem" category.
    pub fn is_general(&self) -> bool {
        self.problem == crate::problems::GENERAL_PROBLEM
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Output of an emotion classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub emotion: EmotionLabel,
    /// Ordering signal in [0, 1]; equals `distribution[emotion]`.
    pub confidence: f64,
    /// Probability per vocabulary label, summing to 1.
    pub distribution: BTreeMap<EmotionLabel, f64>,
}

impl ClassificationResult {
    /// The "no signal" result: neutral with zero confidence, remaining mass
    /// spread uniformly over every other label.
    pub fn no_signal() -> Self {
        let others = (EmotionLabel::ALL.len() - 1) as f64;
        let distribution = EmotionLabel::ALL
            .iter()
            .map(|label| {
                let p = if *label == EmotionLabel::Neutral {
                    0.0
                } else {
                    1.0 / others
                };
                (*label, p)
            })
            .collect();
        Self {
            emotion: EmotionLabel::Neutral,
            confidence: 0.0,
            distribution,
        }
    }

    /// Probability assigned to a label (0 when absent).
    pub fn probability(&self, label: EmotionLabel) -> f64 {
        self.distribution.get(&label).copied().unwrap_or(0.0)
    }
}

// =============================================================================
// RECOMMENDATION
// =============================================================================

/// Which ranking path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RankingMethod {
    /// Candidates matched the mapped categories; lexical + category scoring.
    ExactMatch,
    /// Candidates matched and vector similarity contributed to the score.
    Semantic,
    /// No candidate matched; the whole store was ranked.
    FallbackRandom,
}

impl RankingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExactMatch => "exact-match",
            Self::Semantic => "semantic",
            Self::FallbackRandom => "fallback-random",
        }
    }
}

impl fmt::Display for RankingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A quote paired with its relevance score in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedQuote {
    #[serde(flatten)]
    pub quote: Quote,
    pub relevance_score: f32,
}

/// Complete answer to one recommendation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub request_id: Uuid,
    pub insight: String,
    pub quotes: Vec<RankedQuote>,
    pub detected_emotion: EmotionLabel,
    pub confidence: f64,
    pub emotion_probabilities: BTreeMap<EmotionLabel, f64>,
    /// Primary problem category slug, absent for the generic category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
    pub method: RankingMethod,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emotion_label_roundtrip_str() {
        for label in EmotionLabel::ALL {
            let parsed: EmotionLabel = label.as_str().parse().unwrap();
            assert_eq!(parsed, label);
        }
    }

    #[test]
    fn test_emotion_label_parse_is_case_insensitive() {
        assert_eq!("  Grief ".parse::<EmotionLabel>().unwrap(), EmotionLabel::Grief);
        assert_eq!("HOPE".parse::<EmotionLabel>().unwrap(), EmotionLabel::Hope);
    }

    #[test]
    fn test_general_maps_to_neutral() {
        assert_eq!(
            "general".parse::<EmotionLabel>().unwrap(),
            EmotionLabel::Neutral
        );
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let err = "melancholy".parse::<EmotionLabel>().unwrap_err();
        assert!(err.to_string().contains("melancholy"));
    }

    #[test]
    fn test_priority_follows_declaration_order() {
        assert_eq!(EmotionLabel::Grief.priority(), 0);
        assert!(EmotionLabel::Motivation.priority() < EmotionLabel::Gratitude.priority());
        assert_eq!(EmotionLabel::Neutral.priority(), EmotionLabel::ALL.len() - 1);
    }

    #[test]
    fn test_emotion_label_serde_lowercase() {
        let json = serde_json::to_string(&EmotionLabel::Loneliness).unwrap();
        assert_eq!(json, "\"loneliness\"");
    }

    #[test]
    fn test_ranking_method_serde_kebab_case() {
        let json = serde_json::to_string(&RankingMethod::FallbackRandom).unwrap();
        assert_eq!(json, "\"fallback-random\"");
        assert_eq!(RankingMethod::ExactMatch.to_string(), "exact-match");
    }

    #[test]
    fn test_no_signal_distribution_sums_to_one() {
        let result = ClassificationResult::no_signal();
        let total: f64 = result.distribution.values().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(result.confidence, result.probability(EmotionLabel::Neutral));
        assert_eq!(result.distribution.len(), EmotionLabel::ALL.len());
    }

    #[test]
    fn test_quote_word_count() {
        let quote = Quote::new("This too shall pass", "Persian adage", EmotionLabel::Hope);
        assert_eq!(quote.word_count(), 4);
    }

    #[test]
    fn test_quote_vector_is_omitted_when_absent() {
        let quote = Quote::new("Breathe.", "Anonymous", EmotionLabel::Mindfulness);
        let json = serde_json::to_value(&quote).unwrap();
        assert!(json.get("vector").is_none());
    }
}
