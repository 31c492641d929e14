//! Weighted-keyword emotion classifier.
//!
//! Each emotion owns a list of weighted features (single words or
//! multi-word phrases). Input text is normalized and every feature present
//! on whole-word boundaries contributes its weight to the emotion's score.
//! The best-scoring emotion wins, ties going to the label declared first in
//! [`EmotionLabel::ALL`].
//!
//! Confidence is an ordering signal rather than a calibrated probability:
//! `score / min(total_weight, saturation)`, clamped to [1/14, 1] once any
//! feature matched. The rest of the distribution goes to the other labels
//! by score, each capped at the winner's confidence, so the detected
//! emotion is always the most probable label.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use wiseai_core::artifact::read_artifact;
use wiseai_core::defaults::{BUILTIN_LEXICON_VERSION, CONFIDENCE_SATURATION};
use wiseai_core::text::{contains_phrase, is_blank, normalize, padded};
use wiseai_core::{
    ArtifactInfo, ClassificationResult, EmotionClassifier, EmotionLabel, Error, Result,
};

use crate::lexicon::BUILTIN_LEXICON;

// =============================================================================
// ARTIFACT FORMAT
// =============================================================================

/// On-disk keyword model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordModel {
    pub version: String,
    #[serde(default = "default_saturation")]
    pub saturation: f64,
    pub emotions: Vec<EmotionFeatures>,
}

/// Weighted features owned by one emotion label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionFeatures {
    pub label: String,
    #[serde(default)]
    pub features: Vec<WeightedFeature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedFeature {
    pub term: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_saturation() -> f64 {
    CONFIDENCE_SATURATION
}

fn default_weight() -> f64 {
    1.0
}

impl KeywordModel {
    /// The built-in lexicon expressed as a model, e.g. for exporting a
    /// starting point that operators can tune.
    pub fn builtin() -> Self {
        Self {
            version: BUILTIN_LEXICON_VERSION.to_string(),
            saturation: CONFIDENCE_SATURATION,
            emotions: BUILTIN_LEXICON
                .iter()
                .map(|(label, features)| EmotionFeatures {
                    label: label.as_str().to_string(),
                    features: features
                        .iter()
                        .map(|(term, weight)| WeightedFeature {
                            term: term.to_string(),
                            weight: *weight,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Parse a model from JSON. Structural problems are reported as
    /// [`Error::Artifact`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::Artifact(format!("Invalid classifier artifact: {}", e)))
    }
}

// =============================================================================
// CLASSIFIER
// =============================================================================

#[derive(Debug, Clone)]
struct CompiledEmotion {
    label: EmotionLabel,
    /// Normalized terms with their weights.
    features: Vec<(String, f64)>,
    total_weight: f64,
}

/// Emotion classifier backed by a [`KeywordModel`].
///
/// Immutable after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    /// Sorted by label priority.
    emotions: Vec<CompiledEmotion>,
    saturation: f64,
    info: ArtifactInfo,
}

impl KeywordClassifier {
    /// Compile and validate a model.
    pub fn from_model(model: KeywordModel) -> Result<Self> {
        Self::compile(model, None, None)
    }

    /// Load a model artifact from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let start = Instant::now();
        let (content, checksum) = read_artifact(path)?;
        let model = KeywordModel::from_json(&content)
            .map_err(|e| Error::Artifact(format!("{}: {}", path.display(), e)))?;
        let classifier = Self::compile(
            model,
            Some(checksum),
            Some(path.display().to_string()),
        )?;

        info!(
            subsystem = "inference",
            component = "keyword_classifier",
            op = "load",
            artifact_path = %path.display(),
            artifact_version = %classifier.info.version,
            artifact_checksum = classifier.info.checksum.as_deref().unwrap_or(""),
            emotion_count = classifier.emotions.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Classifier artifact loaded"
        );
        Ok(classifier)
    }

    /// Classifier over the compiled-in lexicon.
    pub fn builtin() -> Self {
        let mut emotions: Vec<CompiledEmotion> = BUILTIN_LEXICON
            .iter()
            .map(|(label, features)| CompiledEmotion {
                label: *label,
                features: features
                    .iter()
                    .map(|(term, weight)| (term.to_string(), *weight))
                    .collect(),
                total_weight: features.iter().map(|(_, w)| w).sum(),
            })
            .collect();
        emotions.sort_by_key(|e| e.label.priority());

        Self {
            emotions,
            saturation: CONFIDENCE_SATURATION,
            info: ArtifactInfo::builtin(BUILTIN_LEXICON_VERSION),
        }
    }

    /// Identity of the loaded model.
    pub fn info(&self) -> &ArtifactInfo {
        &self.info
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    fn compile(
        model: KeywordModel,
        checksum: Option<String>,
        path: Option<String>,
    ) -> Result<Self> {
        if !model.saturation.is_finite() || model.saturation <= 0.0 {
            return Err(Error::Artifact(format!(
                "saturation must be positive, got {}",
                model.saturation
            )));
        }
        if model.emotions.is_empty() {
            return Err(Error::Artifact(
                "classifier artifact declares no emotions".to_string(),
            ));
        }

        let mut seen_labels = HashSet::new();
        let mut emotions = Vec::with_capacity(model.emotions.len());

        for entry in model.emotions {
            let label: EmotionLabel = entry.label.parse().map_err(|_| {
                Error::Artifact(format!("unknown emotion label '{}'", entry.label))
            })?;
            if !seen_labels.insert(label) {
                return Err(Error::Artifact(format!("duplicate emotion label '{}'", label)));
            }
            if label == EmotionLabel::Neutral {
                if !entry.features.is_empty() {
                    return Err(Error::Artifact(
                        "neutral must not declare features".to_string(),
                    ));
                }
                continue;
            }

            let mut seen_terms = HashSet::new();
            let mut features = Vec::with_capacity(entry.features.len());
            for feature in entry.features {
                let term = normalize(&feature.term);
                if term.is_empty() {
                    return Err(Error::Artifact(format!(
                        "empty term in features of '{}'",
                        label
                    )));
                }
                if !feature.weight.is_finite() || feature.weight <= 0.0 {
                    return Err(Error::Artifact(format!(
                        "weight of '{}' in '{}' must be positive, got {}",
                        feature.term, label, feature.weight
                    )));
                }
                if !seen_terms.insert(term.clone()) {
                    warn!(
                        subsystem = "inference",
                        component = "keyword_classifier",
                        emotion = %label,
                        term = %term,
                        "Duplicate feature ignored"
                    );
                    continue;
                }
                features.push((term, feature.weight));
            }

            let total_weight = features.iter().map(|(_, w)| w).sum();
            emotions.push(CompiledEmotion {
                label,
                features,
                total_weight,
            });
        }
        emotions.sort_by_key(|e| e.label.priority());

        Ok(Self {
            emotions,
            saturation: model.saturation,
            info: ArtifactInfo {
                version: model.version,
                checksum,
                path,
            },
        })
    }

    /// Raw per-emotion scores for normalized, padded text.
    fn scores(&self, padded_text: &str) -> Vec<(EmotionLabel, f64, f64)> {
        self.emotions
            .iter()
            .map(|emotion| {
                let score: f64 = emotion
                    .features
                    .iter()
                    .filter(|(term, _)| contains_phrase(padded_text, term))
                    .map(|(_, weight)| weight)
                    .sum();
                (emotion.label, score, emotion.total_weight)
            })
            .collect()
    }
}

impl EmotionClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> ClassificationResult {
        if is_blank(text) {
            debug!(
                subsystem = "inference",
                component = "keyword_classifier",
                op = "classify",
                input_len = text.len(),
                "Blank input, no signal"
            );
            return ClassificationResult::no_signal();
        }

        let padded_text = padded(&normalize(text));
        let scores = self.scores(&padded_text);

        // Emotions are sorted by priority, so strict `>` keeps the first on ties.
        let mut winner: Option<(EmotionLabel, f64, f64)> = None;
        for &(label, score, total) in &scores {
            if score > 0.0 && winner.map_or(true, |(_, best, _)| score > best) {
                winner = Some((label, score, total));
            }
        }

        let Some((emotion, score, total_weight)) = winner else {
            debug!(
                subsystem = "inference",
                component = "keyword_classifier",
                op = "classify",
                input_len = text.len(),
                "No feature matched, no signal"
            );
            return ClassificationResult::no_signal();
        };

        let floor = 1.0 / EmotionLabel::ALL.len() as f64;
        let confidence = (score / total_weight.min(self.saturation)).clamp(floor, 1.0);

        let mut distribution: BTreeMap<EmotionLabel, f64> =
            EmotionLabel::ALL.iter().map(|label| (*label, 0.0)).collect();
        distribution.insert(emotion, confidence);

        // No other label may outweigh the winner. The floor on confidence
        // leaves the other labels room for the whole remainder.
        let scored: Vec<(EmotionLabel, f64)> = scores
            .iter()
            .filter(|(label, s, _)| *label != emotion && *s > 0.0)
            .map(|&(label, s, _)| (label, s))
            .collect();
        let unscored: Vec<(EmotionLabel, f64)> = EmotionLabel::ALL
            .iter()
            .copied()
            .filter(|label| *label != emotion && !scored.iter().any(|(l, _)| l == label))
            .map(|label| (label, 1.0))
            .collect();
        let left = fill_capped(&mut distribution, scored, 1.0 - confidence, confidence);
        fill_capped(&mut distribution, unscored, left, confidence);

        let matched: Vec<(&str, f64)> = scores
            .iter()
            .filter(|(_, s, _)| *s > 0.0)
            .map(|(label, s, _)| (label.as_str(), *s))
            .collect();
        trace!(
            subsystem = "inference",
            component = "keyword_classifier",
            scores = ?matched,
            "Emotion scores"
        );
        debug!(
            subsystem = "inference",
            component = "keyword_classifier",
            op = "classify",
            emotion = %emotion,
            confidence,
            input_len = text.len(),
            "Text classified"
        );

        ClassificationResult {
            emotion,
            confidence,
            distribution,
        }
    }

    fn labels(&self) -> Vec<EmotionLabel> {
        self.emotions
            .iter()
            .filter(|e| !e.features.is_empty())
            .map(|e| e.label)
            .collect()
    }

    fn name(&self) -> &str {
        &self.info.version
    }
}

/// Share `mass` over `open` in proportion to the weights, giving no label
/// more than `cap`. Returns the mass that did not fit.
fn fill_capped(
    distribution: &mut BTreeMap<EmotionLabel, f64>,
    mut open: Vec<(EmotionLabel, f64)>,
    mut mass: f64,
    cap: f64,
) -> f64 {
    while mass > 0.0 && !open.is_empty() {
        let total: f64 = open.iter().map(|(_, w)| w).sum();
        if total <= 0.0 {
            break;
        }
        let (capped, fits): (Vec<_>, Vec<_>) = open
            .into_iter()
            .partition(|(_, w)| mass * w / total > cap);
        if capped.is_empty() {
            for (label, w) in fits {
                distribution.insert(label, mass * w / total);
            }
            return 0.0;
        }
        mass -= cap * capped.len() as f64;
        for (label, _) in capped {
            distribution.insert(label, cap);
        }
        open = fits;
    }
    mass.max(0.0)
}
