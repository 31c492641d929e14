//! Ranking weights and ranker configuration.
//!
//! The relevance score is a weighted mean of three terms, each in [0, 1]:
//! category priority, lexical overlap with the user's text, and vector
//! similarity. When similarity is unavailable for a request its weight is
//! dropped and the mean is taken over the remaining two.

use serde::{Deserialize, Serialize};
use tracing::debug;

use wiseai_core::defaults::{
    CATEGORY_WEIGHT, LEXICAL_SATURATION_HITS, LEXICAL_WEIGHT, NEAR_TIE_EPSILON, SEMANTIC_WEIGHT,
};
use wiseai_core::{Error, Result};

/// Weights of the three score terms. Need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingWeights {
    /// Weight for category priority (emotion match and tag position)
    pub category: f32,
    /// Weight for lexical overlap with the user's text and search terms
    pub lexical: f32,
    /// Weight for cosine similarity between query and quote vectors
    pub semantic: f32,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            category: CATEGORY_WEIGHT,
            lexical: LEXICAL_WEIGHT,
            semantic: SEMANTIC_WEIGHT,
        }
    }
}

impl RankingWeights {
    pub fn validate(&self) -> Result<()> {
        let all = [
            ("category", self.category),
            ("lexical", self.lexical),
            ("semantic", self.semantic),
        ];
        for (name, weight) in all {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::Config(format!(
                    "{} weight must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }
        if self.category + self.lexical <= 0.0 {
            return Err(Error::Config(
                "category and lexical weights cannot both be zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Weighted mean of the score terms. `semantic` is `None` when no
    /// similarity is available, which removes its weight from the mean.
    pub fn combine(&self, category: f32, lexical: f32, semantic: Option<f32>) -> f32 {
        let (sum, total) = match semantic {
            Some(similarity) => (
                self.category * category + self.lexical * lexical + self.semantic * similarity,
                self.category + self.lexical + self.semantic,
            ),
            None => (
                self.category * category + self.lexical * lexical,
                self.category + self.lexical,
            ),
        };
        if total <= 0.0 {
            return 0.0;
        }
        (sum / total).clamp(0.0, 1.0)
    }
}

/// Configuration of a [`crate::QuoteRanker`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankerConfig {
    pub weights: RankingWeights,
    /// Shuffle runs of near-equal scores before truncation.
    pub shuffle_near_ties: bool,
    /// Scores within this distance of a run's leader belong to the run.
    pub near_tie_epsilon: f32,
    /// Distinct lexical hits at which the lexical term reaches 1.0.
    pub lexical_saturation: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            weights: RankingWeights::default(),
            shuffle_near_ties: true,
            near_tie_epsilon: NEAR_TIE_EPSILON,
            lexical_saturation: LEXICAL_SATURATION_HITS,
        }
    }
}

impl RankerConfig {
    /// Deterministic ordering: no near-tie shuffling.
    pub fn deterministic() -> Self {
        Self {
            shuffle_near_ties: false,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        if !self.near_tie_epsilon.is_finite() || self.near_tie_epsilon < 0.0 {
            return Err(Error::Config(format!(
                "near-tie epsilon must be non-negative, got {}",
                self.near_tie_epsilon
            )));
        }
        if self.lexical_saturation == 0 {
            return Err(Error::Config(
                "lexical saturation must be at least 1".to_string(),
            ));
        }
        debug!(
            category_weight = self.weights.category,
            lexical_weight = self.weights.lexical,
            semantic_weight = self.weights.semantic,
            shuffle_near_ties = self.shuffle_near_ties,
            "Ranker config validated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let w = RankingWeights::default();
        assert_eq!(w.category, 0.5);
        assert_eq!(w.lexical, 0.3);
        assert_eq!(w.semantic, 0.2);
    }

    #[test]
    fn test_combine_with_semantic() {
        let w = RankingWeights::default();
        let score = w.combine(1.0, 0.0, Some(1.0));
        assert!((score - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_combine_drops_semantic_weight() {
        let w = RankingWeights::default();
        let score = w.combine(1.0, 1.0, None);
        assert!((score - 1.0).abs() < 1e-6);
        let score = w.combine(1.0, 0.0, None);
        assert!((score - 0.625).abs() < 1e-6);
    }

    #[test]
    fn test_combine_is_clamped() {
        let w = RankingWeights::default();
        assert_eq!(w.combine(2.0, 2.0, Some(2.0)), 1.0);
        assert_eq!(w.combine(0.0, 0.0, Some(0.0)), 0.0);
    }

    #[test]
    fn test_validate_rejects_negative_and_all_zero() {
        let negative = RankingWeights {
            category: -0.1,
            ..Default::default()
        };
        assert!(negative.validate().is_err());

        let zero = RankingWeights {
            category: 0.0,
            lexical: 0.0,
            semantic: 1.0,
        };
        assert!(zero.validate().is_err());
        assert!(RankingWeights::default().validate().is_ok());
    }

    #[test]
    fn test_config_validate() {
        assert!(RankerConfig::default().validate().is_ok());
        let bad = RankerConfig {
            lexical_saturation: 0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
        let bad = RankerConfig {
            near_tie_epsilon: f32::NAN,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_deterministic_disables_shuffle() {
        assert!(!RankerConfig::deterministic().shuffle_near_ties);
        assert!(RankerConfig::default().shuffle_near_ties);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = RankerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: RankerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
