//! Engine configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `WISEAI_STORE_PATH` | (none, required by the CLI) |
//! | `WISEAI_CLASSIFIER_PATH` | (none, built-in lexicon) |
//! | `WISEAI_RECOMMEND_LIMIT` | 5 |
//! | `WISEAI_MAX_QUOTE_WORDS` | 50 |
//! | `WISEAI_NEAR_TIE_SHUFFLE` | true |
//! | `WISEAI_NEAR_TIE_EPSILON` | 1e-6 |
//! | `WISEAI_RANDOM_SEED` | (none, thread RNG) |
//! | `WISEAI_LOW_CONFIDENCE` | 0.2 |
//! | `WISEAI_EMBED_DIMENSION` | 256 |
//! | `WISEAI_WEIGHT_CATEGORY` / `_LEXICAL` / `_SEMANTIC` | 0.5 / 0.3 / 0.2 |

use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use tracing::warn;

use wiseai_core::defaults::{
    EMBED_DIMENSION, LOW_CONFIDENCE_THRESHOLD, MAX_QUOTE_WORDS, RECOMMEND_LIMIT,
    RECOMMEND_LIMIT_MAX,
};
use wiseai_core::{Error, Result};
use wiseai_search::{RankerConfig, RankingWeights};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineConfig {
    pub store_path: Option<PathBuf>,
    pub classifier_path: Option<PathBuf>,
    /// Number of quotes returned when the caller gives no limit.
    pub default_limit: usize,
    /// Quotes longer than this are dropped when the store loads.
    pub max_quote_words: usize,
    pub ranker: RankerConfig,
    /// Seed for a reproducible random source.
    pub random_seed: Option<u64>,
    pub low_confidence_threshold: f64,
    pub embed_dimension: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            classifier_path: None,
            default_limit: RECOMMEND_LIMIT,
            max_quote_words: MAX_QUOTE_WORDS,
            ranker: RankerConfig::default(),
            random_seed: None,
            low_confidence_threshold: LOW_CONFIDENCE_THRESHOLD,
            embed_dimension: EMBED_DIMENSION,
        }
    }
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup` (variable name → value).
    /// Unparseable values are logged and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let path = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        };

        let weights = RankingWeights {
            category: parse_or(&lookup, "WISEAI_WEIGHT_CATEGORY", defaults.ranker.weights.category),
            lexical: parse_or(&lookup, "WISEAI_WEIGHT_LEXICAL", defaults.ranker.weights.lexical),
            semantic: parse_or(&lookup, "WISEAI_WEIGHT_SEMANTIC", defaults.ranker.weights.semantic),
        };

        let shuffle_near_ties = match lookup("WISEAI_NEAR_TIE_SHUFFLE") {
            Some(v) => !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off"),
            None => defaults.ranker.shuffle_near_ties,
        };

        Self {
            store_path: path("WISEAI_STORE_PATH"),
            classifier_path: path("WISEAI_CLASSIFIER_PATH"),
            default_limit: parse_or(&lookup, "WISEAI_RECOMMEND_LIMIT", defaults.default_limit),
            max_quote_words: parse_or(&lookup, "WISEAI_MAX_QUOTE_WORDS", defaults.max_quote_words),
            ranker: RankerConfig {
                weights,
                shuffle_near_ties,
                near_tie_epsilon: parse_or(
                    &lookup,
                    "WISEAI_NEAR_TIE_EPSILON",
                    defaults.ranker.near_tie_epsilon,
                ),
                lexical_saturation: defaults.ranker.lexical_saturation,
            },
            random_seed: parse_optional(&lookup, "WISEAI_RANDOM_SEED"),
            low_confidence_threshold: parse_or(
                &lookup,
                "WISEAI_LOW_CONFIDENCE",
                defaults.low_confidence_threshold,
            ),
            embed_dimension: parse_or(&lookup, "WISEAI_EMBED_DIMENSION", defaults.embed_dimension),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=RECOMMEND_LIMIT_MAX).contains(&self.default_limit) {
            return Err(Error::Config(format!(
                "default limit must be between 1 and {}, got {}",
                RECOMMEND_LIMIT_MAX, self.default_limit
            )));
        }
        if self.max_quote_words == 0 {
            return Err(Error::Config(
                "max quote words must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.low_confidence_threshold) {
            return Err(Error::Config(format!(
                "low confidence threshold must be within [0, 1], got {}",
                self.low_confidence_threshold
            )));
        }
        if self.embed_dimension == 0 {
            return Err(Error::Config(
                "embedding dimension must be at least 1".to_string(),
            ));
        }
        self.ranker.validate()
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    parse_optional(lookup, key).unwrap_or(default)
}

/// Parsed value of `key`, or `None` when it is unset or unparseable.
fn parse_optional<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(variable = key, value = %raw, "Unparseable value, using default");
            None
        }
    }
}
