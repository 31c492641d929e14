//! # wiseai-engine
//!
//! Recommendation engine for WiseAI.
//!
//! [`RecommendationEngine`] turns free-form emotional text into a supportive
//! insight plus a ranked list of quotes. Dependencies (quote store,
//! classifier, embedder, random source) are injected through
//! [`RecommendationEngine::builder`] or loaded from the environment with
//! [`RecommendationEngine::from_config`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use wiseai_engine::{EngineConfig, RecommendationEngine};
//!
//! let engine = RecommendationEngine::from_config(EngineConfig::from_env())?;
//! let response = engine.recommend_default("I don't know what to do with my life")?;
//! println!("{}", response.insight);
//! ```

pub mod config;
pub mod engine;
pub mod stats;

// Re-export core types
pub use wiseai_core::*;

pub use config::EngineConfig;
pub use engine::{
    EmotionCatalogEntry, HealthReport, RecommendationEngine, RecommendationEngineBuilder,
};
pub use stats::{EngineStats, StatsSnapshot};
