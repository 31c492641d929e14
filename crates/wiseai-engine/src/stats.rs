//! Request counters shared across concurrent recommendations.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use wiseai_core::RankingMethod;

#[derive(Debug, Default)]
pub struct EngineStats {
    requests: AtomicU64,
    exact_match: AtomicU64,
    semantic: AtomicU64,
    fallback: AtomicU64,
    low_confidence: AtomicU64,
    no_quotes: AtomicU64,
}

/// Point-in-time copy of [`EngineStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub requests: u64,
    pub exact_match: u64,
    pub semantic: u64,
    pub fallback: u64,
    pub low_confidence: u64,
    pub no_quotes: u64,
}

impl EngineStats {
    pub fn record_method(&self, method: RankingMethod) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        let counter = match method {
            RankingMethod::ExactMatch => &self.exact_match,
            RankingMethod::Semantic => &self.semantic,
            RankingMethod::FallbackRandom => &self.fallback,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_low_confidence(&self) {
        self.low_confidence.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_no_quotes(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        self.no_quotes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            exact_match: self.exact_match.load(Ordering::Relaxed),
            semantic: self.semantic.load(Ordering::Relaxed),
            fallback: self.fallback.load(Ordering::Relaxed),
            low_confidence: self.low_confidence.load(Ordering::Relaxed),
            no_quotes: self.no_quotes.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_snapshot() {
        let stats = EngineStats::default();
        stats.record_method(RankingMethod::ExactMatch);
        stats.record_method(RankingMethod::FallbackRandom);
        stats.record_low_confidence();
        stats.record_no_quotes();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.requests, 3);
        assert_eq!(snapshot.exact_match, 1);
        assert_eq!(snapshot.fallback, 1);
        assert_eq!(snapshot.semantic, 0);
        assert_eq!(snapshot.low_confidence, 1);
        assert_eq!(snapshot.no_quotes, 1);
    }
}
