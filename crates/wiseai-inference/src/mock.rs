//! Mock emotion classifier for deterministic testing.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wiseai_inference::mock::MockClassifier;
//!
//! let classifier = MockClassifier::new()
//!     .with_mapping("I miss her", EmotionLabel::Grief, 0.9);
//!
//! let result = classifier.classify("I miss her");
//! assert_eq!(result.emotion, EmotionLabel::Grief);
//! assert_eq!(classifier.classify_call_count(), 1);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use wiseai_core::{ClassificationResult, EmotionClassifier, EmotionLabel};

/// Mock classifier returning canned results.
#[derive(Clone)]
pub struct MockClassifier {
    config: Arc<MockConfig>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

#[derive(Debug, Clone)]
struct MockConfig {
    default_result: ClassificationResult,
    mappings: HashMap<String, ClassificationResult>,
}

#[derive(Debug, Clone)]
pub struct MockCall {
    pub operation: String,
    pub input: String,
    pub timestamp: std::time::Instant,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            default_result: ClassificationResult::no_signal(),
            mappings: HashMap::new(),
        }
    }
}

/// Build a result where `emotion` holds `confidence` and the rest is spread
/// uniformly.
pub fn result_with(emotion: EmotionLabel, confidence: f64) -> ClassificationResult {
    let confidence = confidence.clamp(0.0, 1.0);
    let share = (1.0 - confidence) / (EmotionLabel::ALL.len() - 1) as f64;
    let distribution: BTreeMap<EmotionLabel, f64> = EmotionLabel::ALL
        .iter()
        .map(|label| {
            let p = if *label == emotion { confidence } else { share };
            (*label, p)
        })
        .collect();
    ClassificationResult {
        emotion,
        confidence,
        distribution,
    }
}

impl MockClassifier {
    /// Create a mock that answers every input with "no signal".
    pub fn new() -> Self {
        Self {
            config: Arc::new(MockConfig::default()),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer every unmapped input with `emotion` at `confidence`.
    pub fn with_default(mut self, emotion: EmotionLabel, confidence: f64) -> Self {
        Arc::make_mut(&mut self.config).default_result = result_with(emotion, confidence);
        self
    }

    /// Answer one exact input with `emotion` at `confidence`.
    pub fn with_mapping(
        mut self,
        input: impl Into<String>,
        emotion: EmotionLabel,
        confidence: f64,
    ) -> Self {
        Arc::make_mut(&mut self.config)
            .mappings
            .insert(input.into(), result_with(emotion, confidence));
        self
    }

    /// Get all logged calls for assertion.
    pub fn get_calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Clear the call log.
    pub fn clear_calls(&self) {
        self.call_log.lock().unwrap().clear()
    }

    /// Get number of classify calls.
    pub fn classify_call_count(&self) -> usize {
        self.call_log
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.operation == "classify")
            .count()
    }

    fn log_call(&self, operation: &str, input: &str) {
        self.call_log.lock().unwrap().push(MockCall {
            operation: operation.to_string(),
            input: input.to_string(),
            timestamp: std::time::Instant::now(),
        });
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionClassifier for MockClassifier {
    fn classify(&self, text: &str) -> ClassificationResult {
        self.log_call("classify", text);
        self.config
            .mappings
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.config.default_result.clone())
    }

    fn labels(&self) -> Vec<EmotionLabel> {
        EmotionLabel::ALL
            .into_iter()
            .filter(|l| *l != EmotionLabel::Neutral)
            .collect()
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_default_is_no_signal() {
        let mock = MockClassifier::new();
        let result = mock.classify("anything");
        assert_eq!(result.emotion, EmotionLabel::Neutral);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_mock_mapping_and_call_log() {
        let mock = MockClassifier::new()
            .with_default(EmotionLabel::Hope, 0.4)
            .with_mapping("I miss her", EmotionLabel::Grief, 0.9);

        assert_eq!(mock.classify("I miss her").emotion, EmotionLabel::Grief);
        assert_eq!(mock.classify("other").emotion, EmotionLabel::Hope);
        assert_eq!(mock.classify_call_count(), 2);
        assert_eq!(mock.get_calls()[0].input, "I miss her");

        mock.clear_calls();
        assert_eq!(mock.classify_call_count(), 0);
    }

    #[test]
    fn test_result_with_sums_to_one() {
        let result = result_with(EmotionLabel::Anger, 0.35);
        let total: f64 = result.distribution.values().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(result.confidence, result.probability(EmotionLabel::Anger));
    }
}
