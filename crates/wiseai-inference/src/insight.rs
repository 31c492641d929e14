//! Supportive insight text keyed by emotion.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use wiseai_core::{EmotionLabel, ProblemMapper, RandomSource};

/// Returned when no template is available at all.
pub const DEFAULT_INSIGHT: &str =
    "I understand what you're going through. You're not alone in this journey.";

fn builtin_templates(emotion: EmotionLabel) -> &'static [&'static str] {
    match emotion {
        EmotionLabel::Grief => &[
            "Loss leaves a space no one else can fill, and it is okay to feel its weight.",
            "What you are feeling is a measure of how much you loved.",
            "Grief moves at its own pace. Be gentle with yourself today.",
        ],
        EmotionLabel::Depression => &[
            "It sounds like things feel heavy right now, and that is hard to carry.",
            "Even when the days feel grey, you are more than this moment.",
            "You reached out, and that already takes strength.",
        ],
        EmotionLabel::Anxiety => &[
            "It sounds like your mind is racing. Let's slow things down together.",
            "Worry tells stories about the future; you only have to face today.",
            "You have made it through every anxious moment so far.",
        ],
        EmotionLabel::Anger => &[
            "Your frustration is real, and it is pointing at something that matters to you.",
            "Anger often guards a hurt underneath. Give yourself room to breathe first.",
            "It is fair to feel this way. What you do next is still yours to choose.",
        ],
        EmotionLabel::Loneliness => &[
            "Feeling alone is painful, but you are not the only one who feels this way.",
            "Connection can start small, with a single honest conversation.",
            "You deserve company and care, starting with your own.",
        ],
        EmotionLabel::Motivation => &[
            "Feeling unsure of your path is often the start of finding a better one.",
            "You do not need to have it all figured out to take a step forward.",
            "Direction tends to appear once you start moving.",
        ],
        EmotionLabel::Resilience => &[
            "You have already shown you can get through hard things.",
            "Setbacks bend the road; they do not end it.",
            "Your strength is in how you keep going, not in never falling.",
        ],
        EmotionLabel::Mindfulness => &[
            "Coming back to the present moment is a quiet kind of strength.",
            "Notice your breath for a moment. Right now, you are here.",
            "Stillness is not doing nothing; it is making room.",
        ],
        EmotionLabel::Gratitude => &[
            "It is wonderful that you are noticing the good around you.",
            "Gratitude has a way of making ordinary days feel full.",
            "Holding on to what you appreciate is a gift to yourself.",
        ],
        EmotionLabel::Happiness => &[
            "It is great to hear you are feeling good. Let yourself enjoy it.",
            "Moments like this are worth savouring.",
            "Your joy matters. Share it if you can.",
        ],
        EmotionLabel::Love => &[
            "Love, in all its forms, is one of the bravest things we do.",
            "Matters of the heart are rarely simple, and that is okay.",
            "Caring deeply is a strength, even when it hurts.",
        ],
        EmotionLabel::Hope => &[
            "Holding on to hope is a powerful choice.",
            "Better days often begin with believing they are possible.",
            "Your hope is worth protecting.",
        ],
        EmotionLabel::Wisdom => &[
            "Reflecting on what life has taught you is how wisdom grows.",
            "Every experience, even the hard ones, leaves something to learn.",
            "Seeking understanding is a journey worth taking.",
        ],
        EmotionLabel::Neutral => &[
            DEFAULT_INSIGHT,
            "Thank you for sharing what is on your mind.",
            "Whatever today brings, a few wise words can help.",
        ],
    }
}

/// Picks an insight template for an emotion and appends category guidance.
pub struct InsightGenerator {
    rng: Arc<dyn RandomSource>,
    mapper: ProblemMapper,
    overrides: HashMap<EmotionLabel, Vec<String>>,
}

impl InsightGenerator {
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self {
            rng,
            mapper: ProblemMapper::new(),
            overrides: HashMap::new(),
        }
    }

    /// Replace the template pool of one emotion. Empty templates are
    /// discarded; an empty pool falls back to the neutral pool.
    pub fn with_templates(mut self, emotion: EmotionLabel, templates: Vec<String>) -> Self {
        let templates: Vec<String> = templates
            .into_iter()
            .filter(|t| !t.trim().is_empty())
            .collect();
        self.overrides.insert(emotion, templates);
        self
    }

    /// Generate insight text. `problem` is a category slug; its guidance is
    /// appended when it names a specific (non-general) category.
    pub fn generate(&self, emotion: EmotionLabel, problem: Option<&str>) -> String {
        let base = self
            .pick(emotion)
            .or_else(|| self.pick(EmotionLabel::Neutral))
            .unwrap_or_else(|| DEFAULT_INSIGHT.to_string());

        let guidance = problem
            .and_then(|slug| self.mapper.find_problem(slug))
            .filter(|category| !category.is_general())
            .map(|category| category.guidance);

        debug!(
            subsystem = "inference",
            component = "insight_generator",
            emotion = %emotion,
            problem = problem.unwrap_or(""),
            with_guidance = guidance.is_some(),
            "Insight generated"
        );

        match guidance {
            Some(guidance) => format!("{} {}", base, guidance),
            None => base,
        }
    }

    fn pick(&self, emotion: EmotionLabel) -> Option<String> {
        match self.overrides.get(&emotion) {
            Some(pool) if !pool.is_empty() => {
                Some(pool[self.rng.pick(pool.len()).min(pool.len() - 1)].clone())
            }
            Some(_) => None,
            None => {
                let pool = builtin_templates(emotion);
                if pool.is_empty() {
                    return None;
                }
                Some(pool[self.rng.pick(pool.len()).min(pool.len() - 1)].to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedRandom, ThreadRandom};

    fn generator() -> InsightGenerator {
        InsightGenerator::new(Arc::new(FixedRandom(0)))
    }

    #[test]
    fn test_every_emotion_has_templates() {
        for emotion in EmotionLabel::ALL {
            let pool = builtin_templates(emotion);
            assert!(pool.len() >= 2, "{} needs variants", emotion);
            assert!(pool.iter().all(|t| !t.trim().is_empty()));
        }
    }

    #[test]
    fn test_generate_never_empty() {
        let generator = InsightGenerator::new(Arc::new(ThreadRandom));
        for emotion in EmotionLabel::ALL {
            assert!(!generator.generate(emotion, None).is_empty());
        }
    }

    #[test]
    fn test_generate_appends_guidance() {
        let text = generator().generate(EmotionLabel::Motivation, Some("lack-of-direction"));
        let category = ProblemMapper::new().find_problem("lack-of-direction").unwrap();
        assert!(text.starts_with(builtin_templates(EmotionLabel::Motivation)[0]));
        assert!(text.ends_with(category.guidance));
    }

    #[test]
    fn test_general_and_unknown_problem_add_nothing() {
        let g = generator();
        let base = builtin_templates(EmotionLabel::Neutral)[0];
        assert_eq!(g.generate(EmotionLabel::Neutral, Some("general")), base);
        assert_eq!(g.generate(EmotionLabel::Neutral, Some("no-such-problem")), base);
    }

    #[test]
    fn test_random_source_selects_variant() {
        let g = InsightGenerator::new(Arc::new(FixedRandom(2)));
        assert_eq!(
            g.generate(EmotionLabel::Hope, None),
            builtin_templates(EmotionLabel::Hope)[2]
        );
    }

    #[test]
    fn test_override_templates() {
        let g = generator().with_templates(EmotionLabel::Hope, vec!["Keep hoping.".into()]);
        assert_eq!(g.generate(EmotionLabel::Hope, None), "Keep hoping.");
    }

    #[test]
    fn test_empty_override_falls_back_to_neutral() {
        let g = generator().with_templates(EmotionLabel::Hope, vec!["  ".into()]);
        assert_eq!(g.generate(EmotionLabel::Hope, None), DEFAULT_INSIGHT);
    }

    #[test]
    fn test_empty_overrides_everywhere_use_default() {
        let g = generator()
            .with_templates(EmotionLabel::Hope, vec![])
            .with_templates(EmotionLabel::Neutral, vec![]);
        assert_eq!(g.generate(EmotionLabel::Hope, None), DEFAULT_INSIGHT);
    }
}
