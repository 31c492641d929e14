//! Static mapping from emotions to ordered problem categories.
//!
//! Each emotion owns a short list of life-situation categories, most common
//! first. The order is authored priority and is used by the ranker as a
//! secondary signal. Emotions without specific categories, and labels that
//! do not parse, fail closed to the single [`GENERAL_PROBLEM`] category.

use tracing::debug;

use crate::models::{EmotionLabel, ProblemCategory};

/// Slug of the generic "no specific problem" category.
pub const GENERAL_PROBLEM: &str = "general";

const fn category(
    emotion: EmotionLabel,
    problem: &'static str,
    solution: &'static str,
    guidance: &'static str,
    search_terms: &'static [&'static str],
) -> ProblemCategory {
    ProblemCategory {
        emotion,
        problem,
        solution,
        guidance,
        search_terms,
    }
}

static GENERAL: [ProblemCategory; 1] = [category(
    EmotionLabel::Neutral,
    GENERAL_PROBLEM,
    "find-inspiration",
    "Take a quiet moment for yourself today.",
    &["life", "day", "time"],
)];

static GRIEF: [ProblemCategory; 3] = [
    category(
        EmotionLabel::Grief,
        "loss-of-loved-one",
        "honor-their-memory",
        "Grief is love with nowhere to go; let yourself remember them gently.",
        &[
            "loss", "lost", "death", "died", "gone", "miss", "memory", "remember", "mother",
            "father",
        ],
    ),
    category(
        EmotionLabel::Grief,
        "unbearable-pain",
        "allow-the-feeling",
        "There is no schedule for grief. Let the waves come and go.",
        &["pain", "hurt", "broken", "tears", "heart", "sorrow"],
    ),
    category(
        EmotionLabel::Grief,
        "isolation-in-mourning",
        "lean-on-others",
        "You do not have to carry this loss alone.",
        &["alone", "lonely", "silence", "empty"],
    ),
];

static DEPRESSION: [ProblemCategory; 3] = [
    category(
        EmotionLabel::Depression,
        "hopelessness",
        "small-steps",
        "On heavy days, one small step is enough.",
        &["hopeless", "dark", "darkness", "despair", "meaning", "empty"],
    ),
    category(
        EmotionLabel::Depression,
        "exhaustion",
        "rest-and-recover",
        "Rest is not giving up; it is how strength returns.",
        &["tired", "exhausted", "rest", "sleep", "weary"],
    ),
    category(
        EmotionLabel::Depression,
        "numbness",
        "reconnect-with-senses",
        "Feeling nothing is still a feeling, and it can change.",
        &["numb", "nothing", "light", "alive"],
    ),
];

static ANXIETY: [ProblemCategory; 3] = [
    category(
        EmotionLabel::Anxiety,
        "overthinking",
        "ground-in-the-present",
        "Bring your attention back to this breath and this moment.",
        &["worry", "mind", "thoughts", "future", "fear", "what if"],
    ),
    category(
        EmotionLabel::Anxiety,
        "overwhelm",
        "one-thing-at-a-time",
        "You only need to handle the next small thing.",
        &["overwhelmed", "stress", "pressure", "too much", "calm"],
    ),
    category(
        EmotionLabel::Anxiety,
        "panic",
        "slow-breathing",
        "Slow breathing tells your body that it is safe.",
        &["panic", "breathe", "breath", "scared", "safe"],
    ),
];

static ANGER: [ProblemCategory; 3] = [
    category(
        EmotionLabel::Anger,
        "resentment",
        "let-go",
        "Holding on to anger mostly hurts the one who holds it.",
        &["anger", "angry", "forgive", "forgiveness", "resentment", "hate"],
    ),
    category(
        EmotionLabel::Anger,
        "frustration",
        "pause-before-reacting",
        "A pause between feeling and acting is where your choice lives.",
        &["frustrated", "patience", "calm", "react", "temper"],
    ),
    category(
        EmotionLabel::Anger,
        "betrayal",
        "set-boundaries",
        "Protecting your peace with clear boundaries is an act of self-respect.",
        &["betrayed", "trust", "lied", "boundaries", "respect"],
    ),
];

static LONELINESS: [ProblemCategory; 2] = [
    category(
        EmotionLabel::Loneliness,
        "isolation",
        "reach-out",
        "Reaching out to one person can break a long silence.",
        &["alone", "lonely", "loneliness", "friend", "friends", "company"],
    ),
    category(
        EmotionLabel::Loneliness,
        "feeling-unseen",
        "self-compassion",
        "You deserve the same kindness you would offer a friend.",
        &["invisible", "unseen", "understood", "heard", "belong"],
    ),
];

static MOTIVATION: [ProblemCategory; 3] = [
    category(
        EmotionLabel::Motivation,
        "lack-of-direction",
        "find-purpose",
        "You do not need the whole map, only the next step toward what matters to you.",
        &["purpose", "direction", "path", "way", "lost", "life", "meaning", "journey"],
    ),
    category(
        EmotionLabel::Motivation,
        "procrastination",
        "start-small",
        "Starting imperfectly beats waiting to start perfectly.",
        &["start", "begin", "action", "today", "habit", "act"],
    ),
    category(
        EmotionLabel::Motivation,
        "fear-of-failure",
        "embrace-growth",
        "Every attempt, even a failed one, teaches you something.",
        &["fail", "failure", "success", "try", "goal", "dream"],
    ),
];

static RESILIENCE: [ProblemCategory; 2] = [
    category(
        EmotionLabel::Resilience,
        "setback",
        "keep-going",
        "Setbacks are part of the road, not the end of it.",
        &["fall", "rise", "setback", "again", "overcome", "persevere"],
    ),
    category(
        EmotionLabel::Resilience,
        "adversity",
        "build-strength",
        "Hard seasons grow roots you will rely on later.",
        &["strength", "strong", "struggle", "hard", "courage", "storm"],
    ),
];

static MINDFULNESS: [ProblemCategory; 2] = [
    category(
        EmotionLabel::Mindfulness,
        "restless-mind",
        "return-to-the-breath",
        "Each breath is a chance to begin again.",
        &["mind", "breath", "breathe", "present", "moment", "peace"],
    ),
    category(
        EmotionLabel::Mindfulness,
        "living-in-the-past",
        "accept-what-is",
        "Accepting what is frees your energy for what can be.",
        &["past", "accept", "acceptance", "let go", "today"],
    ),
];

static GRATITUDE: [ProblemCategory; 2] = [
    category(
        EmotionLabel::Gratitude,
        "appreciation",
        "savor-the-good",
        "Naming what you are thankful for helps the good linger.",
        &["grateful", "gratitude", "thankful", "thanks", "blessing", "blessed", "appreciate"],
    ),
    category(
        EmotionLabel::Gratitude,
        "sharing-gratitude",
        "express-thanks",
        "Telling someone you appreciate them doubles the gift.",
        &["give", "giving", "kindness", "generous", "share"],
    ),
];

static HAPPINESS: [ProblemCategory; 2] = [
    category(
        EmotionLabel::Happiness,
        "savoring-joy",
        "be-present",
        "Let yourself fully enjoy this moment.",
        &["joy", "happy", "happiness", "smile", "laugh", "delight"],
    ),
    category(
        EmotionLabel::Happiness,
        "sustaining-happiness",
        "share-it",
        "Happiness grows when it is shared.",
        &["share", "others", "kindness", "simple", "little things"],
    ),
];

static LOVE: [ProblemCategory; 3] = [
    category(
        EmotionLabel::Love,
        "relationship-strain",
        "communicate-openly",
        "Honest, gentle words can bring two hearts closer again.",
        &["love", "heart", "relationship", "partner", "together", "understand"],
    ),
    category(
        EmotionLabel::Love,
        "heartbreak",
        "heal-and-let-go",
        "A broken heart heals with time, care, and kindness toward yourself.",
        &["heartbreak", "broken", "breakup", "goodbye", "heal"],
    ),
    category(
        EmotionLabel::Love,
        "self-worth",
        "love-yourself",
        "The love you seek starts with how you treat yourself.",
        &["yourself", "self", "worth", "deserve", "enough"],
    ),
];

static HOPE: [ProblemCategory; 2] = [
    category(
        EmotionLabel::Hope,
        "uncertain-future",
        "trust-the-process",
        "Better days are possible, even when you cannot see them yet.",
        &["hope", "future", "tomorrow", "better", "light", "faith", "believe"],
    ),
    category(
        EmotionLabel::Hope,
        "waiting-for-change",
        "patience",
        "Change often arrives slowly, and then all at once.",
        &["wait", "patience", "time", "change", "season"],
    ),
];

static WISDOM: [ProblemCategory; 2] = [
    category(
        EmotionLabel::Wisdom,
        "seeking-understanding",
        "reflect-and-learn",
        "Every experience, including this one, has something to teach.",
        &["learn", "lesson", "experience", "wisdom", "truth", "knowledge", "understand"],
    ),
    category(
        EmotionLabel::Wisdom,
        "difficult-decision",
        "listen-to-yourself",
        "Quiet the noise and ask what you already know to be right.",
        &["choice", "decision", "choose", "right", "know"],
    ),
];

/// Lookup over the static emotion → categories table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProblemMapper;

impl ProblemMapper {
    pub fn new() -> Self {
        Self
    }

    /// Ordered categories for an emotion, most important first.
    pub fn map_to_categories(&self, emotion: EmotionLabel) -> &'static [ProblemCategory] {
        let categories = Self::table_for(emotion);
        debug!(
            emotion = %emotion,
            category_count = categories.len(),
            "Mapped emotion to problem categories"
        );
        categories
    }

    /// Ordered categories for a raw label string. Unknown labels fail closed
    /// to the generic category.
    pub fn categories_for_label(&self, label: &str) -> &'static [ProblemCategory] {
        match label.parse::<EmotionLabel>() {
            Ok(emotion) => self.map_to_categories(emotion),
            Err(_) => {
                debug!(label, "Unknown emotion label, using general category");
                &GENERAL
            }
        }
    }

    /// The generic "no specific problem" category.
    pub fn general(&self) -> &'static ProblemCategory {
        &GENERAL[0]
    }

    /// Find a category by its problem slug.
    pub fn find_problem(&self, problem: &str) -> Option<&'static ProblemCategory> {
        self.all_categories().find(|c| c.problem == problem)
    }

    /// Every category in the table, grouped by emotion in vocabulary order.
    pub fn all_categories(&self) -> impl Iterator<Item = &'static ProblemCategory> {
        EmotionLabel::ALL
            .into_iter()
            .flat_map(|emotion| Self::table_for(emotion).iter())
    }

    fn table_for(emotion: EmotionLabel) -> &'static [ProblemCategory] {
        match emotion {
            EmotionLabel::Grief => &GRIEF,
            EmotionLabel::Depression => &DEPRESSION,
            EmotionLabel::Anxiety => &ANXIETY,
            EmotionLabel::Anger => &ANGER,
            EmotionLabel::Loneliness => &LONELINESS,
            EmotionLabel::Motivation => &MOTIVATION,
            EmotionLabel::Resilience => &RESILIENCE,
            EmotionLabel::Mindfulness => &MINDFULNESS,
            EmotionLabel::Gratitude => &GRATITUDE,
            EmotionLabel::Happiness => &HAPPINESS,
            EmotionLabel::Love => &LOVE,
            EmotionLabel::Hope => &HOPE,
            EmotionLabel::Wisdom => &WISDOM,
            EmotionLabel::Neutral => &GENERAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize;
    use std::collections::HashSet;

    #[test]
    fn test_motivation_leads_with_lack_of_direction() {
        let categories = ProblemMapper::new().map_to_categories(EmotionLabel::Motivation);
        assert_eq!(categories[0].problem, "lack-of-direction");
    }

    #[test]
    fn test_gratitude_has_appreciation() {
        let categories = ProblemMapper::new().map_to_categories(EmotionLabel::Gratitude);
        assert!(categories.iter().any(|c| c.problem == "appreciation"));
        assert!(categories.iter().all(|c| c.emotion == EmotionLabel::Gratitude));
    }

    #[test]
    fn test_neutral_maps_to_general() {
        let categories = ProblemMapper::new().map_to_categories(EmotionLabel::Neutral);
        assert_eq!(categories.len(), 1);
        assert!(categories[0].is_general());
    }

    #[test]
    fn test_unknown_label_fails_closed() {
        let categories = ProblemMapper::new().categories_for_label("ennui");
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].problem, GENERAL_PROBLEM);
    }

    #[test]
    fn test_known_label_string_resolves() {
        let categories = ProblemMapper::new().categories_for_label("Grief");
        assert_eq!(categories[0].emotion, EmotionLabel::Grief);
    }

    #[test]
    fn test_every_emotion_has_categories_of_its_own() {
        let mapper = ProblemMapper::new();
        for emotion in EmotionLabel::ALL {
            let categories = mapper.map_to_categories(emotion);
            assert!(!categories.is_empty(), "{} has no categories", emotion);
            assert!(categories.iter().all(|c| c.emotion == emotion));
        }
    }

    #[test]
    fn test_problem_slugs_are_unique() {
        let mut seen = HashSet::new();
        for category in ProblemMapper::new().all_categories() {
            assert!(seen.insert(category.problem), "duplicate {}", category.problem);
        }
    }

    #[test]
    fn test_search_terms_are_normalized() {
        for category in ProblemMapper::new().all_categories() {
            for term in category.search_terms {
                assert_eq!(&normalize(term), term, "term {:?} is not normalized", term);
            }
        }
    }

    #[test]
    fn test_all_categories_outlives_mapper() {
        let categories = {
            let mapper = ProblemMapper::new();
            mapper.all_categories()
        };
        let general = categories.filter(|c| c.is_general()).count();
        assert_eq!(general, 1);
    }

    #[test]
    fn test_find_problem() {
        let mapper = ProblemMapper::new();
        let found = mapper.find_problem("heartbreak").unwrap();
        assert_eq!(found.emotion, EmotionLabel::Love);
        assert!(mapper.find_problem("no-such-problem").is_none());
    }

    #[test]
    fn test_guidance_is_never_empty() {
        for category in ProblemMapper::new().all_categories() {
            assert!(!category.guidance.trim().is_empty());
        }
    }
}
