//! Built-in weighted keyword lexicon.
//!
//! Used when no classifier artifact is configured. Terms are stored in
//! normalized form (see `wiseai_core::text::normalize`) and matched on whole
//! words. Weights: 2.0 for unambiguous markers and telling phrases, 1.0-1.5
//! for typical vocabulary, 0.5 for words shared across several emotions.

use wiseai_core::EmotionLabel;

/// Weighted features of one emotion.
pub type LexiconEntry = (EmotionLabel, &'static [(&'static str, f64)]);

pub static BUILTIN_LEXICON: &[LexiconEntry] = &[
    (
        EmotionLabel::Grief,
        &[
            ("grief", 2.0),
            ("grieving", 2.0),
            ("mourning", 2.0),
            ("bereavement", 2.0),
            ("passed away", 2.0),
            ("funeral", 2.0),
            ("death", 1.5),
            ("died", 1.5),
            ("miss them", 1.5),
            ("miss him", 1.5),
            ("miss her", 1.5),
            ("nothing feels real", 1.5),
            ("barely holding on", 1.5),
            ("loss", 1.0),
            ("lost", 1.0),
            ("losing", 1.0),
            ("cant breathe", 0.5),
            ("cannot breathe", 0.5),
            ("sadness", 0.5),
            ("pain", 0.5),
            ("hurt", 0.5),
            ("broken", 0.5),
            ("alone", 0.5),
            ("lonely", 0.5),
            ("empty", 0.5),
            ("silence", 0.5),
            ("curse", 0.5),
        ],
    ),
    (
        EmotionLabel::Depression,
        &[
            ("depressed", 2.0),
            ("depression", 2.0),
            ("hopeless", 2.0),
            ("nothing matters", 2.0),
            ("despair", 1.5),
            ("numb", 1.5),
            ("meaningless", 1.5),
            ("no point", 1.5),
            ("why does it hurt", 1.5),
            ("sad", 1.0),
            ("suffering", 1.0),
            ("darkness", 1.0),
            ("empty", 1.0),
            ("stay in bed", 1.0),
            ("did not ask for this", 1.0),
            ("worthless", 1.0),
            ("tired", 0.5),
            ("exhausted", 0.5),
            ("broken", 0.5),
            ("hurt", 0.5),
            ("pain", 0.5),
            ("dark", 0.5),
        ],
    ),
    (
        EmotionLabel::Anxiety,
        &[
            ("anxious", 2.0),
            ("anxiety", 2.0),
            ("panic", 2.0),
            ("worry", 1.5),
            ("worried", 1.5),
            ("worrying", 1.5),
            ("overwhelmed", 1.5),
            ("nervous", 1.5),
            ("on edge", 1.5),
            ("fear", 1.0),
            ("afraid", 1.0),
            ("scared", 1.0),
            ("stress", 1.0),
            ("stressed", 1.0),
            ("restless", 1.0),
            ("what if", 1.0),
            ("cant relax", 1.0),
            ("racing", 0.5),
            ("tight", 0.5),
            ("scream", 0.5),
            ("cant breathe", 0.5),
        ],
    ),
    (
        EmotionLabel::Anger,
        &[
            ("angry", 2.0),
            ("anger", 2.0),
            ("furious", 2.0),
            ("rage", 2.0),
            ("hate", 1.5),
            ("frustrated", 1.5),
            ("betrayed", 1.5),
            ("resent", 1.5),
            ("fed up", 1.5),
            ("mad", 1.0),
            ("annoyed", 1.0),
            ("unfair", 1.0),
            ("irritated", 1.0),
        ],
    ),
    (
        EmotionLabel::Loneliness,
        &[
            ("loneliness", 2.0),
            ("no friends", 2.0),
            ("lonely", 1.5),
            ("isolated", 1.5),
            ("left out", 1.5),
            ("alone", 1.0),
            ("no one", 1.0),
            ("nobody", 1.0),
            ("invisible", 1.0),
            ("by myself", 1.0),
        ],
    ),
    (
        EmotionLabel::Motivation,
        &[
            ("motivated", 2.0),
            ("motivation", 2.0),
            ("motivate", 2.0),
            ("dont know what to do", 2.0),
            ("what to do with my life", 2.0),
            ("lost my way", 2.0),
            ("no direction", 2.0),
            ("determined", 1.5),
            ("purpose", 1.5),
            ("direction", 1.5),
            ("procrastinating", 1.5),
            ("drive", 1.0),
            ("career", 1.0),
            ("goal", 1.0),
            ("goals", 1.0),
            ("achieve", 1.0),
            ("success", 1.0),
            ("succeed", 1.0),
            ("inspire", 1.0),
            ("inspired", 1.0),
            ("dream", 1.0),
            ("dreams", 1.0),
            ("aspire", 1.0),
            ("stuck", 1.0),
            ("energy", 0.5),
            ("work", 0.5),
            ("my life", 0.5),
        ],
    ),
    (
        EmotionLabel::Resilience,
        &[
            ("resilient", 2.0),
            ("resilience", 2.0),
            ("overcome", 1.5),
            ("persevere", 1.5),
            ("keep going", 1.5),
            ("setback", 1.5),
            ("failure", 1.0),
            ("fail", 1.0),
            ("failed", 1.0),
            ("challenge", 1.0),
            ("difficult", 1.0),
            ("struggle", 1.0),
            ("struggling", 1.0),
            ("tough", 1.0),
            ("strength", 1.0),
            ("stronger", 1.0),
            ("courage", 1.0),
            ("give up", 1.0),
            ("hard", 0.5),
        ],
    ),
    (
        EmotionLabel::Mindfulness,
        &[
            ("mindful", 2.0),
            ("mindfulness", 2.0),
            ("meditation", 2.0),
            ("meditate", 2.0),
            ("deep breaths", 1.5),
            ("calm", 1.0),
            ("peace", 1.0),
            ("present", 1.0),
            ("breathe", 0.5),
            ("breath", 0.5),
            ("moment", 0.5),
            ("mind", 0.5),
            ("thought", 0.5),
            ("think", 0.5),
        ],
    ),
    (
        EmotionLabel::Gratitude,
        &[
            ("grateful", 2.0),
            ("gratitude", 2.0),
            ("thankful", 2.0),
            ("blessed", 1.5),
            ("appreciate", 1.5),
            ("appreciative", 1.5),
            ("thanks", 1.0),
            ("thank you", 1.0),
            ("fortunate", 1.0),
        ],
    ),
    (
        EmotionLabel::Happiness,
        &[
            ("happy", 2.0),
            ("happiness", 2.0),
            ("joy", 1.5),
            ("joyful", 1.5),
            ("excited", 1.5),
            ("best day", 1.5),
            ("cheer", 1.0),
            ("cheerful", 1.0),
            ("smile", 1.0),
            ("smiling", 1.0),
            ("laugh", 1.0),
            ("delight", 1.0),
            ("pleasure", 1.0),
            ("wonderful", 1.0),
            ("bright", 0.5),
            ("great", 0.5),
        ],
    ),
    (
        EmotionLabel::Love,
        &[
            ("in love", 2.0),
            ("heartbreak", 2.0),
            ("love", 1.5),
            ("romance", 1.5),
            ("adore", 1.5),
            ("breakup", 1.5),
            ("loved", 1.0),
            ("relationship", 1.0),
            ("affection", 1.0),
            ("cherish", 1.0),
            ("partner", 1.0),
            ("boyfriend", 1.0),
            ("girlfriend", 1.0),
            ("husband", 1.0),
            ("wife", 1.0),
            ("heart", 0.5),
            ("care", 0.5),
        ],
    ),
    (
        EmotionLabel::Hope,
        &[
            ("hope", 2.0),
            ("hopeful", 2.0),
            ("better days", 2.0),
            ("optimism", 1.5),
            ("optimistic", 1.5),
            ("get better", 1.5),
            ("faith", 1.0),
            ("believe", 1.0),
            ("positive", 1.0),
            ("heal", 1.0),
            ("trust", 0.5),
            ("future", 0.5),
            ("better", 0.5),
            ("light", 0.5),
        ],
    ),
    (
        EmotionLabel::Wisdom,
        &[
            ("wisdom", 2.0),
            ("wise", 1.5),
            ("philosophy", 1.5),
            ("lesson", 1.5),
            ("lessons", 1.5),
            ("learn", 1.0),
            ("learned", 1.0),
            ("knowledge", 1.0),
            ("experience", 1.0),
            ("understand", 1.0),
            ("insight", 1.0),
            ("truth", 1.0),
        ],
    ),
];
