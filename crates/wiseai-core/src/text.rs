//! Text normalization shared by classification, ranking, and index building.
//!
//! Normalized text is lower-case, has apostrophes removed (`don't` → `dont`)
//! and every other non-alphanumeric run collapsed to a single space. Phrase
//! matching works on whole-word boundaries over normalized text, so `hope`
//! never matches inside `hopeless`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static APOSTROPHES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"['’‘`]").expect("apostrophe pattern is valid"));

static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("separator pattern is valid"));

/// Words ignored when extracting content words from free text.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "after", "again", "all", "am", "an", "and", "any", "are", "as", "at", "be",
        "because", "been", "before", "being", "but", "by", "can", "cant", "could", "did", "do",
        "does", "doing", "dont", "down", "each", "even", "every", "everything", "feel", "feeling",
        "feels", "for", "from", "get", "go", "going", "got", "had", "has", "have", "having", "he",
        "her", "here", "him", "his", "how", "i", "im", "if", "in", "into", "is", "it", "its",
        "ive", "just", "know", "like", "me", "more", "most", "much", "my", "myself", "no", "not",
        "now", "of", "off", "on", "once", "only", "or", "other", "our", "out", "over", "really",
        "right", "same", "she", "should", "so", "some", "such", "than", "that", "the", "their",
        "them", "then", "there", "these", "they", "this", "those", "through", "to", "too",
        "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
        "while", "who", "why", "will", "with", "would", "you", "your",
    ]
    .into_iter()
    .collect()
});

/// Normalize text for matching. Returns an empty string for input with no
/// letters or digits.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_apostrophes = APOSTROPHES.replace_all(&lowered, "");
    let spaced = SEPARATORS.replace_all(&without_apostrophes, " ");
    spaced.trim().to_string()
}

/// Split normalized text into words.
pub fn words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(' ').filter(|w| !w.is_empty())
}

/// Distinct content words (stop words removed) of raw text, in first-seen
/// order.
pub fn content_words(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    let mut seen = HashSet::new();
    words(&normalized)
        .filter(|w| w.len() > 1 && !STOP_WORDS.contains(w))
        .filter(|w| seen.insert(w.to_string()))
        .map(str::to_string)
        .collect()
}

/// Wrap normalized text in single spaces so phrases can be matched on word
/// boundaries with [`contains_phrase`].
pub fn padded(normalized: &str) -> String {
    format!(" {} ", normalized)
}

/// Whether `padded_text` (see [`padded`]) contains the normalized `phrase`
/// as whole words.
pub fn contains_phrase(padded_text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    padded_text.contains(&format!(" {} ", phrase))
}

/// Whether the text carries no letters or digits.
pub fn is_blank(text: &str) -> bool {
    !text.chars().any(char::is_alphanumeric)
}
