//! Keyword extraction for the bio-overlap check.

/// Words too common to say anything about a job description.
pub const STOPWORDS: [&str; 18] = [
    "of", "and", "with", "the", "in", "to", "for", "on", "at", "by", "from", "a", "an", "or",
    "but", "nor", "so", "yet",
];

/// Tokens this short or shorter are dropped.
const MIN_KEYWORD_CHARS: usize = 3;

/// Lowercases `text`, splits it on whitespace, and drops short tokens and
/// stopwords. Token order and duplicates are preserved.
pub fn extract_keywords(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS && !is_stopword(word))
        .map(str::to_string)
        .collect()
}

fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}
