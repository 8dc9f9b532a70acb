//! Match predicate: decides whether a consultant is relevant to a job description.
//!
//! Three checks, any of which is enough:
//! 1. a word of the consultant's role appears inside the query text
//! 2. one of the consultant's skills appears inside the query text
//! 3. a query keyword appears inside the consultant's bio
//!
//! All comparisons are plain substring tests on lowercased text.

use crate::matching::keywords::extract_keywords;
use crate::models::consultant::ConsultantRecord;

/// A job description lowered and tokenized once, so it can be tested against
/// a whole roster without repeating the work per consultant.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    lowered: String,
    keywords: Vec<String>,
}

impl PreparedQuery {
    pub fn new(query: &str) -> Self {
        Self {
            lowered: query.to_lowercase().trim().to_string(),
            keywords: extract_keywords(query),
        }
    }

    /// True when the query has no content; a blank query matches nothing.
    pub fn is_blank(&self) -> bool {
        self.lowered.is_empty()
    }

    #[allow(dead_code)]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, consultant: &ConsultantRecord) -> bool {
        if self.is_blank() {
            return false;
        }
        self.matches_role(consultant)
            || self.matches_skill(consultant)
            || self.matches_bio(consultant)
    }

    /// Role words are searched for inside the query, not the other way round,
    /// and are not length-filtered. An empty role word is inside every query.
    fn matches_role(&self, consultant: &ConsultantRecord) -> bool {
        role_words(&consultant.role.to_lowercase())
            .iter()
            .any(|word| self.lowered.contains(word))
    }

    fn matches_skill(&self, consultant: &ConsultantRecord) -> bool {
        consultant
            .skills
            .iter()
            .any(|skill| self.lowered.contains(&skill.to_lowercase()))
    }

    fn matches_bio(&self, consultant: &ConsultantRecord) -> bool {
        if self.keywords.is_empty() || consultant.bio.is_empty() {
            return false;
        }
        let bio = consultant.bio.to_lowercase();
        self.keywords.iter().any(|kw| bio.contains(kw.as_str()))
    }
}

/// Splits on runs of whitespace. Unlike `split_whitespace`, an empty role or
/// whitespace at either edge yields an empty word there: `""` gives `[""]`
/// and `" qa lead"` gives `["", "qa", "lead"]`.
fn role_words(role: &str) -> Vec<&str> {
    let pieces: Vec<&str> = role.split(char::is_whitespace).collect();
    let last = pieces.len() - 1;
    pieces
        .iter()
        .enumerate()
        .filter(|(i, piece)| !piece.is_empty() || *i == 0 || *i == last)
        .map(|(_, piece)| *piece)
        .collect()
}

/// Convenience wrapper for a single consultant.
#[allow(dead_code)]
pub fn matches(query: &str, consultant: &ConsultantRecord) -> bool {
    PreparedQuery::new(query).matches(consultant)
}
