//! Type-ahead suggestions from the title and tag dictionaries.

use ahash::AHashSet;

use crate::index::ArticleIndex;
use crate::index::field::SearchField;

/// Fields consulted for suggestions, in priority order.
const SUGGESTION_FIELDS: [SearchField; 2] = [SearchField::Title, SearchField::Tags];

impl ArticleIndex {
    /// Up to `limit` distinct indexed terms starting with `partial`
    /// (case-insensitive).
    ///
    /// Title terms come first, then tag terms, each in sorted order.
    pub fn suggestions(&self, partial: &str, limit: usize) -> Vec<String> {
        let prefix = partial.to_lowercase();
        let mut seen = AHashSet::new();
        let mut suggestions = Vec::new();

        for field in SUGGESTION_FIELDS {
            for term in self.field(field).starting_with(&prefix) {
                if suggestions.len() >= limit {
                    return suggestions;
                }
                if seen.insert(term) {
                    suggestions.push(term.to_string());
                }
            }
        }
        suggestions
    }
}
