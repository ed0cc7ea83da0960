//! Keyword analyzer: the whole input is one term.

use crate::analysis::Analyzer;

/// Lowercases the input and emits it verbatim as a single term.
///
/// Used for tags, where each tag string is one indexed unit. Empty input
/// yields no term.
#[derive(Debug, Clone, Default)]
pub struct KeywordAnalyzer;

impl KeywordAnalyzer {
    pub fn new() -> Self {
        KeywordAnalyzer
    }
}

impl Analyzer for KeywordAnalyzer {
    fn analyze(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        vec![text.to_lowercase()]
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}
