//! German analyzer used for all natural-language fields and for queries.

use crate::analysis::Analyzer;
use crate::analysis::stop_words::is_stop_word;

/// Default minimum token length in characters. Shorter tokens are dropped.
pub const DEFAULT_MIN_TOKEN_CHARS: usize = 3;

/// Lowercases, folds every non-word character into a separator, splits on
/// whitespace and drops short tokens and German stop-words.
///
/// Word characters are ASCII letters, digits, `_` and the German
/// umlauts `ä`, `ö`, `ü` plus `ß`. Hyphens and all other punctuation
/// separate terms.
#[derive(Debug, Clone)]
pub struct GermanAnalyzer {
    min_token_chars: usize,
}

impl GermanAnalyzer {
    pub fn new() -> Self {
        GermanAnalyzer {
            min_token_chars: DEFAULT_MIN_TOKEN_CHARS,
        }
    }

    /// Set the minimum token length (in characters) a term must reach.
    pub fn with_min_token_chars(mut self, min_token_chars: usize) -> Self {
        self.min_token_chars = min_token_chars;
        self
    }

    pub fn min_token_chars(&self) -> usize {
        self.min_token_chars
    }

    fn keep(&self, token: &str) -> bool {
        token.chars().count() >= self.min_token_chars && !is_stop_word(token)
    }
}

impl Default for GermanAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns true if `c` survives separator folding.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | 'ä' | 'ö' | 'ü' | 'ß')
}

/// Lowercase `text` and replace every non-word, non-whitespace character
/// with a single space.
pub(crate) fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) || c.is_whitespace() { c } else { ' ' })
        .collect()
}

impl Analyzer for GermanAnalyzer {
    fn analyze(&self, text: &str) -> Vec<String> {
        normalize(text)
            .split_whitespace()
            .filter(|token| self.keep(token))
            .map(str::to_string)
            .collect()
    }

    fn name(&self) -> &'static str {
        "german"
    }
}
