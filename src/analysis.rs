//! Text analysis for indexing and querying.
//!
//! The analysis pipeline is deliberately small:
//!
//! ```text
//! Text → lowercase → separator folding → split → length/stop-word filter → terms
//! ```
//!
//! No stemming is applied. Inflected forms only meet through the prefix and
//! substring tiers of the query engine.
//!
//! # Examples
//!
//! ```
//! use article_search::analysis::{Analyzer, GermanAnalyzer};
//!
//! let analyzer = GermanAnalyzer::new();
//! assert_eq!(analyzer.analyze("Das ist ein Test"), vec!["test"]);
//! ```

pub mod german;
pub mod keyword;
pub mod stop_words;

pub use german::GermanAnalyzer;
pub use keyword::KeywordAnalyzer;

/// Turns raw field text into index terms.
pub trait Analyzer: Send + Sync + std::fmt::Debug {
    /// Analyze `text` into an ordered list of terms.
    fn analyze(&self, text: &str) -> Vec<String>;

    /// Short name used in log output.
    fn name(&self) -> &'static str;
}

/// Tokenize `text` with the default German analyzer.
pub fn tokenize(text: &str) -> Vec<String> {
    GermanAnalyzer::new().analyze(text)
}
