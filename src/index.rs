//! Per-field inverted indexes over an immutable article snapshot.
//!
//! # Module Structure
//!
//! - `field`: the closed set of indexed fields and their weights
//! - `term_index`: sorted term dictionary with posting lists
//! - `writer`: builds a complete snapshot from a corpus
//!
//! An [`ArticleIndex`] is only ever produced whole. Rebuilding means
//! building a new snapshot and replacing the old one.

pub mod field;
pub mod term_index;
pub mod writer;

use std::sync::Arc;
use std::time::Instant;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::{Analyzer, GermanAnalyzer};
use crate::data::Article;
use crate::engine::config::SearchConfig;
use crate::error::Result;

use self::field::SearchField;
use self::term_index::{DocOrdinal, TermIndex};
use self::writer::IndexWriter;

/// Unique term counts per field index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub article_count: usize,
    pub title_terms: usize,
    pub content_terms: usize,
    pub excerpt_terms: usize,
    pub tag_terms: usize,
    pub author_terms: usize,
    pub category_terms: usize,
}

/// A fully built, immutable search index over one corpus snapshot.
#[derive(Debug)]
pub struct ArticleIndex {
    pub(crate) articles: Vec<Arc<Article>>,
    pub(crate) ids: AHashMap<String, DocOrdinal>,
    pub(crate) fields: [TermIndex; SearchField::COUNT],
    pub(crate) analyzer: GermanAnalyzer,
    pub(crate) config: SearchConfig,
}

impl ArticleIndex {
    /// Build an index from a full corpus snapshot.
    ///
    /// Fails with `InvalidArgument` if two articles share an id. No partial
    /// index is ever returned.
    pub fn build<I>(articles: I, config: SearchConfig) -> Result<Self>
    where
        I: IntoIterator<Item = Article>,
    {
        config.validate()?;
        let start = Instant::now();

        let mut writer = IndexWriter::new(&config);
        for article in articles {
            writer.add_article(article)?;
        }
        let index = writer.finish(config);

        log::info!(
            "Built search index for {} articles in {:.2?}",
            index.article_count(),
            start.elapsed()
        );
        Ok(index)
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    /// Articles in corpus order.
    pub fn articles(&self) -> &[Arc<Article>] {
        &self.articles
    }

    /// Look up an article by id.
    pub fn article(&self, id: &str) -> Option<&Arc<Article>> {
        self.ids
            .get(id)
            .map(|ordinal| &self.articles[*ordinal as usize])
    }

    pub(crate) fn article_at(&self, ordinal: DocOrdinal) -> &Arc<Article> {
        &self.articles[ordinal as usize]
    }

    /// The inverted index of one field.
    pub fn field(&self, field: SearchField) -> &TermIndex {
        &self.fields[field.ordinal()]
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Tokenize query text with the same rules used at index time.
    pub fn analyze_query(&self, text: &str) -> Vec<String> {
        self.analyzer.analyze(text)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            article_count: self.article_count(),
            title_terms: self.field(SearchField::Title).len(),
            content_terms: self.field(SearchField::Content).len(),
            excerpt_terms: self.field(SearchField::Excerpt).len(),
            tag_terms: self.field(SearchField::Tags).len(),
            author_terms: self.field(SearchField::Author).len(),
            category_terms: self.field(SearchField::Category).len(),
        }
    }
}
