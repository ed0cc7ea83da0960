//! The [`SearchEngine`] facade.
//!
//! Owns the configuration and the currently published [`ArticleIndex`]
//! snapshot, and routes queries to the configured search strategy.

pub mod config;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::data::Article;
use crate::error::{Result, SearchError};
use crate::index::{ArticleIndex, IndexStats};
use crate::search::linear::LinearSearcher;
use crate::search::query::{SearchQuery, SearchResponse};
use crate::search::similar::find_similar;
use crate::search::{SearchMode, Searcher};

use self::config::SearchConfig;

/// Search engine facade owning the current index snapshot.
///
/// The engine starts without an index. [`SearchEngine::build_index`]
/// builds a complete snapshot off to the side and swaps it in under a
/// short write lock, so concurrent readers only ever observe either the
/// previous snapshot or the new one. Readers clone the `Arc` and release
/// the lock before doing any work.
#[derive(Debug)]
pub struct SearchEngine {
    config: SearchConfig,
    snapshot: RwLock<Option<Arc<ArticleIndex>>>,
}

impl SearchEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            snapshot: RwLock::new(None),
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Build the index from a full corpus snapshot and publish it.
    ///
    /// On error (e.g. duplicate article ids) the previously published
    /// index stays in place.
    pub fn build_index<I>(&self, articles: I) -> Result<()>
    where
        I: IntoIterator<Item = Article>,
    {
        let index = match ArticleIndex::build(articles, self.config.clone()) {
            Ok(index) => index,
            Err(e) => {
                log::warn!("Index build rejected, keeping previous snapshot: {e}");
                return Err(e);
            }
        };
        *self.snapshot.write() = Some(Arc::new(index));
        Ok(())
    }

    pub fn is_built(&self) -> bool {
        self.snapshot.read().is_some()
    }

    /// The current snapshot, if any.
    pub fn snapshot(&self) -> Option<Arc<ArticleIndex>> {
        self.snapshot.read().clone()
    }

    fn require_snapshot(&self) -> Result<Arc<ArticleIndex>> {
        self.snapshot()
            .ok_or_else(|| SearchError::not_built("call build_index() before searching"))
    }

    /// Search with the configured default strategy.
    pub fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        self.search_with(self.config.mode, query)
    }

    /// Unscored linear filter over the current snapshot.
    pub fn filter(&self, query: &SearchQuery) -> Result<SearchResponse> {
        self.search_with(SearchMode::FilterOnly, query)
    }

    /// Search with an explicitly chosen strategy.
    pub fn search_with(&self, mode: SearchMode, query: &SearchQuery) -> Result<SearchResponse> {
        let index = self.require_snapshot()?;
        match mode {
            SearchMode::Ranked => index.search(query),
            SearchMode::FilterOnly => {
                LinearSearcher::new(index.articles(), self.config.default_limit).search(query)
            }
        }
    }

    /// Articles related to `article` from the current corpus.
    ///
    /// A `limit` of 0 uses the configured `similar_limit`.
    pub fn find_similar(&self, article: &Article, limit: usize) -> Result<Vec<Arc<Article>>> {
        let index = self.require_snapshot()?;
        let limit = limit_or(limit, self.config.similar_limit);
        let similar = find_similar(article, index.articles().iter().map(Arc::as_ref), limit);
        Ok(similar
            .into_iter()
            .filter_map(|found| index.article(&found.id).cloned())
            .collect())
    }

    /// Type-ahead suggestions. Empty before the first build.
    ///
    /// A `limit` of 0 uses the configured `suggestion_limit`.
    pub fn suggestions(&self, partial: &str, limit: usize) -> Vec<String> {
        let limit = limit_or(limit, self.config.suggestion_limit);
        self.snapshot()
            .map(|index| index.suggestions(partial, limit))
            .unwrap_or_default()
    }

    /// Term statistics of the current snapshot. All zero before the first build.
    pub fn stats(&self) -> IndexStats {
        self.snapshot()
            .map(|index| index.stats())
            .unwrap_or_default()
    }
}

fn limit_or(limit: usize, default_limit: usize) -> usize {
    if limit == 0 { default_limit } else { limit }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self {
            config: SearchConfig::default(),
            snapshot: RwLock::new(None),
        }
    }
}
