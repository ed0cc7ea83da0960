//! # Article Search
//!
//! In-memory full-text search and relevance ranking over a fixed article
//! collection.
//!
//! ## Features
//!
//! - German-aware tokenizer with a fixed stop-word list
//! - Per-field inverted indexes (title, excerpt, content, tags, author, category)
//! - Weighted ranking with exact, prefix and substring match tiers
//! - Structured filters (category, author, tags, reading time, date range) and paging
//! - Unscored linear filter as a cheap alternative strategy
//! - "Related articles" recommendations and type-ahead suggestions
//!
//! ## Example
//!
//! ```
//! use article_search::{Article, Author, Category, SearchEngine, SearchQuery};
//!
//! let engine = SearchEngine::default();
//! engine
//!     .build_index(vec![Article::new(
//!         "1",
//!         "Linux für Einsteiger",
//!         Author::new("dz", "Detlef Zeiler"),
//!         Category::new("techzap", "TechZap"),
//!     )])
//!     .unwrap();
//!
//! let response = engine.search(&SearchQuery::new("linux")).unwrap();
//! assert_eq!(response.total, 1);
//! ```

pub mod analysis;
pub mod data;
mod engine;
mod error;
pub mod index;
pub mod search;

// Re-exports for the public API
pub use data::{Article, ArticleMetadata, Author, Category};
pub use engine::SearchEngine;
pub use engine::config::{SearchConfig, SearchConfigBuilder};
pub use error::{Result, SearchError};
pub use index::field::{FieldWeights, SearchField};
pub use index::{ArticleIndex, IndexStats};
pub use search::similar::find_similar;
pub use search::{
    DateRange, LinearSearcher, SearchHit, SearchMode, SearchQuery, SearchResponse, Searcher,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
