//! Search execution over an article snapshot.
//!
//! Two strategies are available and kept apart:
//!
//! - [`SearchMode::Ranked`]: inverted-index lookup with weighted scoring
//!   across fields (exact, prefix and substring tiers).
//! - [`SearchMode::FilterOnly`]: a linear substring scan that keeps corpus
//!   order and assigns no scores.
//!
//! Both implement [`Searcher`] and share the structured filters and
//! pagination of [`SearchQuery`].

pub mod linear;
pub mod query;
pub mod ranked;
pub mod similar;
pub mod suggest;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use self::linear::LinearSearcher;
pub use self::query::{DateRange, SearchHit, SearchQuery, SearchResponse};

/// Which search strategy to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Weighted relevance ranking through the inverted index.
    #[default]
    Ranked,
    /// Unscored substring scan in corpus order.
    FilterOnly,
}

/// A search strategy over one corpus snapshot.
pub trait Searcher {
    fn search(&self, query: &SearchQuery) -> Result<SearchResponse>;

    fn mode(&self) -> SearchMode;
}
