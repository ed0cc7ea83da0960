//! Unscored linear-scan search.
//!
//! A cheap alternative to the ranked engine: no index lookups, no scores,
//! corpus order preserved. Queries shorter than two characters return the
//! whole collection rather than nothing.

use std::sync::Arc;
use std::time::Instant;

use crate::data::Article;
use crate::error::Result;
use crate::search::query::{SearchHit, SearchQuery, SearchResponse};
use crate::search::{SearchMode, Searcher};

/// Queries shorter than this (after trimming) match every article.
pub const MIN_FILTER_QUERY_CHARS: usize = 2;

fn haystack(article: &Article) -> String {
    [
        article.title.as_str(),
        article.excerpt.as_str(),
        article.content.as_str(),
        article.author.name.as_str(),
        article.category.name.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Returns true if `needle` (already trimmed and lowercased) occurs in the
/// article's searchable text.
fn contains_needle(article: &Article, needle: &str) -> bool {
    needle.chars().count() < MIN_FILTER_QUERY_CHARS || haystack(article).contains(needle)
}

/// Keep every article whose title, excerpt, content, author name or
/// category name contains `text` as a case-insensitive substring.
pub fn filter<'a, I>(articles: I, text: &str) -> Vec<&'a Article>
where
    I: IntoIterator<Item = &'a Article>,
{
    let needle = text.trim().to_lowercase();
    articles
        .into_iter()
        .filter(|article| contains_needle(article, &needle))
        .collect()
}

/// [`Searcher`] wrapper around [`filter`] that also applies the structured
/// filters and pagination of a [`SearchQuery`].
#[derive(Debug, Clone, Copy)]
pub struct LinearSearcher<'a> {
    articles: &'a [Arc<Article>],
    default_limit: usize,
}

impl<'a> LinearSearcher<'a> {
    pub fn new(articles: &'a [Arc<Article>], default_limit: usize) -> Self {
        LinearSearcher {
            articles,
            default_limit,
        }
    }
}

impl Searcher for LinearSearcher<'_> {
    fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let start = Instant::now();
        let needle = query.text.trim().to_lowercase();

        let matches: Vec<&Arc<Article>> = self
            .articles
            .iter()
            .filter(|article| contains_needle(article, &needle) && query.matches_filters(article))
            .collect();

        let total = matches.len();
        let results = query
            .paginate(matches, self.default_limit)
            .into_iter()
            .map(|article| SearchHit {
                article: Arc::clone(article),
                score: 0.0,
                matched_fields: Vec::new(),
            })
            .collect();

        let execution_time = start.elapsed();
        log::debug!(
            "Linear filter for {:?}: {} matches in {:.2?}",
            query.text,
            total,
            execution_time
        );

        Ok(SearchResponse {
            results,
            total,
            query: query.clone(),
            execution_time,
        })
    }

    fn mode(&self) -> SearchMode {
        SearchMode::FilterOnly
    }
}
