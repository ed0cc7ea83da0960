//! Search queries, structured filters and responses.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data::Article;
use crate::index::field::SearchField;

/// Inclusive range on an article's creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl DateRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        DateRange { from, to }
    }

    pub fn contains(&self, at: &DateTime<Utc>) -> bool {
        self.from <= *at && *at <= self.to
    }
}

/// A free-text query with optional structured filters and paging.
///
/// Filters combine with AND. Within the tag filter any one requested tag
/// is enough.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchQuery {
    pub text: String,
    /// Keep only articles whose category id equals this.
    pub category: Option<String>,
    /// Keep only articles whose author id equals this.
    pub author: Option<String>,
    /// Keep only articles carrying at least one of these tags (exact match).
    pub tags: Vec<String>,
    /// Inclusive lower bound on reading time in minutes.
    pub min_reading_time: Option<u32>,
    /// Inclusive upper bound on reading time in minutes.
    pub max_reading_time: Option<u32>,
    pub date_range: Option<DateRange>,
    /// Page size. `None` or `0` fall back to the configured default.
    pub limit: Option<usize>,
    pub offset: usize,
}

impl SearchQuery {
    pub fn new<S: Into<String>>(text: S) -> Self {
        SearchQuery {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn category<S: Into<String>>(mut self, category: S) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn author<S: Into<String>>(mut self, author: S) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn min_reading_time(mut self, minutes: u32) -> Self {
        self.min_reading_time = Some(minutes);
        self
    }

    pub fn max_reading_time(mut self, minutes: u32) -> Self {
        self.max_reading_time = Some(minutes);
        self
    }

    pub fn date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// True if the text is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub(crate) fn effective_limit(&self, default_limit: usize) -> usize {
        match self.limit {
            Some(limit) if limit > 0 => limit,
            _ => default_limit,
        }
    }

    /// Check the structured filters against one article.
    pub fn matches_filters(&self, article: &Article) -> bool {
        if let Some(category) = &self.category {
            if article.category.id != *category {
                return false;
            }
        }
        if let Some(author) = &self.author {
            if article.author.id != *author {
                return false;
            }
        }
        if !self.tags.is_empty() && !self.tags.iter().any(|tag| article.tags().contains(tag)) {
            return false;
        }
        let reading_time = article.metadata.reading_time;
        if self.min_reading_time.is_some_and(|min| reading_time < min) {
            return false;
        }
        if self.max_reading_time.is_some_and(|max| reading_time > max) {
            return false;
        }
        if let Some(range) = &self.date_range {
            if !range.contains(&article.metadata.created_at) {
                return false;
            }
        }
        true
    }

    /// Cut one page out of the filtered result list.
    pub(crate) fn paginate<T>(&self, items: Vec<T>, default_limit: usize) -> Vec<T> {
        let limit = self.effective_limit(default_limit);
        items.into_iter().skip(self.offset).take(limit).collect()
    }
}

/// One matched article.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub article: Arc<Article>,
    /// Accumulated relevance. Always 0 for filter-only searches.
    pub score: f64,
    /// Distinct fields that contributed to the score, in first-match order.
    pub matched_fields: Vec<SearchField>,
}

/// A page of results plus bookkeeping.
#[derive(Debug, Clone)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
    /// Filtered match count before pagination.
    pub total: usize,
    pub query: SearchQuery,
    pub execution_time: Duration,
}

impl SearchResponse {
    pub(crate) fn empty(query: &SearchQuery) -> Self {
        SearchResponse {
            results: Vec::new(),
            total: 0,
            query: query.clone(),
            execution_time: Duration::ZERO,
        }
    }

    /// Ids of the returned articles in result order.
    pub fn ids(&self) -> Vec<&str> {
        self.results
            .iter()
            .map(|hit| hit.article.id.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Author, Category};
    use chrono::TimeZone;

    fn article() -> Article {
        let mut article = Article::new(
            "a1",
            "Linux",
            Author::new("dz", "Detlef"),
            Category::new("techzap", "TechZap"),
        )
        .with_tags(["Linux", "Shell"]);
        article.metadata.reading_time = 7;
        article.metadata.created_at = Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap();
        article
    }

    #[test]
    fn test_no_filters_match_everything() {
        assert!(SearchQuery::new("x").matches_filters(&article()));
    }

    #[test]
    fn test_category_and_author_filters() {
        let a = article();
        assert!(SearchQuery::new("x").category("techzap").matches_filters(&a));
        assert!(!SearchQuery::new("x").category("geschichte").matches_filters(&a));
        assert!(SearchQuery::new("x").author("dz").matches_filters(&a));
        assert!(!SearchQuery::new("x").author("jz").category("techzap").matches_filters(&a));
    }

    #[test]
    fn test_tag_filter_is_any_of_and_case_sensitive() {
        let a = article();
        assert!(SearchQuery::new("x").tags(["Windows", "Shell"]).matches_filters(&a));
        assert!(!SearchQuery::new("x").tags(["shell"]).matches_filters(&a));
        assert!(SearchQuery::new("x").tags(Vec::<String>::new()).matches_filters(&a));
    }

    #[test]
    fn test_reading_time_bounds_are_inclusive() {
        let a = article();
        assert!(SearchQuery::new("x").min_reading_time(7).max_reading_time(7).matches_filters(&a));
        assert!(!SearchQuery::new("x").min_reading_time(8).matches_filters(&a));
        assert!(!SearchQuery::new("x").max_reading_time(6).matches_filters(&a));
    }

    #[test]
    fn test_date_range_filter() {
        let a = article();
        let inside = DateRange::new(
            Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap(),
        );
        let outside = DateRange::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap(),
        );
        assert!(SearchQuery::new("x").date_range(inside).matches_filters(&a));
        assert!(!SearchQuery::new("x").date_range(outside).matches_filters(&a));
    }

    #[test]
    fn test_limit_zero_means_default() {
        assert_eq!(SearchQuery::new("x").effective_limit(20), 20);
        assert_eq!(SearchQuery::new("x").limit(0).effective_limit(20), 20);
        assert_eq!(SearchQuery::new("x").limit(3).effective_limit(20), 3);
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(SearchQuery::new("x").limit(3).offset(2).paginate(items.clone(), 20), vec![2, 3, 4]);
        assert!(SearchQuery::new("x").offset(50).paginate(items, 20).is_empty());
    }

    #[test]
    fn test_query_deserializes_from_camel_case() {
        let query: SearchQuery =
            serde_json::from_str(r#"{ "text": "linux", "minReadingTime": 5, "limit": 10 }"#).unwrap();
        assert_eq!(query.text, "linux");
        assert_eq!(query.min_reading_time, Some(5));
        assert_eq!(query.limit, Some(10));
        assert_eq!(query.offset, 0);
    }
}
