//! Loading and summarizing article collections.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::data::Article;
use crate::error::Result;

/// Parse a JSON array of articles.
pub fn parse_articles(json: &str) -> Result<Vec<Article>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON array of articles from a file.
pub fn load_articles<P: AsRef<Path>>(path: P) -> Result<Vec<Article>> {
    let json = fs::read_to_string(path.as_ref())?;
    let articles = parse_articles(&json)?;
    log::debug!(
        "Loaded {} articles from {}",
        articles.len(),
        path.as_ref().display()
    );
    Ok(articles)
}

/// Aggregate figures over a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleStats {
    pub total_articles: usize,
    pub total_words: u64,
    pub total_reading_time: u64,
    pub average_words_per_article: u64,
    pub average_reading_time: u64,
    pub category_counts: BTreeMap<String, usize>,
    pub author_counts: BTreeMap<String, usize>,
    pub tag_counts: BTreeMap<String, usize>,
}

fn rounded_average(total: u64, count: usize) -> u64 {
    if count == 0 {
        return 0;
    }
    (total as f64 / count as f64).round() as u64
}

impl ArticleStats {
    pub fn from_articles<'a, I>(articles: I) -> Self
    where
        I: IntoIterator<Item = &'a Article>,
    {
        let mut stats = ArticleStats::default();
        for article in articles {
            stats.total_articles += 1;
            stats.total_words += u64::from(article.metadata.word_count);
            stats.total_reading_time += u64::from(article.metadata.reading_time);
            *stats
                .category_counts
                .entry(article.category.id.clone())
                .or_default() += 1;
            *stats
                .author_counts
                .entry(article.author.id.clone())
                .or_default() += 1;
            for tag in article.tags() {
                *stats.tag_counts.entry(tag.clone()).or_default() += 1;
            }
        }
        stats.average_words_per_article = rounded_average(stats.total_words, stats.total_articles);
        stats.average_reading_time = rounded_average(stats.total_reading_time, stats.total_articles);
        stats
    }
}

/// Group articles by category id, keeping corpus order within each group.
pub fn group_by_category<'a, I>(articles: I) -> BTreeMap<String, Vec<&'a Article>>
where
    I: IntoIterator<Item = &'a Article>,
{
    let mut groups: BTreeMap<String, Vec<&'a Article>> = BTreeMap::new();
    for article in articles {
        groups
            .entry(article.category.id.clone())
            .or_default()
            .push(article);
    }
    groups
}

/// Sort order for article listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    /// Most recently updated first.
    #[default]
    Date,
    /// Title, ascending.
    Title,
    /// Longest reading time first.
    ReadingTime,
    /// Highest word count first.
    WordCount,
}

/// Sort key approximating German dictionary order.
///
/// Umlauts sort with their base letter (`Über` next to `Uber`) and `ß`
/// sorts as `ss`.
pub fn collation_key(text: &str) -> String {
    let mut key = String::with_capacity(text.len());
    for c in text.to_lowercase().nfd().filter(|c| !is_combining_mark(*c)) {
        match c {
            'ß' => key.push_str("ss"),
            c => key.push(c),
        }
    }
    key
}

/// Sorted copy of `articles`. The sort is stable.
pub fn sort_articles<'a>(articles: &'a [Article], sort_by: SortBy) -> Vec<&'a Article> {
    let mut sorted: Vec<&Article> = articles.iter().collect();
    match sort_by {
        SortBy::Date => sorted.sort_by(|a, b| b.metadata.updated_at.cmp(&a.metadata.updated_at)),
        SortBy::Title => sorted.sort_by_cached_key(|a| collation_key(&a.title)),
        SortBy::ReadingTime => {
            sorted.sort_by(|a, b| b.metadata.reading_time.cmp(&a.metadata.reading_time))
        }
        SortBy::WordCount => sorted.sort_by(|a, b| b.metadata.word_count.cmp(&a.metadata.word_count)),
    }
    sorted
}
