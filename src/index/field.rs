//! Indexed article fields and their relevance weights.

use serde::{Deserialize, Serialize};

use crate::data::Article;

/// The closed set of article fields that get their own inverted index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Excerpt,
    Content,
    Tags,
    Author,
    Category,
}

impl SearchField {
    /// Number of indexed fields.
    pub const COUNT: usize = 6;

    /// All fields in query evaluation order.
    pub const ALL: [SearchField; SearchField::COUNT] = [
        SearchField::Title,
        SearchField::Excerpt,
        SearchField::Content,
        SearchField::Tags,
        SearchField::Author,
        SearchField::Category,
    ];

    /// Slot of this field in per-field arrays.
    pub const fn ordinal(self) -> usize {
        match self {
            SearchField::Title => 0,
            SearchField::Excerpt => 1,
            SearchField::Content => 2,
            SearchField::Tags => 3,
            SearchField::Author => 4,
            SearchField::Category => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Excerpt => "excerpt",
            SearchField::Content => "content",
            SearchField::Tags => "tags",
            SearchField::Author => "author",
            SearchField::Category => "category",
        }
    }

    /// The raw text of this field for free-text fields.
    ///
    /// Returns `None` for [`SearchField::Tags`], which is a list and is
    /// indexed per tag.
    pub fn text_of(self, article: &Article) -> Option<&str> {
        match self {
            SearchField::Title => Some(&article.title),
            SearchField::Excerpt => Some(&article.excerpt),
            SearchField::Content => Some(&article.content),
            SearchField::Author => Some(&article.author.name),
            SearchField::Category => Some(&article.category.name),
            SearchField::Tags => None,
        }
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relevance weight of a match in each field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub title: f64,
    pub tags: f64,
    pub excerpt: f64,
    pub author: f64,
    pub category: f64,
    pub content: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        FieldWeights {
            title: 5.0,
            tags: 4.0,
            excerpt: 3.0,
            author: 2.0,
            category: 2.0,
            content: 1.0,
        }
    }
}

impl FieldWeights {
    pub fn weight(&self, field: SearchField) -> f64 {
        match field {
            SearchField::Title => self.title,
            SearchField::Tags => self.tags,
            SearchField::Excerpt => self.excerpt,
            SearchField::Author => self.author,
            SearchField::Category => self.category,
            SearchField::Content => self.content,
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (SearchField, f64)> + '_ {
        SearchField::ALL.into_iter().map(|field| (field, self.weight(field)))
    }
}
