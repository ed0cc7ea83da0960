//! Article data model.
//!
//! Articles are immutable snapshots supplied by the host application, usually
//! deserialized from the generated JSON data file. The search core never
//! mutates them.

pub mod corpus;
pub mod metadata;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// The author of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl Author {
    pub fn new<I: Into<String>, N: Into<String>>(id: I, name: N) -> Self {
        Author {
            id: id.into(),
            name: name.into(),
            bio: None,
        }
    }
}

/// A node in the category hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub children: Vec<String>,
    /// Ids from the root down to this category.
    #[serde(default)]
    pub path: Vec<String>,
}

impl Category {
    pub fn new<I: Into<String>, N: Into<String>>(id: I, name: N) -> Self {
        let id = id.into();
        Category {
            path: vec![id.clone()],
            id,
            name: name.into(),
            description: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Derived and editorial metadata of an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMetadata {
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
    /// Free-text tags. Order is irrelevant for matching.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Estimated reading time in minutes.
    #[serde(default)]
    pub reading_time: u32,
    #[serde(default)]
    pub word_count: u32,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "de".to_string()
}

impl Default for ArticleMetadata {
    fn default() -> Self {
        ArticleMetadata {
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
            tags: Vec::new(),
            reading_time: 0,
            word_count: 0,
            language: default_language(),
        }
    }
}

/// A single article record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique within a collection snapshot. Numeric ids in the source data
    /// are normalized to their decimal string form.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    pub author: Author,
    pub category: Category,
    #[serde(default)]
    pub metadata: ArticleMetadata,
    #[serde(default)]
    pub url: String,
}

impl Article {
    /// Create an article with empty text fields and default metadata.
    pub fn new<I, T>(id: I, title: T, author: Author, category: Category) -> Self
    where
        I: Into<String>,
        T: Into<String>,
    {
        Article {
            id: id.into(),
            slug: String::new(),
            title: title.into(),
            excerpt: String::new(),
            content: String::new(),
            author,
            category,
            metadata: ArticleMetadata::default(),
            url: String::new(),
        }
    }

    pub fn with_excerpt<S: Into<String>>(mut self, excerpt: S) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn with_content<S: Into<String>>(mut self, content: S) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_slug<S: Into<String>>(mut self, slug: S) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_metadata(mut self, metadata: ArticleMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Tags of this article.
    pub fn tags(&self) -> &[String] {
        &self.metadata.tags
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Unsigned(n) => n.to_string(),
        RawId::Signed(n) => n.to_string(),
    })
}
