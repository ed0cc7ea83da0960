//! Index writer: walks the corpus once and fills every field index.

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::{Analyzer, GermanAnalyzer, KeywordAnalyzer};
use crate::data::Article;
use crate::engine::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::index::ArticleIndex;
use crate::index::field::SearchField;
use crate::index::term_index::{DocOrdinal, TermIndex};

/// Accumulates articles into fresh field indexes.
///
/// A writer always starts empty, so nothing from a previous build can leak
/// into the snapshot it produces.
#[derive(Debug)]
pub struct IndexWriter {
    text_analyzer: GermanAnalyzer,
    tag_analyzer: KeywordAnalyzer,
    fields: [TermIndex; SearchField::COUNT],
    articles: Vec<Arc<Article>>,
    ids: AHashMap<String, DocOrdinal>,
}

impl IndexWriter {
    pub fn new(config: &SearchConfig) -> Self {
        IndexWriter {
            text_analyzer: GermanAnalyzer::new().with_min_token_chars(config.min_token_chars),
            tag_analyzer: KeywordAnalyzer::new(),
            fields: Default::default(),
            articles: Vec::new(),
            ids: AHashMap::new(),
        }
    }

    /// Index one article and return its ordinal.
    ///
    /// Fails if an article with the same id was already added.
    pub fn add_article(&mut self, article: Article) -> Result<DocOrdinal> {
        if self.ids.contains_key(&article.id) {
            return Err(SearchError::invalid_argument(format!(
                "duplicate article id '{}'",
                article.id
            )));
        }
        let ordinal = DocOrdinal::try_from(self.articles.len()).map_err(|_| {
            SearchError::invalid_argument("corpus exceeds the maximum number of articles")
        })?;

        for field in SearchField::ALL {
            let index = &mut self.fields[field.ordinal()];
            match field.text_of(&article) {
                Some(text) => {
                    for term in self.text_analyzer.analyze(text) {
                        index.insert(term, ordinal);
                    }
                }
                None => {
                    for tag in article.tags() {
                        for term in self.tag_analyzer.analyze(tag) {
                            index.insert(term, ordinal);
                        }
                    }
                }
            }
        }

        self.ids.insert(article.id.clone(), ordinal);
        self.articles.push(Arc::new(article));
        Ok(ordinal)
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    /// Seal the writer into an immutable snapshot.
    pub fn finish(self, config: SearchConfig) -> ArticleIndex {
        ArticleIndex {
            articles: self.articles,
            ids: self.ids,
            fields: self.fields,
            analyzer: self.text_analyzer,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Author, Category};

    fn article(id: &str, title: &str) -> Article {
        Article::new(
            id,
            title,
            Author::new("dz", "Detlef Zeiler"),
            Category::new("techzap", "TechZap"),
        )
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut writer = IndexWriter::new(&SearchConfig::default());
        writer.add_article(article("a1", "Linux")).unwrap();
        let err = writer.add_article(article("a1", "Windows")).unwrap_err();
        assert!(matches!(err, SearchError::InvalidArgument(_)));
        assert_eq!(writer.article_count(), 1);
    }

    #[test]
    fn test_tags_are_indexed_verbatim() {
        let mut writer = IndexWriter::new(&SearchConfig::default());
        writer
            .add_article(article("a1", "Linux").with_tags(["Open Source", "IT"]))
            .unwrap();
        let index = writer.finish(SearchConfig::default());

        let tags = index.field(SearchField::Tags);
        assert_eq!(tags.get("open source"), Some(&[0][..]));
        assert_eq!(tags.get("it"), Some(&[0][..]));
        assert!(tags.get("open").is_none());
    }

    #[test]
    fn test_author_and_category_names_are_tokenized() {
        let mut writer = IndexWriter::new(&SearchConfig::default());
        writer.add_article(article("a1", "Linux")).unwrap();
        let index = writer.finish(SearchConfig::default());

        let authors = index.field(SearchField::Author);
        assert!(authors.get("detlef").is_some());
        assert!(authors.get("zeiler").is_some());
        assert!(index.field(SearchField::Category).get("techzap").is_some());
    }
}
