//! Weighted multi-field relevance search through the inverted indexes.
//!
//! Every query term is looked up in every field in three tiers:
//!
//! | tier      | condition                                   | contribution            |
//! |-----------|---------------------------------------------|-------------------------|
//! | exact     | indexed term == query term                  | `weight`                |
//! | prefix    | indexed term starts with the query term     | `weight * prefix_factor`|
//! | substring | indexed term contains it, but not as prefix | `weight * substring_factor` |
//!
//! Contributions add up across tiers, fields and terms. Ties on the final
//! score are broken by corpus order.

use std::cmp::Ordering;
use std::time::Instant;

use ahash::AHashMap;

use crate::error::Result;
use crate::index::ArticleIndex;
use crate::index::field::SearchField;
use crate::index::term_index::DocOrdinal;
use crate::search::query::{SearchHit, SearchQuery, SearchResponse};
use crate::search::{SearchMode, Searcher};

#[derive(Debug, Default)]
struct Accumulator {
    score: f64,
    fields: Vec<SearchField>,
}

impl Accumulator {
    fn add(&mut self, score: f64, field: SearchField) {
        self.score += score;
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
    }
}

type Scores = AHashMap<DocOrdinal, Accumulator>;

fn add_postings(scores: &mut Scores, postings: &[DocOrdinal], score: f64, field: SearchField) {
    for doc in postings {
        scores.entry(*doc).or_default().add(score, field);
    }
}

impl ArticleIndex {
    fn score_field(&self, term: &str, field: SearchField, scores: &mut Scores) {
        let weight = self.config.field_weights.weight(field);
        if weight == 0.0 {
            return;
        }
        let index = self.field(field);

        if let Some(postings) = index.get(term) {
            add_postings(scores, postings, weight, field);
        }

        let prefix_score = weight * self.config.prefix_factor;
        for (_, postings) in index.prefixed(term) {
            add_postings(scores, postings, prefix_score, field);
        }

        let substring_score = weight * self.config.substring_factor;
        for (indexed, postings) in index.iter() {
            if !indexed.starts_with(term) && indexed.contains(term) {
                add_postings(scores, postings, substring_score, field);
            }
        }
    }

    fn score_terms(&self, terms: &[String]) -> Scores {
        let mut scores = Scores::new();
        for term in terms {
            for field in SearchField::ALL {
                self.score_field(term, field, &mut scores);
            }
        }
        scores
    }
}

fn by_relevance(a: &(DocOrdinal, Accumulator), b: &(DocOrdinal, Accumulator)) -> Ordering {
    b.1.score.total_cmp(&a.1.score).then(a.0.cmp(&b.0))
}

impl Searcher for ArticleIndex {
    fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let start = Instant::now();
        if query.is_blank() {
            return Ok(SearchResponse::empty(query));
        }

        let terms = self.analyze_query(&query.text);
        let mut matches: Vec<(DocOrdinal, Accumulator)> = self
            .score_terms(&terms)
            .into_iter()
            .filter(|(doc, _)| query.matches_filters(self.article_at(*doc)))
            .collect();
        matches.sort_by(by_relevance);

        let total = matches.len();
        let results = query
            .paginate(matches, self.config.default_limit)
            .into_iter()
            .map(|(doc, acc)| SearchHit {
                article: self.article_at(doc).clone(),
                score: acc.score,
                matched_fields: acc.fields,
            })
            .collect();

        let execution_time = start.elapsed();
        log::debug!(
            "Ranked search for {:?}: {} terms, {} matches in {:.2?}",
            query.text,
            terms.len(),
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
        SearchMode::Ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Article, Author, Category};
    use crate::engine::config::SearchConfig;

    fn titled(id: &str, title: &str) -> Article {
        Article::new(id, title, Author::new("dz", "Detlef"), Category::new("techzap", "TechZap"))
    }

    fn build(articles: Vec<Article>) -> ArticleIndex {
        ArticleIndex::build(articles, SearchConfig::default()).unwrap()
    }

    #[test]
    fn test_tier_scores() {
        let index = build(vec![
            titled("1", "Fileserver"),
            titled("2", "Servers"),
            titled("3", "Server"),
        ]);
        let response = index.search(&SearchQuery::new("server")).unwrap();
        assert_eq!(response.ids(), vec!["3", "2", "1"]);

        let scores: Vec<f64> = response.results.iter().map(|hit| hit.score).collect();
        assert!((scores[0] - 5.0).abs() < 1e-9);
        assert!((scores[1] - 3.5).abs() < 1e-9);
        assert!((scores[2] - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_scores_add_across_fields_and_terms() {
        let index = build(vec![
            titled("1", "Linux Kernel").with_content("Linux läuft überall"),
        ]);
        let response = index.search(&SearchQuery::new("linux kernel")).unwrap();
        let hit = &response.results[0];
        // linux: title 5 + content 1; kernel: title 5
        assert!((hit.score - 11.0).abs() < 1e-9);
        assert_eq!(hit.matched_fields, vec![SearchField::Title, SearchField::Content]);
    }

    #[test]
    fn test_ties_follow_corpus_order() {
        let index = build(vec![titled("b", "Netzwerk"), titled("a", "Netzwerk")]);
        let response = index.search(&SearchQuery::new("netzwerk")).unwrap();
        assert_eq!(response.ids(), vec!["b", "a"]);
    }

    #[test]
    fn test_blank_and_stop_word_queries() {
        let index = build(vec![titled("1", "Das Netzwerk")]);
        for text in ["", "   ", "das und ist"] {
            let response = index.search(&SearchQuery::new(text)).unwrap();
            assert!(response.is_empty());
            assert_eq!(response.total, 0);
        }
    }

    #[test]
    fn test_zero_weight_field_does_not_match() {
        let config = SearchConfig {
            field_weights: crate::index::field::FieldWeights {
                content: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let index = ArticleIndex::build(
            vec![titled("1", "Titel").with_content("Datenbank")],
            config,
        )
        .unwrap();
        assert!(index.search(&SearchQuery::new("datenbank")).unwrap().is_empty());
        assert_eq!(index.mode(), SearchMode::Ranked);
    }
}
