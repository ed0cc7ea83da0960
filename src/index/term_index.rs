//! Sorted term dictionary with posting lists.

use std::collections::BTreeMap;
use std::ops::Bound;

/// Position of an article in its snapshot's corpus order.
pub type DocOrdinal = u32;

/// A single-field inverted index mapping each term to the ordinals of the
/// articles that contain it.
///
/// Terms are kept sorted so prefix lookups are a range scan. Posting lists
/// are sorted and free of duplicates as long as documents are added in
/// ascending ordinal order, which the index writer guarantees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermIndex {
    terms: BTreeMap<String, Vec<DocOrdinal>>,
}

impl TermIndex {
    pub fn new() -> Self {
        TermIndex::default()
    }

    /// Record that `doc` contains `term`.
    pub fn insert(&mut self, term: String, doc: DocOrdinal) {
        let postings = self.terms.entry(term).or_default();
        if postings.last() != Some(&doc) {
            debug_assert!(postings.last().is_none_or(|last| *last < doc));
            postings.push(doc);
        }
    }

    /// Postings of an exact term.
    pub fn get(&self, term: &str) -> Option<&[DocOrdinal]> {
        self.terms.get(term).map(Vec::as_slice)
    }

    /// Terms strictly longer than `prefix` that start with it, in sorted order.
    pub fn prefixed<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a [DocOrdinal])> + 'a {
        self.terms
            .range::<str, _>((Bound::Excluded(prefix), Bound::Unbounded))
            .take_while(move |(term, _)| term.starts_with(prefix))
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }

    /// Terms starting with `prefix`, including an exact match.
    pub fn starting_with<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.terms
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(term, _)| term.starts_with(prefix))
            .map(|(term, _)| term.as_str())
    }

    /// All terms with their postings, in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DocOrdinal])> {
        self.terms
            .iter()
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }

    /// Number of unique terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TermIndex {
        let mut index = TermIndex::new();
        index.insert("server".to_string(), 0);
        index.insert("servers".to_string(), 1);
        index.insert("fileserver".to_string(), 2);
        index.insert("serverraum".to_string(), 2);
        index.insert("service".to_string(), 3);
        index
    }

    #[test]
    fn test_insert_deduplicates_postings() {
        let mut index = TermIndex::new();
        index.insert("linux".to_string(), 0);
        index.insert("linux".to_string(), 0);
        index.insert("linux".to_string(), 4);
        assert_eq!(index.get("linux"), Some(&[0, 4][..]));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_prefixed_excludes_exact_term() {
        let index = sample();
        let terms: Vec<&str> = index.prefixed("server").map(|(t, _)| t).collect();
        assert_eq!(terms, vec!["serverraum", "servers"]);
    }

    #[test]
    fn test_starting_with_includes_exact_term() {
        let index = sample();
        let terms: Vec<&str> = index.starting_with("serv").collect();
        assert_eq!(terms, vec!["server", "serverraum", "servers", "service"]);
        assert_eq!(index.starting_with("zzz").count(), 0);
    }

    #[test]
    fn test_iter_is_sorted() {
        let index = sample();
        let terms: Vec<&str> = index.iter().map(|(t, _)| t).collect();
        let mut sorted = terms.clone();
        sorted.sort();
        assert_eq!(terms, sorted);
        assert!(!index.is_empty());
    }
}
