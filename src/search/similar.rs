//! "Related articles" recommendations by shared metadata.
//!
//! Score for each candidate:
//!
//! ```text
//! 3 × same category + 2 × shared tags + 1 × same author
//! ```
//!
//! This works directly on the corpus and does not touch the inverted index.

use crate::data::Article;

pub const CATEGORY_SCORE: u32 = 3;
pub const SHARED_TAG_SCORE: u32 = 2;
pub const AUTHOR_SCORE: u32 = 1;

/// Similarity between `target` and `other`.
///
/// Shared tags are counted per tag of the target that also appears on
/// `other`.
pub fn similarity(target: &Article, other: &Article) -> u32 {
    let mut score = 0;
    if other.category.id == target.category.id {
        score += CATEGORY_SCORE;
    }
    let shared = target
        .tags()
        .iter()
        .filter(|tag| other.tags().contains(tag))
        .count() as u32;
    score += shared * SHARED_TAG_SCORE;
    if other.author.id == target.author.id {
        score += AUTHOR_SCORE;
    }
    score
}

/// Up to `limit` articles most similar to `target`, best first.
///
/// The target itself (by id) and articles with score 0 are never
/// returned. Equal scores keep corpus order.
pub fn find_similar<'a, I>(target: &Article, corpus: I, limit: usize) -> Vec<&'a Article>
where
    I: IntoIterator<Item = &'a Article>,
{
    let mut scored: Vec<(u32, &'a Article)> = corpus
        .into_iter()
        .filter(|other| other.id != target.id)
        .map(|other| (similarity(target, other), other))
        .filter(|(score, _)| *score > 0)
        .collect();

    // stable: ties keep corpus order
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(limit);
    scored.into_iter().map(|(_, article)| article).collect()
}
