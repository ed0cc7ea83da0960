//! Derived article metadata: word counts, reading time, excerpts, tags and
//! record validation.

use ahash::AHashMap;
use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::german::normalize;
use crate::analysis::stop_words::is_tag_stop_word;
use crate::data::{Article, ArticleMetadata};
use crate::error::{Result, SearchError};

/// Words per minute used for reading time estimates.
pub const DEFAULT_READING_SPEED: u32 = 200;

/// Default excerpt length in characters.
pub const DEFAULT_EXCERPT_LENGTH: usize = 200;

/// Only words longer than this are tag candidates.
const MIN_TAG_CHARS: usize = 4;

lazy_static! {
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref SLUG: Regex = Regex::new(r"^[a-z0-9-]+$").unwrap();
}

/// Number of words in `text`. Punctuation is not a word.
pub fn count_words(text: &str) -> u32 {
    normalize(text).split_whitespace().count() as u32
}

/// Reading time in whole minutes, rounded up.
pub fn reading_time(text: &str) -> u32 {
    count_words(text).div_ceil(DEFAULT_READING_SPEED)
}

/// Short summary of `text` with at most `length` characters of content.
///
/// HTML tags are stripped first. The cut lands on the last sentence end if
/// that keeps more than 70% of the budget, otherwise on the last space
/// followed by `...`.
pub fn generate_excerpt(text: &str, length: usize) -> String {
    let clean = HTML_TAG.replace_all(text, "");
    if clean.chars().count() <= length {
        return clean.into_owned();
    }

    let truncated: String = clean.chars().take(length).collect();
    let chars: Vec<char> = truncated.chars().collect();

    let sentence_end = chars.iter().rposition(|c| matches!(c, '.' | '!' | '?'));
    if let Some(end) = sentence_end {
        if end as f64 > length as f64 * 0.7 {
            return chars[..=end].iter().collect();
        }
    }

    match chars.iter().rposition(|c| *c == ' ') {
        Some(space) if space > 0 => {
            let mut excerpt: String = chars[..space].iter().collect();
            excerpt.push_str("...");
            excerpt
        }
        _ => truncated + "...",
    }
}

/// The most frequent content words of `text`, at most `max_tags`.
///
/// Candidates are longer than three characters, not on the tag stop list,
/// and occur more than once. Equal frequencies keep first-occurrence order.
pub fn extract_tags(text: &str, max_tags: usize) -> Vec<String> {
    let normalized = normalize(text);
    let mut counts: AHashMap<&str, (usize, usize)> = AHashMap::new();
    for (position, word) in normalized
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_TAG_CHARS)
        .enumerate()
    {
        counts.entry(word).or_insert((0, position)).0 += 1;
    }

    let mut candidates: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .filter(|(word, (count, _))| *count > 1 && !is_tag_stop_word(word))
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    candidates.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    candidates
        .into_iter()
        .take(max_tags)
        .map(|(word, _, _)| word.to_string())
        .collect()
}

/// Fresh metadata for `content`, merging `existing_tags` with up to five
/// extracted tags (existing first, no duplicates).
pub fn generate_metadata(content: &str, existing_tags: &[String]) -> ArticleMetadata {
    let mut tags: Vec<String> = Vec::with_capacity(existing_tags.len() + 5);
    for tag in existing_tags.iter().cloned().chain(extract_tags(content, 5)) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    let now = Utc::now();
    ArticleMetadata {
        created_at: now,
        updated_at: now,
        tags,
        reading_time: reading_time(content),
        word_count: count_words(content),
        language: "de".to_string(),
    }
}

/// Check an article record for missing or malformed fields.
///
/// All problems are reported together in one `InvalidArgument` error.
pub fn validate_article(article: &Article) -> Result<()> {
    let mut errors = Vec::new();

    if article.id.is_empty() {
        errors.push("article id is required");
    }
    if article.title.is_empty() {
        errors.push("article title is required");
    } else if article.title.chars().count() < 3 {
        errors.push("article title must be at least 3 characters long");
    }
    if article.content.is_empty() {
        errors.push("article content is required");
    } else if article.content.chars().count() < 50 {
        errors.push("article content must be at least 50 characters long");
    }
    if article.author.id.is_empty() {
        errors.push("article author is required");
    }
    if article.category.id.is_empty() {
        errors.push("article category is required");
    }
    if !article.slug.is_empty() && !SLUG.is_match(&article.slug) {
        errors.push("article slug must contain only lowercase letters, numbers, and hyphens");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SearchError::invalid_argument(format!(
            "article '{}': {}",
            article.id,
            errors.join("; ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Author, Category};

    #[test]
    fn test_count_words_and_reading_time() {
        assert_eq!(count_words("Hallo, Welt! Wie geht's?"), 5);
        assert_eq!(count_words(""), 0);
        assert_eq!(reading_time(""), 0);
        assert_eq!(reading_time(&"wort ".repeat(200)), 1);
        assert_eq!(reading_time(&"wort ".repeat(201)), 2);
    }

    #[test]
    fn test_excerpt_short_text_is_unchanged() {
        assert_eq!(generate_excerpt("<p>Kurzer Text.</p>", 200), "Kurzer Text.");
    }

    #[test]
    fn test_excerpt_cuts_at_sentence_end() {
        let text = "Erster Satz ist lang genug. Zweiter Satz folgt hier noch";
        // 30 chars: "Erster Satz ist lang genug. Zw", the period sits at 26 > 21.
        assert_eq!(generate_excerpt(text, 30), "Erster Satz ist lang genug.");
    }

    #[test]
    fn test_excerpt_falls_back_to_word_boundary() {
        let text = "Kein Punkt hier und der Text geht einfach immer weiter";
        assert_eq!(generate_excerpt(text, 20), "Kein Punkt hier und...");
        assert_eq!(generate_excerpt("Donaudampfschifffahrt", 5), "Donau...");
    }

    #[test]
    fn test_extract_tags_by_frequency() {
        let text = "Linux Kernel Linux Shell Kernel Linux Shell Bash eine eine";
        assert_eq!(extract_tags(text, 10), vec!["linux", "kernel", "shell"]);
        assert_eq!(extract_tags(text, 1), vec!["linux"]);
    }

    #[test]
    fn test_extract_tags_skips_filler_words() {
        let text = "Wieder etwas wieder etwas zwischen zwischen Linux Linux";
        assert_eq!(extract_tags(text, 10), vec!["linux"]);
        let text = "Man würde viel machen, würde viel machen während während Server Server";
        assert_eq!(extract_tags(text, 10), vec!["server"]);
    }

    #[test]
    fn test_generate_metadata_merges_tags() {
        let metadata = generate_metadata("Netzwerk Netzwerk Router", &["Netzwerk".to_string()]);
        assert_eq!(metadata.tags, vec!["Netzwerk", "netzwerk"]);
        assert_eq!(metadata.word_count, 3);
        assert_eq!(metadata.reading_time, 1);
        assert_eq!(metadata.language, "de");
    }

    #[test]
    fn test_validate_article() {
        let good = Article::new("a1", "Linux", Author::new("dz", "Detlef"), Category::new("techzap", "TechZap"))
            .with_slug("linux-grundlagen")
            .with_content("x".repeat(60));
        assert!(validate_article(&good).is_ok());

        let bad = good.clone().with_slug("Linux Grundlagen").with_content("kurz");
        let err = validate_article(&bad).unwrap_err().to_string();
        assert!(err.contains("slug"));
        assert!(err.contains("50 characters"));
    }
}
