//! Fixed German stop-word list.

use ahash::AHashSet;
use lazy_static::lazy_static;

/// Common German function words: articles, pronouns, conjunctions,
/// prepositions and auxiliary verbs.
pub const GERMAN_STOP_WORDS: &[&str] = &[
    // articles
    "der", "die", "das", "dem", "den", "des", "ein", "eine", "einer", "eines", "einem", "einen",
    "kein", "keine", "keinem", "keinen", "keiner",
    // pronouns
    "ich", "du", "er", "sie", "es", "wir", "ihr", "ihm", "ihn", "ihnen", "uns", "mich", "dich",
    "sich", "sein", "seine", "seinen", "ihre", "ihren", "man", "wer", "was", "diese", "dieser",
    "dieses", "diesem", "diesen", "alle",
    // conjunctions and particles
    "und", "oder", "aber", "dass", "daß", "denn", "weil", "wenn", "dann", "als", "wie", "so", "ob",
    "doch", "auch", "nur", "noch", "schon", "sehr", "nicht", "hier", "dort", "wo",
    // prepositions
    "in", "im", "am", "an", "auf", "aus", "bei", "beim", "bis", "durch", "für", "gegen", "mit",
    "nach", "ohne", "um", "unter", "über", "von", "vom", "vor", "zu", "zum", "zur", "ins",
    // auxiliary and modal verbs
    "ist", "sind", "war", "waren", "bin", "bist", "seid", "hat", "haben", "wird", "werden",
    "wurde", "wurden", "kann", "können", "muss", "soll", "will",
];

/// Wider list used when extracting tags from article text. Besides the
/// function words it also covers filler adverbs and verbs that make poor
/// tags (`wieder`, `etwas`, `machen`, `zwischen`).
pub const TAG_STOP_WORDS: &[&str] = &[
    "aber", "alle", "allem", "allen", "aller", "alles", "also", "andere", "anderen", "andern",
    "anders", "auch", "auf", "aus", "bei", "bin", "bis", "bist", "da", "damit", "dann", "das",
    "dass", "dazu", "dem", "den", "der", "des", "dessen", "die", "dies", "diese", "diesem",
    "diesen", "dieser", "dieses", "doch", "dort", "durch", "ein", "eine", "einem", "einen",
    "einer", "eines", "er", "es", "etwas", "für", "gegen", "gewesen", "hab", "habe", "haben",
    "hat", "hatte", "hatten", "hier", "hin", "hinter", "ich", "ihm", "ihn", "ihnen", "ihr",
    "ihre", "ihrem", "ihren", "ihrer", "ihres", "im", "in", "indem", "ins", "ist", "ja", "kann",
    "kein", "keine", "keinem", "keinen", "keiner", "keines", "können", "könnte", "machen", "man",
    "manche", "manchen", "mancher", "manches", "mein", "meine", "meinem", "meinen", "meiner",
    "meines", "mit", "muss", "musste", "nach", "nicht", "nichts", "noch", "nun", "nur", "ob",
    "oder", "ohne", "sehr", "sein", "seine", "seinem", "seinen", "seiner", "seines", "selbst",
    "sich", "sie", "sind", "so", "solche", "solchem", "solchen", "solcher", "solches", "soll",
    "sollte", "sondern", "sonst", "über", "um", "und", "uns", "unse", "unser", "unsere",
    "unserem", "unseren", "unserer", "unseres", "unter", "viel", "vom", "von", "vor", "während",
    "war", "waren", "warst", "was", "weg", "weil", "weiter", "welche", "welchem", "welchen",
    "welcher", "welches", "wenn", "werde", "werden", "wie", "wieder", "will", "wir", "wird",
    "wirst", "wo", "wollen", "wollte", "würde", "würden", "zu", "zum", "zur", "zwar", "zwischen",
];

lazy_static! {
    static ref STOP_WORD_SET: AHashSet<&'static str> =
        GERMAN_STOP_WORDS.iter().copied().collect();
    static ref TAG_STOP_WORD_SET: AHashSet<&'static str> =
        TAG_STOP_WORDS.iter().copied().collect();
}

/// Returns true if `term` (already lowercased) is a German stop-word.
pub fn is_stop_word(term: &str) -> bool {
    STOP_WORD_SET.contains(term)
}

/// Returns true if `word` (already lowercased) must never become an
/// extracted tag.
pub fn is_tag_stop_word(word: &str) -> bool {
    TAG_STOP_WORD_SET.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_function_words() {
        for word in ["das", "ist", "ein", "und", "für", "über", "werden"] {
            assert!(is_stop_word(word), "{word} should be a stop-word");
        }
    }

    #[test]
    fn test_content_words_are_kept() {
        for word in ["test", "linux", "geschichte", "server", "zeiler"] {
            assert!(!is_stop_word(word), "{word} should not be a stop-word");
        }
    }

    #[test]
    fn test_list_is_lowercase_and_unique() {
        assert_eq!(STOP_WORD_SET.len(), GERMAN_STOP_WORDS.len());
        assert_eq!(TAG_STOP_WORD_SET.len(), TAG_STOP_WORDS.len());
        for word in GERMAN_STOP_WORDS.iter().chain(TAG_STOP_WORDS) {
            assert_eq!(*word, word.to_lowercase());
        }
    }

    #[test]
    fn test_core_search_stop_words() {
        let core = [
            "der", "die", "das", "und", "oder", "aber", "in", "auf", "für", "mit", "von", "zu",
            "an", "bei", "nach", "vor", "über", "unter", "durch", "ist", "sind", "war", "waren",
            "hat", "haben", "wird", "werden", "ein", "eine", "einer", "eines", "dem", "den",
            "des", "sich", "nicht", "auch", "nur", "noch", "wie", "was", "wenn", "dann", "so",
            "als",
        ];
        for word in core {
            assert!(is_stop_word(word), "{word} should be a stop-word");
        }
    }

    #[test]
    fn test_tag_stop_words_cover_filler_words() {
        for word in ["wieder", "etwas", "zwischen", "machen", "viel", "selbst", "während", "würde"] {
            assert!(is_tag_stop_word(word), "{word} should not become a tag");
            assert!(!is_stop_word(word), "{word} stays searchable");
        }
        assert!(!is_tag_stop_word("linux"));
    }
}
