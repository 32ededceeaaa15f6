//! Content normalization: markup stripping and tokenization.
//!
//! This module turns rich-text (HTML) content into the plain-text view the
//! metric extractors work on:
//! - Visible text with tags removed and entities decoded
//! - Whitespace-tokenized word list
//! - Sentence segmentation on `.`, `!`, `?` runs
//!
//! Normalization is deterministic and side-effect-free. Malformed markup is
//! never an error: the html5ever parser behind `scraper` recovers from any
//! input, so plain text or hostile markup degrades to best-effort text
//! extraction.

use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

static SENTENCE_BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.!?]+").unwrap_or_else(|e| {
        panic!(
            "Failed to compile sentence boundary regex: {}. This is a programming error.",
            e
        )
    })
});

/// Strips markup from rich-text content, returning the visible text.
///
/// Tags are removed, entities are decoded, and text nodes are concatenated
/// in document order. Unbalanced or invalid markup is handled by the
/// parser's error recovery; input without any markup passes through as-is.
pub fn strip_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    fragment.root_element().text().collect::<String>()
}

/// Plain-text view of a post body.
///
/// Holds the stripped text and its word list; sentences are derived on
/// demand. One `NormalizedContent` is built per analysis call and shared by
/// all extractors.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedContent {
    /// Visible text with markup removed
    pub text: String,
    /// Whitespace-separated words, empty tokens dropped
    pub words: Vec<String>,
}

impl NormalizedContent {
    /// Normalizes a rich-text body.
    pub fn from_html(html: &str) -> Self {
        let text = strip_html(html);
        let words = text
            .split_whitespace()
            .map(|w| w.to_string())
            .collect::<Vec<_>>();
        log::debug!(
            "Normalized content: {} chars, {} words",
            text.chars().count(),
            words.len()
        );
        NormalizedContent { text, words }
    }

    /// Number of words in the body.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of characters in the stripped text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Sentences of the body: fragments between `.`/`!`/`?` runs, with
    /// fragments that are empty after trimming discarded.
    pub fn sentences(&self) -> Vec<&str> {
        SENTENCE_BOUNDARY_RE
            .split(&self.text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Number of sentences in the body.
    pub fn sentence_count(&self) -> usize {
        self.sentences().len()
    }

    /// Number of paragraphs, counted as blank-line-separated blocks of the
    /// stripped text. Always at least 1, matching how the editing surface
    /// reports it for empty content.
    pub fn paragraph_count(&self) -> usize {
        self.text.split("\n\n").count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_removes_tags() {
        assert_eq!(strip_html("<p>Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn test_strip_html_decodes_entities() {
        assert_eq!(strip_html("<p>Fish &amp; chips</p>"), "Fish & chips");
    }

    #[test]
    fn test_strip_html_plain_text_passthrough() {
        assert_eq!(strip_html("no markup here"), "no markup here");
    }

    #[test]
    fn test_strip_html_survives_malformed_markup() {
        // Unbalanced and truncated tags must degrade, not fail
        let text = strip_html("<div><p>open <b>bold<i>deep</div> tail <br att=");
        assert!(text.contains("open"));
        assert!(text.contains("bold"));
    }

    #[test]
    fn test_strip_html_empty() {
        assert_eq!(strip_html(""), "");
    }

    #[test]
    fn test_word_tokenization_drops_empty_tokens() {
        let normalized = NormalizedContent::from_html("<p>  one   two\n three  </p>");
        assert_eq!(normalized.words, vec!["one", "two", "three"]);
        assert_eq!(normalized.word_count(), 3);
    }

    #[test]
    fn test_sentences_split_on_terminator_runs() {
        let normalized = NormalizedContent::from_html("First. Second!! Third?... ");
        assert_eq!(normalized.sentences(), vec!["First", "Second", "Third"]);
        assert_eq!(normalized.sentence_count(), 3);
    }

    #[test]
    fn test_sentences_empty_content() {
        let normalized = NormalizedContent::from_html("");
        assert!(normalized.sentences().is_empty());
    }

    #[test]
    fn test_sentences_no_terminator() {
        // A body with no terminator is one sentence fragment
        let normalized = NormalizedContent::from_html("just one fragment");
        assert_eq!(normalized.sentence_count(), 1);
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let html = "<article><h1>Title</h1><p>Some body text. More text!</p></article>";
        assert_eq!(
            NormalizedContent::from_html(html),
            NormalizedContent::from_html(html)
        );
    }

    #[test]
    fn test_adjacent_blocks_concatenate() {
        // Tag removal concatenates adjacent text nodes without inserting
        // whitespace; the word list reflects that
        let normalized = NormalizedContent::from_html("<p>alpha</p><p>beta</p>");
        assert_eq!(normalized.text, "alphabeta");
        assert_eq!(normalized.word_count(), 1);
    }
}
