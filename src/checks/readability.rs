//! Readability metrics: a Flesch Reading Ease approximation.
//!
//! The classic formula weighs syllables per word; this approximation
//! substitutes the share of long words (more than six characters), which is
//! stable across the two execution environments and cheap to compute on
//! every keystroke. Readability does not feed the aggregate score.

use crate::config::{
    COMPLEX_WORD_MIN_CHARS, FLESCH_BASE, FLESCH_SENTENCE_WEIGHT, FLESCH_WORD_WEIGHT,
};
use crate::models::{ReadabilityMetrics, ReadingLevel};
use crate::normalize::NormalizedContent;

/// Computes readability metrics for normalized content.
///
/// Division-by-zero cases are special-cased to 0: no sentences means an
/// average of 0 words per sentence, no words means 0% complex words.
/// Zero-word content gets `ReadingLevel::Unknown` with a score of 0 rather
/// than a formula evaluation over empty input.
pub fn readability(normalized: &NormalizedContent) -> ReadabilityMetrics {
    let word_count = normalized.word_count();
    if word_count == 0 {
        return ReadabilityMetrics::default();
    }

    let sentence_count = normalized.sentence_count();
    let avg_words_per_sentence = if sentence_count == 0 {
        0.0
    } else {
        word_count as f64 / sentence_count as f64
    };

    let complex_words = normalized
        .words
        .iter()
        .filter(|w| w.chars().count() > COMPLEX_WORD_MIN_CHARS)
        .count();
    let complex_word_percent = complex_words as f64 / word_count as f64 * 100.0;

    let flesch_score = FLESCH_BASE
        - FLESCH_SENTENCE_WEIGHT * avg_words_per_sentence
        - FLESCH_WORD_WEIGHT * (complex_word_percent / 100.0);

    ReadabilityMetrics {
        flesch_score,
        level: ReadingLevel::for_score(flesch_score),
        avg_words_per_sentence,
        complex_word_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_is_unknown() {
        let metrics = readability(&NormalizedContent::from_html(""));
        assert_eq!(metrics.level, ReadingLevel::Unknown);
        assert_eq!(metrics.flesch_score, 0.0);
        assert_eq!(metrics.avg_words_per_sentence, 0.0);
        assert_eq!(metrics.complex_word_percent, 0.0);
    }

    #[test]
    fn test_short_simple_sentences_read_easy() {
        // 6 words, 3 sentences, no complex words:
        // flesch = 206.835 - 1.015 * 2 = 204.805
        let metrics = readability(&NormalizedContent::from_html("The cat sat. It slept. Good."));
        assert_eq!(metrics.avg_words_per_sentence, 2.0);
        assert_eq!(metrics.complex_word_percent, 0.0);
        assert!((metrics.flesch_score - 204.805).abs() < 1e-9);
        assert_eq!(metrics.level, ReadingLevel::VeryEasy);
    }

    #[test]
    fn test_complex_words_lower_the_score() {
        // 4 words, 1 sentence, all longer than six characters:
        // flesch = 206.835 - 1.015 * 4 - 84.6 = 118.175
        let text = "Quantization acceleration initialization regularization.";
        let metrics = readability(&NormalizedContent::from_html(text));
        assert_eq!(metrics.complex_word_percent, 100.0);
        assert!((metrics.flesch_score - 118.175).abs() < 1e-9);
    }

    #[test]
    fn test_no_sentence_terminator_counts_one_fragment() {
        let metrics = readability(&NormalizedContent::from_html("five words with no period"));
        assert_eq!(metrics.avg_words_per_sentence, 5.0);
    }

    #[test]
    fn test_word_length_boundary_for_complexity() {
        // "stream" is 6 chars (not complex), "streams" is 7 (complex)
        let metrics = readability(&NormalizedContent::from_html("stream streams."));
        assert_eq!(metrics.complex_word_percent, 50.0);
    }
}
