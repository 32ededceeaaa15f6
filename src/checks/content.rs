//! Content length, featured image, and reading time.

use crate::config::{
    CONTENT_LENGTH_POINTS, CONTENT_MIN_WORDS, FEATURED_IMAGE_POINTS, MSG_CONTENT_GOOD,
    MSG_CONTENT_SHORT, MSG_IMAGE_GOOD, MSG_IMAGE_MISSING, READING_WORDS_PER_MINUTE,
};
use crate::models::{Finding, FindingKind, PostSnapshot};
use crate::normalize::NormalizedContent;

/// Checks the body word count against the substantial-content minimum.
pub fn check_content_length(normalized: &NormalizedContent) -> Finding {
    if normalized.word_count() >= CONTENT_MIN_WORDS {
        Finding::new(FindingKind::Good, MSG_CONTENT_GOOD, CONTENT_LENGTH_POINTS)
    } else {
        Finding::new(FindingKind::Warning, MSG_CONTENT_SHORT, 0)
    }
}

/// Checks whether the post has a featured image.
pub fn check_featured_image(snapshot: &PostSnapshot) -> Finding {
    if snapshot.has_featured_image {
        Finding::new(FindingKind::Good, MSG_IMAGE_GOOD, FEATURED_IMAGE_POINTS)
    } else {
        Finding::new(FindingKind::Warning, MSG_IMAGE_MISSING, 0)
    }
}

/// Estimated reading time in whole minutes, never less than 1.
pub fn reading_time_minutes(word_count: usize) -> usize {
    let minutes = word_count.div_ceil(READING_WORDS_PER_MINUTE);
    minutes.max(1)
}

/// Reading time as the user-facing "N min read" string.
pub fn reading_time_display(word_count: usize) -> String {
    let minutes = reading_time_minutes(word_count);
    if minutes == 1 {
        "1 min read".to_string()
    } else {
        format!("{} min read", minutes)
    }
}
