//! Title length check.

use crate::config::{
    MSG_TITLE_GOOD, MSG_TITLE_LONG, MSG_TITLE_SHORT, TITLE_MAX_CHARS, TITLE_MIN_CHARS,
    TITLE_POINTS,
};
use crate::models::{Finding, FindingKind, PostSnapshot};

/// Checks the effective title length against the optimal band.
///
/// The band is inclusive on both ends: exactly 30 and exactly 60 characters
/// are optimal. A missing title has length 0 and reports as too short.
pub fn check_title(snapshot: &PostSnapshot) -> Finding {
    let length = snapshot.effective_title().chars().count();
    if (TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&length) {
        Finding::new(FindingKind::Good, MSG_TITLE_GOOD, TITLE_POINTS)
    } else if length < TITLE_MIN_CHARS {
        Finding::new(FindingKind::Warning, MSG_TITLE_SHORT, 0)
    } else {
        Finding::new(FindingKind::Error, MSG_TITLE_LONG, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_title(title: &str) -> PostSnapshot {
        PostSnapshot {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_title_band_is_inclusive() {
        let good_30 = check_title(&snapshot_with_title(&"a".repeat(30)));
        assert_eq!(good_30.kind, FindingKind::Good);
        assert_eq!(good_30.points, TITLE_POINTS);

        let good_60 = check_title(&snapshot_with_title(&"a".repeat(60)));
        assert_eq!(good_60.kind, FindingKind::Good);
    }

    #[test]
    fn test_title_just_outside_band() {
        let short = check_title(&snapshot_with_title(&"a".repeat(29)));
        assert_eq!(short.kind, FindingKind::Warning);
        assert_eq!(short.points, 0);

        let long = check_title(&snapshot_with_title(&"a".repeat(61)));
        assert_eq!(long.kind, FindingKind::Error);
        assert_eq!(long.points, 0);
    }

    #[test]
    fn test_empty_title_is_too_short() {
        let finding = check_title(&snapshot_with_title(""));
        assert_eq!(finding.kind, FindingKind::Warning);
        assert_eq!(finding.message, MSG_TITLE_SHORT);
    }

    #[test]
    fn test_seo_title_override_is_measured() {
        // A short post title with a good-length SEO override passes
        let snapshot = PostSnapshot {
            title: "AI".to_string(),
            seo_title: Some("a".repeat(45)),
            ..Default::default()
        };
        assert_eq!(check_title(&snapshot).kind, FindingKind::Good);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 30 multi-byte characters should be in the band
        let snapshot = snapshot_with_title(&"é".repeat(30));
        assert_eq!(check_title(&snapshot).kind, FindingKind::Good);
    }
}
