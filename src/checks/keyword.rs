//! Focus keyword checks: presence in title and density in content.

use crate::config::{
    DENSITY_MAX_PERCENT, DENSITY_MIN_PERCENT, KEYWORD_DENSITY_POINTS, KEYWORD_IN_TITLE_POINTS,
    MSG_DENSITY_GOOD, MSG_DENSITY_HIGH, MSG_DENSITY_LOW, MSG_KEYWORD_IN_TITLE,
    MSG_KEYWORD_NOT_IN_TITLE, MSG_NO_FOCUS_KEYWORD,
};
use crate::models::{Finding, FindingKind, KeywordMetrics, PostSnapshot};
use crate::normalize::NormalizedContent;

/// Checks whether the focus keyword appears in the effective title.
///
/// The match is a case-insensitive substring test. When no focus keyword is
/// set at all, the check degrades to a single zero-point warning so that the
/// finding list still tells the author what to do.
pub fn check_keyword_in_title(snapshot: &PostSnapshot) -> Finding {
    let Some(keyword) = snapshot.keyword() else {
        return Finding::new(FindingKind::Warning, MSG_NO_FOCUS_KEYWORD, 0);
    };

    let title = snapshot.effective_title().to_lowercase();
    if title.contains(&keyword.to_lowercase()) {
        Finding::new(
            FindingKind::Good,
            MSG_KEYWORD_IN_TITLE,
            KEYWORD_IN_TITLE_POINTS,
        )
    } else {
        Finding::new(FindingKind::Warning, MSG_KEYWORD_NOT_IN_TITLE, 0)
    }
}

/// Computes keyword occurrence and density metrics for the post body.
///
/// Occurrences are counted as non-overlapping, case-insensitive literal
/// substring matches in the plain text. This intentionally counts keywords
/// embedded in longer words ("cat" inside "category"); the scoring bands
/// are calibrated to that behavior.
///
/// Density is zero whenever no keyword is set or the content has no words.
pub fn keyword_metrics(snapshot: &PostSnapshot, normalized: &NormalizedContent) -> KeywordMetrics {
    let word_count = normalized.word_count();

    let occurrences = match snapshot.keyword() {
        Some(keyword) => normalized
            .text
            .to_lowercase()
            .matches(&keyword.to_lowercase())
            .count(),
        None => 0,
    };

    let density_percent = if snapshot.keyword().is_none() || word_count == 0 {
        0.0
    } else {
        occurrences as f64 / word_count as f64 * 100.0
    };

    KeywordMetrics {
        occurrences,
        density_percent,
        word_count,
    }
}

/// Checks keyword density against the optimal band.
///
/// Returns `None` when no focus keyword is set: density is not evaluated at
/// all in that case (the missing keyword is already reported by the title
/// check). The band is inclusive on both ends; only an in-band density
/// awards points.
pub fn check_keyword_density(
    snapshot: &PostSnapshot,
    metrics: &KeywordMetrics,
) -> Option<Finding> {
    snapshot.keyword()?;

    let finding = if (DENSITY_MIN_PERCENT..=DENSITY_MAX_PERCENT).contains(&metrics.density_percent)
    {
        Finding::new(FindingKind::Good, MSG_DENSITY_GOOD, KEYWORD_DENSITY_POINTS)
    } else if metrics.density_percent < DENSITY_MIN_PERCENT {
        Finding::new(FindingKind::Warning, MSG_DENSITY_LOW, 0)
    } else {
        Finding::new(FindingKind::Error, MSG_DENSITY_HIGH, 0)
    };
    Some(finding)
}
