//! Meta description length check.

use crate::config::{
    DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS, DESCRIPTION_POINTS, MSG_DESCRIPTION_GOOD,
    MSG_DESCRIPTION_LONG, MSG_DESCRIPTION_MISSING, MSG_DESCRIPTION_SHORT,
};
use crate::models::{Finding, FindingKind, PostSnapshot};

/// Checks the effective description length against the optimal band.
///
/// The band is inclusive on both ends. A missing description (length 0) is
/// an error regardless of any other field; a present-but-short one is only
/// a warning.
pub fn check_description(snapshot: &PostSnapshot) -> Finding {
    let length = snapshot.effective_description().chars().count();
    if length == 0 {
        Finding::new(FindingKind::Error, MSG_DESCRIPTION_MISSING, 0)
    } else if (DESCRIPTION_MIN_CHARS..=DESCRIPTION_MAX_CHARS).contains(&length) {
        Finding::new(FindingKind::Good, MSG_DESCRIPTION_GOOD, DESCRIPTION_POINTS)
    } else if length < DESCRIPTION_MIN_CHARS {
        Finding::new(FindingKind::Warning, MSG_DESCRIPTION_SHORT, 0)
    } else {
        Finding::new(FindingKind::Error, MSG_DESCRIPTION_LONG, 0)
    }
}
