//! Score aggregation and the comprehensive content report.
//!
//! `analyze` is the single authoritative entry point of the engine: it runs
//! the metric extractors in fixed order over one snapshot and folds their
//! findings into an `AnalysisResult`. It is a pure function; calling it
//! twice on the same snapshot yields identical results, and it is cheap
//! enough to re-run on every edit trigger.

use serde::{Deserialize, Serialize};

use crate::checks::{
    check_content_length, check_description, check_featured_image, check_keyword_density,
    check_keyword_in_title, check_title, keyword_metrics, readability, reading_time_minutes,
};
use crate::config::{
    MAX_SCORE, MSG_CONTENT_SHORT, MSG_DENSITY_HIGH, MSG_DENSITY_LOW, MSG_DESCRIPTION_LONG,
    MSG_DESCRIPTION_MISSING, MSG_DESCRIPTION_SHORT, MSG_IMAGE_MISSING, MSG_KEYWORD_NOT_IN_TITLE,
    MSG_NO_FOCUS_KEYWORD, MSG_TITLE_LONG, MSG_TITLE_SHORT,
};
use crate::models::{AnalysisResult, Finding, PostSnapshot, SiteContext};
use crate::normalize::NormalizedContent;
use crate::structure::{analyze_structure, StructureAnalysis};

/// Analyzes one post snapshot.
///
/// Extractors run in fixed order (title, description, keyword-in-title,
/// keyword density, content length, featured image) and their findings are
/// concatenated in that order. The aggregate score is the sum of awarded
/// points, clamped to [0, 100]; no finding awards negative points, so the
/// lower bound holds by construction.
pub fn analyze(snapshot: &PostSnapshot) -> AnalysisResult {
    let normalized = NormalizedContent::from_html(&snapshot.content);
    let keyword = keyword_metrics(snapshot, &normalized);

    let mut findings = Vec::with_capacity(6);
    findings.push(check_title(snapshot));
    findings.push(check_description(snapshot));
    findings.push(check_keyword_in_title(snapshot));
    if let Some(density) = check_keyword_density(snapshot, &keyword) {
        findings.push(density);
    }
    findings.push(check_content_length(&normalized));
    findings.push(check_featured_image(snapshot));

    let score = findings
        .iter()
        .map(|f| f.points)
        .sum::<u32>()
        .min(MAX_SCORE);
    log::debug!(
        "Analyzed '{}': score {}, {} findings",
        snapshot.slug,
        score,
        findings.len()
    );

    AnalysisResult {
        score,
        findings,
        keyword,
        readability: readability(&normalized),
    }
}

/// Word, character, paragraph, and sentence counts of the post body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    /// Total words
    pub word_count: usize,
    /// Total characters of the stripped text
    pub char_count: usize,
    /// Blank-line-separated paragraph count
    pub paragraph_count: usize,
    /// Sentence count
    pub sentence_count: usize,
    /// Estimated reading time in minutes
    pub reading_time_minutes: usize,
}

/// Everything the reporting surfaces need for one post: the scored
/// analysis, basic counts, structure analysis, and actionable
/// recommendations for each non-good finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentReport {
    /// Scored analysis result
    pub analysis: AnalysisResult,
    /// Body counts
    pub basic: BasicStats,
    /// Heading/link/image inventories
    pub structure: StructureAnalysis,
    /// One recommendation per warning or error finding
    pub recommendations: Vec<String>,
}

/// Builds the comprehensive report for one post.
pub fn report(snapshot: &PostSnapshot, site: &SiteContext) -> ContentReport {
    let analysis = analyze(snapshot);
    let normalized = NormalizedContent::from_html(&snapshot.content);

    let basic = BasicStats {
        word_count: normalized.word_count(),
        char_count: normalized.char_count(),
        paragraph_count: normalized.paragraph_count(),
        sentence_count: normalized.sentence_count(),
        reading_time_minutes: reading_time_minutes(normalized.word_count()),
    };

    let recommendations = analysis
        .findings
        .iter()
        .filter_map(recommendation_for)
        .map(|r| r.to_string())
        .collect();

    ContentReport {
        structure: analyze_structure(snapshot, site),
        analysis,
        basic,
        recommendations,
    }
}

/// Maps a finding to the action that would resolve it.
///
/// Good findings have nothing to recommend and return `None`.
pub fn recommendation_for(finding: &Finding) -> Option<&'static str> {
    match finding.message.as_str() {
        MSG_TITLE_SHORT => Some("Consider expanding your title to 30-60 characters"),
        MSG_TITLE_LONG => Some("Shorten your title to under 60 characters"),
        MSG_DESCRIPTION_MISSING => {
            Some("Add a compelling meta description (120-160 characters)")
        }
        MSG_DESCRIPTION_SHORT => Some("Expand meta description to 120-160 characters"),
        MSG_DESCRIPTION_LONG => Some("Shorten meta description to under 160 characters"),
        MSG_NO_FOCUS_KEYWORD => Some("Set a focus keyword to optimize this post"),
        MSG_KEYWORD_NOT_IN_TITLE => Some("Include your focus keyword in the title"),
        MSG_DENSITY_LOW => {
            Some("Use your focus keyword more frequently (aim for 0.5-2.5% density)")
        }
        MSG_DENSITY_HIGH => Some("Reduce focus keyword usage to avoid keyword stuffing"),
        MSG_CONTENT_SHORT => Some("Aim for at least 300 words of quality content"),
        MSG_IMAGE_MISSING => Some("Add a featured image to improve social sharing"),
        _ => None,
    }
}
