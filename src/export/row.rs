//! Shared export row building logic.
//!
//! This module provides the flattened per-post view both exporters emit,
//! eliminating duplication between the CSV and JSONL writers.

use serde::Serialize;

use crate::analysis::ContentReport;
use crate::models::{FindingKind, PostSnapshot, SiteContext};

/// Flattened analysis data for a single post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    /// Post title
    pub title: String,
    /// Absolute post URL
    pub url: String,
    /// Aggregate SEO score
    pub score: u32,
    /// Focus keyword, empty when none is set
    pub focus_keyword: String,
    /// Effective description length in characters
    pub description_length: usize,
    /// Body word count
    pub word_count: usize,
    /// Estimated reading time in minutes
    pub reading_time_minutes: usize,
    /// Whether a featured image is set
    pub has_featured_image: bool,
    /// Publication date (YYYY-MM-DD), empty when unknown
    pub published_date: String,
    /// Number of good findings
    pub good_findings: usize,
    /// Number of warning findings
    pub warning_findings: usize,
    /// Number of error findings
    pub error_findings: usize,
    /// Readability level label
    pub readability_level: String,
    /// Flesch score as displayed (clamped at 0)
    pub flesch_score: f64,
    /// Internal link count
    pub internal_links: usize,
    /// External link count
    pub external_links: usize,
    /// Heading count across all levels
    pub heading_count: usize,
    /// Image count in the body
    pub image_count: usize,
}

/// Column names for the CSV header, in field order.
pub const CSV_HEADER: [&str; 18] = [
    "title",
    "url",
    "score",
    "focus_keyword",
    "description_length",
    "word_count",
    "reading_time_minutes",
    "has_featured_image",
    "published_date",
    "good_findings",
    "warning_findings",
    "error_findings",
    "readability_level",
    "flesch_score",
    "internal_links",
    "external_links",
    "heading_count",
    "image_count",
];

/// Builds the export row for one analyzed post.
pub fn build_export_row(
    snapshot: &PostSnapshot,
    report: &ContentReport,
    site: &SiteContext,
) -> ExportRow {
    let count_kind = |kind: FindingKind| {
        report
            .analysis
            .findings
            .iter()
            .filter(|f| f.kind == kind)
            .count()
    };

    ExportRow {
        title: snapshot.title.clone(),
        url: site.post_url(&snapshot.slug),
        score: report.analysis.score,
        focus_keyword: snapshot.keyword().unwrap_or("").to_string(),
        description_length: snapshot.effective_description().chars().count(),
        word_count: report.basic.word_count,
        reading_time_minutes: report.basic.reading_time_minutes,
        has_featured_image: snapshot.has_featured_image,
        published_date: snapshot
            .published_at
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        good_findings: count_kind(FindingKind::Good),
        warning_findings: count_kind(FindingKind::Warning),
        error_findings: count_kind(FindingKind::Error),
        readability_level: report.analysis.readability.level.as_str().to_string(),
        flesch_score: report.analysis.readability.display_score(),
        internal_links: report.structure.links.internal_count(),
        external_links: report.structure.links.external_count(),
        heading_count: report.structure.headings.total,
        image_count: report.structure.images.total,
    }
}
