//! Batch audit statistics.
//!
//! Tallies findings across a batch of analyzed posts and renders the audit
//! report: score distribution, average score, per-issue counts, and the
//! posts needing attention. Counters cover every issue type from the start
//! so the report ordering is stable.

use colored::Colorize;
use std::collections::HashMap;
use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;

use crate::config::{
    MSG_CONTENT_SHORT, MSG_DENSITY_HIGH, MSG_DENSITY_LOW, MSG_DESCRIPTION_LONG,
    MSG_DESCRIPTION_MISSING, MSG_DESCRIPTION_SHORT, MSG_IMAGE_MISSING, MSG_KEYWORD_NOT_IN_TITLE,
    MSG_NO_FOCUS_KEYWORD, MSG_TITLE_LONG, MSG_TITLE_SHORT,
};
use crate::models::{AnalysisResult, Finding, FindingKind};

/// Content-quality issues tracked across a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum IssueType {
    /// Title under 30 characters
    TitleTooShort,
    /// Title over 60 characters
    TitleTooLong,
    /// No meta description or excerpt at all
    DescriptionMissing,
    /// Description under 120 characters
    DescriptionTooShort,
    /// Description over 160 characters
    DescriptionTooLong,
    /// No focus keyword set
    NoFocusKeyword,
    /// Keyword set but absent from the title
    KeywordNotInTitle,
    /// Keyword density below 0.5%
    KeywordDensityLow,
    /// Keyword density above 2.5%
    KeywordDensityHigh,
    /// Fewer than 300 words of content
    ContentTooShort,
    /// No featured image
    MissingFeaturedImage,
}

impl IssueType {
    /// Returns a human-readable label for the issue.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::TitleTooShort => "Titles too short (<30 chars)",
            IssueType::TitleTooLong => "Titles too long (>60 chars)",
            IssueType::DescriptionMissing => "Missing meta descriptions",
            IssueType::DescriptionTooShort => "Meta descriptions too short",
            IssueType::DescriptionTooLong => "Meta descriptions too long",
            IssueType::NoFocusKeyword => "Missing focus keywords",
            IssueType::KeywordNotInTitle => "Focus keyword not in title",
            IssueType::KeywordDensityLow => "Keyword density too low",
            IssueType::KeywordDensityHigh => "Keyword density too high",
            IssueType::ContentTooShort => "Content too short (<300 words)",
            IssueType::MissingFeaturedImage => "Missing featured images",
        }
    }

    /// Severity this issue carries in a single post's findings.
    pub fn kind(&self) -> FindingKind {
        match self {
            IssueType::TitleTooLong
            | IssueType::DescriptionMissing
            | IssueType::DescriptionTooLong
            | IssueType::KeywordDensityHigh => FindingKind::Error,
            _ => FindingKind::Warning,
        }
    }

    /// Maps a finding back to its issue type. Good findings map to `None`.
    pub fn from_finding(finding: &Finding) -> Option<Self> {
        match finding.message.as_str() {
            MSG_TITLE_SHORT => Some(IssueType::TitleTooShort),
            MSG_TITLE_LONG => Some(IssueType::TitleTooLong),
            MSG_DESCRIPTION_MISSING => Some(IssueType::DescriptionMissing),
            MSG_DESCRIPTION_SHORT => Some(IssueType::DescriptionTooShort),
            MSG_DESCRIPTION_LONG => Some(IssueType::DescriptionTooLong),
            MSG_NO_FOCUS_KEYWORD => Some(IssueType::NoFocusKeyword),
            MSG_KEYWORD_NOT_IN_TITLE => Some(IssueType::KeywordNotInTitle),
            MSG_DENSITY_LOW => Some(IssueType::KeywordDensityLow),
            MSG_DENSITY_HIGH => Some(IssueType::KeywordDensityHigh),
            MSG_CONTENT_SHORT => Some(IssueType::ContentTooShort),
            MSG_IMAGE_MISSING => Some(IssueType::MissingFeaturedImage),
            _ => None,
        }
    }
}

/// Score distribution buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreDistribution {
    /// Posts scoring 90-100
    pub excellent: usize,
    /// Posts scoring 80-89
    pub good: usize,
    /// Posts scoring 60-79
    pub needs_improvement: usize,
    /// Posts scoring below 60
    pub poor: usize,
}

impl ScoreDistribution {
    fn record(&mut self, score: u32) {
        if score >= 90 {
            self.excellent += 1;
        } else if score >= 80 {
            self.good += 1;
        } else if score >= 60 {
            self.needs_improvement += 1;
        } else {
            self.poor += 1;
        }
    }
}

/// Batch audit tallies.
///
/// All issue counters are initialized to zero on creation; recording an
/// analysis result bumps the bucket for its score and the counter for every
/// non-good finding.
pub struct AuditStats {
    issues: HashMap<IssueType, usize>,
    distribution: ScoreDistribution,
    total_posts: usize,
    score_sum: u64,
}

impl AuditStats {
    /// Creates an empty tally with every issue counter present.
    pub fn new() -> Self {
        let mut issues = HashMap::new();
        for issue in IssueType::iter() {
            issues.insert(issue, 0);
        }
        AuditStats {
            issues,
            distribution: ScoreDistribution::default(),
            total_posts: 0,
            score_sum: 0,
        }
    }

    /// Records one analyzed post.
    pub fn record(&mut self, result: &AnalysisResult) {
        self.total_posts += 1;
        self.score_sum += u64::from(result.score);
        self.distribution.record(result.score);

        for finding in &result.findings {
            if let Some(issue) = IssueType::from_finding(finding) {
                *self.issues.entry(issue).or_insert(0) += 1;
            }
        }
    }

    /// Number of posts recorded.
    pub fn total_posts(&self) -> usize {
        self.total_posts
    }

    /// Mean score across recorded posts; 0 when none were recorded.
    pub fn average_score(&self) -> f64 {
        if self.total_posts == 0 {
            0.0
        } else {
            self.score_sum as f64 / self.total_posts as f64
        }
    }

    /// Count for one issue type.
    pub fn issue_count(&self, issue: IssueType) -> usize {
        self.issues.get(&issue).copied().unwrap_or(0)
    }

    /// Total issues across all types.
    pub fn total_issues(&self) -> usize {
        IssueType::iter().map(|i| self.issue_count(i)).sum()
    }

    /// Score distribution buckets.
    pub fn distribution(&self) -> ScoreDistribution {
        self.distribution
    }
}

impl Default for AuditStats {
    fn default() -> Self {
        AuditStats::new()
    }
}

/// Prints the audit report to stdout.
///
/// `attention` lists `(slug, score)` pairs for the lowest-scoring posts,
/// already sorted ascending by score.
pub fn print_audit_report(stats: &AuditStats, attention: &[(String, u32)]) {
    let total = stats.total_posts();
    println!("{}", "=== SEO AUDIT REPORT ===".bold());
    println!();
    println!("Total posts analyzed: {}", total);
    if total == 0 {
        return;
    }
    println!("Average SEO score: {:.1}/100", stats.average_score());

    let dist = stats.distribution();
    let percent = |count: usize| count as f64 / total as f64 * 100.0;
    println!("Score distribution:");
    println!(
        "  Excellent (90-100): {} ({:.1}%)",
        dist.excellent,
        percent(dist.excellent)
    );
    println!("  Good (80-89): {} ({:.1}%)", dist.good, percent(dist.good));
    println!(
        "  Needs work (60-79): {} ({:.1}%)",
        dist.needs_improvement,
        percent(dist.needs_improvement)
    );
    println!("  Poor (<60): {} ({:.1}%)", dist.poor, percent(dist.poor));

    if stats.total_issues() > 0 {
        println!();
        println!("{}", "COMMON ISSUES:".bold());
        for issue in IssueType::iter() {
            let count = stats.issue_count(issue);
            if count == 0 {
                continue;
            }
            let line = format!("{}: {}", issue.as_str(), count);
            match issue.kind() {
                FindingKind::Error => println!("  {}", line.red()),
                _ => println!("  {}", line.yellow()),
            }
        }
    }

    if !attention.is_empty() {
        println!();
        println!("{}", "POSTS NEEDING IMMEDIATE ATTENTION:".red().bold());
        for (slug, score) in attention {
            println!("  - {} (score: {})", slug, score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::models::PostSnapshot;

    #[test]
    fn test_all_issue_types_have_labels() {
        for issue in IssueType::iter() {
            assert!(!issue.as_str().is_empty(), "{:?} should have a label", issue);
        }
    }

    #[test]
    fn test_record_counts_issues_and_buckets() {
        let mut stats = AuditStats::new();
        // A bare post: every check warns or errors
        let result = analyze(&PostSnapshot {
            title: "AI".to_string(),
            content: "<p>short</p>".to_string(),
            ..Default::default()
        });
        stats.record(&result);

        assert_eq!(stats.total_posts(), 1);
        assert_eq!(stats.distribution().poor, 1);
        assert_eq!(stats.issue_count(IssueType::TitleTooShort), 1);
        assert_eq!(stats.issue_count(IssueType::DescriptionMissing), 1);
        assert_eq!(stats.issue_count(IssueType::NoFocusKeyword), 1);
        assert_eq!(stats.issue_count(IssueType::ContentTooShort), 1);
        assert_eq!(stats.issue_count(IssueType::MissingFeaturedImage), 1);
        assert_eq!(stats.total_issues(), 5);
    }

    #[test]
    fn test_good_findings_are_not_issues() {
        let filler = vec!["alpha"; 316].join(" ");
        let result = analyze(&PostSnapshot {
            title: "Understanding transformers in modern NLP work".to_string(),
            meta_description: Some("d".repeat(140)),
            content: format!(
                "{} transformers transformers transformers transformers",
                filler
            ),
            focus_keyword: Some("transformers".to_string()),
            has_featured_image: true,
            ..Default::default()
        });
        let mut stats = AuditStats::new();
        stats.record(&result);
        assert_eq!(stats.total_issues(), 0);
        assert_eq!(stats.distribution().excellent, 1);
    }

    #[test]
    fn test_average_score() {
        let mut stats = AuditStats::new();
        assert_eq!(stats.average_score(), 0.0);

        for title_len in [2usize, 40] {
            let result = analyze(&PostSnapshot {
                title: "t".repeat(title_len),
                ..Default::default()
            });
            stats.record(&result);
        }
        // One post scores 0, the other 20 (title only)
        assert_eq!(stats.average_score(), 10.0);
    }

    #[test]
    fn test_distribution_bucket_edges() {
        let mut dist = ScoreDistribution::default();
        for score in [100, 90, 89, 80, 79, 60, 59, 0] {
            dist.record(score);
        }
        assert_eq!(dist.excellent, 2);
        assert_eq!(dist.good, 2);
        assert_eq!(dist.needs_improvement, 2);
        assert_eq!(dist.poor, 2);
    }

    #[test]
    fn test_print_audit_report_does_not_panic() {
        let stats = AuditStats::new();
        print_audit_report(&stats, &[]);

        let mut stats = AuditStats::new();
        stats.record(&analyze(&PostSnapshot::default()));
        print_audit_report(&stats, &[("bare-post".to_string(), 0)]);
    }
}
