//! Core data model: post snapshots, findings, and analysis results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter as EnumIterMacro;
use url::Url;

use crate::config::{DEFAULT_BASE_URL, DEFAULT_SITE_NAME, DEFAULT_TWITTER_SITE};

/// Read-only view of a blog post's fields, as supplied by the content
/// management layer.
///
/// One snapshot feeds one analysis call. Optional fields tolerate both
/// absence and empty strings; the fallback accessors treat the two the same
/// way. The snapshot is never mutated by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostSnapshot {
    /// Post title
    pub title: String,
    /// SEO title override; falls back to `title` when absent
    #[serde(default)]
    pub seo_title: Option<String>,
    /// Short post summary
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Meta description override; falls back to `excerpt` when absent
    #[serde(default)]
    pub meta_description: Option<String>,
    /// Rich-text body (HTML)
    pub content: String,
    /// Primary keyword this post is optimized for
    #[serde(default)]
    pub focus_keyword: Option<String>,
    /// Whether a featured image is set
    #[serde(default)]
    pub has_featured_image: bool,
    /// URL slug of the post
    pub slug: String,

    /// Open Graph title override
    #[serde(default)]
    pub og_title: Option<String>,
    /// Open Graph description override
    #[serde(default)]
    pub og_description: Option<String>,
    /// Open Graph image URL
    #[serde(default)]
    pub og_image_url: Option<String>,
    /// Twitter card title override
    #[serde(default)]
    pub twitter_title: Option<String>,
    /// Twitter card description override
    #[serde(default)]
    pub twitter_description: Option<String>,
    /// Author display name
    #[serde(default)]
    pub author: Option<String>,
    /// Tag names attached to the post
    #[serde(default)]
    pub tags: Vec<String>,
    /// First publication time
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Last modification time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Canonical URL override
    #[serde(default)]
    pub canonical_url: Option<String>,
    /// Ask search engines not to index this post
    #[serde(default)]
    pub noindex: bool,
    /// Ask search engines not to follow links in this post
    #[serde(default)]
    pub nofollow: bool,
}

/// Returns the string when it is present and non-empty.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl PostSnapshot {
    /// Title used for search results: the SEO title override when set,
    /// otherwise the post title.
    pub fn effective_title(&self) -> &str {
        non_empty(&self.seo_title).unwrap_or(&self.title)
    }

    /// Description used for search results: the meta description when set,
    /// otherwise the excerpt, otherwise empty.
    pub fn effective_description(&self) -> &str {
        non_empty(&self.meta_description)
            .or_else(|| non_empty(&self.excerpt))
            .unwrap_or("")
    }

    /// Focus keyword, when one is set and non-empty.
    pub fn keyword(&self) -> Option<&str> {
        non_empty(&self.focus_keyword)
    }

    /// Open Graph title: override, else the effective title.
    pub fn og_title(&self) -> &str {
        non_empty(&self.og_title).unwrap_or_else(|| self.effective_title())
    }

    /// Open Graph description: override, else the effective description.
    pub fn og_description(&self) -> &str {
        non_empty(&self.og_description).unwrap_or_else(|| self.effective_description())
    }

    /// Twitter card title: override, else the effective title.
    pub fn twitter_title(&self) -> &str {
        non_empty(&self.twitter_title).unwrap_or_else(|| self.effective_title())
    }

    /// Twitter card description: override, else the effective description.
    pub fn twitter_description(&self) -> &str {
        non_empty(&self.twitter_description).unwrap_or_else(|| self.effective_description())
    }
}

/// Category of a single finding.
///
/// An `Error` here is a content-quality signal, not a computation failure:
/// the engine is total over its input domain and never fails.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    /// The check passed and awarded its points
    Good,
    /// Improvement is recommended; no points awarded
    Warning,
    /// A significant problem; no points awarded
    Error,
}

impl FindingKind {
    /// Returns a human-readable label for the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKind::Good => "good",
            FindingKind::Warning => "warning",
            FindingKind::Error => "error",
        }
    }
}

/// One categorized observation produced by a single metric check, carrying
/// the score points it contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Severity of the observation
    pub kind: FindingKind,
    /// Human-readable message
    pub message: String,
    /// Points this finding contributes to the aggregate score
    pub points: u32,
}

impl Finding {
    /// Builds a finding from a canonical message and its points.
    pub fn new(kind: FindingKind, message: &str, points: u32) -> Self {
        Finding {
            kind,
            message: message.to_string(),
            points,
        }
    }
}

/// Focus-keyword usage metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordMetrics {
    /// Non-overlapping occurrences of the keyword in the plain text
    pub occurrences: usize,
    /// Occurrences as a percentage of total words; 0 when no keyword is set
    /// or the content has no words
    pub density_percent: f64,
    /// Total word count of the plain text
    pub word_count: usize,
}

/// Reading-ease level derived from the Flesch score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize, Deserialize,
)]
pub enum ReadingLevel {
    /// Flesch score of 90 or above
    VeryEasy,
    /// 80 to 90
    Easy,
    /// 70 to 80
    FairlyEasy,
    /// 60 to 70
    Standard,
    /// 50 to 60
    FairlyDifficult,
    /// 30 to 50
    Difficult,
    /// Below 30
    VeryDifficult,
    /// Content was empty; no level can be assigned
    Unknown,
}

impl ReadingLevel {
    /// Maps a raw (unclamped) Flesch score to its level.
    ///
    /// First matching range wins, descending. Total over all finite scores.
    pub fn for_score(flesch: f64) -> Self {
        if flesch >= 90.0 {
            ReadingLevel::VeryEasy
        } else if flesch >= 80.0 {
            ReadingLevel::Easy
        } else if flesch >= 70.0 {
            ReadingLevel::FairlyEasy
        } else if flesch >= 60.0 {
            ReadingLevel::Standard
        } else if flesch >= 50.0 {
            ReadingLevel::FairlyDifficult
        } else if flesch >= 30.0 {
            ReadingLevel::Difficult
        } else {
            ReadingLevel::VeryDifficult
        }
    }

    /// Returns a human-readable label for the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingLevel::VeryEasy => "Very Easy",
            ReadingLevel::Easy => "Easy",
            ReadingLevel::FairlyEasy => "Fairly Easy",
            ReadingLevel::Standard => "Standard",
            ReadingLevel::FairlyDifficult => "Fairly Difficult",
            ReadingLevel::Difficult => "Difficult",
            ReadingLevel::VeryDifficult => "Very Difficult",
            ReadingLevel::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Readability metrics for the post body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityMetrics {
    /// Raw Flesch Reading Ease approximation (can leave the 0-100 range)
    pub flesch_score: f64,
    /// Level derived from the raw score
    pub level: ReadingLevel,
    /// Average words per sentence; 0 when there are no sentences
    pub avg_words_per_sentence: f64,
    /// Percentage of words longer than six characters; 0 when there are no words
    pub complex_word_percent: f64,
}

impl ReadabilityMetrics {
    /// Flesch score for display, clamped at 0. The level mapping always
    /// uses the raw score.
    pub fn display_score(&self) -> f64 {
        self.flesch_score.max(0.0)
    }
}

impl Default for ReadabilityMetrics {
    fn default() -> Self {
        ReadabilityMetrics {
            flesch_score: 0.0,
            level: ReadingLevel::Unknown,
            avg_words_per_sentence: 0.0,
            complex_word_percent: 0.0,
        }
    }
}

/// Complete result of one analysis call.
///
/// Recomputed in full from a snapshot on every trigger; never cached or
/// partially updated. The aggregate `score` is the sum of `points` over
/// `findings`, clamped to [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Aggregate score in [0, 100]
    pub score: u32,
    /// Findings in fixed evaluation order: title, description,
    /// keyword-in-title, keyword density, content length, featured image
    pub findings: Vec<Finding>,
    /// Focus-keyword metrics
    pub keyword: KeywordMetrics,
    /// Readability metrics
    pub readability: ReadabilityMetrics,
}

/// Site-level context used for URL composition and social preview data.
#[derive(Debug, Clone)]
pub struct SiteContext {
    /// Base URL of the site
    pub base_url: Url,
    /// Display name of the site
    pub site_name: String,
    /// Twitter handle of the site, if any
    pub twitter_site: Option<String>,
}

impl SiteContext {
    /// Builds a site context from raw strings, falling back to the default
    /// base URL when the supplied one does not parse.
    pub fn new(base_url: &str, site_name: &str, twitter_site: Option<&str>) -> Self {
        let base_url = Url::parse(base_url).unwrap_or_else(|e| {
            log::warn!("Invalid base URL '{}': {}. Using default.", base_url, e);
            Url::parse(DEFAULT_BASE_URL).expect("default base URL must parse")
        });
        SiteContext {
            base_url,
            site_name: site_name.to_string(),
            twitter_site: twitter_site
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string()),
        }
    }

    /// Host of the site, used to classify links as internal.
    pub fn host(&self) -> &str {
        self.base_url.host_str().unwrap_or("")
    }

    /// Absolute URL of a post, composed from its slug.
    pub fn post_url(&self, slug: &str) -> String {
        self.base_url
            .join(&format!("/blog/{}/", slug))
            .map(|u| u.to_string())
            .unwrap_or_else(|_| format!("{}/blog/{}/", self.base_url, slug))
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        SiteContext::new(
            DEFAULT_BASE_URL,
            DEFAULT_SITE_NAME,
            Some(DEFAULT_TWITTER_SITE),
        )
    }
}
