//! Scoring and analysis constants.
//!
//! This module defines every tunable number the analysis engine uses:
//! point weights, length bands, density bounds, readability coefficients,
//! and the canonical finding messages. The weights are product decisions,
//! not derived values, so they live here rather than in the extractors.

// Point weights per check. The maximum achievable score is the sum of
// these (20+20+15+15+10+10 = 100), so the aggregator's upper clamp is a
// safety net rather than a working bound.
/// Points awarded when the effective title length is in the optimal band.
pub const TITLE_POINTS: u32 = 20;
/// Points awarded when the effective description length is in the optimal band.
pub const DESCRIPTION_POINTS: u32 = 20;
/// Points awarded when the focus keyword appears in the effective title.
pub const KEYWORD_IN_TITLE_POINTS: u32 = 15;
/// Points awarded when keyword density falls inside the optimal band.
pub const KEYWORD_DENSITY_POINTS: u32 = 15;
/// Points awarded when the content meets the minimum word count.
pub const CONTENT_LENGTH_POINTS: u32 = 10;
/// Points awarded when a featured image is set.
pub const FEATURED_IMAGE_POINTS: u32 = 10;

/// Upper bound on the aggregate score.
pub const MAX_SCORE: u32 = 100;

// Title length band (characters, inclusive on both ends).
/// Minimum optimal title length.
pub const TITLE_MIN_CHARS: usize = 30;
/// Maximum optimal title length.
pub const TITLE_MAX_CHARS: usize = 60;

// Meta description length band (characters, inclusive on both ends).
/// Minimum optimal description length.
pub const DESCRIPTION_MIN_CHARS: usize = 120;
/// Maximum optimal description length.
pub const DESCRIPTION_MAX_CHARS: usize = 160;

// Keyword density band (percent of total words, inclusive on both ends).
/// Lower bound of the optimal keyword density band.
pub const DENSITY_MIN_PERCENT: f64 = 0.5;
/// Upper bound of the optimal keyword density band; beyond this is
/// treated as keyword stuffing.
pub const DENSITY_MAX_PERCENT: f64 = 2.5;

/// Minimum word count for content to be considered substantial.
pub const CONTENT_MIN_WORDS: usize = 300;

// Flesch Reading Ease approximation coefficients. The complex-word ratio
// stands in for the syllable term of the classic formula.
/// Base constant of the Flesch formula.
pub const FLESCH_BASE: f64 = 206.835;
/// Weight applied to average words per sentence.
pub const FLESCH_SENTENCE_WEIGHT: f64 = 1.015;
/// Weight applied to the complex-word ratio.
pub const FLESCH_WORD_WEIGHT: f64 = 84.6;
/// Words longer than this many characters count as complex.
pub const COMPLEX_WORD_MIN_CHARS: usize = 6;

/// Average reading speed used for the reading-time estimate, words per minute.
pub const READING_WORDS_PER_MINUTE: usize = 200;

// Auto-fix rules.
/// A generated meta description longer than `DESCRIPTION_MAX_CHARS` is cut
/// here and suffixed with an ellipsis (157 + 3 = 160).
pub const DESCRIPTION_TRUNCATE_CHARS: usize = 157;

// Preview placeholders, shown when every fallback in the chain is empty.
/// Placeholder title for preview surfaces.
pub const PLACEHOLDER_TITLE: &str = "Sample Blog Post Title";
/// Placeholder description for preview surfaces.
pub const PLACEHOLDER_DESCRIPTION: &str =
    "This is a sample meta description for the blog post...";

// Default site context. Overridable via CLI flags or `SiteContext`.
/// Default site base URL.
pub const DEFAULT_BASE_URL: &str = "https://ai-bytes.tech";
/// Default site display name.
pub const DEFAULT_SITE_NAME: &str = "AI Bytes";
/// Default Twitter site handle.
pub const DEFAULT_TWITTER_SITE: &str = "@aibytes";

// Canonical finding messages. The audit tallies and the recommendation
// table key off these, so they are constants rather than inline literals.
/// Title in the optimal band.
pub const MSG_TITLE_GOOD: &str = "SEO title length is optimal";
/// Title under the minimum length.
pub const MSG_TITLE_SHORT: &str = "SEO title is too short (less than 30 characters)";
/// Title over the maximum length.
pub const MSG_TITLE_LONG: &str = "SEO title is too long (more than 60 characters)";
/// Description in the optimal band.
pub const MSG_DESCRIPTION_GOOD: &str = "Meta description length is optimal";
/// No description at all.
pub const MSG_DESCRIPTION_MISSING: &str = "Meta description is missing";
/// Description under the minimum length.
pub const MSG_DESCRIPTION_SHORT: &str = "Meta description is too short";
/// Description over the maximum length.
pub const MSG_DESCRIPTION_LONG: &str = "Meta description is too long";
/// Keyword present in the effective title.
pub const MSG_KEYWORD_IN_TITLE: &str = "Focus keyword found in title";
/// Keyword absent from the effective title.
pub const MSG_KEYWORD_NOT_IN_TITLE: &str = "Focus keyword not found in title";
/// No focus keyword configured on the post.
pub const MSG_NO_FOCUS_KEYWORD: &str = "No focus keyword set";
/// Density inside the optimal band.
pub const MSG_DENSITY_GOOD: &str = "Focus keyword density is optimal";
/// Density below the band.
pub const MSG_DENSITY_LOW: &str = "Focus keyword density is too low";
/// Density above the band.
pub const MSG_DENSITY_HIGH: &str = "Focus keyword density is too high (keyword stuffing)";
/// Content meets the minimum word count.
pub const MSG_CONTENT_GOOD: &str = "Content length is good for SEO";
/// Content below the minimum word count.
pub const MSG_CONTENT_SHORT: &str =
    "Content is too short for optimal SEO (less than 300 words)";
/// Featured image present.
pub const MSG_IMAGE_GOOD: &str = "Featured image is set";
/// Featured image absent.
pub const MSG_IMAGE_MISSING: &str = "No featured image set";
