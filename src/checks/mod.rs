//! Metric extractors.
//!
//! Each extractor is a pure function from a post snapshot (and, where
//! needed, its normalized content) to a finding plus raw metrics:
//! - Title and description length bands
//! - Focus keyword in title, keyword density
//! - Content length and featured image presence
//! - Readability (Flesch Reading Ease approximation)
//!
//! Extractors are total over their input domain: empty fields and zero
//! counts produce the weakest applicable finding, never a failure.

mod content;
mod description;
mod keyword;
mod readability;
mod title;

// Re-export public API
pub use content::{
    check_content_length, check_featured_image, reading_time_display, reading_time_minutes,
};
pub use description::check_description;
pub use keyword::{check_keyword_density, check_keyword_in_title, keyword_metrics};
pub use readability::readability;
pub use title::check_title;
