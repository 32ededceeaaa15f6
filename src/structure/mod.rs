//! Content structure analysis.
//!
//! Non-scored analyses of the post body's markup structure:
//! - Heading inventory (h1-h6) and keyword usage in headings
//! - Internal/external link split
//! - Image alt/title attribute coverage
//!
//! All parsing is done using CSS selectors via the `scraper` crate. These
//! metrics feed the detailed report and exports, not the aggregate score.

mod headings;
mod images;
mod links;

// Re-export public API
pub use headings::{analyze_headings, HeadingAnalysis};
pub use images::{analyze_images, ImageAnalysis};
pub use links::{analyze_links, LinkAnalysis, LinkEntry};

use crate::models::{PostSnapshot, SiteContext};
use serde::{Deserialize, Serialize};

/// Combined structure analysis of a post body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureAnalysis {
    /// Heading inventory
    pub headings: HeadingAnalysis,
    /// Link inventory
    pub links: LinkAnalysis,
    /// Image inventory
    pub images: ImageAnalysis,
}

/// Runs all structure analyses over a post body.
pub fn analyze_structure(snapshot: &PostSnapshot, site: &SiteContext) -> StructureAnalysis {
    let keyword = snapshot.keyword();
    StructureAnalysis {
        headings: analyze_headings(&snapshot.content, keyword),
        links: analyze_links(&snapshot.content, site),
        images: analyze_images(&snapshot.content, keyword),
    }
}
