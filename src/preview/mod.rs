//! Presentation adapter: search and social preview shapes.
//!
//! Pure mappings from a post snapshot to the three preview surfaces the
//! editing UI renders: a search-result snippet, an Open Graph share card,
//! and a Twitter card. No scoring logic lives here; each field is a
//! selection down a fallback chain (explicit override, then the generic SEO
//! field, then the raw post field, then a static placeholder), plus URL
//! composition from the slug. Input is never mutated; preview data is
//! ephemeral and never persisted.

mod session;
mod tags;

pub use session::{EditorSession, LivePreview};
pub use tags::{basic_meta_tags, og_meta_tags, twitter_meta_tags};

use serde::{Deserialize, Serialize};

use crate::config::{PLACEHOLDER_DESCRIPTION, PLACEHOLDER_TITLE};
use crate::models::{PostSnapshot, SiteContext};

/// Search-result snippet preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPreview {
    /// Absolute URL of the post
    pub url: String,
    /// Breadcrumb-style display URL ("host › blog › slug")
    pub display_url: String,
    /// Snippet title
    pub title: String,
    /// Snippet description
    pub description: String,
}

/// Open Graph share-card preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenGraphCard {
    /// Card title
    pub title: String,
    /// Card description
    pub description: String,
    /// Absolute URL of the post
    pub url: String,
    /// Site display name
    pub site_name: String,
    /// Share image URL, when one is set
    pub image_url: Option<String>,
}

/// Twitter share-card preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitterCard {
    /// Twitter card type
    pub card_type: String,
    /// Card title
    pub title: String,
    /// Card description
    pub description: String,
    /// Site Twitter handle, when configured
    pub site_handle: Option<String>,
    /// Share image URL, when one is set
    pub image_url: Option<String>,
}

/// The three preview shapes for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewBundle {
    /// Search-result snippet
    pub search: SearchPreview,
    /// Open Graph card
    pub open_graph: OpenGraphCard,
    /// Twitter card
    pub twitter: TwitterCard,
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Builds all three preview shapes from a snapshot.
pub fn build_previews(snapshot: &PostSnapshot, site: &SiteContext) -> PreviewBundle {
    let url = site.post_url(&snapshot.slug);

    let search = SearchPreview {
        display_url: format!("{} › blog › {}", site.host(), snapshot.slug),
        title: or_placeholder(snapshot.effective_title(), PLACEHOLDER_TITLE).to_string(),
        description: or_placeholder(snapshot.effective_description(), PLACEHOLDER_DESCRIPTION)
            .to_string(),
        url: url.clone(),
    };

    let open_graph = OpenGraphCard {
        title: or_placeholder(snapshot.og_title(), PLACEHOLDER_TITLE).to_string(),
        description: or_placeholder(snapshot.og_description(), PLACEHOLDER_DESCRIPTION)
            .to_string(),
        url: url.clone(),
        site_name: site.site_name.clone(),
        image_url: snapshot.og_image_url.clone(),
    };

    let twitter = TwitterCard {
        card_type: "summary_large_image".to_string(),
        title: or_placeholder(snapshot.twitter_title(), PLACEHOLDER_TITLE).to_string(),
        description: or_placeholder(snapshot.twitter_description(), PLACEHOLDER_DESCRIPTION)
            .to_string(),
        site_handle: site.twitter_site.clone(),
        image_url: snapshot.og_image_url.clone(),
    };

    PreviewBundle {
        search,
        open_graph,
        twitter,
    }
}
