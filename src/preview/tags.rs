//! Meta tag generation.
//!
//! Produces the key/value pairs the page template renders into `<meta>`
//! tags: the basic set, the Open Graph set, and the Twitter card set.
//! Ordered vectors keep the rendered output deterministic.

use crate::config::{PLACEHOLDER_DESCRIPTION, PLACEHOLDER_TITLE};
use crate::models::{PostSnapshot, SiteContext};

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Basic meta tags: title, description, keywords, canonical URL, robots.
pub fn basic_meta_tags(snapshot: &PostSnapshot, site: &SiteContext) -> Vec<(String, String)> {
    let canonical = snapshot
        .canonical_url
        .clone()
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| site.post_url(&snapshot.slug));
    let robots = if snapshot.noindex || snapshot.nofollow {
        "noindex, nofollow"
    } else {
        "index, follow"
    };

    vec![
        (
            "title".to_string(),
            non_empty_or(snapshot.effective_title(), PLACEHOLDER_TITLE).to_string(),
        ),
        (
            "description".to_string(),
            non_empty_or(snapshot.effective_description(), PLACEHOLDER_DESCRIPTION).to_string(),
        ),
        ("keywords".to_string(), snapshot.tags.join(", ")),
        ("canonical".to_string(), canonical),
        ("robots".to_string(), robots.to_string()),
    ]
}

/// Open Graph meta tags.
pub fn og_meta_tags(snapshot: &PostSnapshot, site: &SiteContext) -> Vec<(String, String)> {
    let mut tags = vec![
        (
            "og:title".to_string(),
            non_empty_or(snapshot.og_title(), PLACEHOLDER_TITLE).to_string(),
        ),
        (
            "og:description".to_string(),
            non_empty_or(snapshot.og_description(), PLACEHOLDER_DESCRIPTION).to_string(),
        ),
        ("og:type".to_string(), "article".to_string()),
        ("og:url".to_string(), site.post_url(&snapshot.slug)),
        ("og:site_name".to_string(), site.site_name.clone()),
    ];

    if let Some(author) = snapshot.author.as_deref().filter(|a| !a.is_empty()) {
        tags.push(("article:author".to_string(), author.to_string()));
    }
    if let Some(published) = snapshot.published_at {
        tags.push((
            "article:published_time".to_string(),
            published.to_rfc3339(),
        ));
    }
    if let Some(updated) = snapshot.updated_at {
        tags.push(("article:modified_time".to_string(), updated.to_rfc3339()));
    }
    if let Some(image) = snapshot.og_image_url.as_deref().filter(|i| !i.is_empty()) {
        tags.push(("og:image".to_string(), image.to_string()));
        tags.push(("og:image:width".to_string(), "1200".to_string()));
        tags.push(("og:image:height".to_string(), "630".to_string()));
    }
    for tag in &snapshot.tags {
        tags.push(("article:tag".to_string(), tag.clone()));
    }

    tags
}

/// Twitter card meta tags.
pub fn twitter_meta_tags(snapshot: &PostSnapshot, site: &SiteContext) -> Vec<(String, String)> {
    let mut tags = vec![
        (
            "twitter:card".to_string(),
            "summary_large_image".to_string(),
        ),
        (
            "twitter:title".to_string(),
            non_empty_or(snapshot.twitter_title(), PLACEHOLDER_TITLE).to_string(),
        ),
        (
            "twitter:description".to_string(),
            non_empty_or(snapshot.twitter_description(), PLACEHOLDER_DESCRIPTION).to_string(),
        ),
    ];

    if let Some(handle) = &site.twitter_site {
        tags.push(("twitter:site".to_string(), handle.clone()));
    }
    if let Some(image) = snapshot.og_image_url.as_deref().filter(|i| !i.is_empty()) {
        tags.push(("twitter:image".to_string(), image.to_string()));
    }

    tags
}
