//! JSON-LD structured data generation.
//!
//! Builds the schema.org objects the page template embeds in
//! `<script type="application/ld+json">` tags: Article for posts,
//! Organization for the site, and BreadcrumbList for navigation trails.
//! Values are `serde_json::Value`s so the template layer can serialize them
//! directly.

use serde_json::{json, Value};

use crate::config::{PLACEHOLDER_DESCRIPTION, PLACEHOLDER_TITLE};
use crate::models::{PostSnapshot, SiteContext};

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Builds the Article schema for a post.
///
/// Headline and description follow the same fallback chains as the meta
/// tags. Optional fields (dates, image, keywords) are omitted rather than
/// emitted empty.
pub fn article_schema(snapshot: &PostSnapshot, site: &SiteContext) -> Value {
    let post_url = site.post_url(&snapshot.slug);
    let author_name = snapshot
        .author
        .as_deref()
        .filter(|a| !a.is_empty())
        .unwrap_or(&site.site_name);

    let mut images: Vec<String> = Vec::new();
    if let Some(image) = snapshot.og_image_url.as_deref().filter(|i| !i.is_empty()) {
        images.push(image.to_string());
    }

    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": non_empty_or(snapshot.effective_title(), PLACEHOLDER_TITLE),
        "description": non_empty_or(snapshot.effective_description(), PLACEHOLDER_DESCRIPTION),
        "image": images,
        "author": {
            "@type": "Person",
            "name": author_name,
        },
        "publisher": {
            "@type": "Organization",
            "name": site.site_name,
            "url": site.base_url.as_str(),
            "logo": {
                "@type": "ImageObject",
                "url": format!("{}static/images/icon.png", site.base_url),
            },
        },
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": post_url,
        },
    });

    if let Some(published) = snapshot.published_at {
        schema["datePublished"] = json!(published.to_rfc3339());
    }
    if let Some(updated) = snapshot.updated_at {
        schema["dateModified"] = json!(updated.to_rfc3339());
    }
    if !snapshot.tags.is_empty() {
        schema["keywords"] = json!(snapshot.tags);
    }

    schema
}

/// Builds the Organization schema for the site.
pub fn organization_schema(site: &SiteContext) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": site.site_name,
        "url": site.base_url.as_str(),
        "logo": format!("{}static/images/icon.png", site.base_url),
    })
}

/// Builds a BreadcrumbList schema from `(name, url)` pairs, in order.
///
/// Relative URLs are resolved against the site base; absolute URLs pass
/// through unchanged.
pub fn breadcrumb_schema(breadcrumbs: &[(String, String)], site: &SiteContext) -> Value {
    let items: Vec<Value> = breadcrumbs
        .iter()
        .enumerate()
        .map(|(index, (name, url))| {
            let item = if url.starts_with('/') {
                site.base_url
                    .join(url)
                    .map(|u| u.to_string())
                    .unwrap_or_else(|_| url.clone())
            } else {
                url.clone()
            };
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": name,
                "item": item,
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}
