//! Link analysis: internal/external split.

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

use crate::models::SiteContext;
use crate::utils::parse_selector_unsafe;

const ANCHOR_SELECTOR_STR: &str = "a[href]";

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ANCHOR_SELECTOR_STR, "ANCHOR_SELECTOR"));

/// A single link found in the post body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// The href value
    pub url: String,
    /// Anchor text with nested markup stripped
    pub text: String,
}

/// Link inventory of a post body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkAnalysis {
    /// Links pointing at the site itself (relative, or absolute on the site host)
    pub internal: Vec<LinkEntry>,
    /// Links pointing at other hosts
    pub external: Vec<LinkEntry>,
    /// Total anchors with an href, including ones that are neither internal
    /// nor external (mailto:, anchors, and other schemes)
    pub total: usize,
}

impl LinkAnalysis {
    /// Number of internal links.
    pub fn internal_count(&self) -> usize {
        self.internal.len()
    }

    /// Number of external links.
    pub fn external_count(&self) -> usize {
        self.external.len()
    }
}

/// Analyzes anchors in a post body, splitting them into internal and
/// external links.
///
/// Root-relative hrefs are internal. Absolute http(s) hrefs are internal
/// when their host matches the site host (or localhost, so drafts written
/// against a dev server classify the same way). Everything else keeps
/// counting toward the total without being classified.
pub fn analyze_links(html: &str, site: &SiteContext) -> LinkAnalysis {
    let document = Html::parse_fragment(html);
    let site_host = site.host();

    let mut analysis = LinkAnalysis::default();
    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        analysis.total += 1;

        let entry = LinkEntry {
            url: href.to_string(),
            text: element.text().collect::<String>().trim().to_string(),
        };

        if href.starts_with("http://") || href.starts_with("https://") {
            let host = Url::parse(href)
                .ok()
                .and_then(|u| u.host_str().map(|h| h.to_string()))
                .unwrap_or_default();
            if (!site_host.is_empty() && host.contains(site_host)) || host.contains("localhost") {
                analysis.internal.push(entry);
            } else {
                analysis.external.push(entry);
            }
        } else if href.starts_with('/') {
            analysis.internal.push(entry);
        }
    }

    analysis
}
