//! Heading structure analysis.

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::utils::parse_selector_unsafe;

const HEADING_SELECTOR_STRS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

static HEADING_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    HEADING_SELECTOR_STRS
        .iter()
        .map(|s| parse_selector_unsafe(s, "HEADING_SELECTORS"))
        .collect()
});

/// Heading inventory of a post body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadingAnalysis {
    /// Number of headings per level, h1 first
    pub level_counts: [usize; 6],
    /// Total number of headings across all levels
    pub total: usize,
    /// Number of headings whose text contains the focus keyword
    pub keyword_in_headings: usize,
}

/// Analyzes the heading structure of a post body.
///
/// Counts headings per level and, when a focus keyword is set, how many
/// heading texts contain it (case-insensitive substring).
pub fn analyze_headings(html: &str, keyword: Option<&str>) -> HeadingAnalysis {
    let document = Html::parse_fragment(html);
    let keyword_lower = keyword.map(|k| k.to_lowercase());

    let mut analysis = HeadingAnalysis::default();
    for (level, selector) in HEADING_SELECTORS.iter().enumerate() {
        for element in document.select(selector) {
            analysis.level_counts[level] += 1;
            analysis.total += 1;

            if let Some(ref keyword) = keyword_lower {
                let text: String = element.text().collect();
                if text.to_lowercase().contains(keyword) {
                    analysis.keyword_in_headings += 1;
                }
            }
        }
    }

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_headings_per_level() {
        let html = "<h1>One</h1><h2>A</h2><h2>B</h2><p>body</p><h3>C</h3>";
        let analysis = analyze_headings(html, None);
        assert_eq!(analysis.level_counts[0], 1);
        assert_eq!(analysis.level_counts[1], 2);
        assert_eq!(analysis.level_counts[2], 1);
        assert_eq!(analysis.total, 4);
    }

    #[test]
    fn test_keyword_in_headings() {
        let html = "<h2>About transformers</h2><h2>Other topic</h2><h3>Transformers again</h3>";
        let analysis = analyze_headings(html, Some("transformers"));
        assert_eq!(analysis.keyword_in_headings, 2);
    }

    #[test]
    fn test_no_keyword_means_zero_matches() {
        let html = "<h2>About transformers</h2>";
        let analysis = analyze_headings(html, None);
        assert_eq!(analysis.keyword_in_headings, 0);
    }

    #[test]
    fn test_no_headings() {
        let analysis = analyze_headings("<p>just a paragraph</p>", Some("word"));
        assert_eq!(analysis.total, 0);
        assert_eq!(analysis.level_counts, [0; 6]);
    }

    #[test]
    fn test_nested_markup_in_heading_text() {
        let html = "<h2>All about <em>transformers</em> today</h2>";
        let analysis = analyze_headings(html, Some("transformers"));
        assert_eq!(analysis.keyword_in_headings, 1);
    }
}
