//! Image analysis: alt/title attribute coverage.

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::utils::parse_selector_unsafe;

const IMAGE_SELECTOR_STR: &str = "img";

static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(IMAGE_SELECTOR_STR, "IMAGE_SELECTOR"));

/// Image inventory of a post body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageAnalysis {
    /// Total `<img>` elements in the body
    pub total: usize,
    /// Images carrying an alt attribute
    pub with_alt: usize,
    /// Images carrying a title attribute
    pub with_title: usize,
    /// Images whose alt text contains the focus keyword
    pub keyword_in_alt: usize,
    /// Share of images with an alt attribute, in percent; 0 with no images
    pub alt_percent: f64,
}

/// Analyzes `<img>` elements in a post body.
pub fn analyze_images(html: &str, keyword: Option<&str>) -> ImageAnalysis {
    let document = Html::parse_fragment(html);
    let keyword_lower = keyword.map(|k| k.to_lowercase());

    let mut analysis = ImageAnalysis::default();
    for element in document.select(&IMAGE_SELECTOR) {
        analysis.total += 1;

        if let Some(alt) = element.value().attr("alt") {
            analysis.with_alt += 1;
            if let Some(ref keyword) = keyword_lower {
                if alt.to_lowercase().contains(keyword) {
                    analysis.keyword_in_alt += 1;
                }
            }
        }
        if element.value().attr("title").is_some() {
            analysis.with_title += 1;
        }
    }

    analysis.alt_percent = if analysis.total == 0 {
        0.0
    } else {
        analysis.with_alt as f64 / analysis.total as f64 * 100.0
    };

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_images_and_alt_coverage() {
        let html = r#"<img src="a.png" alt="a diagram">
                      <img src="b.png">
                      <img src="c.png" alt="" title="c">"#;
        let analysis = analyze_images(html, None);
        assert_eq!(analysis.total, 3);
        // An empty alt attribute still counts as present
        assert_eq!(analysis.with_alt, 2);
        assert_eq!(analysis.with_title, 1);
        assert!((analysis.alt_percent - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_keyword_in_alt() {
        let html = r#"<img src="a.png" alt="Transformers architecture">
                      <img src="b.png" alt="training curve">"#;
        let analysis = analyze_images(html, Some("transformers"));
        assert_eq!(analysis.keyword_in_alt, 1);
    }

    #[test]
    fn test_no_images_means_zero_percent() {
        let analysis = analyze_images("<p>text only</p>", None);
        assert_eq!(analysis.total, 0);
        assert_eq!(analysis.alt_percent, 0.0);
    }
}
