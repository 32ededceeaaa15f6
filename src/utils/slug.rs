//! Slug generation and suggestion helpers.

use crate::utils::text::truncate_words;

/// Converts a title into a URL-safe slug.
///
/// Lowercases, drops characters that are not ASCII alphanumerics,
/// underscores, hyphens, or whitespace, then collapses whitespace and
/// hyphen runs into single hyphens and trims separators from both ends.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_separator = false;

    for ch in value.to_lowercase().chars() {
        if ch.is_whitespace() || ch == '-' {
            pending_separator = !slug.is_empty();
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_separator {
                slug.push('-');
                pending_separator = false;
            }
            slug.push(ch);
        }
        // All other characters are dropped without acting as separators
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// Suggests slugs for a post title.
///
/// The first suggestion is the plain slugified title. If that collides with
/// an existing slug, a numbered variant is added. Long titles also get a
/// shortened variant built from their first three words.
pub fn slug_suggestions(title: &str, existing_slugs: &[String]) -> Vec<String> {
    let base = slugify(title);
    let mut suggestions = vec![base.clone()];

    if existing_slugs.contains(&base) {
        let mut counter = 1;
        while existing_slugs.contains(&format!("{}-{}", base, counter)) {
            counter += 1;
        }
        suggestions.push(format!("{}-{}", base, counter));
    }

    if title.split_whitespace().count() > 3 {
        let short = slugify(&truncate_words(title, 3));
        if !suggestions.contains(&short) {
            suggestions.push(short);
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Spaced   Out  "), "spaced-out");
    }

    #[test]
    fn test_slugify_drops_punctuation() {
        assert_eq!(
            slugify("Transformers: Attention Is All You Need!"),
            "transformers-attention-is-all-you-need"
        );
    }

    #[test]
    fn test_slugify_collapses_hyphen_runs() {
        assert_eq!(slugify("a -- b - c"), "a-b-c");
    }

    #[test]
    fn test_slugify_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn test_suggestions_avoid_collisions() {
        let existing = vec!["my-post".to_string(), "my-post-1".to_string()];
        let suggestions = slug_suggestions("My Post", &existing);
        assert_eq!(suggestions[0], "my-post");
        assert!(suggestions.contains(&"my-post-2".to_string()));
    }

    #[test]
    fn test_suggestions_include_short_variant() {
        let suggestions = slug_suggestions("A Very Long Title About Nothing", &[]);
        assert!(suggestions.contains(&"a-very-long-title-about-nothing".to_string()));
        assert!(suggestions.contains(&"a-very-long".to_string()));
    }

    #[test]
    fn test_short_titles_get_single_suggestion() {
        assert_eq!(slug_suggestions("Three Word Title", &[]).len(), 1);
    }
}
