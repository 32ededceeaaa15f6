//! Automatic fixes for missing SEO fields.
//!
//! Derives values for fields an author left empty, where a safe derivation
//! exists: the meta description from the excerpt and the SEO title from the
//! post title. Fixes are suggested, never silently applied; `apply_fixes`
//! returns an updated copy and leaves the input snapshot untouched.

use serde::Serialize;

use crate::config::{DESCRIPTION_MAX_CHARS, DESCRIPTION_TRUNCATE_CHARS, TITLE_MAX_CHARS};
use crate::models::PostSnapshot;
use crate::utils::{slugify, truncate_chars};

/// One suggested field fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    /// Snapshot field the fix targets
    pub field: &'static str,
    /// Value the field would be set to
    pub value: String,
    /// Human-readable description of the fix
    pub note: &'static str,
}

/// Suggests fixes for a snapshot's missing SEO fields.
pub fn suggest_fixes(snapshot: &PostSnapshot) -> Vec<Fix> {
    let mut fixes = Vec::new();

    let description_missing = snapshot
        .meta_description
        .as_deref()
        .map_or(true, |d| d.is_empty());
    if description_missing {
        if let Some(excerpt) = snapshot.excerpt.as_deref().filter(|e| !e.is_empty()) {
            if excerpt.chars().count() <= DESCRIPTION_MAX_CHARS {
                fixes.push(Fix {
                    field: "meta_description",
                    value: excerpt.to_string(),
                    note: "Added meta description from excerpt",
                });
            } else {
                fixes.push(Fix {
                    field: "meta_description",
                    value: format!("{}...", truncate_chars(excerpt, DESCRIPTION_TRUNCATE_CHARS)),
                    note: "Added truncated meta description from excerpt",
                });
            }
        }
    }

    let seo_title_missing = snapshot.seo_title.as_deref().map_or(true, |t| t.is_empty());
    if seo_title_missing
        && !snapshot.title.is_empty()
        && snapshot.title.chars().count() <= TITLE_MAX_CHARS
    {
        fixes.push(Fix {
            field: "seo_title",
            value: snapshot.title.clone(),
            note: "Added SEO title from post title",
        });
    }

    if snapshot.slug.is_empty() {
        let slug = slugify(&snapshot.title);
        if !slug.is_empty() {
            fixes.push(Fix {
                field: "slug",
                value: slug,
                note: "Derived slug from post title",
            });
        }
    }

    fixes
}

/// Applies the suggested fixes to a copy of the snapshot.
///
/// Returns the updated snapshot together with the fixes that were applied.
pub fn apply_fixes(snapshot: &PostSnapshot) -> (PostSnapshot, Vec<Fix>) {
    let fixes = suggest_fixes(snapshot);
    let mut updated = snapshot.clone();
    for fix in &fixes {
        match fix.field {
            "meta_description" => updated.meta_description = Some(fix.value.clone()),
            "seo_title" => updated.seo_title = Some(fix.value.clone()),
            "slug" => updated.slug = fix.value.clone(),
            _ => log::warn!("Unknown fix target field '{}', skipping", fix.field),
        }
    }
    (updated, fixes)
}
