//! Live editor session: the second call site of the analysis engine.
//!
//! The editing surface updates one field at a time. Instead of binding the
//! engine to ambient form state, the session owns the current field values
//! and assembles an explicit `PostSnapshot` at every trigger, so the
//! analysis stays a pure function of a snapshot and the live preview cannot
//! drift from the save-time computation. Refreshing on every keystroke is
//! fine: the computation is linear in content length and has no side
//! effects.

use crate::analysis::analyze;
use crate::models::{AnalysisResult, PostSnapshot, SiteContext};
use crate::preview::{build_previews, PreviewBundle};

/// Analysis plus preview shapes, as rendered by the live surface.
#[derive(Debug, Clone, PartialEq)]
pub struct LivePreview {
    /// Scored analysis of the current field values
    pub analysis: AnalysisResult,
    /// Search and social preview shapes
    pub previews: PreviewBundle,
}

/// Editing-session state for one post.
///
/// Setters update a single field, mirroring form inputs; `refresh` builds a
/// snapshot from the current values and recomputes everything.
#[derive(Debug, Clone)]
pub struct EditorSession {
    snapshot: PostSnapshot,
    site: SiteContext,
}

impl EditorSession {
    /// Starts an empty session.
    pub fn new(site: SiteContext) -> Self {
        EditorSession {
            snapshot: PostSnapshot::default(),
            site,
        }
    }

    /// Starts a session from an existing post's fields.
    pub fn from_snapshot(snapshot: PostSnapshot, site: SiteContext) -> Self {
        EditorSession { snapshot, site }
    }

    /// Current field values as a snapshot.
    pub fn snapshot(&self) -> &PostSnapshot {
        &self.snapshot
    }

    /// Updates the post title.
    pub fn set_title(&mut self, value: &str) {
        self.snapshot.title = value.to_string();
    }

    /// Updates the SEO title override.
    pub fn set_seo_title(&mut self, value: &str) {
        self.snapshot.seo_title = Some(value.to_string());
    }

    /// Updates the excerpt.
    pub fn set_excerpt(&mut self, value: &str) {
        self.snapshot.excerpt = Some(value.to_string());
    }

    /// Updates the meta description.
    pub fn set_meta_description(&mut self, value: &str) {
        self.snapshot.meta_description = Some(value.to_string());
    }

    /// Updates the body content.
    pub fn set_content(&mut self, value: &str) {
        self.snapshot.content = value.to_string();
    }

    /// Updates the focus keyword.
    pub fn set_focus_keyword(&mut self, value: &str) {
        self.snapshot.focus_keyword = Some(value.to_string());
    }

    /// Updates the featured-image flag.
    pub fn set_featured_image(&mut self, present: bool) {
        self.snapshot.has_featured_image = present;
    }

    /// Updates the slug.
    pub fn set_slug(&mut self, value: &str) {
        self.snapshot.slug = value.to_string();
    }

    /// Recomputes analysis and previews from the current field values.
    pub fn refresh(&self) -> LivePreview {
        LivePreview {
            analysis: analyze(&self.snapshot),
            previews: build_previews(&self.snapshot, &self.site),
        }
    }
}
