//! Media assets referenced by content records.

use serde::Serialize;

/// Image shown in place of an asset whose source is missing or fails to load.
pub const PLACEHOLDER_SRC: &str = "/media/placeholder.svg";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A single image or video reference synced from the CMS asset library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MediaAsset {
    /// Public URL path. Empty when the CMS entry has no uploaded file yet.
    pub src: &'static str,
    pub alt: &'static str,
    pub kind: MediaKind,
    /// Photographer or studio credit.
    pub credit: Option<&'static str>,
}

impl MediaAsset {
    #[must_use]
    pub const fn image(src: &'static str, alt: &'static str) -> Self {
        Self { src, alt, kind: MediaKind::Image, credit: None }
    }

    #[must_use]
    pub const fn video(src: &'static str, alt: &'static str) -> Self {
        Self { src, alt, kind: MediaKind::Video, credit: None }
    }

    #[must_use]
    pub const fn credited(self, credit: &'static str) -> Self {
        Self { credit: Some(credit), ..self }
    }

    /// Source to render, falling back to the placeholder when none was uploaded.
    #[must_use]
    pub fn display_src(&self) -> &'static str {
        if self.src.trim().is_empty() { PLACEHOLDER_SRC } else { self.src }
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.src.trim().is_empty()
    }
}
