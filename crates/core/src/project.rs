//! Project showcase payloads and the add-project form.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::feedback::non_blank;
use crate::types::null_as_default;

/// 400 message for a body without title, summary or description.
pub const PROJECT_REQUIRED_MESSAGE: &str = "title, summary, and description are required.";

/// Store-side cap on a single tag.
pub const STORE_MAX_TAG_CHARS: usize = 100;

/// Media item kind. Unknown kinds fail deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// `.mp4` / `.webm` anywhere in the URL means video; everything else is
    /// treated as an image.
    pub fn infer_from_url(url: &str) -> Self {
        if url.contains(".mp4") || url.contains(".webm") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// One entry of a project's ordered media gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMedia {
    #[serde(alias = "type")]
    pub kind: MediaKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Body of `POST /api/projects`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewProject {
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(max = 200, message = "title must be 200 characters or fewer"))]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(max = 500, message = "summary must be 500 characters or fewer"))]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(max = 5000, message = "description must be 5000 characters or fewer"))]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media: Vec<ProjectMedia>,
}

impl NewProject {
    /// Trim every text field, drop blank tags and blank optionals.
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            summary: self.summary.trim().to_string(),
            description: self.description.trim().to_string(),
            tags: self
                .tags
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            thumbnail: non_blank(self.thumbnail),
            media: self
                .media
                .into_iter()
                .map(|m| ProjectMedia {
                    kind: m.kind,
                    src: m.src.trim().to_string(),
                    alt: non_blank(m.alt),
                })
                .collect(),
        }
    }

    /// Store-side schema check: required fields, length caps, tag caps and
    /// non-empty media sources.
    pub fn check_store_rules(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty()
            || self.summary.trim().is_empty()
            || self.description.trim().is_empty()
        {
            return Err(CoreError::Validation(PROJECT_REQUIRED_MESSAGE.into()));
        }
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        if let Some(tag) = self
            .tags
            .iter()
            .find(|t| t.chars().count() > STORE_MAX_TAG_CHARS)
        {
            return Err(CoreError::Validation(format!(
                "tag '{tag}' exceeds {STORE_MAX_TAG_CHARS} characters"
            )));
        }
        if let Some(idx) = self.media.iter().position(|m| m.src.trim().is_empty()) {
            return Err(CoreError::Validation(format!(
                "media[{idx}].src is required"
            )));
        }
        Ok(())
    }
}

/// Snapshot of the add-project form.
///
/// Tags are typed comma-separated; media as one URL per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub summary: String,
    pub description: String,
    pub tags: String,
    pub thumbnail: String,
    pub media_urls: String,
}

impl ProjectForm {
    pub fn parse_tags(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn parse_media(&self) -> Vec<ProjectMedia> {
        self.media_urls
            .lines()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(|url| ProjectMedia {
                kind: MediaKind::infer_from_url(url),
                src: url.to_string(),
                alt: None,
            })
            .collect()
    }

    pub fn to_new_project(&self) -> NewProject {
        NewProject {
            title: self.title.clone(),
            summary: self.summary.clone(),
            description: self.description.clone(),
            tags: self.parse_tags(),
            thumbnail: Some(self.thumbnail.clone()),
            media: self.parse_media(),
        }
        .normalized()
    }
}
