//! Rule set for the add-project form.
//!
//! Stricter than the store: shorter caps, minimum lengths, at least one tag
//! and a thumbnail URL.

use validator::ValidateUrl;

use super::{FieldErrors, TextRule};
use crate::project::ProjectForm;

const TITLE: TextRule = TextRule {
    field: "title",
    label: "Title",
    min: 3,
    max: 100,
};

const SUMMARY: TextRule = TextRule {
    field: "summary",
    label: "Summary",
    min: 10,
    max: 200,
};

const DESCRIPTION: TextRule = TextRule {
    field: "description",
    label: "Description",
    min: 20,
    max: 1000,
};

pub fn validate_project_form(form: &ProjectForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    TITLE.check(&form.title, &mut errors);
    SUMMARY.check(&form.summary, &mut errors);
    DESCRIPTION.check(&form.description, &mut errors);

    if form.parse_tags().is_empty() {
        errors.insert("tags", "Add at least one tag");
    }

    if !form.thumbnail.trim().validate_url() {
        errors.insert("thumbnail", "Must be a valid URL");
    }

    if let Some(bad) = form
        .parse_media()
        .iter()
        .find(|m| !m.src.as_str().validate_url())
    {
        errors.insert("media_urls", format!("Not a valid URL: {}", bad.src));
    }

    errors
}
