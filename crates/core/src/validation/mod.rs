//! Client-side form validation.
//!
//! Each validator takes a form snapshot and returns a [`FieldErrors`] map
//! with one message per offending field. An empty map means the form may be
//! submitted. Validators are pure so the form can re-run them on every edit.

pub mod feedback;
pub mod project;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub use feedback::validate_feedback_form;
pub use project::validate_project_form;

/// Digits, spaces, hyphens and parentheses, with an optional leading `+`.
static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s\-()]+$").expect("valid regex"));

/// Something, `@`, something, `.`, something. No whitespace, one `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Returns `true` if `value` looks like a phone number.
pub fn is_valid_mobile(value: &str) -> bool {
    MOBILE_RE.is_match(value)
}

/// Returns `true` if `value` looks like an email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Field name to error message, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error. The first error recorded for a field wins.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Drop the error for one field, leaving the others untouched.
    ///
    /// Called when the user edits that field.
    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Char-count bounds for a required text field.
pub(crate) struct TextRule {
    pub field: &'static str,
    pub label: &'static str,
    pub min: usize,
    pub max: usize,
}

impl TextRule {
    /// Blank, too short or too long. Measured after trimming, the same way
    /// the store stores it.
    pub(crate) fn check(&self, value: &str, errors: &mut FieldErrors) {
        let trimmed = value.trim();
        let len = trimmed.chars().count();
        if trimmed.is_empty() {
            errors.insert(self.field, format!("{} is required", self.label));
        } else if len < self.min {
            errors.insert(
                self.field,
                format!("{} must be at least {} characters", self.label, self.min),
            );
        } else if len > self.max {
            errors.insert(
                self.field,
                format!("{} must be {} characters or fewer", self.label, self.max),
            );
        }
    }
}
