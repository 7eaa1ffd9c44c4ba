//! Feedback payloads: the form the visitor fills in and the body the store
//! accepts.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::null_as_default;

/// Store-side cap on the feedback text. The form is stricter (see
/// [`crate::validation::feedback::MAX_FEEDBACK_CHARS`]).
pub const STORE_MAX_FEEDBACK_CHARS: u64 = 2000;

/// 400 message for a body without a name or feedback text.
pub const FEEDBACK_REQUIRED_MESSAGE: &str = "name and feedback are required.";

/// Body of `POST /api/feedback`.
///
/// `name` and `feedback` default to empty, whether the key is missing or
/// `null`, so both reach the required-field check instead of failing
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewFeedback {
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(max = 100, message = "name must be 100 characters or fewer"))]
    pub name: String,
    #[validate(length(max = 100, message = "mobile must be 100 characters or fewer"))]
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub project_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(
        max = STORE_MAX_FEEDBACK_CHARS,
        message = "feedback must be 2000 characters or fewer"
    ))]
    pub feedback: String,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: Option<i32>,
}

impl NewFeedback {
    /// Trim the short text fields and turn blank optionals into `None`.
    ///
    /// The feedback text is kept as written.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            mobile: non_blank(self.mobile),
            email: non_blank(self.email),
            project_name: non_blank(self.project_name),
            feedback: self.feedback,
            rating: self.rating,
        }
    }

    /// Store-side schema check: required fields, then length and range caps.
    pub fn check_store_rules(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() || self.feedback.trim().is_empty() {
            return Err(CoreError::Validation(FEEDBACK_REQUIRED_MESSAGE.into()));
        }
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))
    }
}

/// Snapshot of the feedback form as the visitor sees it.
///
/// `rating` is the number of stars selected, `0` meaning none. `honeypot`
/// is the hidden bot-trap input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub project_name: String,
    pub feedback: String,
    pub rating: u8,
    pub honeypot: String,
}

impl FeedbackForm {
    /// The payload sent to the store. The honeypot never leaves the client.
    pub fn to_new_feedback(&self) -> NewFeedback {
        NewFeedback {
            name: self.name.clone(),
            mobile: Some(self.mobile.clone()),
            email: Some(self.email.clone()),
            project_name: Some(self.project_name.clone()),
            feedback: self.feedback.clone(),
            rating: (self.rating > 0).then_some(i32::from(self.rating)),
        }
        .normalized()
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
