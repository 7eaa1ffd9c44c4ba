//! Canonical rule set for the feedback form.
//!
//! Name, feedback text and a star rating are required. Mobile, email and
//! project name are optional; mobile and email are pattern-checked only when
//! filled in.

use super::{is_valid_email, is_valid_mobile, FieldErrors, TextRule};
use crate::feedback::FeedbackForm;

/// Form-side cap on the feedback text. The store allows more.
pub const MAX_FEEDBACK_CHARS: usize = 1000;

const NAME: TextRule = TextRule {
    field: "name",
    label: "Name",
    min: 1,
    max: 100,
};

pub fn validate_feedback_form(form: &FeedbackForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    NAME.check(&form.name, &mut errors);

    let mobile = form.mobile.trim();
    if !mobile.is_empty() && !is_valid_mobile(mobile) {
        errors.insert("mobile", "Please enter a valid mobile number");
    }

    let email = form.email.trim();
    if !email.is_empty() && !is_valid_email(email) {
        errors.insert("email", "Please enter a valid email address");
    }

    if form.feedback.trim().is_empty() {
        errors.insert("feedback", "Feedback is required");
    } else if form.feedback.chars().count() > MAX_FEEDBACK_CHARS {
        errors.insert(
            "feedback",
            format!("Feedback must be less than {MAX_FEEDBACK_CHARS} characters"),
        );
    }

    match form.rating {
        0 => errors.insert("rating", "Please select a rating"),
        1..=5 => {}
        _ => errors.insert("rating", "Rating must be between 1 and 5"),
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> FeedbackForm {
        FeedbackForm {
            name: "Jane Doe".into(),
            feedback: "Great service".into(),
            rating: 5,
            ..Default::default()
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate_feedback_form(&valid()).is_empty());
    }

    #[test]
    fn blank_name_and_text_are_reported_per_field() {
        let form = FeedbackForm {
            name: "   ".into(),
            feedback: String::new(),
            ..valid()
        };
        let errors = validate_feedback_form(&form);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("feedback"), Some("Feedback is required"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn text_over_1000_chars_is_rejected_even_though_store_allows_2000() {
        let form = FeedbackForm {
            feedback: "é".repeat(MAX_FEEDBACK_CHARS + 1),
            ..valid()
        };
        assert_eq!(
            validate_feedback_form(&form).get("feedback"),
            Some("Feedback must be less than 1000 characters")
        );

        let form = FeedbackForm {
            feedback: "é".repeat(MAX_FEEDBACK_CHARS),
            ..valid()
        };
        assert!(validate_feedback_form(&form).is_empty());
    }

    #[test]
    fn zero_rating_asks_for_a_star() {
        let form = FeedbackForm { rating: 0, ..valid() };
        assert_eq!(
            validate_feedback_form(&form).get("rating"),
            Some("Please select a rating")
        );
    }

    #[test]
    fn rating_above_five_is_out_of_range() {
        let form = FeedbackForm { rating: 9, ..valid() };
        assert!(validate_feedback_form(&form).contains("rating"));
    }

    #[test]
    fn optional_contact_fields_are_checked_only_when_present() {
        let form = FeedbackForm {
            mobile: "not a phone".into(),
            email: "nope".into(),
            ..valid()
        };
        let errors = validate_feedback_form(&form);
        assert_eq!(errors.get("mobile"), Some("Please enter a valid mobile number"));
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));

        let form = FeedbackForm {
            mobile: "+94 77 123 4567".into(),
            email: "jane@example.com".into(),
            project_name: String::new(),
            ..valid()
        };
        assert!(validate_feedback_form(&form).is_empty());
    }

    #[test]
    fn long_name_is_rejected() {
        let form = FeedbackForm { name: "n".repeat(101), ..valid() };
        assert_eq!(
            validate_feedback_form(&form).get("name"),
            Some("Name must be 100 characters or fewer")
        );
    }

    #[test]
    fn padded_name_at_the_cap_is_accepted() {
        let form = FeedbackForm {
            name: format!(" {} ", "n".repeat(100)),
            ..valid()
        };
        assert!(!validate_feedback_form(&form).contains("name"));
    }
}
