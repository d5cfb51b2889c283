use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent securely. We'll respond within 24 hours.";

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

/// Validation failures. The display text is shown to the visitor as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Raw field values as typed into the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

/// Trimmed, validated payload of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub message: String,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl ContactForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Required-field check first, then email format.
    pub fn validate(&self) -> Result<ContactSubmission, FormError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(FormError::MissingRequired);
        }
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }

        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            phone: optional(&self.phone),
            service: optional(&self.service),
            message: message.to_string(),
        })
    }
}

/// Submit button state while the simulated request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
}

impl SubmitState {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitState::Idle => SUBMIT_LABEL,
            SubmitState::Sending => SENDING_LABEL,
        }
    }

    pub fn disabled(&self) -> bool {
        *self == SubmitState::Sending
    }
}

/// Completes a simulated send: clears the form and returns the button state
/// and the toast text to show.
pub fn finish_submission(form: &mut ContactForm) -> (SubmitState, &'static str) {
    form.reset();
    (SubmitState::Idle, SUCCESS_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Jane Doe".into(),
            email: "a@b.com".into(),
            message: "Need a quote for night patrols".into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn test_blank_required_fields() {
        for blank in ["name", "email", "message"] {
            let mut form = filled();
            match blank {
                "name" => form.name = "   ".into(),
                "email" => form.email = String::new(),
                _ => form.message = "\n".into(),
            }
            let before = form.clone();
            assert_eq!(form.validate(), Err(FormError::MissingRequired), "{}", blank);
            assert_eq!(form, before);
        }
    }

    #[test]
    fn test_email_format() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(is_valid_email("a@b.com"));

        let form = ContactForm { email: "a@b".into(), ..filled() };
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn test_valid_submission_is_trimmed() {
        let form = ContactForm {
            name: "  Jane Doe ".into(),
            email: " a@b.com ".into(),
            service: "Event Security".into(),
            ..filled()
        };
        let submission = form.validate().unwrap();
        assert_eq!(submission.name, "Jane Doe");
        assert_eq!(submission.email, "a@b.com");
        assert_eq!(submission.phone, None);
        assert_eq!(submission.service.as_deref(), Some("Event Security"));
    }

    #[test]
    fn test_payload_omits_empty_optionals() {
        let json = serde_json::to_value(filled().validate().unwrap()).unwrap();
        assert_eq!(json["email"], "a@b.com");
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_reset_after_success_clears_fields() {
        let mut form = ContactForm { phone: "555-0100".into(), ..filled() };
        assert!(form.validate().is_ok());
        form.reset();
        assert_eq!(form, ContactForm::default());
        assert!(form.name.is_empty() && form.phone.is_empty());
    }

    #[test]
    fn test_successful_submit_sequence() {
        let mut form = ContactForm { service: "Mobile Patrols".into(), ..filled() };
        let mut state = SubmitState::default();
        assert!(!state.disabled());

        assert!(form.validate().is_ok());
        state = SubmitState::Sending;
        assert!(state.disabled());
        assert_eq!(state.label(), SENDING_LABEL);
        // Fields stay as typed while the send is in flight
        assert_eq!(form.service, "Mobile Patrols");

        let (next, message) = finish_submission(&mut form);
        state = next;
        assert_eq!(state, SubmitState::Idle);
        assert_eq!(state.label(), SUBMIT_LABEL);
        assert_eq!(message, SUCCESS_MESSAGE);
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FormError::MissingRequired.to_string(),
            "Please fill in all required fields."
        );
        assert_eq!(
            FormError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn test_submit_button_states() {
        assert_eq!(SubmitState::default().label(), SUBMIT_LABEL);
        assert!(!SubmitState::Idle.disabled());
        assert_eq!(SubmitState::Sending.label(), "Sending...");
        assert!(SubmitState::Sending.disabled());
    }
}
