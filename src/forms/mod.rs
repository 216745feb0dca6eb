//! Lead-intake forms with field-level validation.
//!
//! Each form keeps its own `FieldErrors`; editing a field drops that field's
//! error so the message disappears as soon as the user starts fixing it.

pub mod admin_login;
pub mod agent_signup;
pub mod client_request;
pub mod contact;
pub mod property_submission;

pub use admin_login::AdminLoginForm;
pub use agent_signup::{AgentApplication, AgentSignupForm};
pub use client_request::{ClientRequestStep, ClientRequestSubmission, ClientRequestWizard};
pub use contact::{ContactField, ContactForm, ContactMessage};
pub use property_submission::{PropertySubmission, SubmissionStage};

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Validation messages keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("invalid fields: {}", join_fields(.fields))]
pub struct FieldErrors {
    fields: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn clear(&mut self, field: &str) {
        self.fields.remove(field);
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    fn require(&mut self, field: &'static str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.insert(field, message);
        }
    }
}

fn join_fields(fields: &BTreeMap<&'static str, String>) -> String {
    fields.keys().copied().collect::<Vec<_>>().join(", ")
}

/// Failures of a form flow
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Invalid(#[from] FieldErrors),

    #[error("Form cannot be submitted from the {0} step")]
    WrongStep(&'static str),

    #[error("Form was already submitted")]
    AlreadySubmitted,

    #[error("At most {0} images can be attached")]
    TooManyImages(usize),
}

pub fn is_valid_email(value: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid email pattern"))
        .is_match(value)
}

/// Required email check shared by every form
fn check_email(errors: &mut FieldErrors, value: &str, missing: &str, invalid: &str) {
    if value.trim().is_empty() {
        errors.insert("email", missing);
    } else if !is_valid_email(value) {
        errors.insert("email", invalid);
    }
}

/// Parse a whole-number form input, recording `message` when it is not one
fn parse_amount(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    message: &str,
) -> Option<i64> {
    match value.trim().replace(',', "").parse::<i64>() {
        Ok(n) if n >= 0 => Some(n),
        _ => {
            errors.insert(field, message);
            None
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("chidi@okoroproperties.com"));
        assert!(!is_valid_email("chidi@okoro"));
        assert!(!is_valid_email("chidi.okoro.com"));
    }

    #[test]
    fn test_field_errors_display_lists_fields() {
        let mut errors = FieldErrors::new();
        errors.insert("phone", "Phone number is required.");
        errors.insert("email", "Email is required.");

        assert_eq!(errors.to_string(), "invalid fields: email, phone");
        errors.clear("email");
        assert_eq!(errors.len(), 1);
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_parse_amount_accepts_grouped_digits() {
        let mut errors = FieldErrors::new();
        assert_eq!(parse_amount(&mut errors, "price", "1,500,000", "bad"), Some(1_500_000));
        assert_eq!(parse_amount(&mut errors, "price", "-4", "bad"), None);
        assert_eq!(errors.get("price"), Some("bad"));
    }
}
