use super::{check_email, optional, FieldErrors};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    pub fn key(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

/// General enquiry form of the contact page
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    /// Optional
    pub phone: String,
    pub subject: String,
    pub message: String,
    errors: FieldErrors,
}

/// A validated enquiry, ready to hand to a lead sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors of the last `submit`, minus fields edited since
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
        self.errors.clear(field.key());
    }

    pub fn validate(&self) -> Result<ContactMessage, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Full name is required.");
        check_email(&mut errors, &self.email, "Email is required.", "Email is invalid.");
        errors.require("subject", &self.subject, "Subject is required.");
        errors.require("message", &self.message, "Message is required.");
        errors.into_result()?;

        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: optional(&self.phone),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Validate and keep the resulting errors on the form for display
    pub fn submit(&mut self) -> Result<ContactMessage, FieldErrors> {
        let result = self.validate();
        self.errors = match &result {
            Ok(_) => FieldErrors::new(),
            Err(errors) => errors.clone(),
        };
        result
    }
}
