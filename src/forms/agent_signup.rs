use super::{check_email, optional, FieldErrors};
use serde::{Deserialize, Serialize};

/// Agent partnership application form
#[derive(Debug, Clone, Default)]
pub struct AgentSignupForm {
    pub full_name: String,
    pub agency_name: String,
    pub phone: String,
    pub email: String,
    /// Corporate Affairs Commission registration number, optional
    pub cac_number: String,
    pub agreed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentApplication {
    pub full_name: String,
    pub agency_name: String,
    pub phone: String,
    pub email: String,
    pub cac_number: Option<String>,
}

impl AgentSignupForm {
    pub fn validate(&self) -> Result<AgentApplication, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("fullName", &self.full_name, "Your full name is required.");
        errors.require("agencyName", &self.agency_name, "Agency name is required.");
        errors.require("phone", &self.phone, "A valid phone number is required.");
        check_email(&mut errors, &self.email, "Email is required.", "Email is invalid.");
        if !self.agreed {
            errors.insert("agreed", "You must agree to the terms.");
        }
        errors.into_result()?;

        Ok(AgentApplication {
            full_name: self.full_name.trim().to_string(),
            agency_name: self.agency_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            cac_number: optional(&self.cac_number),
        })
    }
}
