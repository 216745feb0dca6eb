use super::{check_email, optional, parse_amount, FieldErrors, FormError};
use crate::models::{ClientRequest, PropertyType, RequestStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Steps of the client request wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClientRequestStep {
    Contact,
    Preferences,
    Submitted,
}

impl ClientRequestStep {
    /// Steps that collect input
    pub const INPUT_STEPS: usize = 2;

    pub fn number(&self) -> usize {
        match self {
            ClientRequestStep::Contact => 1,
            ClientRequestStep::Preferences | ClientRequestStep::Submitted => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ClientRequestStep::Contact => "contact",
            ClientRequestStep::Preferences => "preferences",
            ClientRequestStep::Submitted => "submitted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientRequestField {
    FullName,
    Occupation,
    Address,
    Phone,
    Email,
    PreferredLocation,
    LandSize,
    BuildingType,
    BudgetMin,
    BudgetMax,
}

impl ClientRequestField {
    pub fn key(&self) -> &'static str {
        match self {
            ClientRequestField::FullName => "fullName",
            ClientRequestField::Occupation => "occupation",
            ClientRequestField::Address => "address",
            ClientRequestField::Phone => "phone",
            ClientRequestField::Email => "email",
            ClientRequestField::PreferredLocation => "preferredLocation",
            ClientRequestField::LandSize => "landSize",
            ClientRequestField::BuildingType => "buildingType",
            ClientRequestField::BudgetMin => "budgetMin",
            ClientRequestField::BudgetMax => "budgetMax",
        }
    }
}

/// Raw wizard input, exactly as typed
#[derive(Debug, Clone, Default)]
pub struct ClientRequestForm {
    pub full_name: String,
    pub occupation: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub property_type: Option<PropertyType>,
    pub preferred_location: String,
    pub land_size: String,
    pub building_type: String,
    pub budget_min: String,
    pub budget_max: String,
}

impl ClientRequestForm {
    fn slot(&mut self, field: ClientRequestField) -> &mut String {
        match field {
            ClientRequestField::FullName => &mut self.full_name,
            ClientRequestField::Occupation => &mut self.occupation,
            ClientRequestField::Address => &mut self.address,
            ClientRequestField::Phone => &mut self.phone,
            ClientRequestField::Email => &mut self.email,
            ClientRequestField::PreferredLocation => &mut self.preferred_location,
            ClientRequestField::LandSize => &mut self.land_size,
            ClientRequestField::BuildingType => &mut self.building_type,
            ClientRequestField::BudgetMin => &mut self.budget_min,
            ClientRequestField::BudgetMax => &mut self.budget_max,
        }
    }

    fn validate_contact(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("fullName", &self.full_name, "Full name is required.");
        errors.require("phone", &self.phone, "Phone number is required.");
        check_email(&mut errors, &self.email, "Email is required.", "Email is invalid.");
        errors
    }

    fn validate_preferences(&self) -> (FieldErrors, Option<(i64, i64)>) {
        let mut errors = FieldErrors::new();
        if self.property_type.is_none() {
            errors.insert("propertyType", "Please select a property type.");
        }
        errors.require(
            "preferredLocation",
            &self.preferred_location,
            "Preferred location is required.",
        );

        let min = if self.budget_min.trim().is_empty() {
            errors.insert("budgetMin", "Minimum budget is required.");
            None
        } else {
            parse_amount(
                &mut errors,
                "budgetMin",
                &self.budget_min,
                "Minimum budget must be a whole number.",
            )
        };
        let max = if self.budget_max.trim().is_empty() {
            errors.insert("budgetMax", "Maximum budget is required.");
            None
        } else {
            parse_amount(
                &mut errors,
                "budgetMax",
                &self.budget_max,
                "Maximum budget must be a whole number.",
            )
        };

        let budget = match (min, max) {
            (Some(min), Some(max)) if min > max => {
                errors.insert("budgetMax", "Maximum budget cannot be below the minimum.");
                None
            }
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        };
        (errors, budget)
    }
}

/// A validated client request, ready to hand to a lead sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequestSubmission {
    pub full_name: String,
    pub occupation: Option<String>,
    pub address: Option<String>,
    pub phone: String,
    pub email: String,
    pub property_type: PropertyType,
    pub preferred_location: String,
    pub land_size: Option<String>,
    pub building_type: Option<String>,
    pub budget_min: i64,
    pub budget_max: i64,
}

impl ClientRequestSubmission {
    /// Budget range the way the admin request table shows it (`₦3B - ₦4B`)
    pub fn budget_label(&self) -> String {
        format!(
            "{} - {}",
            compact_naira(self.budget_min),
            compact_naira(self.budget_max)
        )
    }

    /// New, unassigned request record for the admin queue
    pub fn into_request(self, id: String, received_at: DateTime<Utc>) -> ClientRequest {
        ClientRequest {
            id,
            budget: self.budget_label(),
            client_name: self.full_name,
            request_date: received_at,
            preferred_location: self.preferred_location,
            assigned_agent_id: None,
            status: RequestStatus::New,
        }
    }
}

/// `₦1.5B`, `₦750M`, `₦250000`
pub fn compact_naira(amount: i64) -> String {
    fn trim(value: f64) -> String {
        let text = format!("{:.2}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
    if amount >= 1_000_000_000 {
        format!("₦{}B", trim(amount as f64 / 1_000_000_000.0))
    } else if amount >= 1_000_000 {
        format!("₦{}M", trim(amount as f64 / 1_000_000.0))
    } else {
        format!("₦{}", amount)
    }
}

/// Two-step client request form: contact details, then property preferences
#[derive(Debug, Clone)]
pub struct ClientRequestWizard {
    step: ClientRequestStep,
    form: ClientRequestForm,
    errors: FieldErrors,
}

impl Default for ClientRequestWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientRequestWizard {
    pub fn new() -> Self {
        Self {
            step: ClientRequestStep::Contact,
            form: ClientRequestForm::default(),
            errors: FieldErrors::new(),
        }
    }

    pub fn step(&self) -> ClientRequestStep {
        self.step
    }

    pub fn form(&self) -> &ClientRequestForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Progress bar fill, in percent
    pub fn progress(&self) -> u8 {
        (self.step.number() * 100 / ClientRequestStep::INPUT_STEPS) as u8
    }

    pub fn set(&mut self, field: ClientRequestField, value: impl Into<String>) {
        *self.form.slot(field) = value.into();
        self.errors.clear(field.key());
    }

    pub fn set_property_type(&mut self, property_type: Option<PropertyType>) {
        self.form.property_type = property_type;
        self.errors.clear("propertyType");
    }

    /// Validate the current step and move forward. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        match self.step {
            ClientRequestStep::Contact => {
                self.errors = self.form.validate_contact();
                if self.errors.is_empty() {
                    self.step = ClientRequestStep::Preferences;
                    true
                } else {
                    false
                }
            }
            // last input step; moving on is `submit`
            ClientRequestStep::Preferences | ClientRequestStep::Submitted => false,
        }
    }

    pub fn previous(&mut self) -> bool {
        if self.step == ClientRequestStep::Preferences {
            self.step = ClientRequestStep::Contact;
            true
        } else {
            false
        }
    }

    pub fn submit(&mut self) -> Result<ClientRequestSubmission, FormError> {
        match self.step {
            ClientRequestStep::Contact => return Err(FormError::WrongStep(self.step.name())),
            ClientRequestStep::Submitted => return Err(FormError::AlreadySubmitted),
            ClientRequestStep::Preferences => {}
        }

        let (errors, budget) = self.form.validate_preferences();
        self.errors = errors;
        let (budget_min, budget_max) = match budget {
            Some(range) if self.errors.is_empty() => range,
            _ => return Err(FormError::Invalid(self.errors.clone())),
        };
        let property_type = self
            .form
            .property_type
            .ok_or_else(|| FormError::Invalid(self.errors.clone()))?;

        let form = &self.form;
        let submission = ClientRequestSubmission {
            full_name: form.full_name.trim().to_string(),
            occupation: optional(&form.occupation),
            address: optional(&form.address),
            phone: form.phone.trim().to_string(),
            email: form.email.trim().to_string(),
            property_type,
            preferred_location: form.preferred_location.trim().to_string(),
            land_size: optional(&form.land_size),
            building_type: optional(&form.building_type),
            budget_min,
            budget_max,
        };
        self.step = ClientRequestStep::Submitted;
        Ok(submission)
    }
}
