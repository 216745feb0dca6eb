use super::{parse_amount, FieldErrors, FormError};
use crate::models::{Address, PropertyRecord, PropertyStatus, PropertyType};
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

/// Upper bound on attached photos
pub const MAX_IMAGES: usize = 4;

const DEFAULT_CITY: &str = "Lagos";
const DEFAULT_STATE: &str = "Lagos";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubmissionStage {
    Editing,
    Preview,
    Submitted,
}

impl SubmissionStage {
    fn name(&self) -> &'static str {
        match self {
            SubmissionStage::Editing => "editing",
            SubmissionStage::Preview => "preview",
            SubmissionStage::Submitted => "submitted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingField {
    Street,
    City,
    State,
    Price,
    Bedrooms,
    Bathrooms,
    LivingArea,
    LotArea,
    YearBuilt,
    Description,
}

impl ListingField {
    pub fn key(&self) -> &'static str {
        match self {
            ListingField::Street => "street",
            ListingField::City => "city",
            ListingField::State => "state",
            ListingField::Price => "price",
            ListingField::Bedrooms => "bedrooms",
            ListingField::Bathrooms => "bathrooms",
            ListingField::LivingArea => "sqft",
            ListingField::LotArea => "lotSize",
            ListingField::YearBuilt => "yearBuilt",
            ListingField::Description => "description",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListingForm {
    pub street: String,
    pub city: String,
    pub state: String,
    pub price: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub living_area: String,
    pub lot_area: String,
    pub property_type: Option<PropertyType>,
    pub year_built: String,
    pub description: String,
}

impl Default for ListingForm {
    fn default() -> Self {
        Self {
            street: String::new(),
            city: DEFAULT_CITY.to_string(),
            state: DEFAULT_STATE.to_string(),
            price: String::new(),
            bedrooms: String::new(),
            bathrooms: String::new(),
            living_area: String::new(),
            lot_area: String::new(),
            property_type: None,
            year_built: String::new(),
            description: String::new(),
        }
    }
}

impl ListingForm {
    fn slot(&mut self, field: ListingField) -> &mut String {
        match field {
            ListingField::Street => &mut self.street,
            ListingField::City => &mut self.city,
            ListingField::State => &mut self.state,
            ListingField::Price => &mut self.price,
            ListingField::Bedrooms => &mut self.bedrooms,
            ListingField::Bathrooms => &mut self.bathrooms,
            ListingField::LivingArea => &mut self.living_area,
            ListingField::LotArea => &mut self.lot_area,
            ListingField::YearBuilt => &mut self.year_built,
            ListingField::Description => &mut self.description,
        }
    }
}

/// Numbers parsed out of a valid form
struct ListingFigures {
    price: i64,
    bedrooms: u32,
    bathrooms: u32,
    living_area: u32,
    lot_area: Option<u32>,
    year_built: Option<i32>,
    property_type: PropertyType,
}

/// Agent flow for listing a new property: edit, preview, submit for review
#[derive(Debug, Clone)]
pub struct PropertySubmission {
    stage: SubmissionStage,
    form: ListingForm,
    images: Vec<String>,
    errors: FieldErrors,
}

impl Default for PropertySubmission {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertySubmission {
    pub fn new() -> Self {
        Self {
            stage: SubmissionStage::Editing,
            form: ListingForm::default(),
            images: Vec::new(),
            errors: FieldErrors::new(),
        }
    }

    pub fn stage(&self) -> SubmissionStage {
        self.stage
    }

    pub fn form(&self) -> &ListingForm {
        &self.form
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Fields are locked while previewing
    pub fn is_editable(&self) -> bool {
        self.stage == SubmissionStage::Editing
    }

    pub fn set(&mut self, field: ListingField, value: impl Into<String>) -> Result<(), FormError> {
        self.ensure_editable()?;
        *self.form.slot(field) = value.into();
        self.errors.clear(field.key());
        Ok(())
    }

    pub fn set_property_type(&mut self, property_type: Option<PropertyType>) -> Result<(
    ), FormError> {
        self.ensure_editable()?;
        self.form.property_type = property_type;
        self.errors.clear("type");
        Ok(())
    }

    pub fn add_image(&mut self, url: impl Into<String>) -> Result<(), FormError> {
        self.ensure_editable()?;
        if self.images.len() >= MAX_IMAGES {
            return Err(FormError::TooManyImages(MAX_IMAGES));
        }
        self.images.push(url.into());
        self.errors.clear("images");
        Ok(())
    }

    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        if !self.is_editable() || index >= self.images.len() {
            return None;
        }
        Some(self.images.remove(index))
    }

    /// Validate and lock the form for review
    pub fn preview(&mut self) -> Result<(), FormError> {
        self.ensure_editable()?;
        self.validate()?;
        self.stage = SubmissionStage::Preview;
        Ok(())
    }

    /// Leave preview and unlock the fields
    pub fn edit(&mut self) -> bool {
        if self.stage == SubmissionStage::Preview {
            self.stage = SubmissionStage::Editing;
            true
        } else {
            false
        }
    }

    /// Build the listing as it enters the moderation queue
    pub fn submit(
        &mut self,
        agent_id: &str,
        submitted_at: DateTime<Utc>,
    ) -> Result<PropertyRecord, FormError> {
        if self.stage == SubmissionStage::Submitted {
            return Err(FormError::AlreadySubmitted);
        }
        let figures = self.validate()?;
        let form = &self.form;

        let record = PropertyRecord {
            id: format!("prop-{}", submitted_at.timestamp_millis()),
            address: Address {
                street: form.street.trim().to_string(),
                city: form.city.trim().to_string(),
                state: form.state.trim().to_string(),
                postal_code: String::new(),
            },
            price: figures.price,
            bedrooms: figures.bedrooms,
            bathrooms: figures.bathrooms,
            living_area: figures.living_area,
            status: PropertyStatus::PendingReview,
            image_urls: self.images.clone(),
            property_type: figures.property_type,
            date_added: submitted_at,
            description: form.description.trim().to_string(),
            year_built: figures.year_built.unwrap_or_else(|| submitted_at.year()),
            lot_area: figures.lot_area.unwrap_or(figures.living_area),
            agent_id: agent_id.to_string(),
        };
        self.stage = SubmissionStage::Submitted;
        Ok(record)
    }

    fn ensure_editable(&self) -> Result<(), FormError> {
        match self.stage {
            SubmissionStage::Editing => Ok(()),
            SubmissionStage::Submitted => Err(FormError::AlreadySubmitted),
            other => Err(FormError::WrongStep(other.name())),
        }
    }

    fn validate(&mut self) -> Result<ListingFigures, FieldErrors> {
        let form = &self.form;
        let mut errors = FieldErrors::new();

        errors.require("street", &form.street, "Street address is required.");
        let price = required_number(&mut errors, "price", &form.price, "Price is required.");
        let bedrooms = required_number(
            &mut errors,
            "bedrooms",
            &form.bedrooms,
            "Number of bedrooms is required.",
        );
        let bathrooms = required_number(
            &mut errors,
            "bathrooms",
            &form.bathrooms,
            "Number of bathrooms is required.",
        );
        let living_area = required_number(
            &mut errors,
            "sqft",
            &form.living_area,
            "Square footage is required.",
        );
        let lot_area = optional_number(&mut errors, "lotSize", &form.lot_area);
        let year_built = optional_number(&mut errors, "yearBuilt", &form.year_built);
        if form.property_type.is_none() {
            errors.insert("type", "Property type is required.");
        }
        errors.require("description", &form.description, "Description is required.");
        if self.images.is_empty() {
            errors.insert("images", "At least one image is required.");
        }

        self.errors = errors.clone();
        if !errors.is_empty() {
            return Err(errors);
        }

        let figures = (|| {
            Some(ListingFigures {
                price: price?,
                bedrooms: u32::try_from(bedrooms?).ok()?,
                bathrooms: u32::try_from(bathrooms?).ok()?,
                living_area: u32::try_from(living_area?).ok()?,
                lot_area: lot_area.and_then(|n| u32::try_from(n).ok()),
                year_built: year_built.and_then(|n| i32::try_from(n).ok()),
                property_type: form.property_type?,
            })
        })();
        figures.ok_or_else(|| {
            let mut errors = FieldErrors::new();
            errors.insert("form", "A number is out of range.");
            errors
        })
    }
}

fn required_number(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    missing: &str,
) -> Option<i64> {
    if value.trim().is_empty() {
        errors.insert(field, missing);
        return None;
    }
    parse_amount(errors, field, value, "Must be a whole number.")
}

fn optional_number(errors: &mut FieldErrors, field: &'static str, value: &str) -> Option<i64> {
    if value.trim().is_empty() {
        return None;
    }
    parse_amount(errors, field, value, "Must be a whole number.")
}
