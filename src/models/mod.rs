use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a listing
///
/// `Pending` (an offer is in progress on a public listing) and `PendingReview`
/// (an agent submission waiting for moderation) are kept as separate states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PropertyStatus {
    #[serde(rename = "For Sale")]
    ForSale,
    Sold,
    Pending,
    #[serde(rename = "Pending Review")]
    PendingReview,
    Approved,
    Rejected,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 6] = [
        PropertyStatus::ForSale,
        PropertyStatus::Sold,
        PropertyStatus::Pending,
        PropertyStatus::PendingReview,
        PropertyStatus::Approved,
        PropertyStatus::Rejected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PropertyStatus::ForSale => "For Sale",
            PropertyStatus::Sold => "Sold",
            PropertyStatus::Pending => "Pending",
            PropertyStatus::PendingReview => "Pending Review",
            PropertyStatus::Approved => "Approved",
            PropertyStatus::Rejected => "Rejected",
        }
    }

    /// Parse a status from its label, ignoring case and separators
    pub fn parse(value: &str) -> Option<Self> {
        let wanted: String = value
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        Self::ALL.into_iter().find(|status| {
            status
                .label()
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
                == wanted
        })
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of property
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PropertyType {
    Villa,
    Apartment,
    Penthouse,
    Mansion,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Villa,
        PropertyType::Apartment,
        PropertyType::Penthouse,
        PropertyType::Mansion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Villa => "Villa",
            PropertyType::Apartment => "Apartment",
            PropertyType::Penthouse => "Penthouse",
            PropertyType::Mansion => "Mansion",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Postal address of a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    #[serde(rename = "zip")]
    pub postal_code: String,
}

/// Core property data model
///
/// Prices are whole naira. Living area and lot size are both square feet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: String,
    pub address: Address,
    pub price: i64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(rename = "sqft")]
    pub living_area: u32,
    pub status: PropertyStatus,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub date_added: DateTime<Utc>,
    pub description: String,
    pub year_built: i32,
    #[serde(rename = "lotSize")]
    pub lot_area: u32,
    pub agent_id: String,
}

impl PropertyRecord {
    /// Cover image shown on listing cards
    pub fn cover_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }

    /// Price in billions, the way listing cards print it (`₦3.50B`)
    pub fn display_price(&self) -> String {
        format!("₦{:.2}B", self.price as f64 / 1_000_000_000.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Agent,
    Client,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Suspended,
}

/// A person known to the system: staff, agents or clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub last_login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RequestStatus {
    New,
    Contacted,
    Closed,
}

/// A buyer lead captured through the client request wizard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequest {
    pub id: String,
    pub client_name: String,
    pub request_date: DateTime<Utc>,
    pub preferred_location: String,
    pub budget: String,
    pub assigned_agent_id: Option<String>,
    pub status: RequestStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionStatus {
    Completed,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub property_id: String,
    pub buyer_name: String,
    pub sale_price: i64,
    pub transaction_date: DateTime<Utc>,
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentType {
    #[serde(rename = "Mobilization Fee")]
    MobilizationFee,
    Commission,
    #[serde(rename = "Closing Cost")]
    ClosingCost,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub transaction_id: String,
    pub amount: i64,
    pub payment_date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub status: PaymentStatus,
}
