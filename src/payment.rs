//! Mobilization fee checkout.

use crate::error::PaymentError;
use crate::models::{Payment, PaymentStatus, PaymentType};
use crate::sources::LeadSink;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const MOBILIZATION_FEE: i64 = 250_000;
pub const PROCESSING_FEE: i64 = 5_000;
/// VAT in basis points (7.5%)
pub const VAT_BASIS_POINTS: i64 = 750;

/// Line items of the fee, all in whole naira
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeeBreakdown {
    pub mobilization_fee: i64,
    pub processing_fee: i64,
    pub vat: i64,
    pub total: i64,
}

impl FeeBreakdown {
    pub fn standard() -> Self {
        Self::for_amounts(MOBILIZATION_FEE, PROCESSING_FEE)
    }

    pub fn for_amounts(mobilization_fee: i64, processing_fee: i64) -> Self {
        let subtotal = mobilization_fee + processing_fee;
        // round half up to the naira
        let vat = (subtotal * VAT_BASIS_POINTS + 5_000) / 10_000;
        Self {
            mobilization_fee,
            processing_fee,
            vat,
            total: subtotal + vat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Transfer,
}

impl PaymentMethod {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "card" => Some(PaymentMethod::Card),
            "transfer" | "bank-transfer" | "bank_transfer" => Some(PaymentMethod::Transfer),
            _ => None,
        }
    }
}

/// Checkout state: pick a method, then pay once
#[derive(Debug, Clone)]
pub struct MobilizationCheckout {
    fees: FeeBreakdown,
    method: Option<PaymentMethod>,
    receipt: Option<Payment>,
}

impl Default for MobilizationCheckout {
    fn default() -> Self {
        Self::new(FeeBreakdown::standard())
    }
}

impl MobilizationCheckout {
    pub fn new(fees: FeeBreakdown) -> Self {
        Self {
            fees,
            method: None,
            receipt: None,
        }
    }

    pub fn fees(&self) -> &FeeBreakdown {
        &self.fees
    }

    pub fn method(&self) -> Option<PaymentMethod> {
        self.method
    }

    pub fn receipt(&self) -> Option<&Payment> {
        self.receipt.as_ref()
    }

    pub fn select_method(&mut self, method: PaymentMethod) {
        self.method = Some(method);
    }

    /// Whether the pay button is enabled
    pub fn can_pay(&self) -> bool {
        self.method.is_some() && self.receipt.is_none()
    }

    /// Charge the total and record it against `transaction_id`
    pub async fn pay(
        &mut self,
        sink: &dyn LeadSink,
        transaction_id: &str,
    ) -> Result<&Payment, PaymentError> {
        if self.receipt.is_some() {
            return Err(PaymentError::AlreadyPaid);
        }
        let method = self.method.ok_or(PaymentError::MethodNotSelected)?;
        info!("Paying mobilization fee of ₦{} by {:?}", self.fees.total, method);

        let payment = Payment {
            id: String::new(),
            transaction_id: transaction_id.to_string(),
            amount: self.fees.total,
            payment_date: chrono::Utc::now(),
            payment_type: PaymentType::MobilizationFee,
            status: PaymentStatus::Paid,
        };
        let receipt = sink.record_payment(&payment).await.map_err(|e| {
            warn!("Payment was not recorded: {:#}", e);
            PaymentError::Rejected(e.to_string())
        })?;

        let payment = Payment {
            id: receipt.reference,
            payment_date: receipt.received_at,
            ..payment
        };
        Ok(&*self.receipt.insert(payment))
    }
}
