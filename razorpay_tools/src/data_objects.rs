use std::collections::BTreeMap;

use gca_common::Paise;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::RazorpayApiError;

/// Receipts longer than this are rejected by Razorpay.
const MAX_RECEIPT_LENGTH: usize = 40;
/// Razorpay does not accept orders below ₹1.00.
pub const MIN_ORDER_AMOUNT: i64 = 100;

/// The request body for `POST /orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRazorpayOrder {
    pub amount: Paise,
    pub currency: String,
    pub receipt: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub notes: BTreeMap<String, String>,
}

impl NewRazorpayOrder {
    pub fn new(amount: Paise, currency: &str, receipt: &str) -> Self {
        Self { amount, currency: currency.to_string(), receipt: receipt.to_string(), notes: BTreeMap::new() }
    }

    pub fn with_note<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.notes.insert(key.into(), value.into());
        self
    }

    /// Catches requests that Razorpay would reject anyway, before a round trip is spent on them.
    pub fn validate(&self) -> Result<(), RazorpayApiError> {
        if self.amount.value() < MIN_ORDER_AMOUNT {
            return Err(RazorpayApiError::InvalidOrder(format!("amount {} is below the minimum", self.amount)));
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(RazorpayApiError::InvalidOrder(format!("'{}' is not an ISO currency code", self.currency)));
        }
        if self.receipt.len() > MAX_RECEIPT_LENGTH {
            return Err(RazorpayApiError::InvalidOrder(format!(
                "receipt is longer than {MAX_RECEIPT_LENGTH} characters"
            )));
        }
        Ok(())
    }
}

/// An order as returned by the Orders API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RazorpayOrder {
    pub id: String,
    #[serde(default)]
    pub entity: String,
    pub amount: Paise,
    #[serde(default)]
    pub amount_paid: Paise,
    #[serde(default)]
    pub amount_due: Paise,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub attempts: i64,
    /// Razorpay returns `[]` rather than `{}` when an order has no notes, so this is left untyped.
    #[serde(default)]
    pub notes: Value,
    #[serde(default)]
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RazorpayErrorResponse {
    pub error: RazorpayErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RazorpayErrorBody {
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reason: Option<String>,
}
