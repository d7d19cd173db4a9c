use gca_common::{Paise, INR_CURRENCY_CODE};
use serde::{Deserialize, Serialize};

/// The price and currency charged at checkout. This comes from server configuration, never from the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTerms {
    pub amount: Paise,
    pub currency: String,
}

impl Default for OrderTerms {
    fn default() -> Self {
        Self { amount: Paise::from_rupees(2500), currency: INR_CURRENCY_CODE.to_string() }
    }
}

/// Everything a client needs to open the hosted checkout widget for a new order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutOrder {
    pub order_id: String,
    pub amount: Paise,
    pub currency: String,
    pub key_id: String,
    pub receipt: String,
}

/// A payment whose gateway signature has been checked on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedPayment {
    pub verified: bool,
    pub order_id: String,
    pub payment_id: String,
}
