//! The contract between the checkout flow and the gateway's hosted payment widget.
use std::collections::BTreeMap;

use gca_common::{helpers::non_empty_env, Paise};
use log::debug;
use nomination_engine::checkout_objects::CheckoutOrder;
use razorpay_tools::PaymentConfirmation;
use serde::{Deserialize, Serialize};

use super::BillingDetails;

pub const DEFAULT_COMPANY_NAME: &str = "Your Company Name";
pub const DEFAULT_ORDER_DESCRIPTION: &str = "Premium Product Purchase";
/// The widget note that carries the payer's billing address.
pub const ADDRESS_NOTE: &str = "address";

/// Display strings shown by the widget. These never affect what is charged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub company_name: String,
    pub description: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { company_name: DEFAULT_COMPANY_NAME.to_string(), description: DEFAULT_ORDER_DESCRIPTION.to_string() }
    }
}

impl DisplayOptions {
    pub fn from_env_or_default() -> Self {
        let defaults = Self::default();
        let company_name = non_empty_env("GCA_COMPANY_NAME").unwrap_or_else(|| {
            debug!("🪛️ GCA_COMPANY_NAME is not set. Using '{DEFAULT_COMPANY_NAME}'");
            defaults.company_name
        });
        let description = non_empty_env("GCA_ORDER_DESCRIPTION").unwrap_or(defaults.description);
        Self { company_name, description }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

/// Everything the hosted widget is opened with. Field names follow the gateway's checkout options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetOptions {
    pub key: String,
    pub amount: Paise,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub order_id: String,
    pub prefill: Prefill,
    pub notes: BTreeMap<String, String>,
}

impl WidgetOptions {
    pub fn new(order: &CheckoutOrder, billing: &BillingDetails, display: &DisplayOptions) -> Self {
        Self {
            key: order.key_id.clone(),
            amount: order.amount,
            currency: order.currency.clone(),
            name: display.company_name.clone(),
            description: display.description.clone(),
            order_id: order.order_id.clone(),
            prefill: Prefill {
                name: billing.name.clone(),
                email: billing.email.clone(),
                contact: billing.phone.clone(),
            },
            notes: BTreeMap::from([(ADDRESS_NOTE.to_string(), billing.address.clone())]),
        }
    }
}

/// How a widget session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetOutcome {
    /// The payer completed the payment. The confirmation still has to be verified by the server.
    Completed(PaymentConfirmation),
    /// The gateway reported a failed payment.
    Failed(String),
    /// The payer closed the widget without paying.
    Dismissed,
}

/// A hosted payment widget. Opening it hands control to the payer until they pay, fail or walk away.
#[allow(async_fn_in_trait)]
pub trait HostedWidget {
    async fn open(&mut self, options: WidgetOptions) -> WidgetOutcome;
}
