//! The client side of a payment.
//!
//! [`CheckoutFlow`] drives one payer through the hosted widget:
//!
//! ```text
//!   Idle --submit--> Processing --widget completed, server verified--> Success
//!                        |
//!                        +--widget failed, order or verification request failed--> Error
//!                        +--widget dismissed--> Idle
//! ```
//!
//! `reset` puts the flow back to `Idle`. A payment is only reported as successful once the server has checked the
//! gateway's signature on it.
use std::time::Duration;

use log::*;
use nomination_engine::checkout_objects::{CheckoutOrder, VerifiedPayment};
use razorpay_tools::PaymentConfirmation;
use thiserror::Error;

mod billing;
mod widget;

pub use billing::{BillingDetails, BillingError, BillingFieldError};
pub use widget::{
    DisplayOptions,
    HostedWidget,
    Prefill,
    WidgetOptions,
    WidgetOutcome,
    DEFAULT_COMPANY_NAME,
    DEFAULT_ORDER_DESCRIPTION,
};

pub const PAYMENT_FAILED_MESSAGE: &str = "There was an error processing your payment. Please try again.";
pub const CONFIRMATION_PATH: &str = "/afterpayment";
pub const CONFIRMATION_DELAY: Duration = Duration::from_millis(1500);

/// The server calls a checkout needs.
#[allow(async_fn_in_trait)]
pub trait CheckoutBackend {
    async fn create_order(&self, nomination_id: Option<i64>) -> anyhow::Result<CheckoutOrder>;
    async fn verify_payment(&self, confirmation: &PaymentConfirmation) -> anyhow::Result<VerifiedPayment>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CheckoutState {
    #[default]
    Idle,
    Processing,
    Success {
        payment_id: String,
    },
    Error {
        message: String,
    },
}

/// Where to send the payer after a successful payment, and how long to wait first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub path: &'static str,
    pub delay: Duration,
}

impl Default for Redirect {
    fn default() -> Self {
        Self { path: CONFIRMATION_PATH, delay: CONFIRMATION_DELAY }
    }
}

impl Redirect {
    /// Waits out the delay, then hands back the path to continue at.
    pub async fn follow(&self) -> &'static str {
        tokio::time::sleep(self.delay).await;
        self.path
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Paid { payment_id: String, redirect: Redirect },
    Dismissed,
    Failed { message: String },
}

/// Reasons a submission is refused before anything is sent to the server. The flow's state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("A payment is already being processed")]
    AlreadyProcessing,
    #[error("{0}")]
    InvalidBilling(#[from] BillingError),
}

pub struct CheckoutFlow<B, W> {
    backend: B,
    widget: W,
    display: DisplayOptions,
    nomination_id: Option<i64>,
    state: CheckoutState,
}

impl<B, W> CheckoutFlow<B, W>
where
    B: CheckoutBackend,
    W: HostedWidget,
{
    pub fn new(backend: B, widget: W, display: DisplayOptions) -> Self {
        Self { backend, widget, display, nomination_id: None, state: CheckoutState::Idle }
    }

    /// Links the payment to a nomination. The id is passed on when the order is created.
    pub fn for_nomination(mut self, nomination_id: i64) -> Self {
        self.nomination_id = Some(nomination_id);
        self
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.state, CheckoutState::Processing)
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn reset(&mut self) {
        debug!("💳️ Checkout reset from {:?}", self.state);
        self.state = CheckoutState::Idle;
    }

    /// Runs one payment attempt from start to finish.
    ///
    /// A refusal (`Err`) leaves the state as it was. Every other outcome is also reflected in [`Self::state`].
    pub async fn submit(&mut self, billing: &BillingDetails) -> Result<CheckoutOutcome, CheckoutError> {
        if self.is_processing() {
            warn!("💳️ Ignoring checkout submission while a payment is in progress");
            return Err(CheckoutError::AlreadyProcessing);
        }
        billing.validate()?;
        self.state = CheckoutState::Processing;
        let order = match self.backend.create_order(self.nomination_id).await {
            Ok(order) => order,
            Err(e) => {
                error!("💳️ Could not create a payment order. {e}");
                return Ok(self.fail());
            },
        };
        info!("💳️ Opening checkout for order {} ({} {})", order.order_id, order.amount, order.currency);
        let options = WidgetOptions::new(&order, billing, &self.display);
        match self.widget.open(options).await {
            WidgetOutcome::Completed(confirmation) => Ok(self.confirm(&order, confirmation).await),
            WidgetOutcome::Failed(reason) => {
                warn!("💳️ Payment for order {} failed. {reason}", order.order_id);
                Ok(self.fail())
            },
            WidgetOutcome::Dismissed => {
                info!("💳️ Checkout for order {} was dismissed", order.order_id);
                self.state = CheckoutState::Idle;
                Ok(CheckoutOutcome::Dismissed)
            },
        }
    }

    async fn confirm(&mut self, order: &CheckoutOrder, confirmation: PaymentConfirmation) -> CheckoutOutcome {
        if confirmation.razorpay_order_id != order.order_id {
            warn!(
                "💳️ The widget confirmed order {} but order {} was opened",
                confirmation.razorpay_order_id, order.order_id
            );
            return self.fail();
        }
        match self.backend.verify_payment(&confirmation).await {
            Ok(v) if v.verified => {
                info!("💳️ Payment {} verified", v.payment_id);
                self.state = CheckoutState::Success { payment_id: v.payment_id.clone() };
                CheckoutOutcome::Paid { payment_id: v.payment_id, redirect: Redirect::default() }
            },
            Ok(_) => {
                warn!("💳️ The server did not verify payment {}", confirmation.razorpay_payment_id);
                self.fail()
            },
            Err(e) => {
                error!("💳️ Could not verify payment {}. {e}", confirmation.razorpay_payment_id);
                self.fail()
            },
        }
    }

    fn fail(&mut self) -> CheckoutOutcome {
        self.state = CheckoutState::Error { message: PAYMENT_FAILED_MESSAGE.to_string() };
        CheckoutOutcome::Failed { message: PAYMENT_FAILED_MESSAGE.to_string() }
    }
}
