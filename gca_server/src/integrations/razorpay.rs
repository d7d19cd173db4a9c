//! Connects the checkout API to Razorpay.
use log::*;
use nomination_engine::{
    traits::{GatewayOrder, OrderRequest, PaymentGateway},
    CheckoutApiError,
};
use razorpay_tools::{
    verify_payment_signature,
    NewRazorpayOrder,
    PaymentConfirmation,
    RazorpayApi,
    RazorpayApiError,
    RazorpayConfig,
};

/// The note key under which the nomination id is attached to an order.
pub const NOMINATION_ID_NOTE: &str = "nomination_id";

#[derive(Clone, Debug)]
pub struct RazorpayGateway {
    api: RazorpayApi,
}

impl RazorpayGateway {
    pub fn new(config: RazorpayConfig) -> Result<Self, RazorpayApiError> {
        if !config.has_credentials() {
            warn!("💳️ Razorpay credentials are missing. Orders cannot be created and payments cannot be verified.");
        }
        let api = RazorpayApi::new(config)?;
        Ok(Self { api })
    }
}

pub fn new_razorpay_order(request: &OrderRequest) -> NewRazorpayOrder {
    let order = NewRazorpayOrder::new(request.amount, &request.currency, &request.receipt);
    match request.nomination_id {
        Some(id) => order.with_note(NOMINATION_ID_NOTE, id.to_string()),
        None => order,
    }
}

fn to_checkout_error(e: RazorpayApiError) -> CheckoutApiError {
    match e {
        RazorpayApiError::MissingCredentials | RazorpayApiError::Initialization(_) => {
            CheckoutApiError::GatewayNotConfigured(e.to_string())
        },
        _ => CheckoutApiError::GatewayError(e.to_string()),
    }
}

impl PaymentGateway for RazorpayGateway {
    fn key_id(&self) -> String {
        self.api.key_id().to_string()
    }

    async fn create_order(&self, request: OrderRequest) -> Result<GatewayOrder, CheckoutApiError> {
        let order = new_razorpay_order(&request);
        let order = self.api.create_order(order).await.map_err(|e| {
            error!("💳️ Razorpay could not create order for receipt {}. {e}", request.receipt);
            to_checkout_error(e)
        })?;
        debug!("💳️ Razorpay order {} is {}", order.id, order.status);
        Ok(GatewayOrder { id: order.id, amount: order.amount, currency: order.currency })
    }

    fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        let confirmation = PaymentConfirmation {
            razorpay_order_id: order_id.to_string(),
            razorpay_payment_id: payment_id.to_string(),
            razorpay_signature: signature.to_string(),
        };
        verify_payment_signature(self.api.config().key_secret.reveal(), &confirmation)
    }
}
