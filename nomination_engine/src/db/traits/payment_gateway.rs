use gca_common::Paise;
use serde::{Deserialize, Serialize};

use crate::gca_api::errors::CheckoutApiError;

/// What the engine asks of a gateway when a checkout starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub amount: Paise,
    pub currency: String,
    pub receipt: String,
    /// The nomination this payment is for, if the client told us. It is passed on to the gateway as a note.
    pub nomination_id: Option<i64>,
}

/// The gateway's view of an order once it has been created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayOrder {
    pub id: String,
    pub amount: Paise,
    pub currency: String,
}

/// A payment provider that can create orders for its hosted checkout and authenticate completed payments.
#[allow(async_fn_in_trait)]
pub trait PaymentGateway {
    /// The public key id that the hosted widget is opened with. It is safe to hand to clients.
    fn key_id(&self) -> String;

    /// Registers a new order with the gateway.
    async fn create_order(&self, request: OrderRequest) -> Result<GatewayOrder, CheckoutApiError>;

    /// Returns true if `signature` is the gateway's signature over the given order and payment ids.
    fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool;
}
