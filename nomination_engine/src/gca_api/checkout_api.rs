//! The checkout API creates payment orders and confirms completed payments.
//!
//! Orders are ephemeral. The engine does not store them. It hands the gateway's order id back to the client, which
//! opens the hosted widget with it. When the widget reports success, the client sends the signed confirmation back
//! and [`CheckoutApi::confirm_payment`] checks it before the payment is treated as settled.
use std::fmt::Debug;

use log::*;

use crate::{
    gca_api::{
        checkout_objects::{CheckoutOrder, OrderTerms, VerifiedPayment},
        errors::CheckoutApiError,
    },
    helpers::new_receipt,
    traits::{OrderRequest, PaymentGateway},
};

pub struct CheckoutApi<G> {
    gateway: G,
    terms: OrderTerms,
}

impl<G: Debug> Debug for CheckoutApi<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CheckoutApi ({:?}, {:?})", self.gateway, self.terms)
    }
}

impl<G> CheckoutApi<G>
where G: PaymentGateway
{
    pub fn new(gateway: G, terms: OrderTerms) -> Self {
        Self { gateway, terms }
    }

    /// Creates a new order on the gateway for the configured amount, under a fresh receipt.
    ///
    /// If a nomination id is given it is attached to the order, so that the payment can be matched to the nomination
    /// later. It is not checked against the store.
    pub async fn create_order(&self, nomination_id: Option<i64>) -> Result<CheckoutOrder, CheckoutApiError> {
        let receipt = new_receipt();
        let request = OrderRequest {
            amount: self.terms.amount,
            currency: self.terms.currency.clone(),
            receipt: receipt.clone(),
            nomination_id,
        };
        debug!("💳️ Requesting order {receipt} for {} {}", request.amount, request.currency);
        let order = self.gateway.create_order(request).await?;
        info!("💳️ Order {} created with receipt {receipt}", order.id);
        Ok(CheckoutOrder {
            order_id: order.id,
            amount: order.amount,
            currency: order.currency,
            key_id: self.gateway.key_id(),
            receipt,
        })
    }

    /// Checks the gateway signature on a completed payment.
    pub fn confirm_payment(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> Result<VerifiedPayment, CheckoutApiError> {
        if order_id.trim().is_empty() {
            return Err(CheckoutApiError::IncompleteConfirmation("order id"));
        }
        if payment_id.trim().is_empty() {
            return Err(CheckoutApiError::IncompleteConfirmation("payment id"));
        }
        if signature.trim().is_empty() {
            return Err(CheckoutApiError::IncompleteConfirmation("signature"));
        }
        if !self.gateway.verify_signature(order_id, payment_id, signature) {
            warn!("💳️ Invalid signature for payment {payment_id} on order {order_id}");
            return Err(CheckoutApiError::InvalidSignature);
        }
        info!("💳️ Payment {payment_id} on order {order_id} verified");
        Ok(VerifiedPayment { verified: true, order_id: order_id.to_string(), payment_id: payment_id.to_string() })
    }
}
