//! Payment signature verification.
//!
//! When the hosted checkout completes, Razorpay hands the client three values: the order id, the payment id and a
//! signature. The signature is `hex(HMAC_SHA256(order_id + "|" + payment_id, key_secret))`. Since the client is
//! untrusted, a payment is only considered settled once the server has recomputed the signature with its own copy
//! of the key secret.
use gca_common::helpers::constant_time_eq;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::helpers::hex_encode;

type HmacSha256 = Hmac<Sha256>;

/// The payload passed to the hosted widget's success handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

/// Calculates the signature Razorpay attaches to a successful payment for the given order.
pub fn payment_signature(key_secret: &str, order_id: &str, payment_id: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(key_secret.as_bytes()).expect("HMAC can take a key of any size");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    hex_encode(&mac.finalize().into_bytes())
}

/// Returns true if the confirmation was signed with `key_secret`.
///
/// An empty secret never verifies, so an unconfigured server cannot be tricked into accepting a signature computed
/// with an empty key.
pub fn verify_payment_signature(key_secret: &str, confirmation: &PaymentConfirmation) -> bool {
    if key_secret.is_empty() {
        return false;
    }
    let expected =
        payment_signature(key_secret, &confirmation.razorpay_order_id, &confirmation.razorpay_payment_id);
    constant_time_eq(&expected, &confirmation.razorpay_signature.to_ascii_lowercase())
}
