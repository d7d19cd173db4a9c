//! # Razorpay tools
//!
//! A small, typed client for the parts of the Razorpay REST API that the awards site uses:
//! * Creating orders (`POST /orders`), which the hosted checkout widget needs before it can be opened.
//!
//! It also provides [`verify_payment_signature`], which checks the `razorpay_signature` that the hosted widget
//! returns to the client once a payment completes. Never mark a payment as settled without calling it.
mod api;
mod config;
mod data_objects;
mod error;
mod helpers;
mod signature;

pub use api::RazorpayApi;
pub use config::{RazorpayConfig, DEFAULT_RAZORPAY_API_URL};
pub use data_objects::{NewRazorpayOrder, MIN_ORDER_AMOUNT, RazorpayErrorBody, RazorpayErrorResponse, RazorpayOrder};
pub use error::RazorpayApiError;
pub use helpers::hex_encode;
pub use signature::{payment_signature, verify_payment_signature, PaymentConfirmation};
