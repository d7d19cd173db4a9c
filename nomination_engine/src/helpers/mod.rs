//! Field checks and small utilities shared by the nomination and checkout flows.
mod receipt;
mod validators;

pub use receipt::{new_receipt, RECEIPT_PREFIX};
pub use validators::{is_plausible_email, is_plausible_phone, is_web_url};
