use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Clone, Error)]
pub enum NominationApiError {
    #[error("{0}")]
    ValidationError(#[from] ValidationError),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, Error)]
pub enum CheckoutApiError {
    #[error("Payment gateway error: {0}")]
    GatewayError(String),
    #[error("The payment gateway is not configured. {0}")]
    GatewayNotConfigured(String),
    #[error("Payment signature verification failed")]
    InvalidSignature,
    #[error("Incomplete payment confirmation: {0} is missing")]
    IncompleteConfirmation(&'static str),
}
