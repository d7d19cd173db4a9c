use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use nomination_engine::CheckoutApiError;
use thiserror::Error;

use crate::data_objects::JsonResponse;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("Could not read request body: {0}")]
    InvalidRequestBody(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
    #[error("Failed to create order")]
    OrderCreationFailed,
    #[error("{0}")]
    PaymentVerificationFailed(String),
    #[error("An admin key is required. Supply it in the gca_admin_key header.")]
    MissingAdminKey,
    #[error("The admin key is not valid.")]
    InvalidAdminKey,
    #[error("Access to nominations is disabled because no admin key has been configured.")]
    AdminAccessDisabled,
    #[error("{message}")]
    Nomination { status: StatusCode, message: String },
}

impl ServerError {
    pub fn nomination_failure<S: Into<String>>(status: StatusCode, message: S) -> Self {
        Self::Nomination { status, message: message.into() }
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            Self::PaymentVerificationFailed(_) => StatusCode::BAD_REQUEST,
            Self::Nomination { status, .. } => *status,
            Self::MissingAdminKey => StatusCode::UNAUTHORIZED,
            Self::InvalidAdminKey => StatusCode::FORBIDDEN,
            Self::AdminAccessDisabled => StatusCode::FORBIDDEN,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::OrderCreationFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The nominations resource and its admin guard answer with the `{success, message}` envelope. Every other
    /// error is reported as `{error}`.
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::Nomination { .. } | Self::MissingAdminKey | Self::InvalidAdminKey | Self::AdminAccessDisabled => {
                serde_json::to_string(&JsonResponse::failure(self))
                    .unwrap_or_else(|_| serde_json::json!({ "success": false }).to_string())
            },
            _ => serde_json::json!({ "error": self.to_string() }).to_string(),
        };
        HttpResponse::build(self.status_code()).insert_header(ContentType::json()).body(body)
    }
}

impl From<CheckoutApiError> for ServerError {
    fn from(e: CheckoutApiError) -> Self {
        match e {
            CheckoutApiError::GatewayError(_) | CheckoutApiError::GatewayNotConfigured(_) => Self::OrderCreationFailed,
            CheckoutApiError::InvalidSignature | CheckoutApiError::IncompleteConfirmation(_) => {
                Self::PaymentVerificationFailed(e.to_string())
            },
        }
    }
}
