use nomination_engine::helpers::is_plausible_email;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MIN_NAME_LENGTH: usize = 2;
const MIN_PHONE_LENGTH: usize = 10;
const MIN_ADDRESS_LENGTH: usize = 5;

/// The payer's details, collected before the hosted widget is opened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {reason}")]
pub struct BillingFieldError {
    pub field: &'static str,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid billing details: {}", join_reasons(.errors))]
pub struct BillingError {
    pub errors: Vec<BillingFieldError>,
}

fn join_reasons(errors: &[BillingFieldError]) -> String {
    errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(", ")
}

impl BillingError {
    pub fn has_error_for(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

fn min_length(errors: &mut Vec<BillingFieldError>, field: &'static str, value: &str, min: usize) {
    if value.chars().count() < min {
        errors.push(BillingFieldError { field, reason: format!("must be at least {min} characters") });
    }
}

impl BillingDetails {
    pub fn new(name: &str, email: &str, phone: &str, address: &str) -> Self {
        Self { name: name.into(), email: email.into(), phone: phone.into(), address: address.into() }
    }

    /// Checks every field and reports all the problems at once.
    pub fn validate(&self) -> Result<(), BillingError> {
        let mut errors = Vec::new();
        min_length(&mut errors, "name", &self.name, MIN_NAME_LENGTH);
        if !is_plausible_email(&self.email) {
            errors.push(BillingFieldError { field: "email", reason: "is not a valid email address".into() });
        }
        min_length(&mut errors, "phone", &self.phone, MIN_PHONE_LENGTH);
        min_length(&mut errors, "address", &self.address, MIN_ADDRESS_LENGTH);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(BillingError { errors })
        }
    }
}
