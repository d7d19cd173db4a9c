//! Validation of nomination submissions.
//!
//! Submissions arrive as a [`NominationForm`], in which every field is a plain string. This lets us report every
//! problem with a submission at once, in terms the submitter understands, rather than failing on the first field
//! that doesn't deserialize. A form that passes validation becomes a [`NewNomination`].
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    db_types::{NewNomination, Sector, YesNo},
    helpers::{is_plausible_email, is_plausible_phone, is_web_url},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NominationForm {
    pub full_name: String,
    pub organization_name: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub state: String,
    pub city: String,
    pub gstin: Option<String>,
    pub sector: String,
    pub website: Option<String>,
    pub doctorate: String,
    pub forbes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {reason}")]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Nomination validation failed: {}", join_reasons(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn join_reasons(errors: &[FieldError]) -> String {
    errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(", ")
}

impl ValidationError {
    pub fn has_error_for(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

#[derive(Default)]
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn fail<S: Into<String>>(&mut self, field: &'static str, reason: S) {
        self.errors.push(FieldError { field, reason: reason.into() });
    }

    fn required(&mut self, field: &'static str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.fail(field, "is required");
            false
        } else {
            true
        }
    }

    fn choice<T>(&mut self, field: &'static str, value: &str) -> Option<T>
    where
        T: std::str::FromStr,
        T::Err: Display,
    {
        if !self.required(field, value) {
            return None;
        }
        match value.parse::<T>() {
            Ok(v) => Some(v),
            Err(e) => {
                self.fail(field, format!("is invalid: {e}"));
                None
            },
        }
    }
}

/// Blank optional fields are stored as absent.
fn optional(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl NominationForm {
    /// Checks every field and converts the form into a [`NewNomination`].
    ///
    /// Values are stored exactly as submitted. Whitespace is only trimmed when deciding whether a field is empty.
    pub fn validate(self) -> Result<NewNomination, ValidationError> {
        let mut check = Checker::default();
        check.required("fullName", &self.full_name);
        check.required("organizationName", &self.organization_name);
        if check.required("phoneNumber", &self.phone_number) && !is_plausible_phone(&self.phone_number) {
            check.fail("phoneNumber", "is not a valid phone number");
        }
        if check.required("email", &self.email) && !is_plausible_email(&self.email) {
            check.fail("email", "is not a valid email address");
        }
        check.required("address", &self.address);
        check.required("state", &self.state);
        check.required("city", &self.city);
        let sector = check.choice::<Sector>("sector", &self.sector);
        let doctorate = check.choice::<YesNo>("doctorate", &self.doctorate);
        let forbes = check.choice::<YesNo>("forbes", &self.forbes);
        let website = optional(self.website);
        if let Some(url) = &website {
            if !is_web_url(url) {
                check.fail("website", "must be a valid http(s) URL");
            }
        }
        match (sector, doctorate, forbes) {
            (Some(sector), Some(doctorate), Some(forbes)) if check.errors.is_empty() => Ok(NewNomination {
                full_name: self.full_name,
                organization_name: self.organization_name,
                phone_number: self.phone_number,
                email: self.email,
                address: self.address,
                state: self.state,
                city: self.city,
                gstin: optional(self.gstin),
                sector,
                website,
                doctorate,
                forbes,
            }),
            _ => Err(ValidationError { errors: check.errors }),
        }
    }
}

impl From<NewNomination> for NominationForm {
    fn from(n: NewNomination) -> Self {
        Self {
            full_name: n.full_name,
            organization_name: n.organization_name,
            phone_number: n.phone_number,
            email: n.email,
            address: n.address,
            state: n.state,
            city: n.city,
            gstin: n.gstin,
            sector: n.sector.to_string(),
            website: n.website,
            doctorate: n.doctorate.to_string(),
            forbes: n.forbes.to_string(),
        }
    }
}
