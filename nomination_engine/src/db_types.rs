//! Data types that are persisted by the nomination engine.
use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ConversionError(String);

//--------------------------------------        Sector         ---------------------------------------------------------
/// The industry sectors a nominee can be entered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Type, Serialize, Deserialize)]
pub enum Sector {
    Technology,
    Healthcare,
    Fintech,
    Edtech,
    #[sqlx(rename = "Real Estate")]
    #[serde(rename = "Real Estate")]
    RealEstate,
    Automobile,
    Agriculture,
    Tourism,
    Retail,
    Manufacturing,
}

impl Sector {
    pub const ALL: [Sector; 10] = [
        Sector::Technology,
        Sector::Healthcare,
        Sector::Fintech,
        Sector::Edtech,
        Sector::RealEstate,
        Sector::Automobile,
        Sector::Agriculture,
        Sector::Tourism,
        Sector::Retail,
        Sector::Manufacturing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sector::Technology => "Technology",
            Sector::Healthcare => "Healthcare",
            Sector::Fintech => "Fintech",
            Sector::Edtech => "Edtech",
            Sector::RealEstate => "Real Estate",
            Sector::Automobile => "Automobile",
            Sector::Agriculture => "Agriculture",
            Sector::Tourism => "Tourism",
            Sector::Retail => "Retail",
            Sector::Manufacturing => "Manufacturing",
        }
    }
}

impl Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sector {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sector::ALL
            .iter()
            .find(|sector| sector.as_str() == s)
            .copied()
            .ok_or_else(|| ConversionError(format!("'{s}' is not a valid sector")))
    }
}

//--------------------------------------         YesNo         ---------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl Display for YesNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YesNo::Yes => write!(f, "Yes"),
            YesNo::No => write!(f, "No"),
        }
    }
}

impl FromStr for YesNo {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yes" => Ok(Self::Yes),
            "No" => Ok(Self::No),
            s => Err(ConversionError(format!("'{s}' must be either 'Yes' or 'No'"))),
        }
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

//--------------------------------------     NewNomination     ---------------------------------------------------------
/// A nomination that has passed validation but has not been stored yet.
///
/// Build these with [`crate::NominationForm::validate`] rather than by hand, so that the field rules are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNomination {
    pub full_name: String,
    pub organization_name: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub state: String,
    pub city: String,
    pub gstin: Option<String>,
    pub sector: Sector,
    pub website: Option<String>,
    pub doctorate: YesNo,
    pub forbes: YesNo,
}

//--------------------------------------       Nomination      ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nomination {
    pub id: i64,
    pub full_name: String,
    pub organization_name: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub state: String,
    pub city: String,
    pub gstin: Option<String>,
    pub sector: Sector,
    pub website: Option<String>,
    pub doctorate: YesNo,
    pub forbes: YesNo,
    pub created_at: DateTime<Utc>,
}

impl Nomination {
    /// True if every user-supplied field matches `new`. `id` and `created_at` are assigned by the store and ignored.
    pub fn matches(&self, new: &NewNomination) -> bool {
        self.full_name == new.full_name &&
            self.organization_name == new.organization_name &&
            self.phone_number == new.phone_number &&
            self.email == new.email &&
            self.address == new.address &&
            self.state == new.state &&
            self.city == new.city &&
            self.gstin == new.gstin &&
            self.sector == new.sector &&
            self.website == new.website &&
            self.doctorate == new.doctorate &&
            self.forbes == new.forbes
    }
}
