//! GCA Nomination Engine
//!
//! This library holds the core of the awards site backend. It knows nothing about HTTP.
//!
//! The library is divided into these sections:
//! 1. Data types ([`mod@db_types`]) and submission validation ([`mod@validation`]). Nominations arrive as loosely typed
//!    forms and only become [`NewNomination`]s once every field has been checked.
//! 2. Backend contracts ([`traits`]). [`NominationManagement`] covers storage and [`PaymentGateway`] covers the payment
//!    provider. SQLite is the bundled storage backend ([`SqliteDatabase`]).
//! 3. The public API ([`NominationApi`] and [`CheckoutApi`]). Servers should go through these rather than calling the
//!    backends directly.
//!
//! [`NewNomination`]: db_types::NewNomination
mod db;

pub mod db_types;
mod gca_api;
pub mod helpers;
pub mod validation;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

#[cfg(feature = "sqlite")]
pub use db::sqlite::{SqliteDatabase, SqliteDatabaseError};
pub use db::traits;
pub use db::traits::{GatewayOrder, NominationManagement, OrderRequest, PaymentGateway};
pub use gca_api::{
    checkout_api::CheckoutApi,
    checkout_objects,
    errors::{CheckoutApiError, NominationApiError},
    nomination_api::NominationApi,
};
pub use validation::{NominationForm, ValidationError};
