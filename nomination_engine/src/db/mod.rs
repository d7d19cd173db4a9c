//! #  Database management and control.
//!
//! This module provides the interfaces that define the contracts of the nomination engine's *backends*.
//!
//! * [`NominationManagement`] defines how nominations are stored and listed.
//! * [`PaymentGateway`] defines what the checkout flow needs from a payment provider. It lives alongside the storage
//!   traits because, like the database, it is an external system that the engine is handed at start-up.
//!
//! [`NominationManagement`]: traits::NominationManagement
//! [`PaymentGateway`]: traits::PaymentGateway
pub mod traits;

#[cfg(feature = "sqlite")]
pub mod sqlite;
