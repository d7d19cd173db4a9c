//! Client-side tools for the GCA awards server.
//!
//! * [`client::AwardsServerClient`] talks to the server's JSON API.
//! * [`checkout::CheckoutFlow`] drives a payer through the hosted payment widget and has the server verify the result.
//! * [`formatting`] renders server responses for the terminal.
pub mod checkout;
pub mod client;
pub mod console_widget;
pub mod formatting;
