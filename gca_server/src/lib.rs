//! # GCA Awards server
//! This crate hosts the HTTP server for the GCA awards site. It is responsible for:
//! * Accepting nomination submissions, validating them and storing them.
//! * Listing nominations for administrators.
//! * Creating Razorpay orders for the nomination fee, and verifying the signatures on completed payments.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `POST /api/nominations`: Submit a nomination.
//! * `GET /api/nominations`: List every nomination, newest first. Requires the admin key.
//! * `POST /api/create-order`: Create a payment order.
//! * `POST /api/verify-payment`: Verify the signature on a completed payment.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;

pub mod helpers;
pub mod integrations;
pub mod middleware;
pub mod routes;
pub mod server;
