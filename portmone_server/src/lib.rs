//! # Portmone callback server
//! This crate hosts the HTTP side of the Portmone integration. It is responsible for:
//! Listening for authorization result callbacks from Portmone.
//! Restricting those callbacks to Portmone's addresses, if configured to.
//! Handing the payload to the [`CallbackApi`](portmone_engine::CallbackApi) and replying with the fixed XML document
//! Portmone expects.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/portmone/result`: The callback route for authorization results (POST only).
//! * `/portmone/success` and `/portmone/fail`: Static pages Portmone redirects the customer to.

pub mod cli;
pub mod config;
pub mod errors;
pub mod helpers;
pub mod middleware;
pub mod responses;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
