//! Storefront HTTP API.
//!
//! The API owns authentication, catalog, pricing and stock. This client
//! only calls it and decodes the `{"data": ...}` envelopes.

mod client;
mod error;
mod types;

pub use client::StorefrontClient;
pub use error::ApiError;
