//! Portal HTTP module providing the wire types and typed client for the
//! student portal REST API.
//!
//! The client compiles for both native targets and `wasm32`, so the same code
//! backs the browser application and the integration tests.

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiClientBuilder, error::ClientError};
