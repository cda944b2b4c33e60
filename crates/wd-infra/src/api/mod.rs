//! HTTP adapters for the monitoring backend.
//!
//! One shared [`ApiClient`] (cookie store included) feeds the per-area
//! gateways.

pub mod auth;
pub mod client;
pub mod recovery;
pub mod setup;

pub use auth::HttpAuthGateway;
pub use client::ApiClient;
pub use recovery::HttpRecoveryGateway;
pub use setup::HttpSetupGateway;
