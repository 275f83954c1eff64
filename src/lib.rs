//! # Tourist Hub Client
//!
//! Client for the Tourist Hub tour-management API.
//!
//! - [`application::client::TouristHubClient`] owns one session (access token,
//!   refresh token, current user) and recovers once from an expired access
//!   token by refreshing it and retrying the call.
//! - [`application::services`] contains the provider administrator and tourist
//!   workflows built on top of the client.
//!
//! ```ignore
//! use tourist_hub_client::prelude::*;
//!
//! setup_logger();
//! let client = Arc::new(TouristHubClient::new(Config::new())?);
//! client.login("tourist@example.com", "password123").await?;
//!
//! let tourist = TouristServiceImpl::new(client.clone());
//! let events = tourist.view_available_tour_events(&Value::Null).await?;
//!
//! client.logout().await;
//! ```

/// Application layer: client, configuration and workflows
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Wire models and request plumbing
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Domain records returned by the API
pub mod presentation;
/// Utility helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
