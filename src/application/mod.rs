/// Session credentials and their store
pub mod auth;
/// Authenticated API client
pub mod client;
/// Application configuration module
pub mod config;
/// Module containing service interfaces and traits
pub mod interfaces;
/// Module containing the workflow services
pub mod services;
