/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Tourist Hub Client Prelude
//!
//! Brings the commonly used types and traits into scope.
//!
//! ## Usage
//!
//! ```rust
//! use tourist_hub_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:3000");
//! let client = TouristHubClient::new(config).unwrap();
//! assert!(!client.is_authenticated());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Tourist Hub client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types
pub use crate::error::{ApiError, AppError, ErrorEnvelope};

// ============================================================================
// CLIENT AND SESSION
// ============================================================================

/// Authenticated client
pub use crate::application::client::TouristHubClient;

/// Session credentials
pub use crate::application::auth::SessionCredentials;

/// Request plumbing for custom calls
pub use crate::model::http::{ApiRequest, Payload};

// ============================================================================
// WORKFLOWS
// ============================================================================

/// Workflow interfaces
pub use crate::application::services::{ProviderAdminService, TouristService};

/// Workflow implementations
pub use crate::application::services::{ProviderAdminServiceImpl, TouristServiceImpl};

/// Workflow result types
pub use crate::application::services::{BulkApprovalOutcome, ReportSummary, TourReport};

// ============================================================================
// MODELS
// ============================================================================

/// Authentication models
pub use crate::model::auth::{LoginResponse, RefreshResponse, TouristRegistration};

/// Request bodies
pub use crate::model::requests::{NewActivity, NewTourEvent, ProfileUpdate, RegistrationAction};

/// Domain records
pub use crate::presentation::{
    Activity, Document, Provider, Registration, RegistrationStatus, TourEvent, TourTemplate, User,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Formatting utilities
pub use crate::utils::format::{format_date, format_file_size};

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
