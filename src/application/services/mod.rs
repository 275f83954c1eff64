/// Module containing the provider administrator workflows
pub mod provider_admin_service;
/// Module containing the tourist workflows
pub mod tourist_service;
/// Module containing report and bulk operation types
pub mod types;

pub use crate::application::interfaces::provider_admin::*;
pub use crate::application::interfaces::tourist::*;
pub use provider_admin_service::ProviderAdminServiceImpl;
pub use tourist_service::TouristServiceImpl;
pub use types::*;
