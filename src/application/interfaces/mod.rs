/// Provider administrator workflow interface
pub mod provider_admin;
/// Tourist workflow interface
pub mod tourist;
