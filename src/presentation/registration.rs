use crate::presentation::user::User;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Review state of a tourist's registration
///
/// Statuses this client does not know are kept verbatim in `Other` and
/// written back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum RegistrationStatus {
    /// Waiting for the provider's decision
    Pending,
    /// Accepted by the provider
    Approved,
    /// Declined by the provider
    Rejected,
    /// Any other status sent by the server
    Other(String),
}

impl RegistrationStatus {
    /// Wire representation of the status
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            RegistrationStatus::Pending => "Pending",
            RegistrationStatus::Approved => "Approved",
            RegistrationStatus::Rejected => "Rejected",
            RegistrationStatus::Other(status) => status,
        }
    }
}

impl From<String> for RegistrationStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "Pending" => RegistrationStatus::Pending,
            "Approved" => RegistrationStatus::Approved,
            "Rejected" => RegistrationStatus::Rejected,
            _ => RegistrationStatus::Other(status),
        }
    }
}

impl From<RegistrationStatus> for String {
    fn from(status: RegistrationStatus) -> Self {
        match status {
            RegistrationStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tourist's registration for a tour event
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Unique identifier of the registration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_id: Option<String>,
    /// Event registered for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour_event_id: Option<String>,
    /// Registered tourist id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Registered tourist, when the server embeds it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Review state, absent when the server did not send one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RegistrationStatus>,
    /// When the registration was made (ISO-8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,
    /// Provider notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Registration {
    /// Checks if the registration is in `status`
    #[must_use]
    pub fn has_status(&self, status: &RegistrationStatus) -> bool {
        self.status.as_ref() == Some(status)
    }

    /// Status as sent by the server, or "N/A"
    #[must_use]
    pub fn status_label(&self) -> &str {
        self.status.as_ref().map_or("N/A", RegistrationStatus::as_str)
    }
}
