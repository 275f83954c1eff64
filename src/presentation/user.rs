use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A Tourist Hub user account
///
/// Only the fields the client reads are typed; everything else the server sends
/// is kept in `extra` and serialized back unchanged.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier of the user
    pub user_id: String,
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Login e-mail address
    #[serde(default)]
    pub email_address: String,
    /// Contact phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Role of the user (e.g. "Tourist")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    /// Account status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Provider company the user belongs to, for provider staff
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl User {
    /// First and last name joined by a space
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// The user type, or `"Unknown"` when the server omitted it
    #[must_use]
    pub fn user_type_or_unknown(&self) -> &str {
        self.user_type.as_deref().unwrap_or("Unknown")
    }
}

/// A tour provider company
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    /// Unique identifier of the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    /// Registered company name
    #[serde(default)]
    pub company_name: String,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
