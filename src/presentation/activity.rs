use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One entry of a tour event's daily schedule
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Unique identifier of the activity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<String>,
    /// Day of the activity
    #[serde(default)]
    pub activity_date: String,
    /// Same day in the Islamic calendar, when provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub islamic_date: Option<String>,
    /// Category (e.g. "Arrival", "Religious")
    #[serde(default)]
    pub activity_type: String,
    /// Free text description
    #[serde(default)]
    pub description: String,
    /// Start time (HH:MM)
    #[serde(default)]
    pub start_time: String,
    /// End time (HH:MM)
    #[serde(default)]
    pub end_time: String,
    /// Where it happens
    #[serde(default)]
    pub location: String,
    /// Related link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_link: Option<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
