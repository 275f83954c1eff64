use crate::constants::ACTIVE_TOUR_STATUS;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Reusable description of a tour offered by providers
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TourTemplate {
    /// Unique identifier of the template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Display name
    pub template_name: String,
    /// Kind of tour (e.g. "Hajj", "Umrah")
    #[serde(rename = "type", default)]
    pub template_type: String,
    /// First day of the tour
    #[serde(default)]
    pub start_date: String,
    /// Last day of the tour
    #[serde(default)]
    pub end_date: String,
    /// Sites visited during the tour
    #[serde(default)]
    pub sites_to_visit: Vec<Value>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// A scheduled instance of a tour that tourists register for
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TourEvent {
    /// Unique identifier of the event
    pub tour_event_id: String,
    /// Template this event was created from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Provider specific name of the event
    pub custom_tour_name: String,
    /// First day of the event
    #[serde(default)]
    pub start_date: String,
    /// Last day of the event
    #[serde(default)]
    pub end_date: String,
    /// Package tier (e.g. "Premium")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_type: Option<String>,
    /// Hotel at the first destination
    #[serde(default)]
    pub place1_hotel: String,
    /// Hotel at the second destination
    #[serde(default)]
    pub place2_hotel: String,
    /// Maximum number of tourists
    #[serde(default)]
    pub number_of_allowed_tourists: i64,
    /// Spots still open
    #[serde(default)]
    pub remaining_tourists: i64,
    /// Lifecycle status, "Active" when open for registration
    #[serde(default)]
    pub status: String,
    /// User ids of registered tourists
    #[serde(default)]
    pub registered_tourists: Vec<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl TourEvent {
    /// Number of spots already taken
    #[must_use]
    pub fn registered_count(&self) -> i64 {
        self.number_of_allowed_tourists - self.remaining_tourists
    }

    /// True when no spot is left
    #[must_use]
    pub fn is_fully_booked(&self) -> bool {
        self.remaining_tourists <= 0
    }

    /// True when the event accepts registrations
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_TOUR_STATUS
    }

    /// True when `user_id` is among the registered tourists
    #[must_use]
    pub fn has_tourist(&self, user_id: &str) -> bool {
        self.registered_tourists.iter().any(|id| id == user_id)
    }
}
