use crate::model::auth::TouristRegistration;
use crate::presentation::registration::RegistrationStatus;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Data for creating a tour event from a template
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewTourEvent {
    /// Template the event is based on
    pub template_id: String,
    /// Provider specific name of the event
    pub custom_tour_name: String,
    /// First day (YYYY-MM-DD)
    pub start_date: String,
    /// Last day (YYYY-MM-DD)
    pub end_date: String,
    /// Package tier
    pub package_type: String,
    /// Hotel at the first destination
    pub place1_hotel: String,
    /// Hotel at the second destination
    pub place2_hotel: String,
    /// Maximum number of tourists
    pub number_of_allowed_tourists: u32,
    /// How the group will communicate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_chat_info: Option<String>,
}

/// Data for adding an activity to a tour event's schedule
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    /// Day of the activity (YYYY-MM-DD)
    pub activity_date: String,
    /// Category (e.g. "Arrival")
    pub activity_type: String,
    /// Free text description
    pub description: String,
    /// Start time (HH:MM)
    pub start_time: String,
    /// End time (HH:MM)
    pub end_time: String,
    /// Where it happens
    pub location: String,
    /// Related link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_link: Option<String>,
}

/// Decision a provider takes on a pending registration
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RegistrationAction {
    /// Accept the tourist
    Approve,
    /// Decline the tourist
    Reject,
}

impl RegistrationAction {
    /// Registration status the action results in
    #[must_use]
    pub fn status(&self) -> RegistrationStatus {
        match self {
            RegistrationAction::Approve => RegistrationStatus::Approved,
            RegistrationAction::Reject => RegistrationStatus::Rejected,
        }
    }

    /// Verb used in log lines
    #[must_use]
    pub fn verb(&self) -> &'static str {
        match self {
            RegistrationAction::Approve => "approve",
            RegistrationAction::Reject => "reject",
        }
    }

    /// Emoji used in log lines
    #[must_use]
    pub fn emoji(&self) -> &'static str {
        match self {
            RegistrationAction::Approve => "✅",
            RegistrationAction::Reject => "❌",
        }
    }
}

/// Body of `PUT /api/tour-events/{id}/registrations/{userId}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDecision<'a> {
    /// New status
    pub status: RegistrationStatus,
    /// Provider notes, may be empty
    pub notes: &'a str,
}

/// Partial profile update; unset fields are not sent
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// First name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Contact phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Passport number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    /// Date of birth (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Gender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Any other profile field
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl From<&TouristRegistration> for ProfileUpdate {
    /// The identity details a tourist completes right after signing up
    fn from(registration: &TouristRegistration) -> Self {
        Self {
            passport_number: registration.passport_number.clone(),
            date_of_birth: registration.date_of_birth.clone(),
            gender: registration.gender.clone(),
            ..Self::default()
        }
    }
}

/// Text fields sent along with an uploaded document
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUpload<'a> {
    /// Document category
    #[serde(rename = "type")]
    pub document_type: &'a str,
    /// Optional description
    pub description: &'a str,
}
