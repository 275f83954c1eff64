use crate::presentation::{Activity, Registration, RegistrationStatus, TourEvent};
use crate::utils::format::round1;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Summary figures of a tour event report
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// All registrations, whatever their status
    pub total_registrations: usize,
    /// Registrations with status Approved
    pub approved_registrations: usize,
    /// Registrations with status Pending
    pub pending_registrations: usize,
    /// Registrations with status Rejected
    pub rejected_registrations: usize,
    /// Number of schedule activities
    pub total_activities: usize,
    /// Approved registrations over capacity, in percent with one decimal
    pub occupancy_rate: f64,
}

impl ReportSummary {
    /// Computes the summary of an event from its registrations and schedule
    ///
    /// An event without capacity has an occupancy rate of 0.
    #[must_use]
    pub fn compute(
        tour_event: &TourEvent,
        registrations: &[Registration],
        schedule: &[Activity],
    ) -> Self {
        let count = |status: RegistrationStatus| {
            registrations
                .iter()
                .filter(|r| r.has_status(&status))
                .count()
        };
        let approved = count(RegistrationStatus::Approved);

        let occupancy_rate = if tour_event.number_of_allowed_tourists > 0 {
            round1(approved as f64 / tour_event.number_of_allowed_tourists as f64 * 100.0)
        } else {
            0.0
        };

        Self {
            total_registrations: registrations.len(),
            approved_registrations: approved,
            pending_registrations: count(RegistrationStatus::Pending),
            rejected_registrations: count(RegistrationStatus::Rejected),
            total_activities: schedule.len(),
            occupancy_rate,
        }
    }
}

/// Full report of a tour event
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TourReport {
    /// The event as returned by the API
    pub tour_event: TourEvent,
    /// All its registrations
    pub registrations: Vec<Registration>,
    /// Its schedule
    pub schedule: Vec<Activity>,
    /// Computed figures
    pub summary: ReportSummary,
}

impl TourReport {
    /// Assembles a report and computes its summary
    #[must_use]
    pub fn new(
        tour_event: TourEvent,
        registrations: Vec<Registration>,
        schedule: Vec<Activity>,
    ) -> Self {
        let summary = ReportSummary::compute(&tour_event, &registrations, &schedule);
        Self {
            tour_event,
            registrations,
            schedule,
            summary,
        }
    }
}

/// Result of approving one registration in a bulk operation
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BulkApprovalOutcome {
    /// Tourist the approval was for
    pub user_id: String,
    /// Whether the API accepted it
    pub success: bool,
    /// API response on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error text on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BulkApprovalOutcome {
    /// Outcome of an accepted approval
    #[must_use]
    pub fn succeeded(user_id: &str, result: Value) -> Self {
        Self {
            user_id: user_id.to_string(),
            success: true,
            result: Some(result),
            error: None,
        }
    }

    /// Outcome of a rejected approval
    #[must_use]
    pub fn failed(user_id: &str, error: impl ToString) -> Self {
        Self {
            user_id: user_id.to_string(),
            success: false,
            result: None,
            error: Some(error.to_string()),
        }
    }
}
