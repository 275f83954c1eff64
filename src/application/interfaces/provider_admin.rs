use crate::application::services::types::{BulkApprovalOutcome, TourReport};
use crate::error::AppError;
use crate::model::requests::{NewActivity, NewTourEvent, RegistrationAction};
use crate::presentation::{Activity, Document, Registration, TourEvent, User};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the workflows of a provider administrator
#[async_trait]
pub trait ProviderAdminService: Send + Sync {
    /// Creates a tour event after checking that its template exists
    async fn create_tour_event(&self, tour_event: &NewTourEvent) -> Result<TourEvent, AppError>;

    /// Lists the provider's tour events
    async fn view_my_tour_events(&self) -> Result<Vec<TourEvent>, AppError>;

    /// Updates fields of a tour event
    ///
    /// # Arguments
    /// * `tour_event_id` - Event to update
    /// * `updates` - Object with the fields to change
    async fn update_tour_event(
        &self,
        tour_event_id: &str,
        updates: &Value,
    ) -> Result<TourEvent, AppError>;

    /// Lists the registrations of a tour event
    async fn view_tour_registrations(
        &self,
        tour_event_id: &str,
    ) -> Result<Vec<Registration>, AppError>;

    /// Approves or rejects a tourist's registration
    async fn handle_registration(
        &self,
        tour_event_id: &str,
        user_id: &str,
        action: RegistrationAction,
        notes: &str,
    ) -> Result<Value, AppError>;

    /// Adds activities to a tour event's schedule, in order
    ///
    /// Stops at the first activity the API rejects.
    async fn create_tour_schedule(
        &self,
        tour_event_id: &str,
        activities: &[NewActivity],
    ) -> Result<Vec<Activity>, AppError>;

    /// Updates an existing schedule activity
    async fn update_activity(
        &self,
        tour_event_id: &str,
        activity_id: &str,
        updates: &Value,
    ) -> Result<Activity, AppError>;

    /// Lists the users of the logged-in admin's provider company
    async fn view_company_users(&self) -> Result<Vec<User>, AppError>;

    /// Lists the documents of a registered tourist
    async fn view_tourist_documents(&self, user_id: &str) -> Result<Vec<Document>, AppError>;

    /// Builds a report with registration counts and occupancy for a tour event
    async fn generate_tour_report(&self, tour_event_id: &str) -> Result<TourReport, AppError>;

    /// Approves several registrations, collecting one outcome per user
    async fn bulk_approve_registrations(
        &self,
        tour_event_id: &str,
        user_ids: &[String],
        notes: &str,
    ) -> Result<Vec<BulkApprovalOutcome>, AppError>;
}
