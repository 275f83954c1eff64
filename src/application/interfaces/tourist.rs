use crate::error::AppError;
use crate::model::auth::TouristRegistration;
use crate::model::requests::ProfileUpdate;
use crate::presentation::{Activity, Document, Registration, TourEvent, TourTemplate, User};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Interface for the workflows of a tourist
#[async_trait]
pub trait TouristService: Send + Sync {
    /// Signs up, logs in and completes the profile with the optional identity fields
    async fn register_and_setup_profile(
        &self,
        registration: &TouristRegistration,
    ) -> Result<User, AppError>;

    /// Lists tour templates, optionally filtered
    ///
    /// # Arguments
    /// * `filters` - Object whose members become query parameters (`Value::Null` for none)
    async fn browse_tour_templates(&self, filters: &Value) -> Result<Vec<TourTemplate>, AppError>;

    /// Lists tour events, optionally filtered
    async fn view_available_tour_events(&self, filters: &Value)
    -> Result<Vec<TourEvent>, AppError>;

    /// Registers the current user for a tour event
    ///
    /// Fails without contacting the registration endpoint when the event is
    /// fully booked or not active.
    async fn register_for_tour(&self, tour_event_id: &str) -> Result<Registration, AppError>;

    /// Lists the schedule of a tour event
    async fn view_tour_schedule(&self, tour_event_id: &str) -> Result<Vec<Activity>, AppError>;

    /// Uploads a document (passport, ticket, ...)
    async fn upload_document(
        &self,
        file_path: &Path,
        document_type: &str,
        description: &str,
    ) -> Result<Document, AppError>;

    /// Lists the current user's documents
    async fn view_my_documents(&self) -> Result<Vec<Document>, AppError>;

    /// Downloads the blank tour forms to `save_path`
    async fn download_blank_forms(&self, save_path: &Path) -> Result<PathBuf, AppError>;

    /// Lists the tour events the current user is registered for
    async fn view_my_registrations(&self) -> Result<Vec<TourEvent>, AppError>;

    /// Updates the current user's profile
    async fn update_profile(&self, updates: &ProfileUpdate) -> Result<User, AppError>;
}
