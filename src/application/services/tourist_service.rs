use crate::application::client::TouristHubClient;
use crate::application::interfaces::tourist::TouristService;
use crate::constants::{
    BLANK_FORMS_PATH, DOCUMENTS_PATH, REGISTER_PATH, TOUR_EVENTS_PATH, TOUR_TEMPLATES_PATH,
    USERS_PATH,
};
use crate::error::AppError;
use crate::model::auth::{RegisterRequest, TouristRegistration};
use crate::model::requests::{DocumentUpload, ProfileUpdate};
use crate::presentation::{
    Activity, Document, Registration, RegistrationStatus, TourEvent, TourTemplate, User,
};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

/// Implementation of the tourist workflows
pub struct TouristServiceImpl {
    client: Arc<TouristHubClient>,
}

impl TouristServiceImpl {
    /// Creates a new instance of the service on top of `client`
    pub fn new(client: Arc<TouristHubClient>) -> Self {
        Self { client }
    }

    /// Gets the client, e.g. to log in or out
    pub fn client(&self) -> &Arc<TouristHubClient> {
        &self.client
    }

    fn current_user_id(&self) -> Result<String, AppError> {
        self.client
            .current_user()
            .map(|user| user.user_id)
            .ok_or(AppError::NotAuthenticated)
    }

    async fn put_profile(&self, updates: &ProfileUpdate) -> Result<User, AppError> {
        let user_id = self.current_user_id()?;
        self.client
            .put(&format!("{USERS_PATH}/{user_id}"), updates)
            .await
    }
}

#[async_trait]
impl TouristService for TouristServiceImpl {
    async fn register_and_setup_profile(
        &self,
        registration: &TouristRegistration,
    ) -> Result<User, AppError> {
        info!("🚀 Starting tourist registration workflow...");

        async {
            info!("📝 Registering new account...");
            let _created: Value = self
                .client
                .post(REGISTER_PATH, &RegisterRequest::tourist(registration))
                .await?;
            info!("✅ Registration successful");

            info!("🔐 Logging in...");
            self.client
                .login(&registration.email_address, &registration.password)
                .await?;

            info!("👤 Updating profile...");
            let updated = self.put_profile(&ProfileUpdate::from(registration)).await?;
            info!("✅ Profile updated successfully");
            Ok::<_, AppError>(updated)
        }
        .await
        .inspect_err(|e| error!("❌ Registration workflow failed: {}", e))
    }

    async fn browse_tour_templates(&self, filters: &Value) -> Result<Vec<TourTemplate>, AppError> {
        info!("🔍 Browsing tour templates...");

        let templates: Vec<TourTemplate> = self
            .client
            .get_with_query(TOUR_TEMPLATES_PATH, filters)
            .await
            .inspect_err(|e| error!("❌ Failed to browse templates: {}", e))?;

        info!("📋 Found {} tour templates:", templates.len());
        for template in &templates {
            info!("  • {} ({})", template.template_name, template.template_type);
            info!("    📅 {} to {}", template.start_date, template.end_date);
            info!("    📍 {} sites to visit", template.sites_to_visit.len());
            info!("");
        }
        Ok(templates)
    }

    async fn view_available_tour_events(
        &self,
        filters: &Value,
    ) -> Result<Vec<TourEvent>, AppError> {
        info!("🎯 Viewing available tour events...");

        let events: Vec<TourEvent> = self
            .client
            .get_with_query(TOUR_EVENTS_PATH, filters)
            .await
            .inspect_err(|e| error!("❌ Failed to view tour events: {}", e))?;

        info!("🎪 Found {} available tour events:", events.len());
        for event in &events {
            info!("  • {}", event.custom_tour_name);
            info!("    📅 {} to {}", event.start_date, event.end_date);
            info!(
                "    👥 {}/{} spots available",
                event.remaining_tourists, event.number_of_allowed_tourists
            );
            info!("    🏨 Hotels: {}, {}", event.place1_hotel, event.place2_hotel);
            info!("    📊 Status: {}", event.status);
            info!("");
        }
        Ok(events)
    }

    async fn register_for_tour(&self, tour_event_id: &str) -> Result<Registration, AppError> {
        info!("📝 Registering for tour event: {}", tour_event_id);

        let registration = async {
            let path = format!("{TOUR_EVENTS_PATH}/{tour_event_id}");
            let tour_event: TourEvent = self.client.get(&path).await?;
            info!("🎪 Tour: {}", tour_event.custom_tour_name);

            if tour_event.is_fully_booked() {
                return Err(AppError::InvalidInput("Tour is fully booked".to_string()));
            }
            if !tour_event.is_active() {
                return Err(AppError::InvalidInput(format!(
                    "Tour is not available for registration (Status: {})",
                    tour_event.status
                )));
            }

            let registration: Registration =
                self.client.post_empty(&format!("{path}/register")).await?;
            Ok::<_, AppError>(registration)
        }
        .await
        .inspect_err(|e| error!("❌ Tour registration failed: {}", e))?;

        info!("✅ Registration successful!");
        info!("📋 Registration Status: {}", registration.status_label());
        if registration.has_status(&RegistrationStatus::Pending) {
            info!("⏳ Your registration is pending approval from the provider");
        }
        Ok(registration)
    }

    async fn view_tour_schedule(&self, tour_event_id: &str) -> Result<Vec<Activity>, AppError> {
        info!("📅 Viewing schedule for tour: {}", tour_event_id);

        let schedule: Vec<Activity> = self
            .client
            .get(&format!("{TOUR_EVENTS_PATH}/{tour_event_id}/schedule"))
            .await
            .inspect_err(|e| error!("❌ Failed to view schedule: {}", e))?;

        info!("📋 Tour Schedule:");
        for activity in &schedule {
            info!(
                "  📅 {} ({})",
                activity.activity_date,
                activity.islamic_date.as_deref().unwrap_or("N/A")
            );
            info!("    🕐 {} - {}", activity.start_time, activity.end_time);
            info!("    🎯 {}: {}", activity.activity_type, activity.description);
            info!("    📍 Location: {}", activity.location);
            if let Some(link) = activity.web_link.as_deref().filter(|l| !l.is_empty()) {
                info!("    🔗 Link: {}", link);
            }
            info!("");
        }
        Ok(schedule)
    }

    async fn upload_document(
        &self,
        file_path: &Path,
        document_type: &str,
        description: &str,
    ) -> Result<Document, AppError> {
        info!("📄 Uploading {} document...", document_type);

        let fields = DocumentUpload {
            document_type,
            description,
        };
        let document: Document = self
            .client
            .upload_file(DOCUMENTS_PATH, file_path, &fields)
            .await
            .inspect_err(|e| error!("❌ Document upload failed: {}", e))?;

        info!("✅ Document uploaded successfully");
        info!("📄 Document ID: {}", document.document_id);
        info!("📁 File: {}", document.file_name);
        Ok(document)
    }

    async fn view_my_documents(&self) -> Result<Vec<Document>, AppError> {
        info!("📂 Viewing my documents...");

        let documents: Vec<Document> = self
            .client
            .get(DOCUMENTS_PATH)
            .await
            .inspect_err(|e| error!("❌ Failed to view documents: {}", e))?;

        info!("📋 Found {} documents:", documents.len());
        for document in &documents {
            info!("  📄 {} ({})", document.file_name, document.document_type);
            info!("    📝 {}", document.description_or_default());
            info!("    📅 Uploaded: {}", document.upload_day());
            info!("    💾 Size: {}", document.human_size());
            info!("");
        }
        Ok(documents)
    }

    async fn download_blank_forms(&self, save_path: &Path) -> Result<PathBuf, AppError> {
        info!("📋 Downloading blank tour forms...");

        let saved = self
            .client
            .download_file(BLANK_FORMS_PATH, save_path)
            .await
            .inspect_err(|e| error!("❌ Failed to download forms: {}", e))?;

        info!("✅ Blank forms downloaded to: {}", saved.display());
        Ok(saved)
    }

    async fn view_my_registrations(&self) -> Result<Vec<TourEvent>, AppError> {
        info!("📋 Viewing my tour registrations...");

        let registered = async {
            let user_id = self.current_user_id()?;
            let events: Vec<TourEvent> = self.client.get(TOUR_EVENTS_PATH).await?;
            Ok::<_, AppError>(
                events
                    .into_iter()
                    .filter(|event| event.has_tourist(&user_id))
                    .collect::<Vec<_>>(),
            )
        }
        .await
        .inspect_err(|e| error!("❌ Failed to view registrations: {}", e))?;

        info!("🎪 Found {} registrations:", registered.len());
        for event in &registered {
            info!("  • {}", event.custom_tour_name);
            info!("    📅 {} to {}", event.start_date, event.end_date);
            info!("    📊 Status: {}", event.status);
            info!("");
        }
        Ok(registered)
    }

    async fn update_profile(&self, updates: &ProfileUpdate) -> Result<User, AppError> {
        info!("👤 Updating profile...");

        let updated = self
            .put_profile(updates)
            .await
            .inspect_err(|e| error!("❌ Profile update failed: {}", e))?;

        info!("✅ Profile updated successfully");
        info!("👤 Name: {}", updated.full_name());
        info!("📧 Email: {}", updated.email_address);
        info!("📱 Phone: {}", updated.phone_number.as_deref().unwrap_or("N/A"));
        Ok(updated)
    }
}
