use crate::application::client::TouristHubClient;
use crate::application::interfaces::provider_admin::ProviderAdminService;
use crate::application::services::types::{BulkApprovalOutcome, TourReport};
use crate::constants::{PROVIDERS_PATH, TOUR_EVENTS_PATH, TOUR_TEMPLATES_PATH, USERS_PATH};
use crate::error::AppError;
use crate::model::requests::{NewActivity, NewTourEvent, RegistrationAction, RegistrationDecision};
use crate::presentation::{
    Activity, Document, Provider, Registration, TourEvent, TourTemplate, User,
};
use crate::utils::format::format_date;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Implementation of the provider administrator workflows
pub struct ProviderAdminServiceImpl {
    client: Arc<TouristHubClient>,
}

impl ProviderAdminServiceImpl {
    /// Creates a new instance of the service on top of `client`
    pub fn new(client: Arc<TouristHubClient>) -> Self {
        Self { client }
    }

    /// Gets the client, e.g. to log in or out
    pub fn client(&self) -> &Arc<TouristHubClient> {
        &self.client
    }

    fn provider_id(&self) -> Result<String, AppError> {
        self.client
            .current_user()
            .ok_or(AppError::NotAuthenticated)?
            .provider_id
            .ok_or_else(|| {
                AppError::InvalidInput("current user does not belong to a provider".to_string())
            })
    }
}

fn log_registration(registration: &Registration) {
    match &registration.user {
        Some(user) => {
            info!("  • {}", user.full_name());
            info!("    📧 {}", user.email_address);
            info!("    📱 {}", user.phone_number.as_deref().unwrap_or("N/A"));
        }
        None => info!(
            "  • {}",
            registration.user_id.as_deref().unwrap_or("unknown user")
        ),
    }
    info!("    📊 Status: {}", registration.status_label());
    if let Some(date) = &registration.registration_date {
        info!("    📅 Registered: {}", format_date(date));
    }
    info!("");
}

fn log_document(document: &Document) {
    info!("  📄 {} ({})", document.file_name, document.document_type);
    info!("    📝 {}", document.description_or_default());
    info!("    📅 Uploaded: {}", document.upload_day());
    info!("    💾 Size: {}", document.human_size());
    info!("");
}

#[async_trait]
impl ProviderAdminService for ProviderAdminServiceImpl {
    async fn create_tour_event(&self, tour_event: &NewTourEvent) -> Result<TourEvent, AppError> {
        info!("🎪 Creating new tour event...");

        async {
            let template: TourTemplate = self
                .client
                .get(&format!("{TOUR_TEMPLATES_PATH}/{}", tour_event.template_id))
                .await?;
            info!("📋 Using template: {}", template.template_name);

            let created: TourEvent = self.client.post(TOUR_EVENTS_PATH, tour_event).await?;

            info!("✅ Tour event created successfully!");
            info!("🎪 Event: {}", created.custom_tour_name);
            info!("📅 Dates: {} to {}", created.start_date, created.end_date);
            info!("👥 Capacity: {} tourists", created.number_of_allowed_tourists);
            info!("🏨 Hotels: {}, {}", created.place1_hotel, created.place2_hotel);
            Ok::<_, AppError>(created)
        }
        .await
        .inspect_err(|e| error!("❌ Failed to create tour event: {}", e))
    }

    async fn view_my_tour_events(&self) -> Result<Vec<TourEvent>, AppError> {
        info!("🎪 Viewing my tour events...");

        let events: Vec<TourEvent> = self
            .client
            .get(TOUR_EVENTS_PATH)
            .await
            .inspect_err(|e| error!("❌ Failed to view tour events: {}", e))?;

        info!("📋 Found {} tour events:", events.len());
        for event in &events {
            info!("  • {} ({})", event.custom_tour_name, event.status);
            info!("    📅 {} to {}", event.start_date, event.end_date);
            info!(
                "    👥 {}/{} registered",
                event.registered_count(),
                event.number_of_allowed_tourists
            );
            info!("    🆔 ID: {}", event.tour_event_id);
            info!("");
        }
        Ok(events)
    }

    async fn update_tour_event(
        &self,
        tour_event_id: &str,
        updates: &Value,
    ) -> Result<TourEvent, AppError> {
        info!("✏️ Updating tour event: {}", tour_event_id);

        let updated: TourEvent = self
            .client
            .put(&format!("{TOUR_EVENTS_PATH}/{tour_event_id}"), updates)
            .await
            .inspect_err(|e| error!("❌ Failed to update tour event: {}", e))?;

        info!("✅ Tour event updated successfully");
        info!("🎪 Event: {}", updated.custom_tour_name);
        info!("📊 Status: {}", updated.status);
        Ok(updated)
    }

    async fn view_tour_registrations(
        &self,
        tour_event_id: &str,
    ) -> Result<Vec<Registration>, AppError> {
        info!("👥 Viewing registrations for tour: {}", tour_event_id);

        let registrations: Vec<Registration> = self
            .client
            .get(&format!("{TOUR_EVENTS_PATH}/{tour_event_id}/registrations"))
            .await
            .inspect_err(|e| error!("❌ Failed to view registrations: {}", e))?;

        info!("📋 Found {} registrations:", registrations.len());
        registrations.iter().for_each(log_registration);
        Ok(registrations)
    }

    async fn handle_registration(
        &self,
        tour_event_id: &str,
        user_id: &str,
        action: RegistrationAction,
        notes: &str,
    ) -> Result<Value, AppError> {
        info!(
            "{} Handling registration for user {}: {}",
            action.emoji(),
            user_id,
            action.verb()
        );

        let decision = RegistrationDecision {
            status: action.status(),
            notes,
        };
        let result: Value = self
            .client
            .put(
                &format!("{TOUR_EVENTS_PATH}/{tour_event_id}/registrations/{user_id}"),
                &decision,
            )
            .await
            .inspect_err(|e| error!("❌ Failed to {} registration: {}", action.verb(), e))?;

        info!("✅ Registration {} successful", action.verb());
        if !notes.is_empty() {
            info!("📝 Notes: {}", notes);
        }
        Ok(result)
    }

    async fn create_tour_schedule(
        &self,
        tour_event_id: &str,
        activities: &[NewActivity],
    ) -> Result<Vec<Activity>, AppError> {
        info!("📅 Creating schedule for tour: {}", tour_event_id);

        let path = format!("{TOUR_EVENTS_PATH}/{tour_event_id}/activities");
        let mut created = Vec::with_capacity(activities.len());
        for activity in activities {
            info!("  📝 Adding activity: {}", activity.description);
            let added: Activity = self
                .client
                .post(&path, activity)
                .await
                .inspect_err(|e| error!("❌ Failed to create schedule: {}", e))?;
            info!(
                "    ✅ Added: {} on {}",
                activity.activity_type, activity.activity_date
            );
            created.push(added);
        }

        info!("✅ Schedule created with {} activities", created.len());
        Ok(created)
    }

    async fn update_activity(
        &self,
        tour_event_id: &str,
        activity_id: &str,
        updates: &Value,
    ) -> Result<Activity, AppError> {
        info!("✏️ Updating activity: {}", activity_id);

        let updated: Activity = self
            .client
            .put(
                &format!("{TOUR_EVENTS_PATH}/{tour_event_id}/activities/{activity_id}"),
                updates,
            )
            .await
            .inspect_err(|e| error!("❌ Failed to update activity: {}", e))?;

        info!("✅ Activity updated successfully");
        info!("📝 {}: {}", updated.activity_type, updated.description);
        info!(
            "📅 {} {}-{}",
            updated.activity_date, updated.start_time, updated.end_time
        );
        Ok(updated)
    }

    async fn view_company_users(&self) -> Result<Vec<User>, AppError> {
        info!("👥 Viewing company users...");

        async {
            let provider_id = self.provider_id()?;
            let provider: Provider = self
                .client
                .get(&format!("{PROVIDERS_PATH}/{provider_id}"))
                .await?;
            let users: Vec<User> = self
                .client
                .get(&format!("{PROVIDERS_PATH}/{provider_id}/users"))
                .await?;

            info!("🏢 Company: {}", provider.company_name);
            info!("👥 Found {} users:", users.len());
            for user in &users {
                info!("  • {} ({})", user.full_name(), user.user_type_or_unknown());
                info!("    📧 {}", user.email_address);
                info!("    📱 {}", user.phone_number.as_deref().unwrap_or("N/A"));
                info!("    📊 Status: {}", user.status.as_deref().unwrap_or("N/A"));
                info!("");
            }
            Ok::<_, AppError>(users)
        }
        .await
        .inspect_err(|e| error!("❌ Failed to view company users: {}", e))
    }

    async fn view_tourist_documents(&self, user_id: &str) -> Result<Vec<Document>, AppError> {
        info!("📂 Viewing documents for user: {}", user_id);

        let documents: Vec<Document> = self
            .client
            .get(&format!("{USERS_PATH}/{user_id}/documents"))
            .await
            .inspect_err(|e| error!("❌ Failed to view tourist documents: {}", e))?;

        info!("📋 Found {} documents:", documents.len());
        documents.iter().for_each(log_document);
        Ok(documents)
    }

    async fn generate_tour_report(&self, tour_event_id: &str) -> Result<TourReport, AppError> {
        info!("📊 Generating report for tour: {}", tour_event_id);

        let report = async {
            let base = format!("{TOUR_EVENTS_PATH}/{tour_event_id}");
            let tour_event: TourEvent = self.client.get(&base).await?;
            let registrations: Vec<Registration> =
                self.client.get(&format!("{base}/registrations")).await?;
            let schedule: Vec<Activity> = self.client.get(&format!("{base}/schedule")).await?;
            Ok::<_, AppError>(TourReport::new(tour_event, registrations, schedule))
        }
        .await
        .inspect_err(|e| error!("❌ Failed to generate report: {}", e))?;

        let summary = &report.summary;
        info!("📊 Tour Event Report:");
        info!("🎪 Event: {}", report.tour_event.custom_tour_name);
        info!(
            "📅 Dates: {} to {}",
            report.tour_event.start_date, report.tour_event.end_date
        );
        info!("👥 Registrations: {} total", summary.total_registrations);
        info!("  ✅ Approved: {}", summary.approved_registrations);
        info!("  ⏳ Pending: {}", summary.pending_registrations);
        info!("  ❌ Rejected: {}", summary.rejected_registrations);
        info!("📈 Occupancy Rate: {}%", summary.occupancy_rate);
        info!("📅 Activities: {} scheduled", summary.total_activities);
        Ok(report)
    }

    async fn bulk_approve_registrations(
        &self,
        tour_event_id: &str,
        user_ids: &[String],
        notes: &str,
    ) -> Result<Vec<BulkApprovalOutcome>, AppError> {
        info!("✅ Bulk approving {} registrations...", user_ids.len());

        let mut outcomes = Vec::with_capacity(user_ids.len());
        for user_id in user_ids {
            let outcome = match self
                .handle_registration(tour_event_id, user_id, RegistrationAction::Approve, notes)
                .await
            {
                Ok(result) => BulkApprovalOutcome::succeeded(user_id, result),
                Err(e) => BulkApprovalOutcome::failed(user_id, e),
            };
            debug!("Approval of {}: success={}", user_id, outcome.success);
            outcomes.push(outcome);
        }

        let successful = outcomes.iter().filter(|o| o.success).count();
        info!(
            "✅ Bulk approval completed: {} successful, {} failed",
            successful,
            outcomes.len() - successful
        );
        Ok(outcomes)
    }
}
