//! Provider administrator workflow
//!
//! Lists the provider's tour events, shows the registrations and a report for
//! the first one, then lists the company users. Creating events and schedules
//! is shown but only runs with `CREATE_SAMPLES=true`.
//!
//! ```bash
//! TOURIST_HUB_EMAIL=provider@example.com cargo run --bin provider_admin_workflow
//! ```

use std::env;
use tourist_hub_client::prelude::*;
use tracing::{error, info};

fn sample_tour_event() -> NewTourEvent {
    NewTourEvent {
        template_id: "template-uuid-here".to_string(),
        custom_tour_name: "Premium Hajj Package 2024".to_string(),
        start_date: "2024-06-15".to_string(),
        end_date: "2024-06-25".to_string(),
        package_type: "Premium".to_string(),
        place1_hotel: "Makkah Hilton".to_string(),
        place2_hotel: "Madinah Marriott".to_string(),
        number_of_allowed_tourists: 50,
        group_chat_info: Some("WhatsApp group will be created".to_string()),
    }
}

fn sample_activities() -> Vec<NewActivity> {
    vec![
        NewActivity {
            activity_date: "2024-06-15".to_string(),
            activity_type: "Arrival".to_string(),
            description: "Airport pickup and hotel check-in".to_string(),
            start_time: "14:00".to_string(),
            end_time: "18:00".to_string(),
            location: "Jeddah Airport / Makkah Hotel".to_string(),
            web_link: None,
        },
        NewActivity {
            activity_date: "2024-06-16".to_string(),
            activity_type: "Religious".to_string(),
            description: "First Umrah performance".to_string(),
            start_time: "05:00".to_string(),
            end_time: "12:00".to_string(),
            location: "Masjid al-Haram".to_string(),
            web_link: None,
        },
    ]
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    let credentials = config.credentials.clone();
    let client = Arc::new(TouristHubClient::new(config)?);
    let workflow = ProviderAdminServiceImpl::new(client);

    info!("=== Provider Admin Workflow Example ===\n");
    if let Err(e) = run(&workflow, &credentials).await {
        error!("Provider admin workflow example failed: {}", e);
    }

    Ok(())
}

async fn run(workflow: &ProviderAdminServiceImpl, credentials: &Credentials) -> Result<(), AppError> {
    let create_samples = env::var("CREATE_SAMPLES").is_ok_and(|v| v == "true");

    workflow
        .client()
        .login(&credentials.email_address, &credentials.password)
        .await?;

    let events = workflow.view_my_tour_events().await?;

    if create_samples {
        workflow.create_tour_event(&sample_tour_event()).await?;
    }

    if let Some(event) = events.first() {
        workflow.view_tour_registrations(&event.tour_event_id).await?;

        if create_samples {
            workflow
                .create_tour_schedule(&event.tour_event_id, &sample_activities())
                .await?;
        }

        workflow.generate_tour_report(&event.tour_event_id).await?;
    }

    workflow.view_company_users().await?;

    workflow.client().logout().await;
    Ok(())
}
