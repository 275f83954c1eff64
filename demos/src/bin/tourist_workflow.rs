//! Tourist workflow
//!
//! Browses templates and events, registers for the first event, shows its
//! schedule, then lists documents and registrations.
//!
//! ```bash
//! TOURIST_HUB_EMAIL=tourist@example.com cargo run --bin tourist_workflow
//! ```

use tourist_hub_client::prelude::*;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    let credentials = config.credentials.clone();
    let client = Arc::new(TouristHubClient::new(config)?);
    let workflow = TouristServiceImpl::new(client);

    info!("=== Tourist Workflow Example ===\n");
    if let Err(e) = run(&workflow, &credentials).await {
        error!("Tourist workflow example failed: {}", e);
    }

    Ok(())
}

async fn run(workflow: &TouristServiceImpl, credentials: &Credentials) -> Result<(), AppError> {
    workflow
        .client()
        .login(&credentials.email_address, &credentials.password)
        .await?;

    workflow.browse_tour_templates(&Value::Null).await?;

    let events = workflow.view_available_tour_events(&Value::Null).await?;
    if let Some(event) = events.first() {
        workflow.register_for_tour(&event.tour_event_id).await?;
        workflow.view_tour_schedule(&event.tour_event_id).await?;
    }

    workflow.view_my_documents().await?;
    workflow.view_my_registrations().await?;

    workflow.client().logout().await;
    Ok(())
}
