//! Basic client usage
//!
//! Logs in with the credentials from the environment (`TOURIST_HUB_EMAIL`,
//! `TOURIST_HUB_PASSWORD`), lists users and logs out.
//!
//! ```bash
//! cargo run --bin basic_client
//! ```

use tourist_hub_client::prelude::*;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    let credentials = config.credentials.clone();
    info!("Base URL: {}", config.rest_api.base_url);

    let client = TouristHubClient::new(config)?;

    if let Err(e) = run(&client, &credentials).await {
        error!("Example failed: {}", e);
    }

    Ok(())
}

async fn run(client: &TouristHubClient, credentials: &Credentials) -> Result<(), AppError> {
    client
        .login(&credentials.email_address, &credentials.password)
        .await?;

    let users: Vec<User> = client.get(USERS_PATH).await?;
    info!("Retrieved {} users", users.len());

    client.logout().await;
    Ok(())
}
