use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};

use tu_api::app::{create_app, AppState};
use tu_api::config::Config;
use tu_api::logging;
use tu_core::services::TopUpService;
use tu_infra::ZenditClient;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("failed to load configuration")?;
    logging::init(&config.logging).context("failed to install log subscriber")?;

    info!(environment = %config.environment, "Starting airtime top-up API");

    let credentials = config.zendit.credentials();
    if credentials.is_incomplete() {
        warn!("ZENDIT_ID or ZENDIT_SECRET is not set; token requests will be rejected");
    }

    let provider = ZenditClient::new(config.zendit.clone())
        .context("failed to build Zendit client")?;
    let topup_service = TopUpService::new(Arc::new(provider), credentials);
    let app_state = web::Data::new(AppState::new(topup_service));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
