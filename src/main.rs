use anyhow::Result;

use tfda_premarket::{
    app, config, logging,
    services::{AiClient, CaseCatalog},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        credential_locked = settings.credential_locked(),
        "Starting TFDA premarket service"
    );

    // Example cases; an unreadable catalog leaves it empty
    let catalog = CaseCatalog::load(&settings.case_catalog_path).await;

    // Create generative-language client
    let ai_client = AiClient::new(
        &settings.ai_service_url,
        settings.ai_service_timeout_seconds,
    )?;

    // Create application state
    let state = app::AppState::new(settings.clone(), catalog, ai_client);

    // Build application
    let app = app::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
