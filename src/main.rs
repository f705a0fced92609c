use ecolearn::completion::HttpCompletionClient;
use ecolearn::config::Settings;
use ecolearn::startup::{self, AppState};
use ecolearn::telemetry::init_tracing;
use std::error::Error;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let settings = Settings::load()?;
    init_tracing(&settings.log_level, settings.log_format);

    let completion = HttpCompletionClient::new(settings.completion.clone()).map_err(|e| {
        tracing::error!("Failed to build completion client: {}", e);
        e
    })?;
    tracing::info!(
        endpoint = %settings.completion.endpoint,
        model = %settings.completion.model,
        "Initialized completion client"
    );

    let address = settings.address();
    let listener = TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind {}: {}", address, e);
        e
    })?;
    tracing::info!("EcoLearn API listening on {}", address);

    startup::run(listener, AppState::new(Arc::new(completion))).await?;
    Ok(())
}
