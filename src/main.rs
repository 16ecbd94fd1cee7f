use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use hushwave::application::services::{DenoiseService, ProcessingPipeline, ResultSweeper};
use hushwave::infrastructure::audio::{
    SpectralGateConfig, SpectralGateReducer, SymphoniaAudioDecoder, WavEncoder,
};
use hushwave::infrastructure::observability::{TracingConfig, init_tracing};
use hushwave::infrastructure::storage::ResultStoreFactory;
use hushwave::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;
    let addr = settings.server.socket_addr()?;

    init_tracing(&TracingConfig::new(environment, &settings.logging), addr);

    let noise_reducer = SpectralGateReducer::new(SpectralGateConfig::from(&settings.denoise))
        .context("Invalid denoise settings")?;
    let pipeline = Arc::new(ProcessingPipeline::new(
        Arc::new(SymphoniaAudioDecoder),
        Arc::new(noise_reducer),
        Arc::new(WavEncoder),
    ));

    let result_store =
        ResultStoreFactory::create(&settings.storage).context("Failed to create result store")?;

    if settings.storage.ttl().is_some() {
        let sweeper = ResultSweeper::new(
            Arc::clone(&result_store),
            settings.storage.sweep_interval(),
        );
        tokio::spawn(sweeper.run());
    }

    let denoise_service = Arc::new(DenoiseService::new(
        pipeline,
        result_store,
        settings.upload.max_upload_bytes(),
    ));

    let router = create_router(AppState::new(denoise_service));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        max_upload_mb = settings.upload.max_file_size_mb,
        storage = ?settings.storage.provider,
        "Listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
