use recruit_calendar::config::AppConfig;
use recruit_calendar::io::LoadError;
use recruit_calendar::{create_router, initialize_backend};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    info!(
        "Using recruiting API at {} and holiday API at {} ({})",
        config.recruit_api_base_url, config.holiday_api_base_url, config.holiday_country
    );

    let state = initialize_backend(&config)?;

    // Initial load; the server starts either way and /api/refresh retries
    match state.refresh().await {
        Ok(notices) if notices.is_empty() => info!("Initial load complete"),
        Ok(notices) => warn!("Initial load completed with {} notices", notices.len()),
        Err(LoadError::AllSourcesFailed { notices }) => {
            for notice in &notices {
                warn!("{}", notice.message);
            }
            warn!("Initial load failed for every source");
        }
        Err(e) => warn!("Initial load did not complete: {}", e),
    }

    let app = create_router(state, &config.cors_origin)?;

    info!("Starting server on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
