use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use macro_sidecar::api::{routes::create_router, state::AppState};
use macro_sidecar::config::Config;
use macro_sidecar::desktop::InputMonitor;
use macro_sidecar::replay::enigo_backend;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load environment
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Global key state for the emergency stop and capture helpers
    let monitor = InputMonitor::start();

    // Create application state
    let addr = config.addr();
    let state = AppState::new(config, enigo_backend(), Arc::new(monitor));

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Macro Sidecar starting on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
