//! Tickdown - a countdown timer engine behind an HTTP control surface
//!
//! This is the main entry point for the tickdown application.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use tickdown::{api::create_router, config::Config, state::AppState, utils::shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("tickdown={},tower_http=info", config.log_level()))
        .init();

    info!("Starting tickdown server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, initial duration={:02}:{:02}",
        config.host, config.port, config.minutes, config.seconds
    );

    // Create application state; this spawns the countdown task
    let state = Arc::new(AppState::new(
        config.host.clone(),
        config.port,
        config.initial_configuration(),
    ));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start             - Start the countdown");
    info!("  POST /pause             - Pause a running countdown");
    info!("  POST /resume            - Resume a paused countdown");
    info!("  POST /reset             - Reset a paused countdown");
    info!("  POST /minutes/increment - Add one minute (ready only)");
    info!("  POST /minutes/decrement - Remove one minute (ready only)");
    info!("  POST /seconds/increment - Add one second (ready only)");
    info!("  POST /seconds/decrement - Remove one second (ready only)");
    info!("  GET  /status            - Current snapshot and server info");
    info!("  GET  /health            - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
