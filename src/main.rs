//! Posture Check - A background timer that reminds you to check your posture
//!
//! This is the main entry point for the posture-check application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use posture_check::{
    config::Config,
    state::AppState,
    api::create_router,
    services::default_backend,
    tasks::reminder_loop_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("posture_check={},tower_http=info", config.log_level()))
        .init();

    info!("Starting posture-check v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, interval={}min, tick={}s",
          config.host, config.port, config.interval, config.tick);

    let settings = config.timer_settings();
    let (state, channels) = AppState::new(settings, config.port, config.host.clone());
    let state = Arc::new(state);

    // Start the reminder loop; it owns the timer from here on
    let notifier = default_backend(!config.no_notify);
    tokio::spawn(reminder_loop_task(notifier, settings, channels));

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Control API running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /enable          - Enable the timer");
    info!("  POST /disable         - Disable the timer");
    info!("  POST /pause           - Pause the timer");
    info!("  POST /resume          - Resume the timer");
    info!("  POST /reset           - Reset elapsed time and cycles");
    info!("  POST /toggle/enabled  - Toggle enabled (menu item)");
    info!("  POST /toggle/paused   - Toggle paused (menu item)");
    info!("  GET  /status          - Current timer status");
    info!("  GET  /menu            - Status menu titles");
    info!("  GET  /health          - Health check");

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

    let snapshot = state.get_snapshot();
    info!("Shutdown complete after {} reminder cycles", snapshot.cycles_completed);
    Ok(())
}
