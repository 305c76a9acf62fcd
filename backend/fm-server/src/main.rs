use fm_server::{AppState, build_router, logger};

use std::error::Error;
use std::net::SocketAddr;

use log::{debug, error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; real environment variables take precedence
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = fm_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting fm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    let pool = fm_db::create_pool(&database_path, config.database.max_connections).await?;

    let app_state = AppState::from_config(pool, &config);
    if app_state.validator.is_none() {
        warn!("Telegram bot token not configured - every sign-in will fail with CONFIGURATION_ERROR");
    }

    // Forget clients whose auth buckets have refilled
    let rate_limiter = app_state.rate_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(rate_limiter.window());
        loop {
            interval.tick().await;
            rate_limiter.retain_recent();
            debug!(
                "Auth rate limiter tracking {} clients",
                rate_limiter.tracked_clients()
            );
        }
    });

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Peer addresses key the auth rate limiter
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Keep serving; the process can still be killed
            std::future::pending::<()>().await;
        }
    }
}
