use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hostel_api::config::{LogFormat, ServerConfig};
use hostel_api::realtime::RealtimeRelay;
use hostel_api::router::build_app_router;
use hostel_api::state::AppState;
use hostel_api::ws;
use hostel_events::EventBus;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid server configuration")?;

    // --- Tracing ---
    init_tracing(config.log_format);
    tracing::info!(addr = %config.bind_addr(), "Loaded server configuration");

    // --- Database ---
    let pool = hostel_db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to connect to database")?;
    tracing::info!(max_connections = config.db_max_connections, "Database connection pool created");

    hostel_db::health_check(&pool)
        .await
        .context("Database health check failed")?;

    hostel_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    // --- Realtime ---
    let ws_manager = Arc::new(ws::WsManager::new());
    let heartbeat_handle = ws::start_heartbeat(Arc::clone(&ws_manager));

    let event_bus = Arc::new(EventBus::default());
    let relay_handle = tokio::spawn(
        RealtimeRelay::new(Arc::clone(&ws_manager)).run(event_bus.subscribe()),
    );
    tracing::info!("Realtime relay started");

    // --- App ---
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        ws_manager: Arc::clone(&ws_manager),
        event_bus: Arc::clone(&event_bus),
    };
    let app = build_app_router(state, &config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    tracing::info!(%addr, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // --- Shutdown ---
    tracing::info!("Server stopped accepting connections, cleaning up");
    let grace = Duration::from_secs(config.shutdown_timeout_secs);

    // Dropping the last bus handle closes the channel and ends the relay.
    drop(event_bus);
    if tokio::time::timeout(grace, relay_handle).await.is_err() {
        tracing::warn!("Realtime relay did not stop in time");
    }

    let ws_count = ws_manager.connection_count().await;
    tracing::info!(ws_count, "Closing remaining WebSocket connections");
    ws_manager.shutdown_all().await;
    heartbeat_handle.abort();

    pool.close().await;
    tracing::info!("Graceful shutdown complete");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hostel_api=debug,hostel_db=debug,tower_http=debug".into());

    let (pretty, json) = match format {
        LogFormat::Pretty => (Some(tracing_subscriber::fmt::layer()), None),
        LogFormat::Json => (None, Some(tracing_subscriber::fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();
}

/// Resolve on SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
