use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use acrely_api::config::ServerConfig;
use acrely_api::router::build_app_router;
use acrely_api::state::AppState;
use acrely_notify::{
    DispatchConfig, DispatchCoordinator, PgEnrichment, WhatsAppGateway,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "acrely_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = acrely_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    acrely_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    // --- Dispatch collaborators ---
    let provider = Arc::new(PgEnrichment::new(pool.clone()));
    let channel = Arc::new(WhatsAppGateway::new(
        config.whatsapp_gateway_url.clone(),
        config.send_timeout(),
    ));
    let dispatcher = Arc::new(DispatchCoordinator::new(
        provider,
        channel,
        DispatchConfig {
            internal_group_id: config.internal_group_id.clone(),
            property_link_base: config.property_link_base.clone(),
            test_recipient_override: config.test_recipient_override.clone(),
        },
    ));
    tracing::info!(
        gateway = %config.whatsapp_gateway_url,
        override_active = config.test_recipient_override.is_some(),
        "Dispatch coordinator created"
    );

    // --- App state and router ---
    let request_timeout_secs = config.request_timeout_secs;
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        dispatcher,
    };
    let app = build_app_router(state, request_timeout_secs);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    if tokio::time::timeout(config.shutdown_timeout(), pool.close())
        .await
        .is_err()
    {
        tracing::warn!("Database pool did not drain within the shutdown timeout");
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server shuts
/// down cleanly whether stopped interactively or by a process manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
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
