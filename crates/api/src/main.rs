use std::net::SocketAddr;
use std::sync::Arc;

use mcc_api::auth::firebase::FirebaseVerifier;
use mcc_api::config::ServerConfig;
use mcc_api::logging::{init_tracing, LogFormat};
use mcc_api::reporting::TracingReporter;
use mcc_api::router::build_app_router;
use mcc_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    init_tracing(LogFormat::from_env());

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        firebase_project = %config.firebase.project_id,
        "Loaded server configuration",
    );

    // --- Database ---
    let pool = mcc_db::create_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    mcc_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    mcc_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- App state ---
    let config = Arc::new(config);
    let state = AppState {
        pool: pool.clone(),
        config: Arc::clone(&config),
        verifier: Arc::new(FirebaseVerifier::new(config.firebase.clone())),
        reporter: Arc::new(TracingReporter),
    };

    let app = build_app_router(state, &config);

    // --- Serve ---
    let addr = SocketAddr::new(
        config.host.parse().expect("HOST must be a valid IP address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Resolve on Ctrl-C or SIGTERM.
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
        _ = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
