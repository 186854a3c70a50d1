//! Helpdesk Server — internal IT-support ticketing service
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use helpdesk_core::config::AppConfig;
use helpdesk_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("HELPDESK_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Helpdesk v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    let db = helpdesk_database::connection::DatabasePool::connect(&config.database).await?;
    helpdesk_database::migration::run_migrations(db.pool()).await?;
    let db_pool = db.into_pool();

    // ── Transfer store ───────────────────────────────────────────
    let transfer_root = format!("{}/transfers", config.storage.data_root);
    let store = Arc::new(helpdesk_storage::TransferStore::new(&transfer_root).await?);
    tracing::info!(root = %transfer_root, "Transfer store initialized");

    // ── Repositories ─────────────────────────────────────────────
    use helpdesk_database::repositories;
    let ticket_repo = Arc::new(repositories::ticket::TicketRepository::new(db_pool.clone()));
    let user_repo = Arc::new(repositories::user::UserRepository::new(db_pool.clone()));
    let message_repo = Arc::new(repositories::message::MessageRepository::new(db_pool.clone()));
    let feedback_repo = Arc::new(repositories::feedback::FeedbackRepository::new(
        db_pool.clone(),
    ));
    let transfer_repo = Arc::new(repositories::transfer::TransferRepository::new(
        db_pool.clone(),
    ));
    let unit_repo = Arc::new(repositories::unit::UnitRepository::new(db_pool.clone()));
    let service_type_repo = Arc::new(repositories::service_type::ServiceTypeRepository::new(
        db_pool.clone(),
    ));
    let inventory_repo = Arc::new(repositories::inventory::InventoryRepository::new(
        db_pool.clone(),
    ));

    // ── Services ─────────────────────────────────────────────────
    let ticket_service = Arc::new(helpdesk_service::TicketService::new(
        Arc::clone(&ticket_repo),
        Arc::clone(&message_repo),
        Arc::clone(&feedback_repo),
        Arc::clone(&user_repo),
    ));
    let alert_service = Arc::new(helpdesk_service::AlertService::new(Arc::clone(&ticket_repo)));
    let message_service = Arc::new(helpdesk_service::MessageService::new(
        Arc::clone(&ticket_repo),
        Arc::clone(&message_repo),
    ));
    let transfer_service = Arc::new(helpdesk_service::TransferService::new(
        Arc::clone(&transfer_repo),
        Arc::clone(&user_repo),
        Arc::clone(&store),
        config.storage.max_upload_size_bytes,
    ));
    let user_service = Arc::new(helpdesk_service::UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&unit_repo),
        Arc::clone(&service_type_repo),
        Arc::clone(&inventory_repo),
    ));
    let report_service = Arc::new(helpdesk_service::ReportService::new(Arc::clone(&ticket_repo)));

    // ── HTTP server ──────────────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = helpdesk_api::AppState {
        config: Arc::new(config),
        db_pool,
        user_repo,
        ticket_service,
        alert_service,
        message_service,
        transfer_service,
        user_service,
        report_service,
    };

    let app = helpdesk_api::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Helpdesk server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Helpdesk server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            tracing::error!("Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => {
                tracing::error!("Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
