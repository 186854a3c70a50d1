//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use helpdesk_core::config::AppConfig;
use helpdesk_database::repositories::user::UserRepository;
use helpdesk_service::{
    AlertService, MessageService, ReportService, TicketService, TransferService, UserService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool, used directly by the health check.
    pub db_pool: PgPool,
    /// User repository, used by the caller-identity extractor.
    pub user_repo: Arc<UserRepository>,
    /// Ticket lifecycle service.
    pub ticket_service: Arc<TicketService>,
    /// Alert polling service.
    pub alert_service: Arc<AlertService>,
    /// Per-ticket messaging service.
    pub message_service: Arc<MessageService>,
    /// File handoff service.
    pub transfer_service: Arc<TransferService>,
    /// User profile and reference data service.
    pub user_service: Arc<UserService>,
    /// Manager reporting service.
    pub report_service: Arc<ReportService>,
}
