//! Shared fixtures for the Postgres-backed integration tests.
//!
//! The suite needs a real database. Point `DATABASE_URL` at a throwaway
//! Postgres instance to run it; without the variable every test returns
//! early, so the default `cargo test` stays self-contained. Tests share
//! one database and isolate themselves through per-test users, so
//! assertions check for specific rows rather than empty tables.

use std::sync::Arc;

use sqlx::PgPool;
use tempfile::TempDir;
use uuid::Uuid;

use helpdesk_core::config::database::DatabaseConfig;
use helpdesk_database::connection::DatabasePool;
use helpdesk_database::migration::run_migrations;
use helpdesk_database::repositories::feedback::FeedbackRepository;
use helpdesk_database::repositories::message::MessageRepository;
use helpdesk_database::repositories::ticket::TicketRepository;
use helpdesk_database::repositories::transfer::TransferRepository;
use helpdesk_database::repositories::user::UserRepository;
use helpdesk_entity::ticket::{NewTicket, Ticket};
use helpdesk_entity::user::{User, UserRole};
use helpdesk_service::{
    AlertService, MessageService, RequestContext, TicketService, TransferService,
};
use helpdesk_storage::TransferStore;

/// Upload cap for the test transfer service, far below any fixture.
const TEST_MAX_UPLOAD_BYTES: u64 = 1024 * 1024;

pub struct TestApp {
    pub db_pool: PgPool,
    pub ticket_repo: Arc<TicketRepository>,
    pub message_repo: Arc<MessageRepository>,
    pub transfer_repo: Arc<TransferRepository>,
    pub ticket_service: TicketService,
    pub alert_service: AlertService,
    pub message_service: MessageService,
    pub transfer_service: TransferService,
    _store_dir: TempDir,
}

impl TestApp {
    /// Connects, migrates, and wires the full service stack against a
    /// temp-dir transfer store. Returns `None` when `DATABASE_URL` is
    /// not set.
    pub async fn new() -> Option<Self> {
        let url = std::env::var("DATABASE_URL").ok()?;

        let config = DatabaseConfig {
            url,
            max_connections: 5,
            min_connections: 1,
            connect_timeout_seconds: 5,
            idle_timeout_seconds: 60,
        };
        let db = DatabasePool::connect(&config)
            .await
            .expect("Failed to connect to test database");
        run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");
        let pool = db.into_pool();

        let store_dir = TempDir::new().expect("Failed to create transfer store dir");
        let store = Arc::new(
            TransferStore::new(&store_dir.path().to_string_lossy())
                .await
                .expect("Failed to create transfer store"),
        );

        let ticket_repo = Arc::new(TicketRepository::new(pool.clone()));
        let message_repo = Arc::new(MessageRepository::new(pool.clone()));
        let feedback_repo = Arc::new(FeedbackRepository::new(pool.clone()));
        let transfer_repo = Arc::new(TransferRepository::new(pool.clone()));
        let user_repo = Arc::new(UserRepository::new(pool.clone()));

        let ticket_service = TicketService::new(
            Arc::clone(&ticket_repo),
            Arc::clone(&message_repo),
            Arc::clone(&feedback_repo),
            Arc::clone(&user_repo),
        );
        let alert_service = AlertService::new(Arc::clone(&ticket_repo));
        let message_service = MessageService::new(Arc::clone(&ticket_repo), Arc::clone(&message_repo));
        let transfer_service = TransferService::new(
            Arc::clone(&transfer_repo),
            Arc::clone(&user_repo),
            store,
            TEST_MAX_UPLOAD_BYTES,
        );

        Some(Self {
            db_pool: pool,
            ticket_repo,
            message_repo,
            transfer_repo,
            ticket_service,
            alert_service,
            message_service,
            transfer_service,
            _store_dir: store_dir,
        })
    }

    /// Inserts a user with a unique username and returns their caller
    /// context.
    pub async fn create_user(&self, role: UserRole) -> RequestContext {
        let username = format!("it-{}", Uuid::new_v4());
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, role, phone_number) \
             VALUES ($1, $2, '12345678') RETURNING *",
        )
        .bind(&username)
        .bind(role)
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to insert test user");

        RequestContext::new(user.id, user.username, user.role)
    }

    /// Creates a ticket through the service, as the given requester.
    pub async fn create_ticket(&self, requester: &RequestContext, title: &str) -> Ticket {
        self.ticket_service
            .create(
                requester,
                NewTicket {
                    title: title.to_string(),
                    description: format!("{title} description"),
                    unit_id: None,
                    service_type_id: None,
                },
            )
            .await
            .expect("Failed to create ticket")
    }
}

/// Whether any ticket in the slice has the given id.
pub fn contains_ticket(tickets: &[Ticket], id: Uuid) -> bool {
    tickets.iter().any(|t| t.id == id)
}
