//! Route definitions for the Helpdesk HTTP API.
//!
//! All routes are organized by role surface and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(ticket_routes())
        .merge(manager_routes())
        .merge(expert_routes())
        .merge(file_routes())
        .merge(user_routes())
        .merge(reference_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        // Leave headroom for the multipart framing around the payload.
        .layer(DefaultBodyLimit::max(max_upload + 64 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Requester-facing ticket endpoints: CRUD, thread, feedback.
fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route("/tickets", get(handlers::ticket::list_tickets))
        .route("/tickets", post(handlers::ticket::create_ticket))
        .route("/tickets/{id}", get(handlers::ticket::get_ticket))
        .route("/tickets/{id}", put(handlers::ticket::update_ticket))
        .route("/tickets/{id}", delete(handlers::ticket::delete_ticket))
        .route("/tickets/{id}/messages", get(handlers::message::view_thread))
        .route("/tickets/{id}/messages", post(handlers::message::post_message))
        .route("/tickets/{id}/feedback", post(handlers::ticket::submit_feedback))
}

/// Manager triage, assignment, alerts, and reports.
fn manager_routes() -> Router<AppState> {
    Router::new()
        .route("/manager/tickets", get(handlers::manager::list_queues))
        .route(
            "/manager/tickets/{id}/assign",
            post(handlers::manager::assign_ticket),
        )
        .route("/manager/reports", get(handlers::manager::reports))
        .route("/manager/alerts", get(handlers::alert::manager_alerts))
        .route(
            "/manager/alerts/{id}",
            put(handlers::alert::acknowledge_manager_alert),
        )
}

/// Expert worklist and transitions.
fn expert_routes() -> Router<AppState> {
    Router::new()
        .route("/expert/tickets", get(handlers::expert::list_tickets))
        .route(
            "/expert/tickets/{id}/done",
            post(handlers::expert::mark_done),
        )
        .route(
            "/expert/tickets/{id}/return",
            post(handlers::expert::return_ticket),
        )
        .route("/expert/alerts", get(handlers::alert::expert_alerts))
        .route(
            "/expert/alerts/{id}",
            put(handlers::alert::acknowledge_expert_alert),
        )
}

/// One-shot file handoff.
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files/send", post(handlers::transfer::send_file))
        .route("/files/receive", get(handlers::transfer::receive_file))
        .route("/files/pending", get(handlers::transfer::pending))
}

/// User self-service endpoints.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(handlers::user::get_profile))
        .route("/users/me/contact", put(handlers::user::update_contact))
        .route("/users/me/inventory", get(handlers::user::get_inventory))
}

/// Reference data for the pickers.
fn reference_routes() -> Router<AppState> {
    Router::new()
        .route("/users/managers", get(handlers::reference::list_managers))
        .route("/users/experts", get(handlers::reference::list_experts))
        .route("/units", get(handlers::reference::list_units))
        .route("/service-types", get(handlers::reference::list_service_types))
}

/// Health check endpoint (no identity required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use http::Method;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
