//! # helpdesk-api
//!
//! HTTP layer for the Helpdesk: Axum router, handlers, DTOs, the
//! caller-identity extractor, and the `ApiError` HTTP mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
