//! Ticket lifecycle engine and role-scoped queue views.

pub mod service;
pub mod views;

pub use service::TicketService;
pub use views::{ManagerQueues, TicketOverview};
