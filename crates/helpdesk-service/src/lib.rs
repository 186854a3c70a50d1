//! # helpdesk-service
//!
//! Business logic service layer for the Helpdesk. Each service
//! orchestrates repositories and the transfer store to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references. Every operation takes an
//! explicit `RequestContext` identifying the caller.

pub mod alert;
pub mod context;
pub mod message;
pub mod report;
pub mod ticket;
pub mod transfer;
pub mod user;

pub use alert::AlertService;
pub use context::RequestContext;
pub use message::MessageService;
pub use report::{ReportService, StatusCount, TicketReport, UnitCount};
pub use ticket::{ManagerQueues, TicketOverview, TicketService};
pub use transfer::{ReceivedFile, TransferService};
pub use user::{UserInventory, UserService};
