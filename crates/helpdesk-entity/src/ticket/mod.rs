//! Ticket entity, lifecycle enums, and transition guards.

pub mod audience;
pub mod feedback;
pub mod message;
pub mod model;
pub mod status;

pub use audience::Audience;
pub use feedback::TicketFeedback;
pub use message::TicketMessage;
pub use model::{NewTicket, Ticket, TicketChanges};
pub use status::{ReturnStatus, TicketStatus};
