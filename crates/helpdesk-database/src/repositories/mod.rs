//! Repository implementations, one per aggregate.

pub mod feedback;
pub mod inventory;
pub mod message;
pub mod service_type;
pub mod ticket;
pub mod transfer;
pub mod unit;
pub mod user;
