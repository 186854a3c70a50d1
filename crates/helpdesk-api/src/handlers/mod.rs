//! HTTP handlers, one module per route surface.

pub mod alert;
pub mod expert;
pub mod health;
pub mod manager;
pub mod message;
pub mod reference;
pub mod ticket;
pub mod transfer;
pub mod user;
