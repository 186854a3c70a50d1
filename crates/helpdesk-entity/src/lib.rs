//! # helpdesk-entity
//!
//! Domain entity models for the Helpdesk ticketing service: users and
//! organizational units, tickets with their lifecycle enums and
//! transition guards, per-ticket messages and feedback, one-shot file
//! transfers, and inventory reference data.

pub mod inventory;
pub mod service_type;
pub mod ticket;
pub mod transfer;
pub mod unit;
pub mod user;
