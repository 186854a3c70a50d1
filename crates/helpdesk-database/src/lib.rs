//! # helpdesk-database
//!
//! PostgreSQL connection pool management, embedded migrations, and the
//! repository implementations for every Helpdesk aggregate.

pub mod connection;
pub mod migration;
pub mod repositories;
