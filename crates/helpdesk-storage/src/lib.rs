//! # helpdesk-storage
//!
//! Local filesystem store for file transfer payloads. Every uploaded
//! file lives under a single root directory until its one-shot download
//! removes it.

pub mod store;

pub use store::TransferStore;
