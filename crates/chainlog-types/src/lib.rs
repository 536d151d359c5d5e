//! Foundation types for chainlog.
//!
//! This crate provides the record and timestamp types shared by every other
//! chainlog crate. It carries no hashing or locking logic of its own.
//!
//! # Key Types
//!
//! - [`Record`]: One immutable, hash-linked unit of the ledger
//! - [`Timestamp`]: UTC instant with the canonical nanosecond text encoding
//!   that is committed to every record digest

pub mod error;
pub mod record;
pub mod temporal;

pub use error::TypeError;
pub use record::{Record, GENESIS_PAYLOAD, GENESIS_PREVIOUS_DIGEST};
pub use temporal::Timestamp;
