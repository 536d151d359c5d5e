//! Append-only, hash-linked ledger for chainlog.
//!
//! This crate is the heart of chainlog. It provides:
//! - [`Ledger`], a lock-guarded record sequence seeded with a genesis record
//! - `LedgerReader` / `LedgerWriter` trait boundaries used by the transport
//! - Single-record and whole-chain validation ([`ChainValidator`])
//! - A pluggable fork-choice rule ([`ForkChoice`], default [`LongestChain`])
//! - Builders for genesis and successor records

pub mod chain;
pub mod error;
pub mod fork_choice;
pub mod ledger;
pub mod traits;
pub mod validation;

pub use chain::{extend, genesis, genesis_at, successor, successor_at};
pub use error::{LedgerError, ValidationError};
pub use fork_choice::{ForkChoice, LongestChain};
pub use ledger::{Ledger, LedgerOptions};
pub use traits::{LedgerReader, LedgerStore, LedgerWriter};
pub use validation::ChainValidator;
