//! Record digests for chainlog.
//!
//! A record digest is the lowercase hex SHA-256 of the direct concatenation
//! of its sequence number, canonical timestamp text, payload, and previous
//! digest. The preimage layout is shared with other nodes byte-for-byte.

pub mod hasher;

pub use hasher::RecordHasher;
