//! Wire protocol for chainlog nodes.
//!
//! Defines the HTTP endpoint paths, the JSON request and response bodies,
//! and the plain-text error messages exchanged between clients and nodes.
//! The format is shared with existing nodes, so field names and messages
//! are fixed.

pub mod codec;
pub mod endpoint;
pub mod error;
pub mod message;

pub use codec::JsonCodec;
pub use endpoint::{endpoints, HealthResponse};
pub use error::{ProtocolError, ProtocolResult};
pub use message::{errors, MineRequest, PROTOCOL_VERSION};
