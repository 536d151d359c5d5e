//! Client for chainlog nodes.
//!
//! [`ChainRemote`] is the narrow async interface a caller needs to talk to a
//! node; [`HttpRemote`] implements it over plain HTTP/1.1.

pub mod error;
pub mod http;
pub mod remote;

pub use error::{ClientError, ClientResult};
pub use http::HttpRemote;
pub use remote::ChainRemote;
