/// HTTP endpoint paths served by a chainlog node.
pub mod endpoints {
    pub const BLOCKS: &str = "/blocks";
    pub const MINE: &str = "/mine";
    pub const REPLACE: &str = "/replace";
    pub const HEALTH: &str = "/health";
}

/// Health check response.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub protocol_version: u32,
    /// Number of records currently held.
    pub length: usize,
}

impl HealthResponse {
    pub fn ok(length: usize) -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            protocol_version: super::message::PROTOCOL_VERSION,
            length,
        }
    }
}
