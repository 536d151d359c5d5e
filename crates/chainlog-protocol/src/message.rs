use serde::{Deserialize, Serialize};

pub const PROTOCOL_VERSION: u32 = 1;

/// Body of `POST /mine`.
///
/// A missing `data` field decodes as the empty string, which the node then
/// refuses with [`errors::DATA_REQUIRED`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineRequest {
    #[serde(default)]
    pub data: String,
}

impl MineRequest {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

/// Plain-text error bodies returned by nodes.
pub mod errors {
    pub const INVALID_PAYLOAD: &str = "invalid payload";
    pub const DATA_REQUIRED: &str = "data is required";
    pub const REPLACEMENT_FAILED: &str = "replacement failed";
}
