use serde::{Deserialize, Serialize};

use crate::temporal::Timestamp;

/// Payload carried by the genesis record of every new ledger.
pub const GENESIS_PAYLOAD: &str = "Genesis Block";

/// Previous-digest sentinel for the first record of a chain.
pub const GENESIS_PREVIOUS_DIGEST: &str = "0";

/// One immutable, hash-linked entry in the ledger.
///
/// The wire names (`index`, `timestamp`, `data`, `previousHash`, `hash`) are
/// shared with existing nodes, so records exchanged between implementations
/// round-trip exactly. Digests are opaque strings: they are only ever compared
/// for equality, never decoded.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Zero-based position in the chain.
    #[serde(rename = "index")]
    pub sequence_number: u64,
    /// Creation time, committed to the digest.
    #[serde(rename = "timestamp")]
    pub created_at: Timestamp,
    /// Caller-chosen content.
    #[serde(rename = "data")]
    pub payload: String,
    /// Digest of the preceding record, or `"0"` for the first one.
    #[serde(rename = "previousHash")]
    pub previous_digest: String,
    /// Digest over this record's other four fields.
    #[serde(rename = "hash")]
    pub digest: String,
}

impl Record {
    /// Returns `true` if this record is shaped like a chain root:
    /// sequence zero and the `"0"` previous-digest sentinel.
    pub fn is_root(&self) -> bool {
        self.sequence_number == 0 && self.previous_digest == GENESIS_PREVIOUS_DIGEST
    }

    /// Leading part of the digest for display (at most 16 characters).
    pub fn short_digest(&self) -> &str {
        let end = self
            .digest
            .char_indices()
            .nth(16)
            .map(|(i, _)| i)
            .unwrap_or(self.digest.len());
        &self.digest[..end]
    }
}
