use async_trait::async_trait;
use chainlog_protocol::HealthResponse;
use chainlog_types::Record;

use crate::error::ClientResult;

/// Operations a chainlog node exposes to clients.
#[async_trait]
pub trait ChainRemote: Send + Sync {
    /// The node's full chain, ascending.
    async fn blocks(&self) -> ClientResult<Vec<Record>>;

    /// Ask the node to append a record carrying `data`.
    async fn mine(&self, data: &str) -> ClientResult<Record>;

    /// Offer `chain` as a replacement; returns the node's chain afterwards.
    async fn replace(&self, chain: &[Record]) -> ClientResult<Vec<Record>>;

    async fn health(&self) -> ClientResult<HealthResponse>;
}
