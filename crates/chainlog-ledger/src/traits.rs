use chainlog_types::Record;

use crate::error::LedgerError;

/// Read boundary for ledger snapshot access.
///
/// Every method returns owned copies; no caller can hold a reference into
/// ledger storage.
pub trait LedgerReader: Send + Sync {
    fn snapshot(&self) -> Vec<Record>;

    fn tip(&self) -> Record;

    fn len(&self) -> usize;

    /// Always `false` for a constructed ledger, which holds its genesis record.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Write boundary for ledger append and replacement.
pub trait LedgerWriter: Send + Sync {
    fn append(&self, payload: &str) -> Result<Record, LedgerError>;

    /// Replace the held chain with `candidate`, reporting why it was refused.
    fn try_replace(&self, candidate: Vec<Record>) -> Result<(), LedgerError>;

    /// Replace the held chain with `candidate`. A refusal is `false`, not an
    /// error.
    fn replace(&self, candidate: Vec<Record>) -> bool {
        self.try_replace(candidate).is_ok()
    }
}

/// Full ledger surface handed to the transport.
pub trait LedgerStore: LedgerReader + LedgerWriter {}

impl<T: LedgerReader + LedgerWriter> LedgerStore for T {}
