/// Why a record or a chain failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("sequence gap: expected {expected}, found {found}")]
    SequenceGap { expected: u64, found: u64 },

    #[error("linkage broken at seq {seq}: previous digest does not match predecessor")]
    LinkageBroken { seq: u64 },

    #[error("digest mismatch at seq {seq}: stored digest differs from computed")]
    DigestMismatch { seq: u64 },

    #[error("chain is empty")]
    EmptySequence,

    #[error("root record is not a chain root (seq {seq}, previous digest {previous:?})")]
    RootMismatch { seq: u64, previous: String },
}

/// Errors produced by ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("invalid record: {0}")]
    InvalidRecord(ValidationError),

    #[error("invalid chain: {0}")]
    InvalidChain(ValidationError),

    #[error("candidate chain of length {candidate} does not beat current length {current}")]
    RejectedNotLonger { candidate: usize, current: usize },
}

impl LedgerError {
    /// The validation failure behind this error, if any.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::InvalidRecord(e) | Self::InvalidChain(e) => Some(e),
            Self::RejectedNotLonger { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_cause_is_exposed() {
        let gap = ValidationError::SequenceGap { expected: 2, found: 4 };
        assert_eq!(LedgerError::InvalidChain(gap.clone()).validation(), Some(&gap));
        assert_eq!(LedgerError::InvalidRecord(gap.clone()).validation(), Some(&gap));
        let shorter = LedgerError::RejectedNotLonger { candidate: 1, current: 2 };
        assert_eq!(shorter.validation(), None);
    }
}
