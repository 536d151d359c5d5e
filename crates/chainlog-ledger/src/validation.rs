use chainlog_crypto::RecordHasher;
use chainlog_types::Record;

use crate::error::ValidationError;

/// Hash-chain validator.
///
/// The default (`reference`) mode checks every adjacent pair of a chain and
/// trusts the first record as given. `strict` mode additionally requires the
/// first record to be a self-consistent chain root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChainValidator {
    strict_root: bool,
}

impl ChainValidator {
    /// Pairwise checks only; the first record is not inspected.
    pub const fn reference() -> Self {
        Self { strict_root: false }
    }

    /// Pairwise checks plus root checks on the first record.
    pub const fn strict() -> Self {
        Self { strict_root: true }
    }

    pub const fn with_strict_root(strict_root: bool) -> Self {
        Self { strict_root }
    }

    pub fn is_strict(&self) -> bool {
        self.strict_root
    }

    /// Check `candidate` against its known-good `predecessor`.
    ///
    /// Checks run in order and the first failure is reported: sequence
    /// number, previous-digest linkage, then the candidate's own digest.
    pub fn validate_successor(
        candidate: &Record,
        predecessor: &Record,
    ) -> Result<(), ValidationError> {
        let expected = predecessor.sequence_number.wrapping_add(1);
        if predecessor.sequence_number == u64::MAX || candidate.sequence_number != expected {
            return Err(ValidationError::SequenceGap {
                expected,
                found: candidate.sequence_number,
            });
        }
        if candidate.previous_digest != predecessor.digest {
            return Err(ValidationError::LinkageBroken {
                seq: candidate.sequence_number,
            });
        }
        if !RecordHasher::verify(candidate) {
            return Err(ValidationError::DigestMismatch {
                seq: candidate.sequence_number,
            });
        }
        Ok(())
    }

    /// Check that `root` can start a chain on its own.
    pub fn validate_root(root: &Record) -> Result<(), ValidationError> {
        if !root.is_root() {
            return Err(ValidationError::RootMismatch {
                seq: root.sequence_number,
                previous: root.previous_digest.clone(),
            });
        }
        if !RecordHasher::verify(root) {
            return Err(ValidationError::DigestMismatch {
                seq: root.sequence_number,
            });
        }
        Ok(())
    }

    /// Validate a whole chain, stopping at the first failing pair.
    pub fn validate_chain(&self, records: &[Record]) -> Result<(), ValidationError> {
        let Some(first) = records.first() else {
            return Err(ValidationError::EmptySequence);
        };
        if self.strict_root {
            Self::validate_root(first)?;
        }
        for pair in records.windows(2) {
            Self::validate_successor(&pair[1], &pair[0])?;
        }
        Ok(())
    }
}
