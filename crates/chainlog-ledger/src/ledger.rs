use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chainlog_types::Record;
use tracing::{debug, warn};

use crate::chain;
use crate::error::LedgerError;
use crate::fork_choice::{ForkChoice, LongestChain};
use crate::traits::{LedgerReader, LedgerWriter};
use crate::validation::ChainValidator;

/// Construction options for a [`Ledger`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LedgerOptions {
    /// Also validate the first record of replacement candidates on its own.
    pub strict_root: bool,
}

/// In-memory, hash-linked ledger.
///
/// Holds exactly one valid record sequence, never empty, behind a
/// reader/writer lock. Appends and replacements take the write lock for
/// their whole read-validate-mutate cycle, so concurrent writers are totally
/// ordered and never validate against a stale tip.
pub struct Ledger {
    records: RwLock<Vec<Record>>,
    validator: ChainValidator,
    fork_choice: Box<dyn ForkChoice>,
}

impl Ledger {
    /// A ledger holding only a fresh genesis record.
    pub fn new() -> Self {
        Self::with_options(LedgerOptions::default())
    }

    pub fn with_options(options: LedgerOptions) -> Self {
        let genesis = chain::genesis();
        debug!(digest = %genesis.digest, strict_root = options.strict_root, "ledger initialized");
        Self {
            records: RwLock::new(vec![genesis]),
            validator: ChainValidator::with_strict_root(options.strict_root),
            fork_choice: Box::new(LongestChain),
        }
    }

    /// Swap the fork-choice rule used by replacement.
    pub fn with_fork_choice(mut self, fork_choice: impl ForkChoice + 'static) -> Self {
        self.fork_choice = Box::new(fork_choice);
        self
    }

    pub fn validator(&self) -> ChainValidator {
        self.validator
    }

    // Writers only ever push one record or assign a whole vector, so the
    // sequence is consistent even if a holder panicked.
    fn read_guard(&self) -> RwLockReadGuard<'_, Vec<Record>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Vec<Record>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerReader for Ledger {
    fn snapshot(&self) -> Vec<Record> {
        self.read_guard().clone()
    }

    fn tip(&self) -> Record {
        match self.read_guard().last() {
            Some(tip) => tip.clone(),
            None => unreachable!("ledger always holds its genesis record"),
        }
    }

    fn len(&self) -> usize {
        self.read_guard().len()
    }
}

impl LedgerWriter for Ledger {
    fn append(&self, payload: &str) -> Result<Record, LedgerError> {
        let mut records = self.write_guard();
        let Some(tip) = records.last() else {
            unreachable!("ledger always holds its genesis record");
        };

        let candidate = chain::successor(tip, payload);
        ChainValidator::validate_successor(&candidate, tip).map_err(|e| {
            warn!(
                seq = candidate.sequence_number,
                error = %e,
                "generated record failed validation"
            );
            LedgerError::InvalidRecord(e)
        })?;

        records.push(candidate.clone());
        debug!(seq = candidate.sequence_number, digest = %candidate.digest, "record appended");
        Ok(candidate)
    }

    fn try_replace(&self, candidate: Vec<Record>) -> Result<(), LedgerError> {
        let mut records = self.write_guard();

        if !self.fork_choice.prefers(&records, &candidate) {
            debug!(
                candidate = candidate.len(),
                current = records.len(),
                "replacement rejected by fork choice"
            );
            return Err(LedgerError::RejectedNotLonger {
                candidate: candidate.len(),
                current: records.len(),
            });
        }

        self.validator.validate_chain(&candidate).map_err(|e| {
            warn!(candidate = candidate.len(), error = %e, "replacement chain failed validation");
            LedgerError::InvalidChain(e)
        })?;

        debug!(from = records.len(), to = candidate.len(), "chain replaced");
        *records = candidate;
        Ok(())
    }
}
