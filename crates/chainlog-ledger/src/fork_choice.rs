use chainlog_types::Record;

/// Decides whether a validated candidate chain should supersede the
/// incumbent one.
///
/// Implementations only compare; validation has already happened (or will
/// happen) separately and the ledger holds its write lock for the call.
pub trait ForkChoice: Send + Sync {
    fn prefers(&self, incumbent: &[Record], candidate: &[Record]) -> bool;
}

/// Longest chain wins; ties go to the incumbent.
#[derive(Clone, Copy, Debug, Default)]
pub struct LongestChain;

impl ForkChoice for LongestChain {
    fn prefers(&self, incumbent: &[Record], candidate: &[Record]) -> bool {
        candidate.len() > incumbent.len()
    }
}
