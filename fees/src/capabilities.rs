//! Capability seams to the external court and token ledger.

use thiserror::Error;
use tribunal_types::{Address, TermId};

/// Term context supplied by the court's clock.
pub trait Clock {
    fn current_term_id(&self) -> TermId;

    /// Randomness associated with a term. Implementations must return a
    /// value for every term at or before the current one; the ledger relies
    /// on the result being stable for past terms.
    fn randomness_at(&self, term: TermId) -> [u8; 32];
}

/// Historical weighted-balance queries, served externally (e.g. by a
/// registry built over the checkpointed sum tree).
pub trait BalanceRegistry {
    fn weight_at(&self, holder: &Address, at: TermId) -> u128;

    fn total_weight_at(&self, at: TermId) -> u128;
}

/// Failure reported by the external token ledger.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("token transfer failed: {0}")]
pub struct TransferFailed(String);

impl TransferFailed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// External token ledger with transfer semantics. The fee module is the
/// implicit counterparty of both calls.
pub trait TokenLedger {
    /// Pull `amount` of `token` from `from` into the fee module.
    fn transfer_from(
        &mut self,
        token: &Address,
        from: &Address,
        amount: u128,
    ) -> Result<(), TransferFailed>;

    /// Pay `amount` of `token` out of the fee module to `to`.
    fn transfer(&mut self, token: &Address, to: &Address, amount: u128)
        -> Result<(), TransferFailed>;
}
