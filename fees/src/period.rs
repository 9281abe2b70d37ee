//! Subscriber and period records.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tribunal_types::{Address, PeriodId, TermId};

/// Payment state of one subscriber.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Subscriber {
    pub subscribed: bool,
    /// Last period this subscriber has paid through. Never decreases.
    pub last_payment_period_id: PeriodId,
}

/// Fee token and amount frozen for one period.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodFee {
    pub token: Address,
    pub amount: u128,
}

/// Balance sampling details frozen for one period on first ensure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBalance {
    /// Pseudo-randomly chosen term within the period's span.
    pub checkpoint: TermId,
    /// Total active weighted balance at the checkpoint.
    pub total_active: u128,
}

/// Bookkeeping for one fee period, materialized lazily on first access.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Period {
    /// Snapshot of the configured fee, taken on the first payment and
    /// immutable after.
    pub fee: Option<PeriodFee>,
    /// Snapshot of the balance checkpoint, taken on the first ensure and
    /// immutable after.
    pub balance: Option<PeriodBalance>,
    /// Fees collected for this period net of the governor share.
    pub collected_fees: u128,
    pub(crate) claimed: HashSet<Address>,
}

impl Period {
    pub fn has_claimed(&self, participant: &Address) -> bool {
        self.claimed.contains(participant)
    }
}
