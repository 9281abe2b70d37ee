//! Fee ledger configuration.

use crate::error::FeesError;
use serde::{Deserialize, Serialize};
use tribunal_types::{Address, TermId};

/// Basis-point denominator for percentage configuration.
pub const PCT_BASE: u32 = 10_000;

/// Static configuration of the fee ledger, validated at construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Recipient of the carved-out governor share.
    pub governor: Address,
    /// Token fees are denominated in; snapshotted per period on first touch.
    pub fee_token: Address,
    /// Fee per period; snapshotted per period on first touch.
    pub fee_amount: u128,
    /// Term at which period 0 begins.
    pub start_term: TermId,
    /// Length of a period in terms.
    pub period_duration: u64,
    /// How many periods past the current one a subscriber may pre-pay.
    pub pre_payment_periods: u64,
    /// Surcharge on delayed periods, in basis points.
    pub late_payment_penalty_pct: u32,
    /// Share of paid fees carved out for the governor, in basis points.
    pub governor_share_pct: u32,
}

impl FeeConfig {
    pub fn validate(&self) -> Result<(), FeesError> {
        if self.fee_amount == 0 {
            return Err(FeesError::ZeroFeeAmount);
        }
        if self.period_duration == 0 {
            return Err(FeesError::ZeroPeriodDuration);
        }
        if self.pre_payment_periods == 0 {
            return Err(FeesError::ZeroPrePaymentPeriods);
        }
        if self.governor_share_pct > PCT_BASE {
            return Err(FeesError::GovernorShareTooHigh(self.governor_share_pct));
        }
        Ok(())
    }
}
