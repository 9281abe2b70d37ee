//! Fee-ledger errors.

use crate::capabilities::TransferFailed;
use thiserror::Error;
use tribunal_types::PeriodId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeesError {
    #[error("fee amount must be non-zero")]
    ZeroFeeAmount,

    #[error("period duration must be non-zero")]
    ZeroPeriodDuration,

    #[error("pre-payment allowance must be non-zero")]
    ZeroPrePaymentPeriods,

    #[error("governor share {0} exceeds the basis-point base")]
    GovernorShareTooHigh(u32),

    #[error("requested zero periods")]
    ZeroPeriodsRequested,

    #[error("paying through period {last} exceeds the {allowed} pre-payable periods past {current}")]
    TooManyPeriods {
        last: PeriodId,
        current: PeriodId,
        allowed: u64,
    },

    #[error("period {0} is not over yet")]
    NonPastPeriod(PeriodId),

    #[error("fees already claimed for period {0}")]
    AlreadyClaimed(PeriodId),

    #[error("nothing to claim for period {0}")]
    NothingToClaim(PeriodId),

    #[error("no governor fees accumulated")]
    ZeroTransfer,

    #[error("arithmetic overflow in fee computation")]
    Overflow,

    #[error(transparent)]
    Transfer(#[from] TransferFailed),
}
