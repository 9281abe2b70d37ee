//! Subscription fees over fixed-length term periods.
//!
//! Time is partitioned into periods of a configured number of terms.
//! Subscribers pay a per-period fee (with a surcharge for periods they let
//! lapse), and weighted participants later claim a pro-rata share of each
//! past period's collections, sampled at a pseudo-random term inside the
//! period so balances cannot be timed around a known checkpoint.

pub mod capabilities;
pub mod config;
pub mod engine;
pub mod error;
pub mod period;

pub use capabilities::{BalanceRegistry, Clock, TokenLedger, TransferFailed};
pub use config::{FeeConfig, PCT_BASE};
pub use engine::FeesEngine;
pub use error::FeesError;
pub use period::{Period, PeriodBalance, PeriodFee, Subscriber};
