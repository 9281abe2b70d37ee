//! Tree-specific errors.

use thiserror::Error;
use tribunal_types::TermId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("checkpoint at {at} precedes the last recorded point {last}")]
    OutOfOrderCheckpoint { at: TermId, last: TermId },

    #[error("key {key} is not adjacent: next assignable key is {next}")]
    NewKeyNotAdjacent { key: u64, next: u64 },

    #[error("item {0} does not exist in the tree")]
    InexistentItem(u64),

    #[error("sum update overflows: {total} + {delta}")]
    UpdateOverflow { total: u128, delta: u128 },

    #[error("sum update underflows: {value} - {delta}")]
    UpdateUnderflow { value: u128, delta: u128 },

    #[error("sortition value {value} out of bounds: total sum is {total}")]
    SortitionOutOfBounds { value: u128, total: u128 },

    #[error("subtree sums under depth {depth}, key {key:#x} do not cover the root total")]
    InconsistentSum { depth: u32, key: u64 },

    #[error("key space exhausted")]
    KeySpaceExhausted,
}
