//! Append-only per-key value history.
//!
//! Every node of the sum tree stores one of these series, which is what
//! makes the whole structure queryable "as of" any past term.

use crate::error::TreeError;
use serde::{Deserialize, Serialize};
use tribunal_types::TermId;

/// A single recorded point of a value's history.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    pub at: TermId,
    pub value: u128,
}

/// Append-only history of a value over logical time.
///
/// Entries are sorted ascending by term. Writing at the latest recorded term
/// overwrites that entry; writing at an earlier term is rejected.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Checkpoints {
    history: Vec<Checkpoint>,
}

impl Checkpoints {
    pub fn new() -> Self {
        Self { history: Vec::new() }
    }

    /// A history seeded with a single entry.
    pub fn with_initial(at: TermId, value: u128) -> Self {
        Self {
            history: vec![Checkpoint { at, value }],
        }
    }

    /// Record `value` at term `at`.
    ///
    /// Appends when `at` is past the last recorded term, overwrites when it
    /// equals it, and fails with `OutOfOrderCheckpoint` when it precedes it.
    pub fn add(&mut self, at: TermId, value: u128) -> Result<(), TreeError> {
        match self.history.last_mut() {
            Some(last) if at < last.at => Err(TreeError::OutOfOrderCheckpoint { at, last: last.at }),
            Some(last) if at == last.at => {
                last.value = value;
                Ok(())
            }
            _ => {
                self.history.push(Checkpoint { at, value });
                Ok(())
            }
        }
    }

    /// Value at the greatest recorded term `<= at`, or zero if none.
    pub fn get(&self, at: TermId) -> u128 {
        let idx = self.history.partition_point(|c| c.at <= at);
        if idx == 0 {
            0
        } else {
            self.history[idx - 1].value
        }
    }

    /// Value at the greatest recorded term, or zero if the history is empty.
    pub fn get_last(&self) -> u128 {
        self.history.last().map(|c| c.value).unwrap_or(0)
    }

    /// Term of the most recent entry, if any.
    pub fn last_term(&self) -> Option<TermId> {
        self.history.last().map(|c| c.at)
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }
}
