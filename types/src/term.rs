//! Logical time used throughout the core.
//!
//! A term is an opaque, monotonically increasing tick driven by an external
//! clock. All checkpointed state is keyed by term, never by wall-clock time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A logical term number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TermId(u64);

impl TermId {
    /// Term zero, the origin of logical time.
    pub const ZERO: Self = Self(0);

    pub fn new(term: u64) -> Self {
        Self(term)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The term `offset` ticks after this one, saturating at the maximum.
    pub fn advanced_by(&self, offset: u64) -> Self {
        Self(self.0.saturating_add(offset))
    }

    /// Terms elapsed since `earlier`, or zero if `earlier` is in the future.
    pub fn since(&self, earlier: TermId) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "term {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_ordering() {
        assert!(TermId::new(3) < TermId::new(7));
        assert_eq!(TermId::ZERO, TermId::new(0));
    }

    #[test]
    fn advanced_by_saturates() {
        let t = TermId::new(u64::MAX);
        assert_eq!(t.advanced_by(10), t);
    }

    #[test]
    fn since_clamps_future() {
        assert_eq!(TermId::new(5).since(TermId::new(9)), 0);
        assert_eq!(TermId::new(9).since(TermId::new(5)), 4);
    }
}
