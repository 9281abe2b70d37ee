//! Structured relay payloads for identity-registration callbacks.
//!
//! The identity registry may replay an action a participant intended before
//! their verification completed. Payloads are tagged actions; anything that
//! does not decode to a known action is rejected.

use serde::{Deserialize, Serialize};
use tribunal_types::{Commitment, VoteId};

/// An action relayed through the identity registry on a participant's behalf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelayedAction {
    /// Replay of a commit the participant prepared before verification.
    Commit {
        vote_id: VoteId,
        commitment: Commitment,
    },
}

impl RelayedAction {
    /// Decode a relay payload, `None` for unknown or malformed actions.
    pub fn decode(payload: &[u8]) -> Option<Self> {
        bincode::deserialize(payload).ok()
    }

    pub fn encode(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }
}
