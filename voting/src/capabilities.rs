//! Capability seams to the external court components.

use thiserror::Error;
use tribunal_types::{Address, ParticipantId, VoteId};

/// Denial returned by an external capability check.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("denied by the vote owner: {0}")]
pub struct Denied(String);

impl Denied {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Maps submitting addresses to canonical unique participants.
///
/// Uniqueness verification itself lives outside the core; the voting engine
/// only consumes the verdicts.
pub trait IdentityResolver {
    fn is_verified(&self, address: &Address) -> bool;

    /// Canonical participant id for an address, if one has been registered.
    fn unique_id(&self, address: &Address) -> Option<ParticipantId>;
}

/// Authorization and weighting capability of the component that owns the
/// vote instances (the dispute-lifecycle orchestrator).
pub trait VotingOwner {
    /// Instance-level check that commits are currently accepted.
    fn ensure_can_commit(&self, vote_id: VoteId) -> Result<(), Denied>;

    /// Participant-level check for a specific committer.
    fn ensure_can_commit_for(&self, vote_id: VoteId, voter: ParticipantId) -> Result<(), Denied>;

    /// Reveal-phase eligibility check. Returns the participant's voting
    /// weight, computed externally as of the instance's draft checkpoint.
    fn ensure_can_reveal(&self, vote_id: VoteId, voter: ParticipantId) -> Result<u128, Denied>;
}
