//! The commit-reveal voting engine.

use crate::capabilities::{IdentityResolver, VotingOwner};
use crate::error::VotingError;
use crate::hash::hash_outcome;
use crate::relay::RelayedAction;
use crate::vote::{
    CastVote, Vote, MAX_POSSIBLE_OUTCOMES, MIN_POSSIBLE_OUTCOMES, OUTCOME_LEAKED, OUTCOME_MISSING,
    OUTCOME_REFUSED,
};
use std::collections::HashMap;
use tribunal_types::{Address, Commitment, ParticipantId, VoteId};

/// Manages the lifecycle of vote instances: creation, commitments, reveals,
/// leaks, and the weighted tally.
///
/// External collaborators are passed per call; the engine owns nothing but
/// vote state and its two configured trust anchors, so independent instances
/// coexist freely.
#[derive(Debug)]
pub struct VotingEngine {
    /// Only this address may create vote instances.
    creator: Address,
    /// Only this address may relay registration callbacks.
    registry: Address,
    votes: HashMap<VoteId, Vote>,
}

impl VotingEngine {
    pub fn new(creator: Address, registry: Address) -> Self {
        Self {
            creator,
            registry,
            votes: HashMap::new(),
        }
    }

    /// Create a vote instance with `possible_outcomes` custom outcomes.
    pub fn create(
        &mut self,
        caller: &Address,
        vote_id: VoteId,
        possible_outcomes: u8,
    ) -> Result<(), VotingError> {
        if *caller != self.creator {
            return Err(VotingError::SenderNotAllowed(caller.clone()));
        }
        if !(MIN_POSSIBLE_OUTCOMES..=MAX_POSSIBLE_OUTCOMES).contains(&possible_outcomes) {
            return Err(VotingError::InvalidOutcomeCount(possible_outcomes));
        }
        if self.votes.contains_key(&vote_id) {
            return Err(VotingError::VoteAlreadyExists(vote_id));
        }
        let max_allowed_outcome = OUTCOME_REFUSED + possible_outcomes;
        self.votes.insert(vote_id, Vote::new(max_allowed_outcome));
        tracing::debug!(vote_id, max_allowed_outcome, "vote created");
        Ok(())
    }

    /// Commit to an outcome on behalf of the caller's canonical participant.
    pub fn commit(
        &mut self,
        identity: &dyn IdentityResolver,
        owner: &dyn VotingOwner,
        caller: &Address,
        vote_id: VoteId,
        commitment: Commitment,
    ) -> Result<(), VotingError> {
        if !identity.is_verified(caller) {
            return Err(VotingError::SenderNotVerified(caller.clone()));
        }
        let voter = identity
            .unique_id(caller)
            .ok_or_else(|| VotingError::UnknownParticipant(caller.clone()))?;

        let vote = self
            .votes
            .get_mut(&vote_id)
            .ok_or(VotingError::VoteDoesNotExist(vote_id))?;
        if vote.votes.contains_key(&voter) {
            return Err(VotingError::VoteAlreadyCommitted(vote_id));
        }
        owner.ensure_can_commit(vote_id)?;
        owner.ensure_can_commit_for(vote_id, voter)?;

        vote.votes.insert(
            voter,
            CastVote {
                commitment,
                outcome: OUTCOME_MISSING,
            },
        );
        tracing::debug!(vote_id, voter, commitment = %commitment, "vote committed");
        Ok(())
    }

    /// Expose a participant's commitment before they reveal.
    ///
    /// Requires the matching outcome and salt, and that commits are still
    /// being accepted for the instance. The participant's outcome becomes
    /// `OUTCOME_LEAKED`: terminal and never tallied.
    pub fn leak(
        &mut self,
        owner: &dyn VotingOwner,
        vote_id: VoteId,
        voter: ParticipantId,
        outcome: u8,
        salt: &[u8; 32],
    ) -> Result<(), VotingError> {
        let vote = self
            .votes
            .get_mut(&vote_id)
            .ok_or(VotingError::VoteDoesNotExist(vote_id))?;
        owner.ensure_can_commit(vote_id)?;
        if vote.voter_outcome(voter) != OUTCOME_MISSING {
            return Err(VotingError::VoteAlreadyRevealed(vote_id));
        }
        check_commitment(vote.cast(voter), outcome, salt)?;

        vote.votes.entry(voter).or_default().outcome = OUTCOME_LEAKED;
        tracing::debug!(vote_id, voter, "vote leaked");
        Ok(())
    }

    /// Reveal a participant's committed outcome and fold their weight into
    /// the tally.
    pub fn reveal(
        &mut self,
        owner: &dyn VotingOwner,
        vote_id: VoteId,
        voter: ParticipantId,
        outcome: u8,
        salt: &[u8; 32],
    ) -> Result<(), VotingError> {
        let vote = self
            .votes
            .get_mut(&vote_id)
            .ok_or(VotingError::VoteDoesNotExist(vote_id))?;
        if vote.voter_outcome(voter) != OUTCOME_MISSING {
            return Err(VotingError::VoteAlreadyRevealed(vote_id));
        }
        if !vote.is_valid_outcome(outcome) {
            return Err(VotingError::InvalidOutcome { vote_id, outcome });
        }
        check_commitment(vote.cast(voter), outcome, salt)?;
        let weight = owner.ensure_can_reveal(vote_id, voter)?;

        vote.record_reveal(voter, outcome, weight)?;
        tracing::debug!(vote_id, voter, outcome, weight, "vote revealed");
        Ok(())
    }

    /// Registration callback from the trusted identity registry, replaying
    /// an action on behalf of a newly verified participant.
    pub fn receive_registration(
        &mut self,
        identity: &dyn IdentityResolver,
        owner: &dyn VotingOwner,
        caller: &Address,
        subject: &Address,
        payload: &[u8],
    ) -> Result<(), VotingError> {
        if *caller != self.registry {
            return Err(VotingError::UntrustedRelayCaller(caller.clone()));
        }
        let action = RelayedAction::decode(payload).ok_or(VotingError::NoFunctionMatch)?;
        match action {
            RelayedAction::Commit {
                vote_id,
                commitment,
            } => self.commit(identity, owner, subject, vote_id, commitment),
        }
    }

    // --- queries ---

    pub fn exists(&self, vote_id: VoteId) -> bool {
        self.votes.contains_key(&vote_id)
    }

    pub fn max_allowed_outcome(&self, vote_id: VoteId) -> Result<u8, VotingError> {
        Ok(self.vote(vote_id)?.max_allowed_outcome)
    }

    /// Accumulated weight revealed in favor of `outcome`.
    pub fn outcome_tally(&self, vote_id: VoteId, outcome: u8) -> Result<u128, VotingError> {
        Ok(self.vote(vote_id)?.tally_of(outcome))
    }

    /// The winning outcome, refused when nothing has been tallied yet.
    pub fn winning_outcome(&self, vote_id: VoteId) -> Result<u8, VotingError> {
        let vote = self.vote(vote_id)?;
        if vote.winning_outcome == OUTCOME_MISSING {
            Ok(OUTCOME_REFUSED)
        } else {
            Ok(vote.winning_outcome)
        }
    }

    pub fn winning_outcome_tally(&self, vote_id: VoteId) -> Result<u128, VotingError> {
        let vote = self.vote(vote_id)?;
        Ok(vote.tally_of(vote.winning_outcome))
    }

    pub fn is_valid_outcome(&self, vote_id: VoteId, outcome: u8) -> Result<bool, VotingError> {
        Ok(self.vote(vote_id)?.is_valid_outcome(outcome))
    }

    /// A participant's recorded outcome, `OUTCOME_MISSING` if none.
    pub fn voter_outcome(&self, vote_id: VoteId, voter: ParticipantId) -> Result<u8, VotingError> {
        Ok(self.vote(vote_id)?.voter_outcome(voter))
    }

    /// Whether each of `voters` revealed in favor of `outcome`. Participants
    /// who never voted compare as not-in-favor of any outcome.
    pub fn voters_in_favor_of(
        &self,
        vote_id: VoteId,
        outcome: u8,
        voters: &[ParticipantId],
    ) -> Result<Vec<bool>, VotingError> {
        let vote = self.vote(vote_id)?;
        Ok(voters
            .iter()
            .map(|&v| {
                let recorded = vote.voter_outcome(v);
                recorded != OUTCOME_MISSING && recorded == outcome
            })
            .collect())
    }

    fn vote(&self, vote_id: VoteId) -> Result<&Vote, VotingError> {
        self.votes
            .get(&vote_id)
            .ok_or(VotingError::VoteDoesNotExist(vote_id))
    }
}

/// Verify that `outcome` and `salt` reproduce the stored commitment. A
/// participant who never committed holds the empty commitment, which no
/// hash reproduces.
fn check_commitment(
    cast: Option<&CastVote>,
    outcome: u8,
    salt: &[u8; 32],
) -> Result<(), VotingError> {
    let stored = cast.map_or(Commitment::ZERO, |c| c.commitment);
    if hash_outcome(outcome, salt) != stored {
        return Err(VotingError::InvalidCommitmentSalt);
    }
    Ok(())
}
