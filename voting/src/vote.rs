//! Vote instance records and outcome codes.

use crate::error::VotingError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tribunal_types::{Commitment, ParticipantId};

/// No recorded outcome.
pub const OUTCOME_MISSING: u8 = 0;
/// Commitment was leaked before reveal; permanently excluded from the tally.
pub const OUTCOME_LEAKED: u8 = 1;
/// Refusal to rule. The lowest valid reveal target and the default winner.
pub const OUTCOME_REFUSED: u8 = 2;

/// Fewest custom outcomes a vote instance may offer.
pub const MIN_POSSIBLE_OUTCOMES: u8 = 2;
/// Most custom outcomes: the code space above refused within a byte.
pub const MAX_POSSIBLE_OUTCOMES: u8 = u8::MAX - OUTCOME_REFUSED;

/// A participant's recorded action within one vote instance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CastVote {
    pub commitment: Commitment,
    pub outcome: u8,
}

impl Default for CastVote {
    fn default() -> Self {
        Self {
            commitment: Commitment::ZERO,
            outcome: OUTCOME_MISSING,
        }
    }
}

/// State of a single vote instance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vote {
    /// Highest valid outcome code: `OUTCOME_REFUSED + possible_outcomes`.
    pub max_allowed_outcome: u8,
    /// Current winner, `OUTCOME_MISSING` until the first winning reveal.
    pub winning_outcome: u8,
    pub(crate) votes: HashMap<ParticipantId, CastVote>,
    pub(crate) tally: HashMap<u8, u128>,
}

impl Vote {
    pub fn new(max_allowed_outcome: u8) -> Self {
        Self {
            max_allowed_outcome,
            winning_outcome: OUTCOME_MISSING,
            votes: HashMap::new(),
            tally: HashMap::new(),
        }
    }

    /// Whether `outcome` is a valid reveal target: refused or a custom code
    /// up to the allowed maximum. Missing and leaked never are.
    pub fn is_valid_outcome(&self, outcome: u8) -> bool {
        (OUTCOME_REFUSED..=self.max_allowed_outcome).contains(&outcome)
    }

    pub fn cast(&self, voter: ParticipantId) -> Option<&CastVote> {
        self.votes.get(&voter)
    }

    /// Recorded outcome for a participant, `OUTCOME_MISSING` if none.
    pub fn voter_outcome(&self, voter: ParticipantId) -> u8 {
        self.votes.get(&voter).map_or(OUTCOME_MISSING, |c| c.outcome)
    }

    /// Accumulated weight revealed in favor of `outcome`.
    pub fn tally_of(&self, outcome: u8) -> u128 {
        self.tally.get(&outcome).copied().unwrap_or(0)
    }

    /// Fold a weighted reveal into the tally and update the winner.
    ///
    /// The winner is replaced when the updated tally strictly exceeds the
    /// current winner's, or equals it with a lower outcome code.
    pub(crate) fn record_reveal(
        &mut self,
        voter: ParticipantId,
        outcome: u8,
        weight: u128,
    ) -> Result<(), VotingError> {
        let new_tally = self
            .tally_of(outcome)
            .checked_add(weight)
            .ok_or(VotingError::TallyOverflow)?;

        self.votes.entry(voter).or_default().outcome = outcome;
        self.tally.insert(outcome, new_tally);

        let winning_tally = self.tally_of(self.winning_outcome);
        if new_tally > winning_tally
            || (new_tally == winning_tally && outcome < self.winning_outcome)
        {
            self.winning_outcome = outcome;
        }
        Ok(())
    }
}
