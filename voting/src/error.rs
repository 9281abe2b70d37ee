//! Voting-specific errors.

use crate::capabilities::Denied;
use thiserror::Error;
use tribunal_types::{Address, VoteId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VotingError {
    #[error("vote {0} already exists")]
    VoteAlreadyExists(VoteId),

    #[error("vote {0} does not exist")]
    VoteDoesNotExist(VoteId),

    #[error("invalid outcome count {0}: must be between 2 and 253")]
    InvalidOutcomeCount(u8),

    #[error("participant already committed in vote {0}")]
    VoteAlreadyCommitted(VoteId),

    #[error("participant already revealed or leaked in vote {0}")]
    VoteAlreadyRevealed(VoteId),

    #[error("outcome {outcome} is not valid for vote {vote_id}")]
    InvalidOutcome { vote_id: VoteId, outcome: u8 },

    #[error("commitment does not match the declared outcome and salt")]
    InvalidCommitmentSalt,

    #[error("sender {0} is not a verified participant")]
    SenderNotVerified(Address),

    #[error("sender {0} has no canonical participant id")]
    UnknownParticipant(Address),

    #[error("sender {0} may not create vote instances")]
    SenderNotAllowed(Address),

    #[error("relay caller {0} is not the trusted identity registry")]
    UntrustedRelayCaller(Address),

    #[error("relay payload does not decode to a known action")]
    NoFunctionMatch,

    #[error("outcome tally overflow")]
    TallyOverflow,

    #[error(transparent)]
    Denied(#[from] Denied),
}
