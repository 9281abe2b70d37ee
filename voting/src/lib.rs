//! Commit-reveal voting for dispute resolution.
//!
//! A vote instance collects hashed commitments, then weighted reveals, and
//! resolves a winning outcome with deterministic tie-breaking (lowest code
//! wins a tie). Participants are canonical unique ids supplied by an external
//! identity registry; authorization and voting weights come from the external
//! component that owns the vote instances.

pub mod capabilities;
pub mod engine;
pub mod error;
pub mod hash;
pub mod relay;
pub mod vote;

pub use capabilities::{Denied, IdentityResolver, VotingOwner};
pub use engine::VotingEngine;
pub use error::VotingError;
pub use hash::hash_outcome;
pub use relay::RelayedAction;
pub use vote::{
    CastVote, Vote, MAX_POSSIBLE_OUTCOMES, MIN_POSSIBLE_OUTCOMES, OUTCOME_LEAKED, OUTCOME_MISSING,
    OUTCOME_REFUSED,
};
