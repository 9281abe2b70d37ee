//! Plain identifier aliases.

/// Identifier of a vote instance, assigned by the orchestrator.
pub type VoteId = u64;

/// Index of a fee period since the ledger's start term.
pub type PeriodId = u64;

/// Canonical unique participant identifier, assigned by the external
/// identity registry. Distinct addresses may map to the same participant.
pub type ParticipantId = u64;
