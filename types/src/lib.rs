//! Fundamental types for the tribunal core.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: logical time, account addresses, commitment hashes, and the
//! plain identifier aliases for votes, periods, and participants.

pub mod address;
pub mod commitment;
pub mod id;
pub mod term;

pub use address::Address;
pub use commitment::Commitment;
pub use id::{ParticipantId, PeriodId, VoteId};
pub use term::TermId;
