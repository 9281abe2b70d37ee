//! Commitment hashing for the commit-reveal protocol.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use tribunal_types::Commitment;

type Blake2b256 = Blake2b<U32>;

/// Commitment to an outcome under a salt: Blake2b-256 of `outcome ‖ salt`.
pub fn hash_outcome(outcome: u8, salt: &[u8; 32]) -> Commitment {
    let mut hasher = Blake2b256::new();
    hasher.update([outcome]);
    hasher.update(salt);
    let digest = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&digest);
    Commitment::new(output)
}
