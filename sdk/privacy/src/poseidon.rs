//! Poseidon hash over the BLS12-381 scalar field.
//!
//! Every derived value in the crate is a chain of these hashes, so the
//! hasher is built once and passed explicitly to each derivation. That keeps
//! the primitive boundary visible and lets tests substitute a hasher of
//! their own construction to confirm determinism.

use ark_bls12_381::Fr;
use ark_crypto_primitives::sponge::{
    CryptographicSponge,
    poseidon::{PoseidonConfig, PoseidonSponge, find_poseidon_ark_and_mds},
};

/// Field: BLS12-381 Fr (255 bits)
/// Rate: 2, Capacity: 1
/// Security: 128 bits
const PRIME_BITS: u64 = 255;
const RATE: usize = 2;
const CAPACITY: usize = 1;
const FULL_ROUNDS: u64 = 8;
const PARTIAL_ROUNDS: u64 = 57;
const ALPHA: u64 = 5;
const SKIP_MATRICES: u64 = 0;

/// A reusable Poseidon hasher.
///
/// Parameter generation is by far the most expensive step, so it happens
/// once here rather than per hash call.
#[derive(Clone)]
pub struct PoseidonHasher {
    config: PoseidonConfig<Fr>,
}

impl PoseidonHasher {
    pub fn new() -> Self {
        let (ark, mds) = find_poseidon_ark_and_mds::<Fr>(
            PRIME_BITS,
            RATE,
            FULL_ROUNDS,
            PARTIAL_ROUNDS,
            SKIP_MATRICES,
        );

        Self {
            config: PoseidonConfig::new(
                FULL_ROUNDS as usize,
                PARTIAL_ROUNDS as usize,
                ALPHA,
                mds,
                ark,
                RATE,
                CAPACITY,
            ),
        }
    }

    /// Hash a sequence of field elements to a single field element.
    ///
    /// Inputs are absorbed in order; both the count and the order of inputs
    /// are part of the image.
    pub fn hash(&self, inputs: &[Fr]) -> Fr {
        let mut sponge = PoseidonSponge::new(&self.config);
        for input in inputs {
            sponge.absorb(input);
        }
        sponge.squeeze_field_elements(1)[0]
    }
}

impl Default for PoseidonHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic_across_instances() {
        let h1 = PoseidonHasher::new();
        let h2 = PoseidonHasher::new();
        let inputs = [Fr::from(1u64), Fr::from(2u64)];

        assert_eq!(h1.hash(&inputs), h2.hash(&inputs));
    }

    #[test]
    fn test_hash_binds_order() {
        let hasher = PoseidonHasher::new();
        let a = Fr::from(1u64);
        let b = Fr::from(2u64);

        assert_ne!(hasher.hash(&[a, b]), hasher.hash(&[b, a]));
    }

    #[test]
    fn test_hash_binds_arity() {
        let hasher = PoseidonHasher::new();
        let a = Fr::from(1u64);
        let zero = Fr::from(0u64);

        assert_ne!(hasher.hash(&[a]), hasher.hash(&[a, zero]));
    }
}
