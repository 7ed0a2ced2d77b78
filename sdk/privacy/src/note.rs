//! Shielded and withdrawal notes.
//!
//! A shielded note binds a spending key, viewing key, value, randomness and
//! token descriptor behind a single published commitment:
//!
//! ```text
//! nk   = Poseidon(vk)
//! spk  = B · clamp(blake3(sk))            (Jubjub public key)
//! mpk  = Poseidon(spk.x, spk.y, nk)
//! npk  = Poseidon(mpk, pad32(random))
//! C    = Poseidon(npk, tokenId, value)    (published)
//! N(i) = Poseidon(nk, i)                  (published on spend at leaf i)
//! ```
//!
//! A withdrawal note replaces `npk` with its plain target address, producing
//! a commitment of the same shape whose owner is deliberately inspectable.

use std::str::FromStr;

use ark_bls12_381::Fr;
use serde::{Deserialize, Serialize};

use crate::bytes::{self, Address};
use crate::commitment::Commitment;
use crate::eddsa::{PublicKey, Signature, SigningKey};
use crate::error::{NoteError, Result};
use crate::nullifier::Nullifier;
use crate::poseidon::PoseidonHasher;
use crate::token::{TokenData, TokenId};

/// Note value with overflow protection; the admissible range `[0, 2^128)`
/// is the type's own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoteValue(pub u128);

impl NoteValue {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u128::MAX);

    pub fn new(value: u128) -> Self {
        Self(value)
    }

    pub fn as_u128(&self) -> u128 {
        self.0
    }

    /// Checked addition
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Checked subtraction
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

/// A shielded note: privately held value, spendable only by its key owner.
///
/// All fields are fixed at construction; every published artifact is
/// recomputed on demand from them.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Note {
    spending_key: [u8; 32],
    viewing_key: [u8; 32],
    value: NoteValue,
    random: [u8; 16],
    token_data: TokenData,
}

impl Note {
    /// Validate inputs and build a note.
    ///
    /// Key and random lengths, the viewing key's field encoding and the
    /// token invariants are all checked here; a failure constructs nothing.
    pub fn new(
        spending_key: &[u8],
        viewing_key: &[u8],
        value: u128,
        random: &[u8],
        token_data: TokenData,
    ) -> Result<Self> {
        let spending_key: [u8; 32] =
            spending_key
                .try_into()
                .map_err(|_| NoteError::InvalidKeyLength {
                    key: "spending",
                    len: spending_key.len(),
                })?;
        let viewing_key: [u8; 32] =
            viewing_key
                .try_into()
                .map_err(|_| NoteError::InvalidKeyLength {
                    key: "viewing",
                    len: viewing_key.len(),
                })?;
        let random: [u8; 16] = random
            .try_into()
            .map_err(|_| NoteError::InvalidRandomLength { len: random.len() })?;

        // The viewing key is consumed directly as a hash input; reject
        // encodings outside the field now rather than at first derivation.
        bytes::field_from_be::<Fr>(&viewing_key, "viewing key")?;
        token_data.validate()?;

        Ok(Self {
            spending_key,
            viewing_key,
            value: NoteValue(value),
            random,
            token_data,
        })
    }

    pub fn value(&self) -> NoteValue {
        self.value
    }

    pub fn token_data(&self) -> &TokenData {
        &self.token_data
    }

    /// Nullifying key: `Poseidon(vk)`.
    pub fn nullifying_key(&self, hasher: &PoseidonHasher) -> Result<Fr> {
        let vk: Fr = bytes::field_from_be(&self.viewing_key, "viewing key")?;
        Ok(hasher.hash(&[vk]))
    }

    /// Spending public key: the Jubjub point for the spending key.
    pub fn spending_public_key(&self) -> PublicKey {
        SigningKey::from_seed(&self.spending_key).public_key()
    }

    /// Master public key: binds spending and nullifying authority together.
    pub fn master_public_key(&self, hasher: &PoseidonHasher) -> Result<Fr> {
        let spk = self.spending_public_key();
        let nk = self.nullifying_key(hasher)?;
        Ok(hasher.hash(&[spk.x(), spk.y(), nk]))
    }

    /// Note public key: binds the master key to this note's randomness.
    pub fn note_public_key(&self, hasher: &PoseidonHasher) -> Result<Fr> {
        let mpk = self.master_public_key(hasher)?;
        let random: Fr = bytes::field_from_be(&bytes::pad32(&self.random)?, "random")?;
        Ok(hasher.hash(&[mpk, random]))
    }

    /// The canonical identifier of this note's token.
    pub fn token_id(&self, hasher: &PoseidonHasher) -> Result<TokenId> {
        self.token_data.token_id(hasher)
    }

    /// The published commitment: `Poseidon(npk, tokenId, value)`.
    pub fn commitment(&self, hasher: &PoseidonHasher) -> Result<Commitment> {
        let npk = self.note_public_key(hasher)?;
        let token_id = self.token_id(hasher)?.to_field()?;
        let value: Fr = bytes::field_from_be(&bytes::encode32_u128(self.value.0), "value")?;
        Ok(Commitment::from_field(hasher.hash(&[npk, token_id, value])))
    }

    /// The spend tag for this note once inserted at `leaf_index`.
    ///
    /// Deterministic per (viewing key, leaf index). The index is assigned by
    /// the external accumulator when the commitment is inserted; it is not
    /// note state.
    pub fn nullifier(&self, hasher: &PoseidonHasher, leaf_index: u64) -> Result<Nullifier> {
        let nk = self.nullifying_key(hasher)?;
        let index: Fr = bytes::field_from_be(&bytes::encode32_u64(leaf_index), "leaf index")?;
        Ok(Nullifier::from_field(hasher.hash(&[nk, index])))
    }

    /// Sign a transaction, binding this spend to the transaction's full
    /// nullifier and output sets.
    ///
    /// The sighash absorbs the root, the bound-parameters hash, then every
    /// nullifier and output commitment in exactly the order supplied; a
    /// reordered list signs differently.
    pub fn sign(
        &self,
        hasher: &PoseidonHasher,
        merkle_root: &[u8; 32],
        bound_params_hash: &[u8; 32],
        nullifiers: &[Nullifier],
        output_commitments: &[Commitment],
    ) -> Result<Signature> {
        let mut inputs = Vec::with_capacity(2 + nullifiers.len() + output_commitments.len());
        inputs.push(bytes::field_from_be(merkle_root, "merkle root")?);
        inputs.push(bytes::field_from_be(bound_params_hash, "bound params hash")?);
        for nullifier in nullifiers {
            inputs.push(nullifier.to_field()?);
        }
        for commitment in output_commitments {
            inputs.push(commitment.to_field()?);
        }

        let sighash = hasher.hash(&inputs);
        Ok(SigningKey::from_seed(&self.spending_key).sign(hasher, sighash))
    }
}

/// A note paying out to a public address.
///
/// Commitment-compatible with shielded notes but terminal: it carries no
/// key material, so there is no nullifier and no signing surface.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct WithdrawNote {
    withdraw_address: Address,
    value: NoteValue,
    token_data: TokenData,
}

impl WithdrawNote {
    /// Validate inputs and build a withdrawal note.
    pub fn new(withdraw_address: &str, value: u128, token_data: TokenData) -> Result<Self> {
        let withdraw_address = Address::from_str(withdraw_address)?;
        token_data.validate()?;

        Ok(Self {
            withdraw_address,
            value: NoteValue(value),
            token_data,
        })
    }

    pub fn value(&self) -> NoteValue {
        self.value
    }

    pub fn withdraw_address(&self) -> &Address {
        &self.withdraw_address
    }

    /// The note public key of a withdrawal is its plain padded address.
    pub fn note_public_key(&self) -> [u8; 32] {
        self.withdraw_address.padded32()
    }

    /// The canonical identifier of this note's token.
    pub fn token_id(&self, hasher: &PoseidonHasher) -> Result<TokenId> {
        self.token_data.token_id(hasher)
    }

    /// Same formula as the shielded commitment, so both note kinds are
    /// indistinguishable as 32-byte leaves.
    pub fn commitment(&self, hasher: &PoseidonHasher) -> Result<Commitment> {
        let npk: Fr = bytes::field_from_be(&self.note_public_key(), "note public key")?;
        let token_id = self.token_id(hasher)?.to_field()?;
        let value: Fr = bytes::field_from_be(&bytes::encode32_u128(self.value.0), "value")?;
        Ok(Commitment::from_field(hasher.hash(&[npk, token_id, value])))
    }
}
