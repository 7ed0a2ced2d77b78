//! Token descriptors and canonical token identifiers.
//!
//! Fungible tokens are identified by their contract address alone, widened
//! to the fixed 32-byte width. The two non-fungible kinds bind an extra
//! 256-bit sub-id, hashed together with the address so every identifier
//! keeps the same width regardless of the sub-id space.

use std::fmt;
use std::str::FromStr;

use ark_bls12_381::Fr;
pub use ruint::aliases::U256;
use serde::{Deserialize, Serialize};

use crate::bytes::{self, Address};
use crate::error::{NoteError, Result};
use crate::poseidon::PoseidonHasher;

/// The kind of token a note carries.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TokenType {
    /// Identified by contract address alone; the sub-id is unused.
    Fungible,
    /// A unique token instance, one sub-id per token.
    NonFungible,
    /// A semi-fungible token class with balances per sub-id.
    SemiFungible,
}

/// A validated token descriptor.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TokenData {
    pub token_type: TokenType,
    pub token_address: Address,
    pub token_sub_id: U256,
}

impl TokenData {
    /// Build a descriptor from a `0x`-hex address string.
    ///
    /// The sub-id range and the token-kind set are carried by their types;
    /// the address pattern is the remaining runtime check.
    pub fn new(token_type: TokenType, token_address: &str, token_sub_id: U256) -> Result<Self> {
        let token_address = Address::from_str(token_address).map_err(|_| {
            NoteError::InvalidTokenData("token address must match ^0x[0-9a-fA-F]{40}$")
        })?;
        Ok(Self {
            token_type,
            token_address,
            token_sub_id,
        })
    }

    /// Shorthand for a fungible descriptor; the sub-id is zero by convention.
    pub fn fungible(token_address: &str) -> Result<Self> {
        Self::new(TokenType::Fungible, token_address, U256::ZERO)
    }

    /// Invariant check shared by both note constructors.
    ///
    /// Beyond what the types already enforce, a non-fungible sub-id must fit
    /// the hash field, since it is consumed as a Poseidon input.
    pub fn validate(&self) -> Result<()> {
        match self.token_type {
            TokenType::Fungible => Ok(()),
            TokenType::NonFungible | TokenType::SemiFungible => {
                bytes::field_from_be::<Fr>(&bytes::encode32(self.token_sub_id), "token sub-id")
                    .map(|_| ())
            }
        }
    }

    /// Derive the canonical 32-byte token identifier.
    ///
    /// Fungible: the zero-padded address itself. Non-fungible kinds:
    /// `Poseidon(pad32(address), sub_id)`.
    pub fn token_id(&self, hasher: &PoseidonHasher) -> Result<TokenId> {
        match self.token_type {
            TokenType::Fungible => Ok(TokenId(self.token_address.padded32())),
            TokenType::NonFungible | TokenType::SemiFungible => {
                let address: Fr =
                    bytes::field_from_be(&self.token_address.padded32(), "token address")?;
                let sub_id: Fr =
                    bytes::field_from_be(&bytes::encode32(self.token_sub_id), "token sub-id")?;
                Ok(TokenId(bytes::field_to_be(hasher.hash(&[address, sub_id]))))
            }
        }
    }
}

/// A canonical fixed-width token identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TokenId(pub [u8; 32]);

impl TokenId {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_field(&self) -> Result<Fr> {
        bytes::field_from_be(&self.0, "token id")
    }
}

impl AsRef<[u8]> for TokenId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
