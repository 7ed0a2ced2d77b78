//! Nullifiers.
//!
//! A nullifier is the one-time tag published when a note is spent. It is
//! bound to the note's nullifying key and its leaf position, so an external
//! set of seen nullifiers detects double-spends without learning which
//! commitment was consumed.

use std::fmt;

use ark_bls12_381::Fr;
use serde::{Deserialize, Serialize};

use crate::bytes;
use crate::error::Result;

/// A nullifier (32 bytes, canonical big-endian field encoding)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Nullifier(pub [u8; 32]);

impl Nullifier {
    /// Create from field element
    pub fn from_field(f: Fr) -> Self {
        Self(bytes::field_to_be(f))
    }

    /// Convert to field element
    pub fn to_field(&self) -> Result<Fr> {
        bytes::field_from_be(&self.0, "nullifier")
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Nullifier {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Nullifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
