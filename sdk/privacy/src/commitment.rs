//! Note commitments.
//!
//! The commitment is the only note-derived value intended for publication:
//! a single field element that reveals nothing about owner, token or value
//! without the note's secret inputs.

use std::fmt;

use ark_bls12_381::Fr;
use serde::{Deserialize, Serialize};

use crate::bytes;
use crate::error::Result;

/// A note commitment (32 bytes, canonical big-endian field encoding)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Commitment(pub [u8; 32]);

impl Commitment {
    /// Create commitment from field element
    pub fn from_field(f: Fr) -> Self {
        Self(bytes::field_to_be(f))
    }

    /// Convert to field element
    pub fn to_field(&self) -> Result<Fr> {
        bytes::field_from_be(&self.0, "commitment")
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl AsRef<[u8]> for Commitment {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
