//! Error definitions for note construction and derivation.
//!
//! Every error here is raised synchronously, at construction or at call
//! time. A failed constructor never yields a partially valid entity, and
//! oversized values are rejected rather than truncated.

use thiserror::Error;

/// Errors from note construction and derivation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoteError {
    /// A spending or viewing key had the wrong length
    #[error("invalid {key} key length: expected 32 bytes, got {len}")]
    InvalidKeyLength { key: &'static str, len: usize },

    /// The note random field had the wrong length
    #[error("invalid random length: expected 16 bytes, got {len}")]
    InvalidRandomLength { len: usize },

    /// A withdrawal address failed to parse
    #[error("invalid address: {0:?}")]
    InvalidAddress(String),

    /// A token descriptor failed validation
    #[error("invalid token data: {0}")]
    InvalidTokenData(&'static str),

    /// Bytes that must decode to a field element exceeded the modulus
    #[error("{context} is not a canonical field element")]
    NonCanonicalFieldElement { context: &'static str },

    /// A hash input exceeded the 32-byte field-element width
    #[error("input of {len} bytes does not fit in 32")]
    InputTooLong { len: usize },

    /// A serialized signature failed to decode
    #[error("invalid signature encoding: {0}")]
    InvalidSignature(&'static str),
}

/// Result type for note operations
pub type Result<T> = std::result::Result<T, NoteError>;
