//! Caligo Privacy SDK
//!
//! Shielded note primitives: the derivation chain from a spending key to a
//! published commitment, canonical token identifiers, per-spend nullifiers,
//! and the transaction-signing protocol binding a spend to its
//! transaction's nullifier and output sets.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                        Shielded Note                           │
//! │  spending key ──► spending pubkey ─┐                           │
//! │  viewing key ───► nullifying key ──┴─► master pubkey ─┐        │
//! │  random ──────────────────────────────────────────────┴─► npk  │
//! │  token data ───► token id ─────────┐                      │    │
//! │  value ────────────────────────────┴──► commitment (public)    │
//! │                                                                │
//! │  nullifying key + leaf index ─────────► nullifier  (on spend)  │
//! │  spending key + tx context ───────────► signature  (on spend)  │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Withdrawal notes share the commitment shape, with their plain target
//! address in place of the note public key, and are terminal: no nullifier,
//! no signature.

pub mod bytes;
pub mod commitment;
pub mod eddsa;
pub mod error;
pub mod note;
pub mod nullifier;
pub mod poseidon;
pub mod token;

pub use bytes::Address;
pub use commitment::Commitment;
pub use eddsa::{PublicKey, Signature, SigningKey};
pub use error::{NoteError, Result};
pub use note::{Note, NoteValue, WithdrawNote};
pub use nullifier::Nullifier;
pub use poseidon::PoseidonHasher;
pub use token::{TokenData, TokenId, TokenType, U256};
