//! Byte and field-element codec.
//!
//! Every conversion between integers, hex strings, byte arrays and field
//! elements goes through the checked functions here. The wire form of a
//! field element is its canonical 32-byte big-endian encoding; decoding
//! bytes at or above the modulus is an error, never a silent reduction.

use std::fmt;
use std::str::FromStr;

use ark_ff::{BigInteger, PrimeField};
use ruint::aliases::U256;
use serde::{Deserialize, Serialize};

use crate::error::{NoteError, Result};

/// Encode a 256-bit unsigned integer as a 32-byte big-endian array.
pub fn encode32(value: U256) -> [u8; 32] {
    value.to_be_bytes::<32>()
}

/// Encode a note value as a 32-byte big-endian array.
pub fn encode32_u128(value: u128) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[16..].copy_from_slice(&value.to_be_bytes());
    out
}

/// Encode a leaf index as a 32-byte big-endian array.
pub fn encode32_u64(value: u64) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[24..].copy_from_slice(&value.to_be_bytes());
    out
}

/// Left-zero-pad a slice of at most 32 bytes to the fixed hash-input width.
pub fn pad32(bytes: &[u8]) -> Result<[u8; 32]> {
    if bytes.len() > 32 {
        return Err(NoteError::InputTooLong { len: bytes.len() });
    }
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(bytes);
    Ok(out)
}

/// Encode a field element as its canonical 32-byte big-endian form.
pub fn field_to_be<F: PrimeField>(element: F) -> [u8; 32] {
    let bytes = element.into_bigint().to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    out
}

/// Decode a canonical big-endian field element.
///
/// `context` names the value being decoded so a failure points at the
/// offending input rather than at the codec.
pub fn field_from_be<F: PrimeField>(bytes: &[u8; 32], context: &'static str) -> Result<F> {
    let element = F::from_be_bytes_mod_order(bytes);
    if field_to_be(element) != *bytes {
        return Err(NoteError::NonCanonicalFieldElement { context });
    }
    Ok(element)
}

/// A 20-byte account address, rendered as a `0x`-prefixed hex string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Address(#[serde(with = "hex::serde")] pub [u8; 20]);

impl Address {
    /// The address left-zero-padded to the 32-byte hash-input width.
    pub fn padded32(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[12..].copy_from_slice(&self.0);
        out
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix("0x")
            .ok_or_else(|| NoteError::InvalidAddress(s.to_string()))?;
        if digits.len() != 40 {
            return Err(NoteError::InvalidAddress(s.to_string()));
        }
        let mut out = [0u8; 20];
        hex::decode_to_slice(digits, &mut out).map_err(|_| NoteError::InvalidAddress(s.to_string()))?;
        Ok(Self(out))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Fr;

    #[test]
    fn test_encode32_widths() {
        let encoded = encode32(U256::from(1u64));
        assert_eq!(encoded[31], 1);
        assert_eq!(encoded[..31], [0u8; 31]);

        let encoded = encode32_u128(0x0102);
        assert_eq!(encoded[30], 0x01);
        assert_eq!(encoded[31], 0x02);
        assert_eq!(encoded[..30], [0u8; 30]);

        let encoded = encode32_u64(u64::MAX);
        assert_eq!(encoded[24..], [0xff; 8]);
        assert_eq!(encoded[..24], [0u8; 24]);
    }

    #[test]
    fn test_pad32() {
        assert_eq!(pad32(&[]).unwrap(), [0u8; 32]);

        let padded = pad32(&[0xaa, 0xbb]).unwrap();
        assert_eq!(padded[30], 0xaa);
        assert_eq!(padded[31], 0xbb);
        assert_eq!(padded[..30], [0u8; 30]);

        let full = [0x11u8; 32];
        assert_eq!(pad32(&full).unwrap(), full);

        assert_eq!(
            pad32(&[0u8; 33]),
            Err(NoteError::InputTooLong { len: 33 })
        );
    }

    #[test]
    fn test_field_round_trip() {
        let f = Fr::from(123_456_789u64);
        let bytes = field_to_be(f);
        assert_eq!(field_from_be::<Fr>(&bytes, "test").unwrap(), f);

        // modulus - 1 is the largest canonical encoding
        let max = -Fr::from(1u64);
        let bytes = field_to_be(max);
        assert_eq!(field_from_be::<Fr>(&bytes, "test").unwrap(), max);
    }

    #[test]
    fn test_field_rejects_non_canonical() {
        let mut modulus = [0u8; 32];
        modulus.copy_from_slice(&<Fr as PrimeField>::MODULUS.to_bytes_be());
        assert_eq!(
            field_from_be::<Fr>(&modulus, "test"),
            Err(NoteError::NonCanonicalFieldElement { context: "test" })
        );

        assert!(field_from_be::<Fr>(&[0xff; 32], "test").is_err());
    }

    #[test]
    fn test_address_round_trip() {
        let addr = Address::from_str("0x00112233445566778899aAbBcCdDeEfF00112233").unwrap();
        assert_eq!(addr.as_bytes()[0], 0x00);
        assert_eq!(addr.as_bytes()[19], 0x33);
        assert_eq!(
            addr.to_string(),
            "0x00112233445566778899aabbccddeeff00112233"
        );
        assert_eq!(Address::from_str(&addr.to_string()).unwrap(), addr);
    }

    #[test]
    fn test_address_padding() {
        let addr = Address([0x42u8; 20]);
        let padded = addr.padded32();
        assert_eq!(padded[..12], [0u8; 12]);
        assert_eq!(padded[12..], [0x42u8; 20]);
    }

    #[test]
    fn test_address_rejects_malformed() {
        for bad in [
            "",
            "0x",
            "00112233445566778899aabbccddeeff00112233",    // missing prefix
            "0x00112233445566778899aabbccddeeff001122",     // too short
            "0x00112233445566778899aabbccddeeff0011223344", // too long
            "0x00112233445566778899aabbccddeeff0011223g",   // non-hex digit
        ] {
            assert!(
                matches!(Address::from_str(bad), Err(NoteError::InvalidAddress(_))),
                "accepted {bad:?}"
            );
        }
    }
}
