//! Deterministic EdDSA over Jubjub with a Poseidon challenge.
//!
//! Jubjub's base field is the same BLS12-381 scalar field the rest of the
//! crate hashes over, so public-key and signature components are directly
//! usable as Poseidon inputs. A 32-byte seed is expanded with BLAKE3 into a
//! clamped secret scalar plus a nonce prefix; signing derives its nonce from
//! that prefix and the message, never from an rng, so identical inputs
//! produce byte-identical signatures.

use ark_bls12_381::Fr;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ed_on_bls12_381::{EdwardsAffine, Fr as ScalarField};
use ark_ff::PrimeField;
use ruint::aliases::U256;

use crate::bytes::{field_from_be, field_to_be};
use crate::error::{NoteError, Result};
use crate::poseidon::PoseidonHasher;

/// An expanded signing key.
#[derive(Clone, Debug)]
pub struct SigningKey {
    scalar: ScalarField,
    nonce_prefix: [u8; 32],
}

impl SigningKey {
    /// Expand a 32-byte seed into a signing key.
    ///
    /// The low half of the BLAKE3 XOF output is clamped Ed25519-style and
    /// shifted into the secret scalar; the high half seeds nonces.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let mut expanded = [0u8; 64];
        blake3::Hasher::new()
            .update(seed)
            .finalize_xof()
            .fill(&mut expanded);

        let mut low = [0u8; 32];
        low.copy_from_slice(&expanded[..32]);
        low[0] &= 0xf8;
        low[31] &= 0x7f;
        low[31] |= 0x40;
        let clamped = U256::from_le_bytes(low) >> 3usize;
        let scalar = ScalarField::from_le_bytes_mod_order(&clamped.to_le_bytes::<32>());

        let mut nonce_prefix = [0u8; 32];
        nonce_prefix.copy_from_slice(&expanded[32..]);

        Self {
            scalar,
            nonce_prefix,
        }
    }

    /// The verification key `A = B·s`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey((EdwardsAffine::generator() * self.scalar).into_affine())
    }

    /// Sign a field-element message.
    pub fn sign(&self, hasher: &PoseidonHasher, message: Fr) -> Signature {
        let mut nonce_bytes = [0u8; 64];
        blake3::Hasher::new()
            .update(&self.nonce_prefix)
            .update(&field_to_be(message))
            .finalize_xof()
            .fill(&mut nonce_bytes);
        let nonce = ScalarField::from_le_bytes_mod_order(&nonce_bytes);

        let r = (EdwardsAffine::generator() * nonce).into_affine();
        let public = self.public_key();
        let challenge = challenge_scalar(hasher, &r, &public.0, message);

        Signature {
            r,
            s: nonce + challenge * self.scalar,
        }
    }
}

/// A verification key: a prime-subgroup point whose affine coordinates are
/// base-field elements.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PublicKey(EdwardsAffine);

impl PublicKey {
    pub fn x(&self) -> Fr {
        self.0.x
    }

    pub fn y(&self) -> Fr {
        self.0.y
    }

    /// Verify `B·S == R + A·c`.
    pub fn verify(&self, hasher: &PoseidonHasher, message: Fr, signature: &Signature) -> bool {
        let challenge = challenge_scalar(hasher, &signature.r, &self.0, message);
        EdwardsAffine::generator() * signature.s == signature.r.into_group() + self.0 * challenge
    }
}

/// A signature: the nonce point `R` plus the response scalar `S`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Signature {
    r: EdwardsAffine,
    s: ScalarField,
}

impl Signature {
    /// The components `(R.x, R.y, S)` in canonical big-endian form.
    pub fn to_bytes(&self) -> [u8; 96] {
        let mut out = [0u8; 96];
        out[..32].copy_from_slice(&field_to_be(self.r.x));
        out[32..64].copy_from_slice(&field_to_be(self.r.y));
        out[64..].copy_from_slice(&field_to_be(self.s));
        out
    }

    /// Decode a signature, rejecting non-canonical coordinates and points
    /// outside the prime subgroup.
    pub fn from_bytes(bytes: &[u8; 96]) -> Result<Self> {
        let mut buf = [0u8; 32];
        buf.copy_from_slice(&bytes[..32]);
        let x: Fr = field_from_be(&buf, "signature R.x")?;
        buf.copy_from_slice(&bytes[32..64]);
        let y: Fr = field_from_be(&buf, "signature R.y")?;
        buf.copy_from_slice(&bytes[64..]);
        let s: ScalarField = field_from_be(&buf, "signature S")?;

        let r = EdwardsAffine::new_unchecked(x, y);
        if !r.is_on_curve() || !r.is_in_correct_subgroup_assuming_on_curve() {
            return Err(NoteError::InvalidSignature("R is not a subgroup point"));
        }

        Ok(Self { r, s })
    }
}

/// `c = Poseidon(R.x, R.y, A.x, A.y, m)`, reduced into the scalar field.
fn challenge_scalar(
    hasher: &PoseidonHasher,
    r: &EdwardsAffine,
    public: &EdwardsAffine,
    message: Fr,
) -> ScalarField {
    let challenge = hasher.hash(&[r.x, r.y, public.x, public.y, message]);
    ScalarField::from_be_bytes_mod_order(&field_to_be(challenge))
}
