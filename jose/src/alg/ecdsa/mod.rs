//! ES256, ES384 and ES512, see [RFC 7518 Section 3.4](https://www.rfc-editor.org/rfc/rfc7518.html#section-3.4)
//!
//! Native signers work with DER signatures which are converted to and from the fixed width JOSE
//! representation by [codec]

use std::borrow::Cow;

use signature::{Signer, Verifier};

use crate::{b64, prelude::*};

pub mod codec;

/// ECDSA on a NIST curve, the digest matching the curve size
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EcdsaAlgorithm(JwsAlgorithm);

impl EcdsaAlgorithm {
    /// ECDSA using P-256 and SHA-256
    pub const ES256: Self = Self(JwsAlgorithm::ES256);
    /// ECDSA using P-384 and SHA-384
    pub const ES384: Self = Self(JwsAlgorithm::ES384);
    /// ECDSA using P-521 and SHA-512
    pub const ES512: Self = Self(JwsAlgorithm::ES512);

    /// Curve a key must be on to be used with this algorithm
    pub fn curve(&self) -> EcCurve {
        match self.0 {
            JwsAlgorithm::ES384 => EcCurve::P384,
            JwsAlgorithm::ES512 => EcCurve::P521,
            _ => EcCurve::P256,
        }
    }

    /// Byte length of each of `R` and `S`
    pub fn rs_size(&self) -> usize {
        match self.0 {
            JwsAlgorithm::ES384 => 48,
            JwsAlgorithm::ES512 => 66,
            _ => 32,
        }
    }

    fn key<'a>(&self, key: &'a dyn SigningKey) -> RustyJoseResult<Cow<'a, EcKey>> {
        let key = match key.key_material() {
            KeyMaterial::Ec(key) => Cow::Borrowed(key),
            KeyMaterial::Jwk(JsonWebKey::EllipticCurve(jwk)) => Cow::Owned(EcKey::try_from(jwk)?),
            _ => return Err(RustyJoseError::UnsupportedKey("ECDSA requires an elliptic curve key")),
        };
        if key.curve() != self.curve() {
            return Err(RustyJoseError::UnsupportedKey("elliptic curve does not match the algorithm"));
        }
        Ok(key)
    }
}

impl JwsAlgorithmImpl for EcdsaAlgorithm {
    fn id(&self) -> JwsAlgorithm {
        self.0
    }

    fn sign(&self, signing_input: &[u8], key: &dyn SigningKey) -> RustyJoseResult<String> {
        let der = match self.key(key)?.as_ref() {
            EcKey::P256Private(sk) => {
                let signature: p256::ecdsa::Signature = sk.try_sign(signing_input)?;
                signature.to_der().as_bytes().to_vec()
            }
            EcKey::P384Private(sk) => {
                let signature: p384::ecdsa::Signature = sk.try_sign(signing_input)?;
                signature.to_der().as_bytes().to_vec()
            }
            EcKey::P521Private(sk) => {
                let signature: p521::ecdsa::Signature = sk.try_sign(signing_input)?;
                signature.to_der().as_bytes().to_vec()
            }
            _ => return Err(RustyJoseError::UnsupportedKey("signing requires a private key")),
        };
        Ok(b64::encode(codec::der_to_raw(&der, self.rs_size())?))
    }

    fn verify(&self, signature: &UnverifiedSignature, key: &dyn SigningKey) -> RustyJoseResult<bool> {
        let key = self.key(key)?.public_key();
        let der = codec::raw_to_der(&signature.signature, self.rs_size())?;
        let input = signature.signing_input.as_bytes();
        let verified = match &key {
            EcKey::P256Public(vk) => p256::ecdsa::Signature::from_der(&der).and_then(|s| vk.verify(input, &s)),
            EcKey::P384Public(vk) => p384::ecdsa::Signature::from_der(&der).and_then(|s| vk.verify(input, &s)),
            EcKey::P521Public(vk) => p521::ecdsa::Signature::from_der(&der).and_then(|s| vk.verify(input, &s)),
            _ => return Err(RustyJoseError::ImplementationError),
        };
        if let Err(e) = &verified {
            tracing::debug!(alg = %self.0, error = %e, "ECDSA signature rejected");
        }
        Ok(verified.is_ok())
    }
}
