//! RS256, RS384, RS512 ([RFC 7518 Section 3.3](https://www.rfc-editor.org/rfc/rfc7518.html#section-3.3))
//! and PS256, PS384, PS512 ([RFC 7518 Section 3.5](https://www.rfc-editor.org/rfc/rfc7518.html#section-3.5))

use std::borrow::Cow;

use ::rsa::{
    RsaPrivateKey, RsaPublicKey, pkcs1v15, pss,
    signature::{RandomizedSigner, SignatureEncoding, Signer, Verifier},
};
use sha2::{Sha256, Sha384, Sha512};

use crate::{b64, prelude::*};

/// RSASSA-PKCS1-v1_5 or RSASSA-PSS with a SHA-2 digest
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RsaAlgorithm(JwsAlgorithm);

impl RsaAlgorithm {
    /// RSASSA-PKCS1-v1_5 using SHA-256
    pub const RS256: Self = Self(JwsAlgorithm::RS256);
    /// RSASSA-PKCS1-v1_5 using SHA-384
    pub const RS384: Self = Self(JwsAlgorithm::RS384);
    /// RSASSA-PKCS1-v1_5 using SHA-512
    pub const RS512: Self = Self(JwsAlgorithm::RS512);
    /// RSASSA-PSS using SHA-256 and MGF1 with SHA-256
    pub const PS256: Self = Self(JwsAlgorithm::PS256);
    /// RSASSA-PSS using SHA-384 and MGF1 with SHA-384
    pub const PS384: Self = Self(JwsAlgorithm::PS384);
    /// RSASSA-PSS using SHA-512 and MGF1 with SHA-512
    pub const PS512: Self = Self(JwsAlgorithm::PS512);

    fn key<'a>(key: &'a dyn SigningKey) -> RustyJoseResult<Cow<'a, RsaKey>> {
        match key.key_material() {
            KeyMaterial::Rsa(key) => Ok(Cow::Borrowed(key)),
            KeyMaterial::Jwk(JsonWebKey::Rsa(jwk)) => Ok(Cow::Owned(RsaKey::try_from(jwk)?)),
            _ => Err(RustyJoseError::UnsupportedKey("RSA algorithms require an RSA key")),
        }
    }

    fn sign_with(&self, private: &RsaPrivateKey, msg: &[u8]) -> RustyJoseResult<Box<[u8]>> {
        let mut rng = rand::rngs::OsRng;
        let private = private.clone();
        Ok(match self.0 {
            JwsAlgorithm::RS256 => pkcs1v15::SigningKey::<Sha256>::new(private).try_sign(msg)?.to_bytes(),
            JwsAlgorithm::RS384 => pkcs1v15::SigningKey::<Sha384>::new(private).try_sign(msg)?.to_bytes(),
            JwsAlgorithm::RS512 => pkcs1v15::SigningKey::<Sha512>::new(private).try_sign(msg)?.to_bytes(),
            // salt as long as the digest
            JwsAlgorithm::PS256 => pss::BlindedSigningKey::<Sha256>::new(private)
                .try_sign_with_rng(&mut rng, msg)?
                .to_bytes(),
            JwsAlgorithm::PS384 => pss::BlindedSigningKey::<Sha384>::new(private)
                .try_sign_with_rng(&mut rng, msg)?
                .to_bytes(),
            JwsAlgorithm::PS512 => pss::BlindedSigningKey::<Sha512>::new(private)
                .try_sign_with_rng(&mut rng, msg)?
                .to_bytes(),
            _ => return Err(RustyJoseError::ImplementationError),
        })
    }

    fn verify_with(&self, public: &RsaPublicKey, msg: &[u8], sig: &[u8]) -> RustyJoseResult<bool> {
        let public = public.clone();
        let verified = match self.0 {
            JwsAlgorithm::RS256 | JwsAlgorithm::RS384 | JwsAlgorithm::RS512 => {
                let Ok(sig) = pkcs1v15::Signature::try_from(sig) else {
                    return Ok(false);
                };
                match self.0 {
                    JwsAlgorithm::RS256 => pkcs1v15::VerifyingKey::<Sha256>::new(public).verify(msg, &sig),
                    JwsAlgorithm::RS384 => pkcs1v15::VerifyingKey::<Sha384>::new(public).verify(msg, &sig),
                    _ => pkcs1v15::VerifyingKey::<Sha512>::new(public).verify(msg, &sig),
                }
            }
            JwsAlgorithm::PS256 | JwsAlgorithm::PS384 | JwsAlgorithm::PS512 => {
                let Ok(sig) = pss::Signature::try_from(sig) else {
                    return Ok(false);
                };
                match self.0 {
                    JwsAlgorithm::PS256 => pss::VerifyingKey::<Sha256>::new(public).verify(msg, &sig),
                    JwsAlgorithm::PS384 => pss::VerifyingKey::<Sha384>::new(public).verify(msg, &sig),
                    _ => pss::VerifyingKey::<Sha512>::new(public).verify(msg, &sig),
                }
            }
            _ => return Err(RustyJoseError::ImplementationError),
        };
        Ok(verified.is_ok())
    }
}

impl JwsAlgorithmImpl for RsaAlgorithm {
    fn id(&self) -> JwsAlgorithm {
        self.0
    }

    fn sign(&self, signing_input: &[u8], key: &dyn SigningKey) -> RustyJoseResult<String> {
        let key = Self::key(key)?;
        let private = key
            .private()
            .ok_or(RustyJoseError::UnsupportedKey("No private key"))?;
        Ok(b64::encode(self.sign_with(private, signing_input)?))
    }

    fn verify(&self, signature: &UnverifiedSignature, key: &dyn SigningKey) -> RustyJoseResult<bool> {
        let key = Self::key(key)?;
        self.verify_with(key.public(), signature.signing_input.as_bytes(), &signature.signature)
    }
}
