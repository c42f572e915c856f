//! HS256, HS384 and HS512, see [RFC 7518 Section 3.2](https://www.rfc-editor.org/rfc/rfc7518.html#section-3.2)

use ::hmac::{Hmac, Mac, digest::KeyInit};
use sha2::{Sha256, Sha384, Sha512};

use crate::{b64, prelude::*};

/// HMAC with a SHA-2 digest
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct HmacAlgorithm(JwsAlgorithm);

impl HmacAlgorithm {
    /// HMAC using SHA-256
    pub const HS256: Self = Self(JwsAlgorithm::HS256);
    /// HMAC using SHA-384
    pub const HS384: Self = Self(JwsAlgorithm::HS384);
    /// HMAC using SHA-512
    pub const HS512: Self = Self(JwsAlgorithm::HS512);

    fn secret<'a>(key: &'a dyn SigningKey) -> RustyJoseResult<&'a [u8]> {
        let secret = match key.key_material() {
            KeyMaterial::Hmac(secret) => secret,
            KeyMaterial::Jwk(JsonWebKey::Symmetric(SymmetricJwk { k, .. })) => k.as_slice(),
            _ => return Err(RustyJoseError::UnsupportedKey("HMAC requires a symmetric key")),
        };
        if secret.is_empty() {
            return Err(RustyJoseError::UnsupportedKey("HMAC secret is empty"));
        }
        Ok(secret)
    }
}

fn keyed<M: Mac + KeyInit>(secret: &[u8], input: &[u8]) -> RustyJoseResult<M> {
    // HMAC accepts keys of any length
    let mut mac = <M as Mac>::new_from_slice(secret).map_err(|_| RustyJoseError::ImplementationError)?;
    mac.update(input);
    Ok(mac)
}

impl JwsAlgorithmImpl for HmacAlgorithm {
    fn id(&self) -> JwsAlgorithm {
        self.0
    }

    fn sign(&self, signing_input: &[u8], key: &dyn SigningKey) -> RustyJoseResult<String> {
        let secret = Self::secret(key)?;
        let tag = match self.0 {
            JwsAlgorithm::HS256 => keyed::<Hmac<Sha256>>(secret, signing_input)?.finalize().into_bytes().to_vec(),
            JwsAlgorithm::HS384 => keyed::<Hmac<Sha384>>(secret, signing_input)?.finalize().into_bytes().to_vec(),
            JwsAlgorithm::HS512 => keyed::<Hmac<Sha512>>(secret, signing_input)?.finalize().into_bytes().to_vec(),
            _ => return Err(RustyJoseError::ImplementationError),
        };
        Ok(b64::encode(tag))
    }

    fn verify(&self, signature: &UnverifiedSignature, key: &dyn SigningKey) -> RustyJoseResult<bool> {
        let secret = Self::secret(key)?;
        let input = signature.signing_input.as_bytes();
        // constant time comparison
        let verified = match self.0 {
            JwsAlgorithm::HS256 => keyed::<Hmac<Sha256>>(secret, input)?.verify_slice(&signature.signature),
            JwsAlgorithm::HS384 => keyed::<Hmac<Sha384>>(secret, input)?.verify_slice(&signature.signature),
            JwsAlgorithm::HS512 => keyed::<Hmac<Sha512>>(secret, input)?.verify_slice(&signature.signature),
            _ => return Err(RustyJoseError::ImplementationError),
        };
        Ok(verified.is_ok())
    }
}
