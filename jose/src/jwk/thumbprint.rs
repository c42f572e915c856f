//! JWK thumbprint

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sha2::Digest;

use crate::{b64, prelude::*};

/// Represents a [JWK thumbprint][1], usable as a key id
///
/// [1]: https://www.rfc-editor.org/rfc/rfc7638.html
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Hash)]
pub struct JwkThumbprint {
    /// JWK thumbprint
    #[serde(rename = "kid")]
    pub kid: String,
}

impl JwkThumbprint {
    /// generates a base64url encoded hash of a JWK
    pub fn generate(jwk: &JsonWebKey, alg: HashAlgorithm) -> RustyJoseResult<Self> {
        let json = serde_json::to_vec(&Self::compute_json(jwk)?)?;
        let kid = match alg {
            HashAlgorithm::SHA256 => b64::encode(sha2::Sha256::digest(json)),
            HashAlgorithm::SHA384 => b64::encode(sha2::Sha384::digest(json)),
            HashAlgorithm::SHA512 => b64::encode(sha2::Sha512::digest(json)),
        };
        Ok(Self { kid })
    }

    /// Keeps only the required JWK members, lexicographically ordered as per [RFC 7638 Section 3.2][1]
    ///
    /// [1]: https://www.rfc-editor.org/rfc/rfc7638.html#section-3.2
    fn compute_json(jwk: &JsonWebKey) -> RustyJoseResult<Value> {
        // 'preserve_order' is on so members are written in the order they appear here
        Ok(match jwk {
            JsonWebKey::Rsa(RsaJwk {
                n: Some(n), e: Some(e), ..
            }) => json!({
                "e": b64::encode(e),
                "kty": jwk.key_type(),
                "n": b64::encode(n),
            }),
            JsonWebKey::Rsa(_) => {
                return Err(RustyJoseError::UnsupportedKey("RSA key lacks its modulus or public exponent"));
            }
            JsonWebKey::EllipticCurve(EcJwk { crv, x, y, .. }) => json!({
                "crv": crv,
                "kty": jwk.key_type(),
                "x": b64::encode(x),
                "y": b64::encode(y),
            }),
            JsonWebKey::Symmetric(SymmetricJwk { k, .. }) => json!({
                "k": b64::encode(k),
                "kty": jwk.key_type(),
            }),
        })
    }
}
