//! RSA JWK

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// RSA key, see [RFC 7518 Section 6.3](https://www.rfc-editor.org/rfc/rfc7518.html#section-6.3)
///
/// Every member is optional on the wire, use [RsaJwk::is_valid_public_key] and
/// [RsaJwk::is_valid_private_key] to know what the key can do
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RsaJwk {
    /// Modulus
    #[serde(default, with = "crate::b64::bytes::option", skip_serializing_if = "Option::is_none")]
    pub n: Option<Vec<u8>>,
    /// Public exponent
    #[serde(default, with = "crate::b64::bytes::option", skip_serializing_if = "Option::is_none")]
    pub e: Option<Vec<u8>>,
    /// Private exponent
    #[serde(default, with = "crate::b64::bytes::option", skip_serializing_if = "Option::is_none")]
    pub d: Option<Vec<u8>>,
    /// First prime factor
    #[serde(default, with = "crate::b64::bytes::option", skip_serializing_if = "Option::is_none")]
    pub p: Option<Vec<u8>>,
    /// Second prime factor
    #[serde(default, with = "crate::b64::bytes::option", skip_serializing_if = "Option::is_none")]
    pub q: Option<Vec<u8>>,
    /// First factor CRT exponent
    #[serde(default, with = "crate::b64::bytes::option", skip_serializing_if = "Option::is_none")]
    pub dp: Option<Vec<u8>>,
    /// Second factor CRT exponent
    #[serde(default, with = "crate::b64::bytes::option", skip_serializing_if = "Option::is_none")]
    pub dq: Option<Vec<u8>>,
    /// First CRT coefficient
    #[serde(default, with = "crate::b64::bytes::option", skip_serializing_if = "Option::is_none")]
    pub qi: Option<Vec<u8>>,
    /// Additional primes for multi-prime keys
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oth: Option<Vec<RsaOtherPrime>>,
    /// Members shared by every key type
    #[serde(flatten)]
    pub common: JwkCommon,
}

/// An entry of the 'oth' member
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RsaOtherPrime {
    /// Prime factor
    #[serde(with = "crate::b64::bytes")]
    pub r: Vec<u8>,
    /// Factor CRT exponent
    #[serde(with = "crate::b64::bytes")]
    pub d: Vec<u8>,
    /// Factor CRT coefficient
    #[serde(with = "crate::b64::bytes")]
    pub t: Vec<u8>,
}

impl RsaJwk {
    /// Modulus and public exponent are present
    pub fn is_valid_public_key(&self) -> bool {
        self.n.is_some() && self.e.is_some()
    }

    /// Modulus, public and private exponents are present
    pub fn is_valid_private_key(&self) -> bool {
        self.is_valid_public_key() && self.d.is_some()
    }

    /// The same key without any private member
    pub fn to_public_key(&self) -> Self {
        Self {
            n: self.n.clone(),
            e: self.e.clone(),
            common: self.common.clone(),
            ..Default::default()
        }
    }
}

#[cfg(feature = "rsa")]
mod native {
    use ::rsa::{
        BigUint, RsaPrivateKey, RsaPublicKey,
        traits::{PrivateKeyParts, PublicKeyParts},
    };

    use super::*;

    fn uint(bytes: &[u8]) -> BigUint {
        BigUint::from_bytes_be(bytes)
    }

    impl TryFrom<&RsaJwk> for RsaKey {
        type Error = RustyJoseError;

        fn try_from(jwk: &RsaJwk) -> RustyJoseResult<Self> {
            let (Some(n), Some(e)) = (&jwk.n, &jwk.e) else {
                return Err(RustyJoseError::UnsupportedKey("RSA key lacks its modulus or public exponent"));
            };
            let (n, e) = (uint(n), uint(e));
            match &jwk.d {
                Some(d) => {
                    // multi-prime keys need every factor, two prime keys can have theirs recovered
                    let primes = match (&jwk.p, &jwk.q, &jwk.oth) {
                        (Some(p), Some(q), oth) => [p, q]
                            .into_iter()
                            .chain(oth.iter().flatten().map(|o| &o.r))
                            .map(|f| uint(f))
                            .collect(),
                        (_, _, Some(_)) => {
                            return Err(RustyJoseError::UnsupportedKey("multi-prime RSA key lacks its prime factors"));
                        }
                        _ => vec![],
                    };
                    let private = RsaPrivateKey::from_components(n, e, uint(d), primes)?;
                    Ok(RsaKey::from_private(private))
                }
                None => Ok(RsaKey::from_public(RsaPublicKey::new(n, e)?)),
            }
        }
    }

    impl TryFromJwk for RsaKey {
        fn try_from_jwk(jwk: &JsonWebKey) -> RustyJoseResult<Self> {
            match jwk {
                JsonWebKey::Rsa(rsa) => rsa.try_into(),
                _ => Err(RustyJoseError::UnsupportedKey("expected an RSA key")),
            }
        }
    }

    impl From<&RsaKey> for RsaJwk {
        fn from(key: &RsaKey) -> Self {
            let public = key.public();
            let mut jwk = RsaJwk {
                n: Some(public.n().to_bytes_be()),
                e: Some(public.e().to_bytes_be()),
                ..Default::default()
            };
            if let Some(private) = key.private() {
                jwk.d = Some(private.d().to_bytes_be());
                if let [p, q] = private.primes() {
                    jwk.p = Some(p.to_bytes_be());
                    jwk.q = Some(q.to_bytes_be());
                    jwk.dp = private.dp().map(BigUint::to_bytes_be);
                    jwk.dq = private.dq().map(BigUint::to_bytes_be);
                    jwk.qi = private.crt_coefficient().map(|qi| qi.to_bytes_be());
                }
            }
            jwk
        }
    }

    impl TryIntoJwk for RsaKey {
        fn try_into_jwk(self) -> RustyJoseResult<JsonWebKey> {
            Ok(JsonWebKey::Rsa(RsaJwk::from(&self)))
        }
    }
}
