//! JWS algorithms, see [RFC 7518 Section 3](https://www.rfc-editor.org/rfc/rfc7518.html#section-3)

use std::fmt::Formatter;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::prelude::*;

pub mod ecdsa;
pub mod hmac;
pub mod none;
pub mod registry;
#[cfg(feature = "rsa")]
pub mod rsa;

/// A JWS signature algorithm, as found in the 'alg' header
///
/// See [RFC 7518 Section 3.1](https://www.rfc-editor.org/rfc/rfc7518.html#section-3.1)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum JwsAlgorithm {
    /// No digital signature or MAC performed
    ///
    /// Specified in [RFC 7518 Section 3.6: Using the Algorithm "none"][1]
    ///
    /// [1]: https://www.rfc-editor.org/rfc/rfc7518.html#section-3.6
    None,
    /// HMAC using SHA-256
    ///
    /// Specified in [RFC 7518 Section 3.2: HMAC with SHA-2 Functions][1]
    ///
    /// [1]: https://www.rfc-editor.org/rfc/rfc7518.html#section-3.2
    HS256,
    /// HMAC using SHA-384
    HS384,
    /// HMAC using SHA-512
    HS512,
    /// RSASSA-PKCS1-v1_5 using SHA-256
    ///
    /// Specified in [RFC 7518 Section 3.3: Digital Signature with RSASSA-PKCS1-v1_5][1]
    ///
    /// [1]: https://www.rfc-editor.org/rfc/rfc7518.html#section-3.3
    RS256,
    /// RSASSA-PKCS1-v1_5 using SHA-384
    RS384,
    /// RSASSA-PKCS1-v1_5 using SHA-512
    RS512,
    /// RSASSA-PSS using SHA-256 and MGF1 with SHA-256
    ///
    /// Specified in [RFC 7518 Section 3.5: Digital Signature with RSASSA-PSS][1]
    ///
    /// [1]: https://www.rfc-editor.org/rfc/rfc7518.html#section-3.5
    PS256,
    /// RSASSA-PSS using SHA-384 and MGF1 with SHA-384
    PS384,
    /// RSASSA-PSS using SHA-512 and MGF1 with SHA-512
    PS512,
    /// ECDSA using P-256 and SHA-256
    ///
    /// Specified in [RFC 7518 Section 3.4: Digital Signature with ECDSA][1]
    ///
    /// [1]: https://www.rfc-editor.org/rfc/rfc7518.html#section-3.4
    ES256,
    /// ECDSA using P-384 and SHA-384
    ES384,
    /// ECDSA using P-521 and SHA-512
    ES512,
}

impl JwsAlgorithm {
    /// Every algorithm identifier this crate knows about, whether or not this build supports it
    pub const ALL: [Self; 13] = [
        Self::None,
        Self::HS256,
        Self::HS384,
        Self::HS512,
        Self::RS256,
        Self::RS384,
        Self::RS512,
        Self::PS256,
        Self::PS384,
        Self::PS512,
        Self::ES256,
        Self::ES384,
        Self::ES512,
    ];

    /// Name used in the 'alg' header
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::HS256 => "HS256",
            Self::HS384 => "HS384",
            Self::HS512 => "HS512",
            Self::RS256 => "RS256",
            Self::RS384 => "RS384",
            Self::RS512 => "RS512",
            Self::PS256 => "PS256",
            Self::PS384 => "PS384",
            Self::PS512 => "PS512",
            Self::ES256 => "ES256",
            Self::ES384 => "ES384",
            Self::ES512 => "ES512",
        }
    }

    /// Digest used by the algorithm, [None] for the unsigned one
    pub const fn hash(&self) -> Option<HashAlgorithm> {
        match self {
            Self::None => None,
            Self::HS256 | Self::RS256 | Self::PS256 | Self::ES256 => Some(HashAlgorithm::SHA256),
            Self::HS384 | Self::RS384 | Self::PS384 | Self::ES384 => Some(HashAlgorithm::SHA384),
            Self::HS512 | Self::RS512 | Self::PS512 | Self::ES512 => Some(HashAlgorithm::SHA512),
        }
    }
}

impl std::fmt::Display for JwsAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for JwsAlgorithm {
    type Error = RustyJoseError;

    fn try_from(alg: &str) -> RustyJoseResult<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == alg)
            .ok_or_else(|| RustyJoseError::UnsupportedAlgorithm(alg.to_string()))
    }
}

impl FromStr for JwsAlgorithm {
    type Err = RustyJoseError;

    fn from_str(s: &str) -> RustyJoseResult<Self> {
        Self::try_from(s)
    }
}

impl Serialize for JwsAlgorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for JwsAlgorithm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let alg = String::deserialize(deserializer)?;
        Self::try_from(alg.as_str()).map_err(serde::de::Error::custom)
    }
}

/// Narrows the supported hashing algorithms to the ones we define
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HashAlgorithm {
    /// SHA-256
    SHA256,
    /// SHA-384
    SHA384,
    /// SHA-512
    SHA512,
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HashAlgorithm::SHA256 => "SHA-256",
            HashAlgorithm::SHA384 => "SHA-384",
            HashAlgorithm::SHA512 => "SHA-512",
        };
        write!(f, "{name}")
    }
}

/// Signs and verifies with a single JWS algorithm
///
/// Implementations are stateless and shared process-wide through the [registry]
pub trait JwsAlgorithmImpl: Send + Sync {
    /// Identifier this implementation handles
    fn id(&self) -> JwsAlgorithm;

    /// Signs `signing_input` and returns the base64url encoded signature part.
    /// Fails with [RustyJoseError::UnsupportedKey] when the key does not fit the algorithm
    fn sign(&self, signing_input: &[u8], key: &dyn SigningKey) -> RustyJoseResult<String>;

    /// Checks a signature against the exact signing input it was decoded with.
    /// A mismatching signature is `Ok(false)`, an unusable key is an error
    fn verify(&self, signature: &UnverifiedSignature, key: &dyn SigningKey) -> RustyJoseResult<bool>;
}

#[cfg(test)]
mod tests {
    use crate::test_utils::*;

    use super::*;

    #[test]
    fn should_roundtrip_names() {
        for alg in JwsAlgorithm::ALL {
            assert_eq!(JwsAlgorithm::try_from(alg.to_string().as_str()).unwrap(), alg);
            let json = serde_json::to_string(&alg).unwrap();
            assert_eq!(json, format!("\"{}\"", alg.as_str()));
            assert_eq!(serde_json::from_str::<JwsAlgorithm>(&json).unwrap(), alg);
        }
    }

    #[rstest]
    #[case("None")]
    #[case("hs256")]
    #[case("EdDSA")]
    #[case("")]
    fn should_reject_unknown_names(#[case] name: &str) {
        let result = JwsAlgorithm::from_str(name);
        assert!(matches!(result.unwrap_err(), RustyJoseError::UnsupportedAlgorithm(n) if n == name));
        assert!(serde_json::from_str::<JwsAlgorithm>(&format!("\"{name}\"")).is_err());
    }

    #[test]
    fn none_should_have_no_hash() {
        assert!(JwsAlgorithm::None.hash().is_none());
        assert_eq!(JwsAlgorithm::PS384.hash(), Some(HashAlgorithm::SHA384));
        assert_eq!(JwsAlgorithm::ES512.hash(), Some(HashAlgorithm::SHA512));
    }
}
