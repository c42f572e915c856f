//! JSON Web Key as specified in [RFC 7517](https://www.rfc-editor.org/rfc/rfc7517.html)

use serde::{Deserialize, Deserializer, Serialize, de::Error};
use serde_json::Value;

use crate::prelude::*;

pub mod ec;
pub mod oct;
pub mod rsa;
pub mod set;
pub mod thumbprint;

/// Converts a native key into its JWK representation
pub trait TryIntoJwk {
    /// Builds the JWK, including private components when the key has some
    fn try_into_jwk(self) -> RustyJoseResult<JsonWebKey>;
}

/// Builds a native key from a JWK
pub trait TryFromJwk
where
    Self: Sized,
{
    /// Fails with [RustyJoseError::UnsupportedKey] when the JWK is of another family or incomplete
    fn try_from_jwk(jwk: &JsonWebKey) -> RustyJoseResult<Self>;
}

/// A JSON Web Key, discriminated by its 'kty' member
///
/// Byte valued members are held decoded and compared by content
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kty")]
pub enum JsonWebKey {
    /// `"kty": "RSA"`
    #[serde(rename = "RSA")]
    Rsa(RsaJwk),
    /// `"kty": "EC"`
    #[serde(rename = "EC")]
    EllipticCurve(EcJwk),
    /// `"kty": "oct"`
    #[serde(rename = "oct")]
    Symmetric(SymmetricJwk),
}

impl JsonWebKey {
    /// Value of the 'kty' member
    pub fn key_type(&self) -> &'static str {
        match self {
            Self::Rsa(_) => "RSA",
            Self::EllipticCurve(_) => "EC",
            Self::Symmetric(_) => "oct",
        }
    }

    /// Members shared by every key type
    pub fn common(&self) -> &JwkCommon {
        match self {
            Self::Rsa(jwk) => &jwk.common,
            Self::EllipticCurve(jwk) => &jwk.common,
            Self::Symmetric(jwk) => &jwk.common,
        }
    }

    /// Same as [JsonWebKey::common] but mutable, for building keys
    pub fn common_mut(&mut self) -> &mut JwkCommon {
        match self {
            Self::Rsa(jwk) => &mut jwk.common,
            Self::EllipticCurve(jwk) => &mut jwk.common,
            Self::Symmetric(jwk) => &mut jwk.common,
        }
    }

    /// The 'kid' member
    pub fn key_id(&self) -> Option<&str> {
        self.common().key_id.as_deref()
    }

    /// Sets the 'kid' member
    pub fn with_key_id(mut self, kid: impl Into<String>) -> Self {
        self.common_mut().key_id = Some(kid.into());
        self
    }

    /// Parses a single JWK
    pub fn from_json(json: &str) -> RustyJoseResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes this JWK
    pub fn to_json(&self) -> RustyJoseResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<'de> Deserialize<'de> for JsonWebKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut json = serde_json::Map::<String, Value>::deserialize(deserializer)?;
        let kty = match json.remove("kty") {
            Some(Value::String(kty)) => kty,
            Some(_) => return Err(D::Error::custom("'kty' must be a string")),
            None => return Err(D::Error::missing_field("kty")),
        };
        let json = Value::Object(json);
        let jwk = match kty.as_str() {
            "RSA" => RsaJwk::deserialize(json).map(Self::Rsa),
            "EC" => EcJwk::deserialize(json).map(Self::EllipticCurve),
            "oct" => SymmetricJwk::deserialize(json).map(Self::Symmetric),
            other => return Err(D::Error::custom(format!("Unknown key type: {other}"))),
        };
        jwk.map_err(D::Error::custom)
    }
}

/// Members every JWK may carry, see [RFC 7517 Section 4](https://www.rfc-editor.org/rfc/rfc7517.html#section-4)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JwkCommon {
    /// Intended use of a public key
    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub public_key_use: Option<PublicKeyUse>,
    /// Operations the key is intended for, e.g. "sign" or "verify"
    #[serde(rename = "key_ops", default, skip_serializing_if = "Option::is_none")]
    pub key_operations: Option<Vec<String>>,
    /// Algorithm the key is intended for. Kept as a string since it may name a non signing algorithm
    #[serde(rename = "alg", default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    /// Key identifier
    #[serde(rename = "kid", default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
    /// URL of an X.509 certificate chain
    #[serde(rename = "x5u", default, skip_serializing_if = "Option::is_none")]
    pub x509_url: Option<String>,
    /// X.509 certificate chain, each entry being base64 (not base64url) DER
    #[serde(rename = "x5c", default, skip_serializing_if = "Option::is_none")]
    pub x509_chain: Option<Vec<String>>,
    /// X.509 certificate SHA-1 thumbprint
    #[serde(rename = "x5t", default, skip_serializing_if = "Option::is_none")]
    pub x509_sha1_fingerprint: Option<String>,
    /// X.509 certificate SHA-256 thumbprint
    #[serde(rename = "x5t#S256", default, skip_serializing_if = "Option::is_none")]
    pub x509_sha256_fingerprint: Option<String>,
}

/// The 'use' member. Unregistered values are kept as is
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PublicKeyUse {
    /// "sig"
    Signature,
    /// "enc"
    Encryption,
    /// Any other value
    Other(String),
}

impl From<String> for PublicKeyUse {
    fn from(value: String) -> Self {
        match value.as_str() {
            "sig" => Self::Signature,
            "enc" => Self::Encryption,
            _ => Self::Other(value),
        }
    }
}

impl From<PublicKeyUse> for String {
    fn from(value: PublicKeyUse) -> Self {
        match value {
            PublicKeyUse::Signature => "sig".to_string(),
            PublicKeyUse::Encryption => "enc".to_string(),
            PublicKeyUse::Other(other) => other,
        }
    }
}
