//! Elliptic curve JWK

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// The 'crv' member of an elliptic curve key. Unregistered curves are kept as is
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EcCurve {
    /// P-256
    P256,
    /// P-384
    P384,
    /// P-521
    P521,
    /// Any other curve, unusable for signing here
    Other(String),
}

impl EcCurve {
    /// Byte length of a coordinate, of the private scalar and of each half of a JOSE signature
    pub fn coordinate_size(&self) -> Option<usize> {
        match self {
            Self::P256 => Some(32),
            Self::P384 => Some(48),
            // 521 bits round up to 66 bytes
            Self::P521 => Some(66),
            Self::Other(_) => None,
        }
    }
}

impl std::fmt::Display for EcCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::P256 => "P-256",
            Self::P384 => "P-384",
            Self::P521 => "P-521",
            Self::Other(other) => other.as_str(),
        };
        write!(f, "{name}")
    }
}

impl From<String> for EcCurve {
    fn from(value: String) -> Self {
        match value.as_str() {
            "P-256" => Self::P256,
            "P-384" => Self::P384,
            "P-521" => Self::P521,
            _ => Self::Other(value),
        }
    }
}

impl From<EcCurve> for String {
    fn from(value: EcCurve) -> Self {
        match value {
            EcCurve::Other(other) => other,
            curve => curve.to_string(),
        }
    }
}

/// Elliptic curve key, see [RFC 7518 Section 6.2](https://www.rfc-editor.org/rfc/rfc7518.html#section-6.2)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EcJwk {
    /// Curve
    pub crv: EcCurve,
    /// X coordinate
    #[serde(with = "crate::b64::bytes")]
    pub x: Vec<u8>,
    /// Y coordinate
    #[serde(with = "crate::b64::bytes")]
    pub y: Vec<u8>,
    /// Private scalar
    #[serde(default, with = "crate::b64::bytes::option", skip_serializing_if = "Option::is_none")]
    pub d: Option<Vec<u8>>,
    /// Members shared by every key type
    #[serde(flatten)]
    pub common: JwkCommon,
}

impl EcJwk {
    /// Whether the key can verify signatures
    pub fn is_valid_public_key(&self) -> bool {
        self.crv
            .coordinate_size()
            .is_some_and(|size| self.x.len() == size && self.y.len() == size)
    }

    /// Whether the key can produce signatures
    pub fn is_valid_private_key(&self) -> bool {
        self.is_valid_public_key() && self.d.is_some()
    }

    /// The same key without its private scalar
    pub fn to_public_key(&self) -> Self {
        Self { d: None, ..self.clone() }
    }
}

impl TryFrom<&EcJwk> for EcKey {
    type Error = RustyJoseError;

    fn try_from(jwk: &EcJwk) -> RustyJoseResult<Self> {
        let public = EcKey::from_coordinates(&jwk.crv, &jwk.x, &jwk.y)?;
        match &jwk.d {
            Some(d) => {
                let private = EcKey::from_private_scalar(&jwk.crv, d)?;
                if private.public_key() != public {
                    return Err(RustyJoseError::UnsupportedKey("private scalar does not match public point"));
                }
                Ok(private)
            }
            None => Ok(public),
        }
    }
}

impl TryFromJwk for EcKey {
    fn try_from_jwk(jwk: &JsonWebKey) -> RustyJoseResult<Self> {
        match jwk {
            JsonWebKey::EllipticCurve(ec) => ec.try_into(),
            _ => Err(RustyJoseError::UnsupportedKey("expected an elliptic curve key")),
        }
    }
}

impl From<&EcKey> for EcJwk {
    fn from(key: &EcKey) -> Self {
        let (x, y) = key.coordinates();
        Self {
            crv: key.curve(),
            x,
            y,
            d: key.private_scalar(),
            common: JwkCommon::default(),
        }
    }
}

impl TryIntoJwk for EcKey {
    fn try_into_jwk(self) -> RustyJoseResult<JsonWebKey> {
        Ok(JsonWebKey::EllipticCurve(EcJwk::from(&self)))
    }
}
