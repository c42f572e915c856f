//! Symmetric JWK

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Symmetric key, see [RFC 7518 Section 6.4](https://www.rfc-editor.org/rfc/rfc7518.html#section-6.4)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymmetricJwk {
    /// Key value
    #[serde(with = "crate::b64::bytes")]
    pub k: Vec<u8>,
    /// Members shared by every key type
    #[serde(flatten)]
    pub common: JwkCommon,
}

impl SymmetricJwk {
    /// A key without any optional member
    pub fn new(k: Vec<u8>) -> Self {
        Self {
            k,
            common: JwkCommon::default(),
        }
    }
}

impl TryFromJwk for HmacKey {
    fn try_from_jwk(jwk: &JsonWebKey) -> RustyJoseResult<Self> {
        match jwk {
            JsonWebKey::Symmetric(SymmetricJwk { k, .. }) => Ok(HmacKey::new(k.as_slice())),
            _ => Err(RustyJoseError::UnsupportedKey("expected a symmetric key")),
        }
    }
}

impl TryIntoJwk for HmacKey {
    fn try_into_jwk(self) -> RustyJoseResult<JsonWebKey> {
        Ok(self.into())
    }
}
