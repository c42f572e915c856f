//! Unpadded base64url as used by every JOSE structure
//!
//! See [RFC 7515 Section 2](https://www.rfc-editor.org/rfc/rfc7515.html#section-2)

use base64::Engine;
use base64::prelude::BASE64_URL_SAFE_NO_PAD;

use crate::prelude::*;

/// Encodes with the URL safe alphabet, without padding
pub fn encode(input: impl AsRef<[u8]>) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(input)
}

/// Decodes unpadded base64url. Fails on any character outside `[A-Za-z0-9_-]` or on an impossible length
pub fn decode(input: impl AsRef<[u8]>) -> RustyJoseResult<Vec<u8>> {
    Ok(BASE64_URL_SAFE_NO_PAD.decode(input)?)
}

/// Whether the input is a non-empty string made only of the base64url alphabet
pub fn is_base64url(input: &str) -> bool {
    !input.is_empty()
        && input
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// serde adapter for byte fields serialized as base64url strings
pub mod bytes {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    /// serde serializer
    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::encode(bytes))
    }

    /// serde deserializer
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        super::decode(&encoded).map_err(D::Error::custom)
    }

    /// serde adapter for an optional byte field
    pub mod option {
        use super::*;

        /// serde serializer
        pub fn serialize<S: Serializer>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
            match bytes {
                Some(bytes) => serializer.serialize_some(&crate::b64::encode(bytes)),
                None => serializer.serialize_none(),
            }
        }

        /// serde deserializer
        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|encoded| crate::b64::decode(&encoded).map_err(D::Error::custom))
                .transpose()
        }
    }
}
