//! JWK Set

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// A JWK Set, see [RFC 7517 Section 5](https://www.rfc-editor.org/rfc/rfc7517.html#section-5)
///
/// Key ids are not required to be unique
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JsonWebKeySet {
    /// Keys in document order
    pub keys: Vec<JsonWebKey>,
}

impl JsonWebKeySet {
    /// Wraps some keys
    pub fn new(keys: Vec<JsonWebKey>) -> Self {
        Self { keys }
    }

    /// Parses a `{"keys": [...]}` document
    pub fn from_json(json: &str) -> RustyJoseResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes as a `{"keys": [...]}` document
    pub fn to_json(&self) -> RustyJoseResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// First key bearing this 'kid'
    pub fn find(&self, kid: &str) -> Option<&JsonWebKey> {
        self.keys.iter().find(|k| k.key_id() == Some(kid))
    }
}

impl FromIterator<JsonWebKey> for JsonWebKeySet {
    fn from_iter<T: IntoIterator<Item = JsonWebKey>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
