//! One or many audiences

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The 'aud' claim
///
/// Read from either a string or an array of strings. Written back as a bare string when it holds
/// exactly one value, as an array otherwise
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, derive_more::Deref, derive_more::From)]
pub struct Audience(pub Vec<String>);

impl Audience {
    /// Whether `aud` is one of the audiences
    pub fn contains(&self, aud: &str) -> bool {
        self.0.iter().any(|a| a == aud)
    }
}

impl From<&str> for Audience {
    fn from(aud: &str) -> Self {
        Self(vec![aud.to_string()])
    }
}

impl From<String> for Audience {
    fn from(aud: String) -> Self {
        Self(vec![aud])
    }
}

impl Serialize for Audience {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.as_slice() {
            [single] => serializer.serialize_str(single),
            many => many.serialize(serializer),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for Audience {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match OneOrMany::deserialize(deserializer)? {
            OneOrMany::One(aud) => Self(vec![aud]),
            OneOrMany::Many(aud) => Self(aud),
        })
    }
}
