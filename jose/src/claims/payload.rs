//! Claims set together with the claims it does not know

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _, ser::Error as _};
use serde_json::{Map, Value};

use crate::{claims::KNOWN_CLAIMS, prelude::*};

/// The payload of a JWT: the claims with a fixed meaning plus every other claim, kept as raw JSON
///
/// Serialized with the fixed claims first and the unknown ones after. Known claim names never
/// appear in [JwtPayload::unknown_claims]
#[derive(Debug, Clone, Default, PartialEq, derive_more::Deref)]
pub struct JwtPayload {
    /// Registered and profile claims
    #[deref]
    pub claims: JwtClaimsSet,
    unknown_claims: Map<String, Value>,
}

impl JwtPayload {
    /// Pairs some claims with extension claims. Entries of `unknown_claims` named after a known
    /// claim are discarded
    pub fn new(claims: JwtClaimsSet, mut unknown_claims: Map<String, Value>) -> Self {
        for known in KNOWN_CLAIMS {
            unknown_claims.remove(known);
        }
        Self { claims, unknown_claims }
    }

    /// Claims outside of [JwtClaimsSet], in document order
    pub fn unknown_claims(&self) -> &Map<String, Value> {
        &self.unknown_claims
    }

    /// Adds an extension claim. Fails with [RustyJoseError::ArgumentError] for a known claim name
    pub fn with_unknown_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> RustyJoseResult<Self> {
        let name = name.into();
        if KNOWN_CLAIMS.contains(&name.as_str()) {
            return Err(RustyJoseError::ArgumentError("claim name is a registered claim"));
        }
        self.unknown_claims.insert(name, value.into());
        Ok(self)
    }

    /// Parses a JSON payload
    pub fn from_json(json: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(json)
    }

    /// Serializes as a JSON payload
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<JwtClaimsSet> for JwtPayload {
    fn from(claims: JwtClaimsSet) -> Self {
        Self::new(claims, Map::new())
    }
}

impl Serialize for JwtPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let Value::Object(mut fields) = serde_json::to_value(&self.claims).map_err(S::Error::custom)? else {
            return Err(S::Error::custom("claims are not a JSON object"));
        };
        for (name, value) in &self.unknown_claims {
            fields.entry(name.as_str()).or_insert_with(|| value.clone());
        }
        fields.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for JwtPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        let claims = JwtClaimsSet::deserialize(Value::Object(fields.clone())).map_err(D::Error::custom)?;
        Ok(Self::new(claims, fields))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const RFC_PAYLOAD: &str = "{\"iss\":\"joe\",\r\n \"exp\":1300819380,\r\n \"http://example.com/is_root\":true}";

    #[test]
    fn should_keep_unknown_claims_with_their_type() {
        let payload = JwtPayload::from_json(RFC_PAYLOAD.as_bytes()).unwrap();
        assert_eq!(payload.issuer.as_deref(), Some("joe"));
        assert_eq!(payload.expiration_time.unwrap().unix_timestamp(), 1300819380);
        assert_eq!(payload.unknown_claims().len(), 1);
        assert_eq!(payload.unknown_claims()["http://example.com/is_root"], json!(true));

        let json = payload.to_json().unwrap();
        assert_eq!(json, r#"{"iss":"joe","exp":1300819380,"http://example.com/is_root":true}"#);
    }

    #[test]
    fn should_write_unknown_claims_after_known_ones() {
        let payload = JwtPayload::from(JwtClaimsSet::default().with_subject("alice"))
            .with_unknown_claim("z", 1)
            .unwrap()
            .with_unknown_claim("a", json!({"nested": [1, 2]}))
            .unwrap();
        let json = payload.to_json().unwrap();
        assert_eq!(json, r#"{"sub":"alice","z":1,"a":{"nested":[1,2]}}"#);
        assert_eq!(JwtPayload::from_json(json.as_bytes()).unwrap(), payload);
    }

    #[test]
    fn should_reject_known_claim_as_unknown() {
        let result = JwtPayload::default().with_unknown_claim("exp", 1);
        assert!(matches!(result.unwrap_err(), RustyJoseError::ArgumentError(_)));
    }

    #[test]
    fn should_strip_known_names_on_construction() {
        let unknown = json!({"iss": "mallory", "role": "admin"}).as_object().unwrap().clone();
        let payload = JwtPayload::new(JwtClaimsSet::default().with_issuer("joe"), unknown);
        assert_eq!(payload.unknown_claims().keys().collect::<Vec<_>>(), ["role"]);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, json!({"iss": "joe", "role": "admin"}));
    }

    #[test]
    fn should_fail_on_non_object_payload() {
        assert!(JwtPayload::from_json(b"[1]").is_err());
        assert!(JwtPayload::from_json(br#"{"exp":"tomorrow"}"#).is_err());
    }
}
