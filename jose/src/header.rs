//! JOSE header, see [RFC 7515 Section 4](https://www.rfc-editor.org/rfc/rfc7515.html#section-4)

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Registered header parameters of a JWS. Parameters outside of this set are dropped on read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoseHeader {
    /// Media type of the complete JWS
    #[serde(rename = "typ", default = "JoseHeader::default_type", skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    /// Algorithm the JWS is secured with, the only parameter consulted for dispatch
    #[serde(rename = "alg")]
    pub alg: JwsAlgorithm,
    /// URL of a JWK Set holding the key
    #[serde(rename = "jku", default, skip_serializing_if = "Option::is_none")]
    pub jwk_set_url: Option<String>,
    /// Embedded public key
    #[serde(rename = "jwk", default, skip_serializing_if = "Option::is_none")]
    pub jwk: Option<JsonWebKey>,
    /// Hint about the key used
    #[serde(rename = "kid", default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    /// URL of an X.509 certificate chain, never dereferenced here
    #[serde(rename = "x5u", default, skip_serializing_if = "Option::is_none")]
    pub x509_url: Option<String>,
    /// X.509 certificate chain as base64 DER, carried as opaque data
    #[serde(rename = "x5c", default, skip_serializing_if = "Option::is_none")]
    pub x509_cert_chain: Option<Vec<String>>,
    /// Media type of the payload
    #[serde(rename = "cty", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Extension parameters a recipient must understand
    #[serde(rename = "crit", default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<Vec<String>>,
}

impl JoseHeader {
    /// Default 'typ'
    pub const TYP: &'static str = "JWT";

    fn default_type() -> Option<String> {
        Some(Self::TYP.to_string())
    }

    /// A `{"typ":"JWT","alg":...}` header
    pub fn new(alg: JwsAlgorithm) -> Self {
        Self {
            typ: Self::default_type(),
            alg,
            jwk_set_url: None,
            jwk: None,
            kid: None,
            x509_url: None,
            x509_cert_chain: None,
            content_type: None,
            critical: None,
        }
    }

    /// Drops the 'typ' parameter
    pub fn without_type(mut self) -> Self {
        self.typ = None;
        self
    }

    /// Sets 'kid'
    pub fn with_key_id(mut self, kid: impl Into<String>) -> Self {
        self.kid = Some(kid.into());
        self
    }

    /// Embeds a public key
    pub fn with_jwk(mut self, jwk: JsonWebKey) -> Self {
        self.jwk = Some(jwk);
        self
    }

    /// Sets 'cty'
    pub fn with_content_type(mut self, cty: impl Into<String>) -> Self {
        self.content_type = Some(cty.into());
        self
    }

    /// Sets 'crit'
    pub fn with_critical(mut self, critical: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.critical = Some(critical.into_iter().map(Into::into).collect());
        self
    }

    /// Sets 'jku'
    pub fn with_jwk_set_url(mut self, url: impl Into<String>) -> Self {
        self.jwk_set_url = Some(url.into());
        self
    }

    /// Sets 'x5u'
    pub fn with_x509_url(mut self, url: impl Into<String>) -> Self {
        self.x509_url = Some(url.into());
        self
    }

    /// Sets 'x5c'
    pub fn with_x509_cert_chain(mut self, chain: Vec<String>) -> Self {
        self.x509_cert_chain = Some(chain);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::test_utils::*;

    use super::*;

    #[test]
    fn should_default_type() {
        let header = JoseHeader::new(JwsAlgorithm::HS256);
        assert_eq!(serde_json::to_string(&header).unwrap(), r#"{"typ":"JWT","alg":"HS256"}"#);
        let header = header.without_type();
        assert_eq!(serde_json::to_string(&header).unwrap(), r#"{"alg":"HS256"}"#);
    }

    #[test]
    fn should_default_type_when_absent_on_read() {
        let header = serde_json::from_str::<JoseHeader>(r#"{"alg":"ES256"}"#).unwrap();
        assert_eq!(header.typ.as_deref(), Some("JWT"));
        assert_eq!(header.alg, JwsAlgorithm::ES256);
    }

    #[test]
    fn should_require_alg() {
        assert!(serde_json::from_str::<JoseHeader>(r#"{"typ":"JWT"}"#).is_err());
        assert!(serde_json::from_str::<JoseHeader>(r#"{"alg":"XX999"}"#).is_err());
    }

    #[test]
    fn should_drop_unknown_parameters() {
        let header = serde_json::from_value::<JoseHeader>(json!({"alg": "none", "b64": false, "zip": "DEF"})).unwrap();
        let json = serde_json::to_value(&header).unwrap();
        assert_eq!(json, json!({"typ": "JWT", "alg": "none"}));
    }

    #[test]
    fn should_roundtrip_every_parameter() {
        let jwk = JsonWebKey::from_json(ES256_JWK).unwrap();
        let header = JoseHeader::new(JwsAlgorithm::ES256)
            .with_key_id("k1")
            .with_jwk(jwk.clone())
            .with_content_type("JWT")
            .with_critical(["exp"])
            .with_jwk_set_url("https://example.com/jwks.json")
            .with_x509_url("https://example.com/chain.pem")
            .with_x509_cert_chain(vec!["MIIB".to_string()]);
        let json = serde_json::to_value(&header).unwrap();
        assert_eq!(json["kid"], "k1");
        assert_eq!(json["jku"], "https://example.com/jwks.json");
        assert_eq!(json["x5c"], json!(["MIIB"]));
        assert_eq!(json["crit"], json!(["exp"]));
        assert_eq!(json["jwk"]["kty"], "EC");
        let back = serde_json::from_value::<JoseHeader>(json).unwrap();
        assert_eq!(back, header);
        assert_eq!(back.jwk, Some(jwk));
    }
}
