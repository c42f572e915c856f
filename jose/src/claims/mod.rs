//! JWT claims set, see [RFC 7519 Section 4](https://www.rfc-editor.org/rfc/rfc7519.html#section-4)
//! and the [OpenID Connect standard claims](https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims)

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::prelude::*;

pub mod audience;
pub mod payload;

/// Registered and profile claims, in serialization order
pub const KNOWN_CLAIMS: [&str; 26] = [
    "iss",
    "sub",
    "aud",
    "exp",
    "nbf",
    "iat",
    "jti",
    "name",
    "given_name",
    "family_name",
    "middle_name",
    "nickname",
    "preferred_username",
    "profile",
    "picture",
    "website",
    "email",
    "email_verified",
    "gender",
    "birthdate",
    "zoneinfo",
    "locale",
    "phone_number",
    "phone_number_verified",
    "address",
    "updated_at",
];

/// Claims with a fixed meaning. Dates are whole seconds since the Unix epoch on the wire, any
/// sub-second part is dropped when serializing
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JwtClaimsSet {
    /// Issuer
    #[serde(rename = "iss", default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// Subject
    #[serde(rename = "sub", default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Audience
    #[serde(rename = "aud", default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<Audience>,
    /// Expiration time
    #[serde(
        rename = "exp",
        default,
        with = "time::serde::timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration_time: Option<OffsetDateTime>,
    /// Not before
    #[serde(
        rename = "nbf",
        default,
        with = "time::serde::timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub not_before: Option<OffsetDateTime>,
    /// Issued at
    #[serde(
        rename = "iat",
        default,
        with = "time::serde::timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub issued_at: Option<OffsetDateTime>,
    /// JWT ID
    #[serde(rename = "jti", default, skip_serializing_if = "Option::is_none")]
    pub jwt_id: Option<String>,

    /// Full name
    #[serde(rename = "name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Given name
    #[serde(rename = "given_name", default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    /// Surname
    #[serde(rename = "family_name", default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    /// Middle name
    #[serde(rename = "middle_name", default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Casual name
    #[serde(rename = "nickname", default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Shorthand name the user wishes to be referred to as
    #[serde(rename = "preferred_username", default, skip_serializing_if = "Option::is_none")]
    pub preferred_username: Option<String>,
    /// Profile page URL
    #[serde(rename = "profile", default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// Profile picture URL
    #[serde(rename = "picture", default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// Web page or blog URL
    #[serde(rename = "website", default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Preferred e-mail address
    #[serde(rename = "email", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Whether the e-mail address has been verified
    #[serde(rename = "email_verified", default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    /// Gender
    #[serde(rename = "gender", default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// `YYYY-MM-DD` or `YYYY`, kept as a string
    #[serde(rename = "birthdate", default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    /// Time zone, e.g. "Europe/Paris"
    #[serde(rename = "zoneinfo", default, skip_serializing_if = "Option::is_none")]
    pub zoneinfo: Option<String>,
    /// BCP47 language tag
    #[serde(rename = "locale", default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Preferred telephone number
    #[serde(rename = "phone_number", default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Whether the phone number has been verified
    #[serde(rename = "phone_number_verified", default, skip_serializing_if = "Option::is_none")]
    pub phone_number_verified: Option<bool>,
    /// Postal address
    #[serde(rename = "address", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Last time the profile was updated
    #[serde(
        rename = "updated_at",
        default,
        with = "time::serde::timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<OffsetDateTime>,
}

/// The 'address' claim, see [OpenID Connect Core Section 5.1.1][1]
///
/// [1]: https://openid.net/specs/openid-connect-core-1_0.html#AddressClaim
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    /// Full mailing address
    #[serde(rename = "formatted", default, skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    /// Street address, possibly on several lines
    #[serde(rename = "street_address", default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    /// City or locality
    #[serde(rename = "locality", default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    /// State, province or region
    #[serde(rename = "region", default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Zip or postal code
    #[serde(rename = "postal_code", default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Country name
    #[serde(rename = "country", default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Truncates to whole seconds, the precision of JWT dates
fn whole_seconds(date: OffsetDateTime) -> OffsetDateTime {
    date - time::Duration::nanoseconds(date.nanosecond().into())
}

impl JwtClaimsSet {
    /// Sets 'iss'
    pub fn with_issuer(mut self, iss: impl Into<String>) -> Self {
        self.issuer = Some(iss.into());
        self
    }

    /// Sets 'sub'
    pub fn with_subject(mut self, sub: impl Into<String>) -> Self {
        self.subject = Some(sub.into());
        self
    }

    /// Sets a single audience
    pub fn with_audience(mut self, aud: impl Into<String>) -> Self {
        self.audience = Some(Audience(vec![aud.into()]));
        self
    }

    /// Sets many audiences
    pub fn with_audiences(mut self, aud: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.audience = Some(Audience(aud.into_iter().map(Into::into).collect()));
        self
    }

    /// Sets 'exp'
    pub fn with_expiration_time(mut self, exp: OffsetDateTime) -> Self {
        self.expiration_time = Some(exp);
        self
    }

    /// Sets 'nbf'
    pub fn with_not_before(mut self, nbf: OffsetDateTime) -> Self {
        self.not_before = Some(nbf);
        self
    }

    /// Sets 'iat'
    pub fn with_issued_at(mut self, iat: OffsetDateTime) -> Self {
        self.issued_at = Some(iat);
        self
    }

    /// Sets 'iat' to the current time, truncated to the second
    pub fn issued_now(self) -> Self {
        self.with_issued_at(whole_seconds(OffsetDateTime::now_utc()))
    }

    /// Sets 'exp' `expiry` after 'iat', or after now when 'iat' is absent
    pub fn expires_in(self, expiry: core::time::Duration) -> Self {
        let from = self
            .issued_at
            .unwrap_or_else(|| whole_seconds(OffsetDateTime::now_utc()));
        self.with_expiration_time(from + expiry)
    }

    /// Sets 'jti'
    pub fn with_jwt_id(mut self, jti: impl Into<String>) -> Self {
        self.jwt_id = Some(jti.into());
        self
    }

    /// Sets 'jti' to a random UUID
    pub fn with_random_jwt_id(self) -> Self {
        self.with_jwt_id(uuid::Uuid::new_v4().to_string())
    }

    /// Sets 'name'
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets 'email' and 'email_verified'
    pub fn with_email(mut self, email: impl Into<String>, verified: bool) -> Self {
        self.email = Some(email.into());
        self.email_verified = Some(verified);
        self
    }

    /// Sets 'address'
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::datetime;

    use super::*;

    #[test]
    fn should_write_dates_as_seconds() {
        let claims = JwtClaimsSet::default()
            .with_issuer("joe")
            .with_expiration_time(datetime!(2011-03-22 18:43:00.750 UTC));
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json, json!({"iss": "joe", "exp": 1300819380}));
        let back = serde_json::from_value::<JwtClaimsSet>(json).unwrap();
        // sub-second precision is lost
        assert_eq!(back.expiration_time, Some(datetime!(2011-03-22 18:43:00 UTC)));
    }

    #[test]
    fn should_write_fields_in_declared_order() {
        let claims = JwtClaimsSet::default()
            .with_jwt_id("1")
            .with_audience("api")
            .with_subject("alice")
            .with_issuer("joe");
        let json = serde_json::to_string(&claims).unwrap();
        assert_eq!(json, r#"{"iss":"joe","sub":"alice","aud":"api","jti":"1"}"#);
    }

    #[test]
    fn should_set_expiry_relative_to_issuance() {
        let claims = JwtClaimsSet::default().issued_now().expires_in(core::time::Duration::from_secs(90));
        let iat = claims.issued_at.unwrap();
        assert_eq!(iat.nanosecond(), 0);
        assert_eq!(claims.expiration_time.unwrap() - iat, time::Duration::seconds(90));
    }

    #[test]
    fn should_generate_distinct_jwt_ids() {
        let a = JwtClaimsSet::default().with_random_jwt_id();
        let b = JwtClaimsSet::default().with_random_jwt_id();
        assert_ne!(a.jwt_id, b.jwt_id);
        assert!(uuid::Uuid::parse_str(a.jwt_id.as_deref().unwrap()).is_ok());
    }

    #[test]
    fn should_read_profile_claims() {
        let json = json!({
            "sub": "248289761001",
            "name": "Jane Doe",
            "given_name": "Jane",
            "family_name": "Doe",
            "preferred_username": "j.doe",
            "email": "janedoe@example.com",
            "email_verified": true,
            "picture": "http://example.com/janedoe/me.jpg",
            "address": {"street_address": "1234 Hollywood Blvd.", "country": "US"},
            "updated_at": 1311280970
        });
        let claims = serde_json::from_value::<JwtClaimsSet>(json.clone()).unwrap();
        assert_eq!(claims.given_name.as_deref(), Some("Jane"));
        assert_eq!(claims.email_verified, Some(true));
        assert_eq!(claims.address.as_ref().unwrap().country.as_deref(), Some("US"));
        assert_eq!(claims.updated_at.unwrap().unix_timestamp(), 1311280970);
        assert_eq!(serde_json::to_value(&claims).unwrap(), json);
    }

    #[test]
    fn known_claims_should_match_fields() {
        let mut claims = JwtClaimsSet::default()
            .with_issuer("i")
            .with_subject("s")
            .with_audience("a")
            .with_expiration_time(OffsetDateTime::UNIX_EPOCH)
            .with_not_before(OffsetDateTime::UNIX_EPOCH)
            .with_issued_at(OffsetDateTime::UNIX_EPOCH)
            .with_jwt_id("j")
            .with_name("n")
            .with_email("e", true)
            .with_address(Address::default());
        claims.given_name = Some(String::new());
        claims.family_name = Some(String::new());
        claims.middle_name = Some(String::new());
        claims.nickname = Some(String::new());
        claims.preferred_username = Some(String::new());
        claims.profile = Some(String::new());
        claims.picture = Some(String::new());
        claims.website = Some(String::new());
        claims.gender = Some(String::new());
        claims.birthdate = Some(String::new());
        claims.zoneinfo = Some(String::new());
        claims.locale = Some(String::new());
        claims.phone_number = Some(String::new());
        claims.phone_number_verified = Some(false);
        claims.updated_at = Some(OffsetDateTime::UNIX_EPOCH);
        let json = serde_json::to_value(&claims).unwrap();
        let names = json.as_object().unwrap().keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(names, KNOWN_CLAIMS);
    }
}
