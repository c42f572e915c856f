//! JSON Web Signature compact serialization with the JSON Web Key and JSON Web Token models around it
//!
//! Decode a token without trusting it with [RustyJose::decode_unverified], check it against a key with
//! [RustyJose::validate] and produce one with [RustyJose::sign].
//! Every algorithm of [RFC 7518](https://www.rfc-editor.org/rfc/rfc7518.html) Section 3 is
//! available, RSA ones behind the `rsa` feature.
#![deny(missing_docs)]
#![allow(clippy::single_component_path_imports)]

#[cfg(test)]
use rstest_reuse;

#[cfg(test)]
#[allow(missing_docs)]
#[macro_use]
pub mod test_utils;
// both imports above have to be defined at the beginning of the crate for rstest to work

pub mod alg;
pub mod b64;
pub mod claims;
mod error;
pub mod header;
pub mod jwk;
pub mod jws;
pub mod key;

/// Prelude
pub mod prelude {
    pub use super::RustyJose;
    pub use crate::alg::{HashAlgorithm, JwsAlgorithm, JwsAlgorithmImpl, registry};
    pub use crate::claims::{Address, JwtClaimsSet, audience::Audience, payload::JwtPayload};
    pub use crate::error::{JwsDecodeError, JwsPart, RustyJoseError, RustyJoseResult};
    pub use crate::header::JoseHeader;
    pub use crate::jwk::{
        JsonWebKey, JwkCommon, PublicKeyUse, TryFromJwk, TryIntoJwk,
        ec::{EcCurve, EcJwk},
        oct::SymmetricJwk,
        rsa::{RsaJwk, RsaOtherPrime},
        set::JsonWebKeySet,
        thumbprint::JwkThumbprint,
    };
    pub use crate::jws::{DecodedJwt, UnverifiedSignature};
    #[cfg(feature = "rsa")]
    pub use crate::key::rsa::RsaKey;
    pub use crate::key::{HmacKey, KeyMaterial, SigningKey, ec::EcKey};
}

/// Entry point for decoding, validating and signing tokens
pub struct RustyJose;
