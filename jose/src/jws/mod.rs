//! JWS compact serialization, see [RFC 7515 Section 7.1](https://www.rfc-editor.org/rfc/rfc7515.html#section-7.1)
//!
//! `base64url(header) "." base64url(payload) ["." base64url(signature)]`

use crate::prelude::*;

mod decode;
mod sign;
mod verify;

/// A signature exactly as found in a token, next to the text it was computed over
///
/// The signing input is the received `header.payload` substring and never a re-serialization,
/// which could reorder members or change whitespace
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnverifiedSignature {
    /// The first two segments of the token and the dot between them
    pub signing_input: String,
    /// Decoded signature segment
    pub signature: Vec<u8>,
}

impl UnverifiedSignature {
    /// Pairs a signing input with signature bytes
    pub fn new(signing_input: impl Into<String>, signature: Vec<u8>) -> Self {
        Self {
            signing_input: signing_input.into(),
            signature,
        }
    }
}

/// A decoded but not yet verified token
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedJwt {
    /// JOSE header
    pub header: JoseHeader,
    /// Claims
    pub payload: JwtPayload,
    /// Present whenever the token had a third segment, even an empty one
    pub signature: Option<UnverifiedSignature>,
}

/// Logs why a token is refused and turns the reason into an error
fn reject<T>(reason: JwsDecodeError) -> RustyJoseResult<T> {
    tracing::debug!(%reason, "token rejected");
    Err(reason.into())
}
