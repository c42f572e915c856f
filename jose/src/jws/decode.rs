use serde::de::DeserializeOwned;

use super::reject;
use crate::{b64, prelude::*};

impl RustyJose {
    /// Splits and decodes a compact token without checking its signature
    ///
    /// Fails with a [JwsDecodeError] when the token is structurally invalid:
    /// * less than 2 segments, or 4 or more than 5 segments. 5 segments denote an encrypted token which is
    ///   not supported
    /// * a segment outside of the base64url alphabet. Header and payload must not be empty
    /// * a header or a payload which is not the JSON expected
    /// * a signed token without its third segment
    pub fn decode_unverified(token: &str) -> RustyJoseResult<DecodedJwt> {
        let parts = token.split('.').collect::<Vec<_>>();
        match parts.len() {
            0 | 1 => return reject(JwsDecodeError::InvalidJws),
            5 => return reject(JwsDecodeError::JweNotSupported),
            n if n > 3 => return reject(JwsDecodeError::UnrecognisedToken),
            _ => {}
        }
        if let Some(signature) = parts.get(2) {
            if !signature.is_empty() && !b64::is_base64url(signature) {
                return reject(JwsDecodeError::InvalidBase64Format(JwsPart::Signature));
            }
        }
        if !b64::is_base64url(parts[0]) {
            return reject(JwsDecodeError::InvalidBase64Format(JwsPart::Header));
        }
        if !b64::is_base64url(parts[1]) {
            return reject(JwsDecodeError::InvalidBase64Format(JwsPart::Payload));
        }

        let header = decode_part::<JoseHeader>(parts[0], JwsPart::Header)?;
        // a signed token always has a third segment, possibly empty
        if header.alg != JwsAlgorithm::None && parts.len() != 3 {
            return reject(JwsDecodeError::MissingSignature);
        }
        let payload = decode_part::<JwtPayload>(parts[1], JwsPart::Payload)?;

        let signature = match parts.get(2) {
            Some(signature) => {
                let signing_input = &token[..parts[0].len() + 1 + parts[1].len()];
                Some(UnverifiedSignature::new(signing_input, decode_segment(signature)?))
            }
            None => None,
        };
        Ok(DecodedJwt {
            header,
            payload,
            signature,
        })
    }
}

fn decode_segment(segment: &str) -> RustyJoseResult<Vec<u8>> {
    match b64::decode(segment) {
        Err(RustyJoseError::DecodeError(reason)) => reject(reason),
        decoded => decoded,
    }
}

fn decode_part<T: DeserializeOwned>(part: &str, kind: JwsPart) -> RustyJoseResult<T> {
    let json = decode_segment(part)?;
    match serde_json::from_slice(&json) {
        Ok(value) => Ok(value),
        Err(e) => reject(JwsDecodeError::Deserialization(kind, e)),
    }
}
