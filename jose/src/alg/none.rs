//! The unsecured `"none"` algorithm
//!
//! See [RFC 7518 Section 3.6](https://www.rfc-editor.org/rfc/rfc7518.html#section-3.6)

use crate::prelude::*;

/// Produces and accepts only empty signatures. Never reached through [RustyJose::validate]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NoneAlgorithm;

/// The one instance handed out by the registry
pub static NONE: NoneAlgorithm = NoneAlgorithm;

impl JwsAlgorithmImpl for NoneAlgorithm {
    fn id(&self) -> JwsAlgorithm {
        JwsAlgorithm::None
    }

    fn sign(&self, _signing_input: &[u8], _key: &dyn SigningKey) -> RustyJoseResult<String> {
        Ok(String::new())
    }

    fn verify(&self, signature: &UnverifiedSignature, _key: &dyn SigningKey) -> RustyJoseResult<bool> {
        Ok(signature.signature.is_empty())
    }
}
