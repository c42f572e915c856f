//! Process wide table of the algorithm implementations available in this build
//!
//! Built on first use and never mutated afterwards so lookups need no locking

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::{ecdsa::EcdsaAlgorithm, hmac::HmacAlgorithm, none::NONE};
use crate::prelude::*;

static HS256: HmacAlgorithm = HmacAlgorithm::HS256;
static HS384: HmacAlgorithm = HmacAlgorithm::HS384;
static HS512: HmacAlgorithm = HmacAlgorithm::HS512;
static ES256: EcdsaAlgorithm = EcdsaAlgorithm::ES256;
static ES384: EcdsaAlgorithm = EcdsaAlgorithm::ES384;
static ES512: EcdsaAlgorithm = EcdsaAlgorithm::ES512;

#[cfg(feature = "rsa")]
mod rsa_family {
    use crate::alg::rsa::RsaAlgorithm;

    pub static RS256: RsaAlgorithm = RsaAlgorithm::RS256;
    pub static RS384: RsaAlgorithm = RsaAlgorithm::RS384;
    pub static RS512: RsaAlgorithm = RsaAlgorithm::RS512;
    pub static PS256: RsaAlgorithm = RsaAlgorithm::PS256;
    pub static PS384: RsaAlgorithm = RsaAlgorithm::PS384;
    pub static PS512: RsaAlgorithm = RsaAlgorithm::PS512;
}

lazy_static! {
    static ref REGISTRY: HashMap<JwsAlgorithm, &'static dyn JwsAlgorithmImpl> = {
        #[allow(unused_mut)]
        let mut algorithms = vec![
            &HS256 as &'static dyn JwsAlgorithmImpl,
            &HS384,
            &HS512,
            &ES256,
            &ES384,
            &ES512,
        ];
        #[cfg(feature = "rsa")]
        algorithms.extend([
            &rsa_family::RS256 as &'static dyn JwsAlgorithmImpl,
            &rsa_family::RS384,
            &rsa_family::RS512,
            &rsa_family::PS256,
            &rsa_family::PS384,
            &rsa_family::PS512,
        ]);
        algorithms.into_iter().map(|a| (a.id(), a)).collect()
    };
}

/// Whether `alg` names an algorithm this build can sign and verify with. Always true for "none"
pub fn supports(alg: &str) -> bool {
    match JwsAlgorithm::try_from(alg) {
        Ok(JwsAlgorithm::None) => true,
        Ok(alg) => REGISTRY.contains_key(&alg),
        Err(_) => false,
    }
}

/// Implementation of `alg`, failing with [RustyJoseError::UnsupportedAlgorithm] when this build lacks it
pub fn lookup(alg: JwsAlgorithm) -> RustyJoseResult<&'static dyn JwsAlgorithmImpl> {
    tracing::trace!(%alg, "algorithm lookup");
    if alg == JwsAlgorithm::None {
        return Ok(&NONE);
    }
    REGISTRY
        .get(&alg)
        .copied()
        .ok_or_else(|| RustyJoseError::UnsupportedAlgorithm(alg.to_string()))
}

/// Same as [lookup] from the 'alg' header value
pub fn lookup_name(alg: &str) -> RustyJoseResult<&'static dyn JwsAlgorithmImpl> {
    lookup(JwsAlgorithm::try_from(alg)?)
}
