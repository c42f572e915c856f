use super::reject;
use crate::{alg::none::NONE, prelude::*};

impl RustyJose {
    /// Decodes a token and checks its signature with `key`
    ///
    /// Unsigned tokens are always refused, even when `alg` is "none" and the key would accept them.
    /// Returns the payload only once the signature is known to be valid
    pub fn validate<K: SigningKey + ?Sized>(token: &str, key: &K) -> RustyJoseResult<JwtPayload> {
        Self::validate_with(token, |_| Ok(key))
    }

    /// Same as [RustyJose::validate] with a key chosen after reading the header, for example by its
    /// 'kid' in a [JsonWebKeySet]. The header has not been authenticated at that point
    pub fn validate_with<'k, K, F>(token: &str, key_provider: F) -> RustyJoseResult<JwtPayload>
    where
        K: SigningKey + ?Sized + 'k,
        F: FnOnce(&JoseHeader) -> RustyJoseResult<&'k K>,
    {
        let DecodedJwt {
            header,
            payload,
            signature,
        } = Self::decode_unverified(token)?;
        let signature = match signature {
            Some(signature) if header.alg != JwsAlgorithm::None && !signature.signature.is_empty() => signature,
            _ => return reject(JwsDecodeError::Unsigned),
        };
        let alg = registry::lookup(header.alg)?;
        let key = key_provider(&header)?;
        if !alg.verify(&signature, &key)? {
            tracing::debug!(alg = %header.alg, kid = ?header.kid, "signature verification failed");
            return Err(JwsDecodeError::SignatureVerificationFailed.into());
        }
        Ok(payload)
    }

    /// Checks the signature of an already decoded token
    ///
    /// An unsigned token is valid only when `allow_unsigned` is set and its third segment is present
    /// and empty. A missing signature on a signed token is `Ok(false)`
    pub fn verify<K: SigningKey + ?Sized>(
        decoded: &DecodedJwt,
        key: &K,
        allow_unsigned: bool,
    ) -> RustyJoseResult<bool> {
        let Some(signature) = &decoded.signature else {
            return Ok(false);
        };
        match decoded.header.alg {
            JwsAlgorithm::None => Ok(allow_unsigned && NONE.verify(signature, &key)?),
            alg => registry::lookup(alg)?.verify(signature, &key),
        }
    }
}
