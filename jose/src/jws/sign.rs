use crate::{b64, prelude::*};

impl RustyJose {
    /// Builds a compact JWS: `base64url(header).base64url(payload).base64url(signature)`
    ///
    /// Fails with [RustyJoseError::ArgumentError] when `header.alg` is not the algorithm's identifier,
    /// and with [RustyJoseError::UnsupportedKey] when the key does not fit it.
    ///
    /// # Arguments
    /// * `payload` - claims to sign
    /// * `header` - JOSE header, its 'alg' must be the one of `alg`
    /// * `alg` - implementation used to sign, usually fetched from the [registry]
    /// * `key` - signing key
    pub fn sign<K: SigningKey + ?Sized>(
        payload: &JwtPayload,
        header: &JoseHeader,
        alg: &dyn JwsAlgorithmImpl,
        key: &K,
    ) -> RustyJoseResult<String> {
        if header.alg != alg.id() {
            return Err(RustyJoseError::ArgumentError("header 'alg' differs from the signing algorithm"));
        }
        let header = b64::encode(serde_json::to_vec(header)?);
        let payload = b64::encode(serde_json::to_vec(payload)?);
        let signing_input = format!("{header}.{payload}");
        let signature = alg.sign(signing_input.as_bytes(), &key)?;
        tracing::trace!(alg = %alg.id(), "token signed");
        Ok(format!("{signing_input}.{signature}"))
    }

    /// Same as [RustyJose::sign] with the implementation registered for `header.alg`
    pub fn sign_with_registry<K: SigningKey + ?Sized>(
        payload: &JwtPayload,
        header: &JoseHeader,
        key: &K,
    ) -> RustyJoseResult<String> {
        Self::sign(payload, header, registry::lookup(header.alg)?, key)
    }
}
