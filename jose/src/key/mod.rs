//! Key material handed to JWS algorithms

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::prelude::*;

pub mod ec;
#[cfg(feature = "rsa")]
pub mod rsa;

/// Anything able to supply key material to a [JwsAlgorithmImpl]
///
/// Implemented by [JsonWebKey] as well as by native key handles. Implementations must be immutable
/// so that a single key can be shared across threads and calls.
pub trait SigningKey {
    /// Borrows the underlying key material
    fn key_material(&self) -> KeyMaterial<'_>;
}

impl<K: SigningKey + ?Sized> SigningKey for &K {
    fn key_material(&self) -> KeyMaterial<'_> {
        (**self).key_material()
    }
}

/// The concrete key families an algorithm can dispatch on
#[derive(Debug, Clone, Copy)]
pub enum KeyMaterial<'a> {
    /// A JSON Web Key of any type
    Jwk(&'a JsonWebKey),
    /// A raw HMAC secret
    Hmac(&'a [u8]),
    /// A native elliptic curve key
    Ec(&'a EcKey),
    /// A native RSA key
    #[cfg(feature = "rsa")]
    Rsa(&'a RsaKey),
}

/// A raw secret for the HS* algorithms
#[derive(Clone, Eq, PartialEq, Zeroize, ZeroizeOnDrop)]
pub struct HmacKey(Vec<u8>);

impl HmacKey {
    /// Wraps a secret
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(secret.into())
    }

    /// Generates a random secret of `len` bytes
    pub fn generate(len: usize) -> Self {
        use rand::RngCore as _;
        let mut secret = vec![0u8; len];
        rand::rngs::OsRng.fill_bytes(&mut secret);
        Self(secret)
    }

    /// Exposes the secret
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HmacKey").field(&"***").finish()
    }
}

impl From<&str> for HmacKey {
    fn from(secret: &str) -> Self {
        Self::new(secret.as_bytes())
    }
}

impl From<&[u8]> for HmacKey {
    fn from(secret: &[u8]) -> Self {
        Self::new(secret)
    }
}

impl From<Vec<u8>> for HmacKey {
    fn from(secret: Vec<u8>) -> Self {
        Self(secret)
    }
}

impl From<HmacKey> for JsonWebKey {
    fn from(key: HmacKey) -> Self {
        JsonWebKey::Symmetric(SymmetricJwk::new(key.as_bytes().to_vec()))
    }
}

impl SigningKey for HmacKey {
    fn key_material(&self) -> KeyMaterial<'_> {
        KeyMaterial::Hmac(&self.0)
    }
}

impl SigningKey for JsonWebKey {
    fn key_material(&self) -> KeyMaterial<'_> {
        KeyMaterial::Jwk(self)
    }
}

impl SigningKey for EcKey {
    fn key_material(&self) -> KeyMaterial<'_> {
        KeyMaterial::Ec(self)
    }
}

#[cfg(feature = "rsa")]
impl SigningKey for RsaKey {
    fn key_material(&self) -> KeyMaterial<'_> {
        KeyMaterial::Rsa(self)
    }
}
