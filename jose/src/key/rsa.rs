//! RSA key handle

use ::rsa::{RsaPrivateKey, RsaPublicKey, traits::PublicKeyParts};

use crate::prelude::*;

/// A native RSA key for the RS* and PS* algorithms
#[derive(Clone, PartialEq, Eq)]
pub struct RsaKey {
    public: RsaPublicKey,
    private: Option<RsaPrivateKey>,
}

impl RsaKey {
    /// Generates a key pair with a modulus of `bits` bits
    pub fn generate(bits: usize) -> RustyJoseResult<Self> {
        let private = RsaPrivateKey::new(&mut rand::rngs::OsRng, bits)?;
        Ok(Self::from_private(private))
    }

    /// A verification only key
    pub fn from_public(public: RsaPublicKey) -> Self {
        Self { public, private: None }
    }

    /// A key pair, the public half being derived from the private key
    pub fn from_private(private: RsaPrivateKey) -> Self {
        Self {
            public: private.to_public_key(),
            private: Some(private),
        }
    }

    /// Public half
    pub fn public(&self) -> &RsaPublicKey {
        &self.public
    }

    /// Private half, if any
    pub fn private(&self) -> Option<&RsaPrivateKey> {
        self.private.as_ref()
    }

    /// The same key without its private half
    pub fn to_public_key(&self) -> Self {
        Self::from_public(self.public.clone())
    }
}

impl std::fmt::Debug for RsaKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.private.is_some() { "private" } else { "public" };
        write!(f, "RsaKey({} bits, {kind})", self.public.size() * 8)
    }
}
