//! Elliptic curve key handles for P-256, P-384 and P-521

use crate::prelude::*;

/// A native elliptic curve key for the ES* algorithms
#[derive(Clone)]
pub enum EcKey {
    /// P-256 public key
    P256Public(p256::ecdsa::VerifyingKey),
    /// P-256 key pair
    P256Private(p256::ecdsa::SigningKey),
    /// P-384 public key
    P384Public(p384::ecdsa::VerifyingKey),
    /// P-384 key pair
    P384Private(p384::ecdsa::SigningKey),
    /// P-521 public key
    P521Public(p521::ecdsa::VerifyingKey),
    /// P-521 key pair
    P521Private(p521::ecdsa::SigningKey),
}

impl EcKey {
    /// Generates a fresh key pair on the given curve
    pub fn generate(curve: &EcCurve) -> RustyJoseResult<Self> {
        let mut rng = rand::rngs::OsRng;
        Ok(match curve {
            EcCurve::P256 => Self::P256Private(p256::ecdsa::SigningKey::random(&mut rng)),
            EcCurve::P384 => Self::P384Private(p384::ecdsa::SigningKey::random(&mut rng)),
            EcCurve::P521 => Self::P521Private(p521::ecdsa::SigningKey::random(&mut rng)),
            EcCurve::Other(_) => return Err(RustyJoseError::UnsupportedKey("unsupported elliptic curve")),
        })
    }

    /// Builds a public key from its affine coordinates
    pub fn from_coordinates(curve: &EcCurve, x: &[u8], y: &[u8]) -> RustyJoseResult<Self> {
        let size = curve
            .coordinate_size()
            .ok_or(RustyJoseError::UnsupportedKey("unsupported elliptic curve"))?;
        if x.len() != size || y.len() != size {
            return Err(RustyJoseError::UnsupportedKey("invalid elliptic curve coordinates length"));
        }
        // SEC1 uncompressed point
        let point = [&[0x04], x, y].concat();
        let invalid_point = |_| RustyJoseError::UnsupportedKey("invalid elliptic curve point");
        Ok(match curve {
            EcCurve::P256 => {
                Self::P256Public(p256::ecdsa::VerifyingKey::from_sec1_bytes(&point).map_err(invalid_point)?)
            }
            EcCurve::P384 => {
                Self::P384Public(p384::ecdsa::VerifyingKey::from_sec1_bytes(&point).map_err(invalid_point)?)
            }
            EcCurve::P521 => {
                Self::P521Public(p521::ecdsa::VerifyingKey::from_sec1_bytes(&point).map_err(invalid_point)?)
            }
            EcCurve::Other(_) => return Err(RustyJoseError::ImplementationError),
        })
    }

    /// Builds a key pair from its private scalar
    pub fn from_private_scalar(curve: &EcCurve, d: &[u8]) -> RustyJoseResult<Self> {
        let invalid_scalar = |_| RustyJoseError::UnsupportedKey("invalid elliptic curve private key");
        Ok(match curve {
            EcCurve::P256 => Self::P256Private(p256::ecdsa::SigningKey::from_slice(d).map_err(invalid_scalar)?),
            EcCurve::P384 => Self::P384Private(p384::ecdsa::SigningKey::from_slice(d).map_err(invalid_scalar)?),
            EcCurve::P521 => Self::P521Private(p521::ecdsa::SigningKey::from_slice(d).map_err(invalid_scalar)?),
            EcCurve::Other(_) => return Err(RustyJoseError::UnsupportedKey("unsupported elliptic curve")),
        })
    }

    /// Curve of the key
    pub fn curve(&self) -> EcCurve {
        match self {
            Self::P256Public(_) | Self::P256Private(_) => EcCurve::P256,
            Self::P384Public(_) | Self::P384Private(_) => EcCurve::P384,
            Self::P521Public(_) | Self::P521Private(_) => EcCurve::P521,
        }
    }

    /// Whether this key can sign
    pub fn is_private(&self) -> bool {
        matches!(self, Self::P256Private(_) | Self::P384Private(_) | Self::P521Private(_))
    }

    /// The public half of this key
    pub fn public_key(&self) -> Self {
        match self {
            Self::P256Private(sk) => Self::P256Public(p256::ecdsa::VerifyingKey::from(sk)),
            Self::P384Private(sk) => Self::P384Public(p384::ecdsa::VerifyingKey::from(sk)),
            Self::P521Private(sk) => Self::P521Public(p521::ecdsa::VerifyingKey::from(sk)),
            public => public.clone(),
        }
    }

    /// Affine `(x, y)` coordinates of the public point, each left padded to the curve's coordinate size
    pub fn coordinates(&self) -> (Vec<u8>, Vec<u8>) {
        let point = match self {
            Self::P256Public(vk) => vk.to_encoded_point(false).as_bytes().to_vec(),
            Self::P256Private(sk) => sk.verifying_key().to_encoded_point(false).as_bytes().to_vec(),
            Self::P384Public(vk) => vk.to_encoded_point(false).as_bytes().to_vec(),
            Self::P384Private(sk) => sk.verifying_key().to_encoded_point(false).as_bytes().to_vec(),
            Self::P521Public(vk) => vk.to_encoded_point(false).as_bytes().to_vec(),
            Self::P521Private(sk) => p521::ecdsa::VerifyingKey::from(sk)
                .to_encoded_point(false)
                .as_bytes()
                .to_vec(),
        };
        // skip the SEC1 tag, then both coordinates have the same length
        let (x, y) = point[1..].split_at((point.len() - 1) / 2);
        (x.to_vec(), y.to_vec())
    }

    /// Private scalar, if any
    pub fn private_scalar(&self) -> Option<Vec<u8>> {
        match self {
            Self::P256Private(sk) => Some(sk.to_bytes().to_vec()),
            Self::P384Private(sk) => Some(sk.to_bytes().to_vec()),
            Self::P521Private(sk) => Some(sk.to_bytes().to_vec()),
            _ => None,
        }
    }
}

impl std::fmt::Debug for EcKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.is_private() { "private" } else { "public" };
        write!(f, "EcKey({}, {kind})", self.curve())
    }
}

impl PartialEq for EcKey {
    fn eq(&self, other: &Self) -> bool {
        self.curve() == other.curve()
            && self.coordinates() == other.coordinates()
            && self.private_scalar() == other.private_scalar()
    }
}
