/// Wrapper over a [Result] with a [RustyJoseError] error
pub type RustyJoseResult<T> = Result<T, RustyJoseError>;

/// All errors which [crate::RustyJose] might throw
#[derive(Debug, thiserror::Error)]
pub enum RustyJoseError {
    /// Malformed compact serialization
    #[error(transparent)]
    DecodeError(#[from] JwsDecodeError),
    /// The requested 'alg' has no registered implementation in this build
    #[error("Unsupported JWS algorithm '{0}'")]
    UnsupportedAlgorithm(String),
    /// Key type does not fit the algorithm or lacks a component required by the operation
    #[error("Unsupported key because {0}")]
    UnsupportedKey(&'static str),
    /// Signature bytes do not have the expected width or structure
    #[error("Invalid signature because {0}")]
    InvalidSignature(&'static str),
    /// Json error, including unknown JWK key types
    #[error(transparent)]
    SerializationError(#[from] serde_json::Error),
    /// Error from a native signing primitive
    #[error(transparent)]
    SignatureError(#[from] signature::Error),
    /// Error while building a native RSA key
    #[cfg(feature = "rsa")]
    #[error(transparent)]
    RsaError(#[from] rsa::Error),
    /// This library has been used the wrong way by users
    #[error("Invalid argument because {0}")]
    ArgumentError(&'static str),
    /// We have done something terribly wrong
    #[error("We have done something terribly wrong and it needs to be fixed")]
    ImplementationError,
}

impl From<base64::DecodeError> for RustyJoseError {
    fn from(e: base64::DecodeError) -> Self {
        Self::DecodeError(JwsDecodeError::Base64(e))
    }
}

/// Failures of the compact serialization decoder and of token validation
#[derive(Debug, thiserror::Error)]
pub enum JwsDecodeError {
    /// Less than 2 parts
    #[error("Invalid JWS")]
    InvalidJws,
    /// 5 parts, encrypted tokens are not handled
    #[error("JWE not supported")]
    JweNotSupported,
    /// 4 or more than 5 parts
    #[error("Unrecognised JWS token")]
    UnrecognisedToken,
    /// A part contains characters outside of the base64url alphabet
    #[error("{0} is not base64url encoded")]
    InvalidBase64Format(JwsPart),
    /// Base64 decoding error
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),
    /// A part could not be deserialized
    #[error("{0} deserialisation failed: {1}")]
    Deserialization(JwsPart, #[source] serde_json::Error),
    /// A signed token lacks its signature part
    #[error("missing signature")]
    MissingSignature,
    /// Validation requires a real signature
    #[error("Can't validate token without a signature")]
    Unsigned,
    /// The signature does not match the key
    #[error("Signature verification failed")]
    SignatureVerificationFailed,
}

/// The dot-separated segments of a compact JWS
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum JwsPart {
    /// JOSE header
    Header,
    /// Claims
    Payload,
    /// Signature bytes
    Signature,
}

impl std::fmt::Display for JwsPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Header => "Header",
            Self::Payload => "Payload",
            Self::Signature => "Signature",
        };
        write!(f, "{name}")
    }
}
