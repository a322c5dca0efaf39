//! Error type definitions for signature operations

#[cfg(not(feature = "std"))]
use alloc::string::String;

#[cfg(feature = "std")]
use thiserror::Error as ThisError;

/// Primary error type for signature operations
///
/// Every variant names the class of input that was rejected so callers can
/// match on the kind of failure instead of on message text. A verification
/// that simply does not match is *not* an error; it is reported as `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(ThisError))]
pub enum Error {
    /// The message hash does not fit the digest range the scheme accepts
    #[cfg_attr(feature = "std", error("Invalid message hash: {context}"))]
    InvalidMessageHash { context: &'static str },

    /// The private key is zero or not below the group order
    #[cfg_attr(feature = "std", error("Invalid private key: {context}"))]
    InvalidPrivateKey { context: &'static str },

    /// The public key is off the curve, the identity, or badly encoded
    #[cfg_attr(feature = "std", error("Invalid public key: {context}"))]
    InvalidPublicKey { context: &'static str },

    /// A signature component lies outside the accepted range
    #[cfg_attr(feature = "std", error("Invalid signature: {context}"))]
    InvalidSignature { context: &'static str },

    /// A caller-supplied nonce is out of range or degenerate
    #[cfg_attr(feature = "std", error("Invalid nonce: {context}"))]
    InvalidNonce { context: &'static str },

    /// An arithmetic operation received an operand it is undefined for
    #[cfg_attr(feature = "std", error("Invalid operand for {operation}"))]
    InvalidOperand { operation: &'static str },

    /// Invalid length error with context
    #[cfg_attr(feature = "std", error("{context}: invalid length (expected {expected}, got {actual})"))]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[cfg_attr(feature = "std", error("{context}: {message}"))]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[cfg_attr(feature = "std", error("{context}: {message}"))]
    Other {
        context: &'static str,
        message: String,
    },
}

// Without std the derive is unavailable; the variant's debug form is the message
#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidMessageHash { .. } => Self::InvalidMessageHash { context },
            Self::InvalidPrivateKey { .. } => Self::InvalidPrivateKey { context },
            Self::InvalidPublicKey { .. } => Self::InvalidPublicKey { context },
            Self::InvalidSignature { .. } => Self::InvalidSignature { context },
            Self::InvalidNonce { .. } => Self::InvalidNonce { context },
            Self::InvalidOperand { .. } => Self::InvalidOperand { operation: context },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// The context string carried by this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidMessageHash { context }
            | Self::InvalidPrivateKey { context }
            | Self::InvalidPublicKey { context }
            | Self::InvalidSignature { context }
            | Self::InvalidNonce { context }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::Other { context, .. } => context,
            Self::InvalidOperand { operation } => operation,
        }
    }
}
