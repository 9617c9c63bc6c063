//! Error type definitions for signing and verification

/// Primary error type for streamsig operations
///
/// The five kinds form a closed taxonomy shared by every engine family.
/// [`Error::BufferTooSmall`] is the one error a correct caller sees
/// routinely: it answers the first half of the two-phase size negotiation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Null, empty or malformed argument, detected before any engine is touched
    #[error("{context}: invalid parameter: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Allocation failure while building a context or an output
    #[error("{context}: out of memory")]
    NoMemory { context: &'static str },

    /// Generic engine-level failure
    ///
    /// Unsupported algorithm, malformed or inconsistent key, signature of
    /// the wrong length.
    #[error("{context}: {message}")]
    Fail {
        context: &'static str,
        message: String,
    },

    /// Output buffer smaller than the algorithm's signature length
    #[error("{context}: buffer too small (required {required}, got {actual})")]
    BufferTooSmall {
        context: &'static str,
        required: usize,
        actual: usize,
    },

    /// Well-formed signature that does not match the message or key
    #[error("{context}: invalid signature")]
    InvalidSignature { context: &'static str },
}

/// Result type for streamsig operations
pub type Result<T> = core::result::Result<T, Error>;

/// Discriminant of [`Error`] without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidParameter,
    NoMemory,
    Fail,
    BufferTooSmall,
    InvalidSignature,
}

impl Error {
    pub fn invalid_parameter(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    pub fn fail(context: &'static str, message: impl Into<String>) -> Self {
        Self::Fail {
            context,
            message: message.into(),
        }
    }

    pub fn no_memory(context: &'static str) -> Self {
        Self::NoMemory { context }
    }

    pub fn buffer_too_small(context: &'static str, required: usize, actual: usize) -> Self {
        Self::BufferTooSmall {
            context,
            required,
            actual,
        }
    }

    pub fn invalid_signature(context: &'static str) -> Self {
        Self::InvalidSignature { context }
    }

    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            Self::NoMemory { .. } => ErrorKind::NoMemory,
            Self::Fail { .. } => ErrorKind::Fail,
            Self::BufferTooSmall { .. } => ErrorKind::BufferTooSmall,
            Self::InvalidSignature { .. } => ErrorKind::InvalidSignature,
        }
    }

    /// The required output length carried by a [`Error::BufferTooSmall`]
    pub fn required_len(&self) -> Option<usize> {
        match self {
            Self::BufferTooSmall { required, .. } => Some(*required),
            _ => None,
        }
    }

    /// Replace the context of an existing error, keeping everything else
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::NoMemory { .. } => Self::NoMemory { context },
            Self::Fail { message, .. } => Self::Fail { context, message },
            Self::BufferTooSmall {
                required, actual, ..
            } => Self::BufferTooSmall {
                context,
                required,
                actual,
            },
            Self::InvalidSignature { .. } => Self::InvalidSignature { context },
        }
    }
}
