//! Integer status codes for callers that bind to a C-shaped surface
//!
//! Session-protocol layers compare raw codes, so the discriminants are
//! part of the public contract and must not change.

use crate::error::{Error, ErrorKind, Result};

/// Outcome of an operation on the status-code surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Status {
    Success = 0,
    Fail = 11,
    InvalidParameter = 12,
    NoMemory = 13,
    BufferTooSmall = 14,
    InvalidSignature = 16,
}

impl Status {
    /// The raw integer code
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn is_success(self) -> bool {
        self == Status::Success
    }

    /// Decode a raw integer code
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Status::Success),
            11 => Some(Status::Fail),
            12 => Some(Status::InvalidParameter),
            13 => Some(Status::NoMemory),
            14 => Some(Status::BufferTooSmall),
            16 => Some(Status::InvalidSignature),
            _ => None,
        }
    }
}

impl From<ErrorKind> for Status {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidParameter => Status::InvalidParameter,
            ErrorKind::NoMemory => Status::NoMemory,
            ErrorKind::Fail => Status::Fail,
            ErrorKind::BufferTooSmall => Status::BufferTooSmall,
            ErrorKind::InvalidSignature => Status::InvalidSignature,
        }
    }
}

impl From<&Error> for Status {
    fn from(err: &Error) -> Self {
        err.kind().into()
    }
}

impl<T> From<&Result<T>> for Status {
    fn from(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Status::Success,
            Err(e) => e.into(),
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Status::Success => "success",
            Status::Fail => "fail",
            Status::InvalidParameter => "invalid parameter",
            Status::NoMemory => "no memory",
            Status::BufferTooSmall => "buffer too small",
            Status::InvalidSignature => "invalid signature",
        };
        write!(f, "{} ({})", name, self.code())
    }
}
