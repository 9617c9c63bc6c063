//! Public API traits and types for the streamsig library
//!
//! This crate provides the public API surface shared by every streamsig
//! crate: the error taxonomy, integer status codes, the algorithm
//! identifier and the capability trait engine bindings implement.

pub mod error;
pub mod status;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorKind, Result, ResultExt};
pub use status::Status;
pub use types::*;

// Re-export all traits from the traits module
pub use traits::SignatureEngine;
