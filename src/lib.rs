//! # streamsig
//!
//! Streaming, algorithm-agnostic signing and verification.
//!
//! A context is created from an opaque key blob, fed the message in as many
//! chunks as convenient and finalized to produce or check a signature. The
//! caller never needs to know whether RSA-PSS or ECDSA sits underneath.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! streamsig = "0.3"
//! ```
//!
//! ```no_run
//! use streamsig::prelude::*;
//!
//! # fn demo(private_blob: &[u8], public_blob: &[u8]) -> Result<()> {
//! let mut signer = SignContext::new(private_blob)?;
//! signer.update(b"streamed ")?;
//! signer.update(b"message")?;
//! let signature = signer.finish_vec()?;
//!
//! let mut verifier = VerifyContext::new(public_blob)?;
//! verifier.update(b"streamed message")?;
//! verifier.verify(&signature)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `rsa` (default): RSA-PSS over SHA-256, 1024/2048/4096-bit keys
//! - `ecdsa` (default): ECDSA over P-256/SHA-256 and P-384/SHA-384
//! - `serde`: serde derives on algorithm identifiers and context options
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`api`]: error taxonomy, status codes, algorithm identifiers
//! - [`params`]: sizes and container constants
//! - [`keys`]: key containers, resolver and export
//! - [`engine`]: RSA-PSS and ECDSA engine bindings
//! - [`sign`]: sign and verify contexts plus the status-code surface

pub use streamsig_api as api;
pub use streamsig_engine as engine;
pub use streamsig_keys as keys;
pub use streamsig_params as params;
pub use streamsig_sign as sign;

// Exported private keys are wrapped in `zeroize::Zeroizing`
pub use zeroize;

/// Common imports for streamsig users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, ErrorKind, Result, ResultExt, Status};

    // Algorithm selection and options
    pub use crate::api::{AlgorithmId, ContextOptions, PssSaltLength};

    // Contexts
    pub use crate::sign::{signature_len, SignContext, State, VerifyContext};

    // Key handling
    pub use crate::keys::{export_private_key, export_public_key, resolve, KeyMaterial};
}
