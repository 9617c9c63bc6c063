//! Engine bindings for the streamsig library
//!
//! Each binding wraps a running message digest and a RustCrypto key object
//! behind [`SignatureEngine`](streamsig_api::SignatureEngine). Bindings
//! never decide lifecycle questions: the contexts in `streamsig-sign` call
//! `cleanup` on every exit path.

#[cfg(feature = "ecdsa")]
pub mod ecdsa;
#[cfg(feature = "rsa")]
pub mod rsa_pss;

#[cfg(feature = "ecdsa")]
pub use ecdsa::{EcdsaEngine, P256Engine, P384Engine};
#[cfg(feature = "rsa")]
pub use rsa_pss::RsaPssEngine;
