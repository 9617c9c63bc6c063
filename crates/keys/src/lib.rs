//! Key containers and the key resolver
//!
//! Every key blob handed to streamsig is a small container: a four-byte
//! tag naming the key kind and algorithm, a length, a CRC-32 and the
//! algorithm-specific payload. [`resolve`] turns a blob into an
//! [`AlgorithmId`](streamsig_api::AlgorithmId) plus parsed
//! [`KeyMaterial`]; the `export_*` functions go the other way.

#[cfg(not(any(feature = "rsa", feature = "ecdsa")))]
compile_error!("enable at least one of the `rsa` or `ecdsa` features");

mod codec;
pub mod container;
pub mod export;
pub mod material;
pub mod resolver;
pub mod tag;

pub use container::Container;
pub use export::{export_private_key, export_public_key};
pub use material::KeyMaterial;
pub use resolver::{resolve, ResolvedKey};
pub use tag::KeyTag;
