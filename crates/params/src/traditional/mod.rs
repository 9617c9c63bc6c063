//! Constants for traditional signature algorithms

pub mod ecdsa;
pub mod rsa;
