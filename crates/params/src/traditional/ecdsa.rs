//! Constants for ECDSA over the NIST prime curves

/// Size of a P-256 scalar (private key) in bytes
pub const P256_SCALAR_SIZE: usize = 32;

/// Size of a SEC1 compressed P-256 point in bytes
pub const P256_COMPRESSED_POINT_SIZE: usize = 33;

/// Size of a fixed-width P-256 signature (r || s) in bytes
pub const P256_SIGNATURE_SIZE: usize = 2 * P256_SCALAR_SIZE;

/// Size of a P-384 scalar (private key) in bytes
pub const P384_SCALAR_SIZE: usize = 48;

/// Size of a SEC1 compressed P-384 point in bytes
pub const P384_COMPRESSED_POINT_SIZE: usize = 49;

/// Size of a fixed-width P-384 signature (r || s) in bytes
pub const P384_SIGNATURE_SIZE: usize = 2 * P384_SCALAR_SIZE;
