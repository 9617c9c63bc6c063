//! Constants for RSA-PSS

/// RSA with 1024-bit modulus
pub const RSA_MODULUS_1024: usize = 1024;

/// RSA with 2048-bit modulus
pub const RSA_MODULUS_2048: usize = 2048;

/// RSA with 4096-bit modulus
pub const RSA_MODULUS_4096: usize = 4096;

/// Byte length for RSA-1024 key
pub const RSA_1024_BYTE_LENGTH: usize = RSA_MODULUS_1024 / 8;

/// Byte length for RSA-2048 key
pub const RSA_2048_BYTE_LENGTH: usize = RSA_MODULUS_2048 / 8;

/// Byte length for RSA-4096 key
pub const RSA_4096_BYTE_LENGTH: usize = RSA_MODULUS_4096 / 8;

/// Fixed overhead of the EMSA-PSS encoding beyond hash and salt
/// (the 0x01 separator and the 0xbc trailer)
pub const PSS_ENCODING_OVERHEAD: usize = 2;
