//! Layout of the key container that wraps every key blob
//!
//! ```text
//! offset 0   tag      4 bytes
//! offset 4   size     u32 big-endian, whole container including header
//! offset 8   crc32    u32 big-endian, computed with this field zeroed
//! offset 12  payload
//! ```

/// Length of the tag field
pub const TAG_SIZE: usize = 4;

/// Offset of the big-endian size field
pub const SIZE_OFFSET: usize = TAG_SIZE;

/// Offset of the big-endian CRC-32 field
pub const CRC_OFFSET: usize = SIZE_OFFSET + 4;

/// Total header length; the payload starts here
pub const HEADER_SIZE: usize = CRC_OFFSET + 4;

/// First tag byte of a private key container
pub const PRIVATE_KEY_PREFIX: u8 = b'R';

/// First tag byte of a public key container
pub const PUBLIC_KEY_PREFIX: u8 = b'U';

/// Tag bytes 1..3 for RSA keys
pub const RSA_FAMILY: [u8; 2] = *b"RA";

/// Tag bytes 1..3 for elliptic-curve keys
pub const EC_FAMILY: [u8; 2] = *b"EC";

/// Size-class byte for RSA-1024
pub const RSA_1024_CLASS: u8 = b'1';

/// Size-class byte for RSA-2048
pub const RSA_2048_CLASS: u8 = b'2';

/// Size-class byte for RSA-4096
pub const RSA_4096_CLASS: u8 = b'4';

/// Size-class byte for P-256
pub const EC_P256_CLASS: u8 = b'2';

/// Size-class byte for P-384
pub const EC_P384_CLASS: u8 = b'3';
