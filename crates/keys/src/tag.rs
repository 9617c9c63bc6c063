//! Container tags
//!
//! Byte 0 is the key kind (`R` private, `U` public), bytes 1..3 the
//! family (`RA`, `EC`) and byte 3 the size class.

use streamsig_api::{AlgorithmId, Error, Family, KeyKind, Result};
use streamsig_params::container::*;

/// Decoded container tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTag {
    pub kind: KeyKind,
    pub algorithm: AlgorithmId,
}

impl KeyTag {
    pub fn new(kind: KeyKind, algorithm: AlgorithmId) -> Self {
        Self { kind, algorithm }
    }

    /// Decode a tag; unknown kinds, families or size classes fail
    pub fn parse(tag: [u8; TAG_SIZE]) -> Result<Self> {
        let kind = match tag[0] {
            PRIVATE_KEY_PREFIX => KeyKind::Private,
            PUBLIC_KEY_PREFIX => KeyKind::Public,
            _ => return Err(unsupported(tag)),
        };

        let family = [tag[1], tag[2]];
        let algorithm = match (family, tag[3]) {
            (RSA_FAMILY, RSA_1024_CLASS) => AlgorithmId::RsaPss1024,
            (RSA_FAMILY, RSA_2048_CLASS) => AlgorithmId::RsaPss2048,
            (RSA_FAMILY, RSA_4096_CLASS) => AlgorithmId::RsaPss4096,
            (EC_FAMILY, EC_P256_CLASS) => AlgorithmId::EcdsaP256,
            (EC_FAMILY, EC_P384_CLASS) => AlgorithmId::EcdsaP384,
            _ => return Err(unsupported(tag)),
        };

        Ok(Self { kind, algorithm })
    }

    pub fn to_bytes(self) -> [u8; TAG_SIZE] {
        let prefix = match self.kind {
            KeyKind::Private => PRIVATE_KEY_PREFIX,
            KeyKind::Public => PUBLIC_KEY_PREFIX,
        };
        let family = match self.algorithm.family() {
            Family::RsaPss => RSA_FAMILY,
            Family::Ecdsa => EC_FAMILY,
        };
        let class = match self.algorithm {
            AlgorithmId::RsaPss1024 => RSA_1024_CLASS,
            AlgorithmId::RsaPss2048 => RSA_2048_CLASS,
            AlgorithmId::RsaPss4096 => RSA_4096_CLASS,
            AlgorithmId::EcdsaP256 => EC_P256_CLASS,
            AlgorithmId::EcdsaP384 => EC_P384_CLASS,
        };
        [prefix, family[0], family[1], class]
    }
}

fn unsupported(tag: [u8; TAG_SIZE]) -> Error {
    Error::fail(
        "key tag",
        format!("unsupported key tag {:?}", String::from_utf8_lossy(&tag)),
    )
}
