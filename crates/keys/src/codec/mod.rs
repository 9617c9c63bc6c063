//! Payload codecs, one per family

#[cfg(feature = "ecdsa")]
pub(crate) mod ec;
#[cfg(feature = "rsa")]
pub(crate) mod rsa;

use crate::KeyMaterial;
use streamsig_api::{AlgorithmId, Error, Family, KeyKind, Result};

const CONTEXT: &str = "key payload";

/// Decode a payload into key material of the declared kind and algorithm
pub(crate) fn decode(kind: KeyKind, algorithm: AlgorithmId, payload: &[u8]) -> Result<KeyMaterial> {
    match algorithm.family() {
        #[cfg(feature = "rsa")]
        Family::RsaPss => rsa::decode(kind, algorithm, payload),
        #[cfg(feature = "ecdsa")]
        Family::Ecdsa => ec::decode(kind, algorithm, payload),
        #[allow(unreachable_patterns)]
        _ => Err(not_compiled_in(algorithm)),
    }
}

/// Encode key material as a container payload
pub(crate) fn encode(material: &KeyMaterial) -> Result<zeroize::Zeroizing<Vec<u8>>> {
    match material {
        #[cfg(feature = "rsa")]
        KeyMaterial::RsaPrivate(_) | KeyMaterial::RsaPublic(_) => rsa::encode(material),
        #[cfg(feature = "ecdsa")]
        _ => ec::encode(material),
    }
}

pub(crate) fn not_compiled_in(algorithm: AlgorithmId) -> Error {
    Error::fail(
        CONTEXT,
        format!("{} support is not compiled in", algorithm.name()),
    )
}
