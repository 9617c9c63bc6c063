//! Key resolver: blob in, algorithm and parsed key out

use crate::{codec, Container, KeyMaterial, KeyTag};
use streamsig_api::{AlgorithmId, Error, KeyKind, Result};

/// Output of [`resolve`]
#[derive(Debug)]
pub struct ResolvedKey {
    pub algorithm: AlgorithmId,
    pub material: KeyMaterial,
}

impl ResolvedKey {
    pub fn kind(&self) -> KeyKind {
        self.material.kind()
    }
}

/// Parse a key blob
///
/// The blob is only borrowed; nothing of it is retained beyond the parsed
/// key material.
///
/// # Errors
///
/// * [`Error::InvalidParameter`] if the blob is empty or shorter than a
///   container header
/// * [`Error::Fail`] if the container is inconsistent, the tag names an
///   unsupported algorithm, or the payload does not decode to a key of the
///   declared size
pub fn resolve(blob: &[u8]) -> Result<ResolvedKey> {
    if blob.is_empty() {
        return Err(Error::invalid_parameter("key resolver", "empty key blob"));
    }

    let container = Container::parse(blob)?;
    let tag = KeyTag::parse(container.tag())?;
    let material = codec::decode(tag.kind, tag.algorithm, container.payload())?;

    log::debug!("resolved {:?} {} key", tag.kind, tag.algorithm);

    Ok(ResolvedKey {
        algorithm: tag.algorithm,
        material,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{export_private_key, export_public_key};
    use streamsig_api::ErrorKind;

    #[test]
    fn empty_blob_is_invalid_parameter() {
        assert_eq!(resolve(&[]).unwrap_err().kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn unknown_tag_fails() {
        let blob = crate::container::encode(*b"RXY1", &[1, 2, 3]).unwrap();
        assert_eq!(resolve(&blob).unwrap_err().kind(), ErrorKind::Fail);
    }

    #[cfg(feature = "ecdsa")]
    #[test]
    fn resolves_ec_public_key() {
        use rand_chacha::rand_core::SeedableRng;

        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(11);
        let public = p256::SecretKey::random(&mut rng).public_key();
        let blob = export_public_key(&KeyMaterial::from(public)).unwrap();

        let resolved = resolve(&blob).unwrap();
        assert_eq!(resolved.algorithm, AlgorithmId::EcdsaP256);
        assert_eq!(resolved.kind(), KeyKind::Public);
    }

    #[cfg(feature = "ecdsa")]
    #[test]
    fn truncated_blob_fails() {
        use rand_chacha::rand_core::SeedableRng;

        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(12);
        let public = p384::SecretKey::random(&mut rng).public_key();
        let blob = export_public_key(&KeyMaterial::from(public)).unwrap();

        let err = resolve(&blob[..blob.len() - 1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Fail);
    }

    #[cfg(feature = "rsa")]
    #[test]
    fn rsa_blob_with_a_short_modulus_fails() {
        use rand_chacha::rand_core::SeedableRng;
        use rsa::pkcs1::EncodeRsaPrivateKey;

        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(13);
        let key = rsa::RsaPrivateKey::new(&mut rng, 1018).unwrap();
        assert!(export_private_key(&KeyMaterial::from(key.clone())).is_err());

        let der = key.to_pkcs1_der().unwrap();
        let blob = crate::container::encode(*b"RRA1", der.as_bytes()).unwrap();
        assert_eq!(resolve(&blob).unwrap_err().kind(), ErrorKind::Fail);
    }
}
