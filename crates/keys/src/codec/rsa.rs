//! PKCS#1 DER payloads for RSA keys

use crate::KeyMaterial;
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey, EncodeRsaPublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use streamsig_api::{AlgorithmId, Error, KeyKind, Result, ResultExt};
use zeroize::Zeroizing;

const CONTEXT: &str = "rsa key";

pub(crate) fn decode(kind: KeyKind, algorithm: AlgorithmId, der: &[u8]) -> Result<KeyMaterial> {
    match kind {
        KeyKind::Private => {
            let key = RsaPrivateKey::from_pkcs1_der(der).or_fail(CONTEXT)?;
            check_modulus(algorithm, key.n().bits())?;
            key.validate().or_fail(CONTEXT)?;
            Ok(KeyMaterial::RsaPrivate(Box::new(key)))
        }
        KeyKind::Public => {
            let key = RsaPublicKey::from_pkcs1_der(der).or_fail(CONTEXT)?;
            check_modulus(algorithm, key.n().bits())?;
            Ok(KeyMaterial::RsaPublic(key))
        }
    }
}

pub(crate) fn encode(material: &KeyMaterial) -> Result<Zeroizing<Vec<u8>>> {
    match material {
        KeyMaterial::RsaPrivate(key) => {
            let doc = key.to_pkcs1_der().or_fail(CONTEXT)?;
            Ok(Zeroizing::new(doc.as_bytes().to_vec()))
        }
        KeyMaterial::RsaPublic(key) => {
            let doc = key.to_pkcs1_der().or_fail(CONTEXT)?;
            Ok(Zeroizing::new(doc.as_bytes().to_vec()))
        }
        #[allow(unreachable_patterns)]
        _ => Err(Error::fail(CONTEXT, "not an RSA key")),
    }
}

/// The modulus must match the size class declared by the tag
fn check_modulus(algorithm: AlgorithmId, modulus_bits: usize) -> Result<()> {
    if modulus_bits != algorithm.key_bits() {
        return Err(Error::fail(
            CONTEXT,
            format!(
                "modulus of {} bits does not match declared {}",
                modulus_bits, algorithm
            ),
        ));
    }
    Ok(())
}
