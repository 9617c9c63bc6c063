//! Key export, the inverse of [`resolve`](crate::resolve)

use crate::{codec, container, KeyMaterial, KeyTag};
use streamsig_api::{Error, KeyKind, Result};
use zeroize::Zeroizing;

/// Wrap a private key in a container
///
/// The returned blob is wiped when dropped.
pub fn export_private_key(material: &KeyMaterial) -> Result<Zeroizing<Vec<u8>>> {
    if material.kind() != KeyKind::Private {
        return Err(Error::invalid_parameter(
            "key export",
            "a public key cannot be exported as a private key",
        ));
    }
    export(material).map(Zeroizing::new)
}

/// Wrap the public half of a key in a container
///
/// Private keys are accepted; only their public half is written.
pub fn export_public_key(material: &KeyMaterial) -> Result<Vec<u8>> {
    export(&material.public())
}

fn export(material: &KeyMaterial) -> Result<Vec<u8>> {
    let tag = KeyTag::new(material.kind(), material.algorithm()?);
    let payload = codec::encode(material)?;
    container::encode(tag.to_bytes(), &payload)
}
