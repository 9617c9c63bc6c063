//! Parsed key material
//!
//! Private variants hold RustCrypto key objects that zeroize their
//! secret parts when dropped, so releasing a `KeyMaterial` is enough to
//! clear it.

use core::fmt;
use streamsig_api::{AlgorithmId, Error, KeyKind, Result};

#[cfg(feature = "rsa")]
use rsa::{traits::PublicKeyParts, RsaPrivateKey, RsaPublicKey};

/// Algorithm-specific key, exclusively owned by whoever imported it
#[derive(Clone)]
pub enum KeyMaterial {
    #[cfg(feature = "rsa")]
    RsaPrivate(Box<RsaPrivateKey>),
    #[cfg(feature = "rsa")]
    RsaPublic(RsaPublicKey),
    #[cfg(feature = "ecdsa")]
    P256Private(p256::SecretKey),
    #[cfg(feature = "ecdsa")]
    P256Public(p256::PublicKey),
    #[cfg(feature = "ecdsa")]
    P384Private(p384::SecretKey),
    #[cfg(feature = "ecdsa")]
    P384Public(p384::PublicKey),
}

impl KeyMaterial {
    pub fn kind(&self) -> KeyKind {
        match self {
            #[cfg(feature = "rsa")]
            KeyMaterial::RsaPrivate(_) => KeyKind::Private,
            #[cfg(feature = "rsa")]
            KeyMaterial::RsaPublic(_) => KeyKind::Public,
            #[cfg(feature = "ecdsa")]
            KeyMaterial::P256Private(_) | KeyMaterial::P384Private(_) => KeyKind::Private,
            #[cfg(feature = "ecdsa")]
            KeyMaterial::P256Public(_) | KeyMaterial::P384Public(_) => KeyKind::Public,
        }
    }

    /// The algorithm this key belongs to
    ///
    /// RSA keys map by modulus size; sizes other than 1024, 2048 and 4096
    /// bits are unsupported.
    pub fn algorithm(&self) -> Result<AlgorithmId> {
        match self {
            #[cfg(feature = "rsa")]
            KeyMaterial::RsaPrivate(key) => rsa_algorithm(key.n().bits()),
            #[cfg(feature = "rsa")]
            KeyMaterial::RsaPublic(key) => rsa_algorithm(key.n().bits()),
            #[cfg(feature = "ecdsa")]
            KeyMaterial::P256Private(_) | KeyMaterial::P256Public(_) => Ok(AlgorithmId::EcdsaP256),
            #[cfg(feature = "ecdsa")]
            KeyMaterial::P384Private(_) | KeyMaterial::P384Public(_) => Ok(AlgorithmId::EcdsaP384),
        }
    }

    /// The public half of this key; public keys are returned as-is
    pub fn into_public(self) -> KeyMaterial {
        match self {
            #[cfg(feature = "rsa")]
            KeyMaterial::RsaPrivate(key) => KeyMaterial::RsaPublic(key.to_public_key()),
            #[cfg(feature = "ecdsa")]
            KeyMaterial::P256Private(key) => KeyMaterial::P256Public(key.public_key()),
            #[cfg(feature = "ecdsa")]
            KeyMaterial::P384Private(key) => KeyMaterial::P384Public(key.public_key()),
            public => public,
        }
    }

    /// The public half of this key without consuming it
    pub fn public(&self) -> KeyMaterial {
        self.clone().into_public()
    }
}

#[cfg(feature = "rsa")]
fn rsa_algorithm(modulus_bits: usize) -> Result<AlgorithmId> {
    AlgorithmId::rsa_from_bits(modulus_bits).ok_or_else(|| {
        Error::fail(
            "key material",
            format!("unsupported RSA modulus of {} bits", modulus_bits),
        )
    })
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.algorithm() {
            Ok(algorithm) => algorithm.name(),
            Err(_) => "unsupported",
        };
        write!(f, "KeyMaterial({}, {:?}, [REDACTED])", name, self.kind())
    }
}

#[cfg(feature = "rsa")]
impl From<RsaPrivateKey> for KeyMaterial {
    fn from(key: RsaPrivateKey) -> Self {
        KeyMaterial::RsaPrivate(Box::new(key))
    }
}

#[cfg(feature = "rsa")]
impl From<RsaPublicKey> for KeyMaterial {
    fn from(key: RsaPublicKey) -> Self {
        KeyMaterial::RsaPublic(key)
    }
}

#[cfg(feature = "ecdsa")]
impl From<p256::SecretKey> for KeyMaterial {
    fn from(key: p256::SecretKey) -> Self {
        KeyMaterial::P256Private(key)
    }
}

#[cfg(feature = "ecdsa")]
impl From<p256::PublicKey> for KeyMaterial {
    fn from(key: p256::PublicKey) -> Self {
        KeyMaterial::P256Public(key)
    }
}

#[cfg(feature = "ecdsa")]
impl From<p384::SecretKey> for KeyMaterial {
    fn from(key: p384::SecretKey) -> Self {
        KeyMaterial::P384Private(key)
    }
}

#[cfg(feature = "ecdsa")]
impl From<p384::PublicKey> for KeyMaterial {
    fn from(key: p384::PublicKey) -> Self {
        KeyMaterial::P384Public(key)
    }
}
