//! Deterministic key blobs for unit tests

use once_cell::sync::Lazy;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;
use streamsig_keys::{export_private_key, export_public_key, KeyMaterial};

pub(crate) struct KeyPair {
    pub private: Vec<u8>,
    pub public: Vec<u8>,
}

fn pair(material: KeyMaterial) -> KeyPair {
    KeyPair {
        private: export_private_key(&material).unwrap().to_vec(),
        public: export_public_key(&material).unwrap(),
    }
}

pub(crate) static RSA_1024: Lazy<KeyPair> = Lazy::new(|| {
    let mut rng = ChaCha20Rng::seed_from_u64(0x7e57_0001);
    pair(rsa::RsaPrivateKey::new(&mut rng, 1024).unwrap().into())
});

pub(crate) static P256: Lazy<KeyPair> = Lazy::new(|| {
    let mut rng = ChaCha20Rng::seed_from_u64(0x7e57_0002);
    pair(p256::SecretKey::random(&mut rng).into())
});

pub(crate) static P384: Lazy<KeyPair> = Lazy::new(|| {
    let mut rng = ChaCha20Rng::seed_from_u64(0x7e57_0003);
    pair(p384::SecretKey::random(&mut rng).into())
});

pub(crate) fn all() -> [&'static KeyPair; 3] {
    [&*RSA_1024, &*P256, &*P384]
}
