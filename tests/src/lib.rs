//! Shared fixtures for the streamsig integration tests
//!
//! Keys are generated once per test binary from fixed seeds, so every run
//! signs with the same material. RSA-4096 is too slow to generate per run
//! and is loaded from pre-built blobs under `fixtures/`.

use once_cell::sync::Lazy;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;
use streamsig::api::AlgorithmId;
use streamsig::keys::{export_private_key, export_public_key, KeyMaterial};

/// A private/public pair of key blobs
pub struct Fixture {
    pub algorithm: AlgorithmId,
    pub private: Vec<u8>,
    pub public: Vec<u8>,
}

impl Fixture {
    fn new(material: KeyMaterial) -> Self {
        Self {
            algorithm: material.algorithm().unwrap(),
            private: export_private_key(&material).unwrap().to_vec(),
            public: export_public_key(&material).unwrap(),
        }
    }
}

fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

pub static RSA_1024: Lazy<Fixture> =
    Lazy::new(|| Fixture::new(rsa::RsaPrivateKey::new(&mut rng(1), 1024).unwrap().into()));

pub static RSA_2048: Lazy<Fixture> =
    Lazy::new(|| Fixture::new(rsa::RsaPrivateKey::new(&mut rng(2), 2048).unwrap().into()));

pub static RSA_4096: Lazy<Fixture> = Lazy::new(|| Fixture {
    algorithm: AlgorithmId::RsaPss4096,
    private: include_bytes!("../fixtures/rsa4096.priv").to_vec(),
    public: include_bytes!("../fixtures/rsa4096.pub").to_vec(),
});

pub static P256: Lazy<Fixture> =
    Lazy::new(|| Fixture::new(p256::SecretKey::random(&mut rng(3)).into()));

pub static P384: Lazy<Fixture> =
    Lazy::new(|| Fixture::new(p384::SecretKey::random(&mut rng(4)).into()));

/// Every fixture, one per supported algorithm
pub fn all() -> [&'static Fixture; 5] {
    [&*RSA_1024, &*RSA_2048, &*RSA_4096, &*P256, &*P384]
}

/// Fixtures cheap enough for property tests
pub fn fast() -> [&'static Fixture; 2] {
    [&*P256, &*P384]
}

/// Sign `chunks` with `fixture`, feeding them in order
pub fn sign_chunks(fixture: &Fixture, chunks: &[&[u8]]) -> Vec<u8> {
    let mut ctx = streamsig::sign::SignContext::new(&fixture.private).unwrap();
    for chunk in chunks.iter().filter(|c| !c.is_empty()) {
        ctx.update(chunk).unwrap();
    }
    ctx.finish_vec().unwrap()
}

/// Verify `signature` over `chunks`, returning the error on failure
pub fn verify_chunks(
    fixture: &Fixture,
    chunks: &[&[u8]],
    signature: &[u8],
) -> streamsig::api::Result<()> {
    let mut ctx = streamsig::sign::VerifyContext::new(&fixture.public)?;
    for chunk in chunks.iter().filter(|c| !c.is_empty()) {
        ctx.update(chunk)?;
    }
    ctx.verify(signature)
}
