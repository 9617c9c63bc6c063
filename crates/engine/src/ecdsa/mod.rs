//! ECDSA over the NIST prime curves
//!
//! Signatures are the fixed-width big-endian concatenation `r || s`, so the
//! output length depends only on the curve. The message digest runs in the
//! engine and the curve signs the finished prehash.

mod p256;
mod p384;

pub use self::p256::P256;
pub use self::p384::P384;

use sha2::Digest;
use streamsig_api::{AlgorithmId, AlgorithmParams, Error, Result, SignatureEngine, Verdict};
use streamsig_keys::KeyMaterial;
use zeroize::Zeroize;

const CONTEXT: &str = "ecdsa engine";

/// Per-curve glue between key material, digest and RustCrypto signer
pub trait Curve {
    const ALGORITHM: AlgorithmId;
    const SIGNATURE_SIZE: usize;

    type Digest: Digest;
    type SigningKey;
    type VerifyingKey;

    /// Split key material into a signing or a verifying key
    ///
    /// Returns `None` when the material belongs to a different curve.
    fn import(material: KeyMaterial) -> Option<EcKey<Self>>
    where
        Self: Sized;

    fn sign_prehash(key: &Self::SigningKey, prehash: &[u8]) -> Result<Vec<u8>>;

    fn verify_prehash(key: &Self::VerifyingKey, prehash: &[u8], signature: &[u8]) -> Verdict;
}

pub enum EcKey<C: Curve> {
    Signing(C::SigningKey),
    Verifying(C::VerifyingKey),
}

/// ECDSA engine handle for curve `C`
pub struct EcdsaEngine<C: Curve> {
    key: Option<EcKey<C>>,
    digest: Option<C::Digest>,
}

pub type P256Engine = EcdsaEngine<P256>;
pub type P384Engine = EcdsaEngine<P384>;

impl<C: Curve> EcdsaEngine<C> {
    fn finish_digest(&mut self) -> Result<Vec<u8>> {
        let digest = self
            .digest
            .take()
            .ok_or_else(|| Error::fail(CONTEXT, "engine already finalized"))?;
        Ok(digest.finalize().to_vec())
    }
}

impl<C: Curve> SignatureEngine for EcdsaEngine<C> {
    type KeyMaterial = KeyMaterial;

    fn init(params: &AlgorithmParams, key: KeyMaterial) -> Result<Self> {
        if params.algorithm != C::ALGORITHM {
            return Err(Error::fail(
                CONTEXT,
                format!("{} engine cannot run {}", C::ALGORITHM, params.algorithm),
            ));
        }

        let described = format!("{:?}", key);
        let key = C::import(key).ok_or_else(|| {
            Error::fail(
                CONTEXT,
                format!("{} is not a {} key", described, C::ALGORITHM),
            )
        })?;

        Ok(Self {
            key: Some(key),
            digest: Some(C::Digest::new()),
        })
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        match self.digest.as_mut() {
            Some(digest) => {
                digest.update(data);
                Ok(())
            }
            None => Err(Error::fail(CONTEXT, "engine already finalized")),
        }
    }

    fn final_sign(&mut self) -> Result<Vec<u8>> {
        let mut prehash = self.finish_digest()?;
        let result = match self.key.as_ref() {
            Some(EcKey::Signing(key)) => C::sign_prehash(key, &prehash),
            Some(EcKey::Verifying(_)) => Err(Error::fail(CONTEXT, "a public key cannot sign")),
            None => Err(Error::fail(CONTEXT, "engine released")),
        };
        prehash.zeroize();

        let signature = result?;
        if signature.len() != C::SIGNATURE_SIZE {
            return Err(Error::fail(CONTEXT, "signature has unexpected width"));
        }
        Ok(signature)
    }

    fn final_verify(&mut self, signature: &[u8]) -> Result<Verdict> {
        let mut prehash = self.finish_digest()?;
        let result = match self.key.as_ref() {
            Some(EcKey::Verifying(key)) => Ok(C::verify_prehash(key, &prehash, signature)),
            Some(EcKey::Signing(_)) => {
                Err(Error::fail(CONTEXT, "verification needs a public key"))
            }
            None => Err(Error::fail(CONTEXT, "engine released")),
        };
        prehash.zeroize();
        result
    }

    fn required_signature_length(_params: &AlgorithmParams) -> usize {
        C::SIGNATURE_SIZE
    }

    fn cleanup(&mut self) {
        self.key = None;
        self.digest = None;
    }

    fn is_active(&self) -> bool {
        self.key.is_some() && self.digest.is_some()
    }
}

impl<C: Curve> Drop for EcdsaEngine<C> {
    fn drop(&mut self) {
        self.cleanup();
    }
}
