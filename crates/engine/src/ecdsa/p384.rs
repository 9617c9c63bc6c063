//! NIST P-384 with SHA-384

use super::{Curve, EcKey};
use p384::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use p384::ecdsa::{Signature, SigningKey, VerifyingKey};
use streamsig_api::{AlgorithmId, Result, ResultExt, Verdict};
use streamsig_keys::KeyMaterial;
use streamsig_params::traditional::ecdsa::P384_SIGNATURE_SIZE;

/// Marker for the P-384 curve
pub struct P384;

impl Curve for P384 {
    const ALGORITHM: AlgorithmId = AlgorithmId::EcdsaP384;
    const SIGNATURE_SIZE: usize = P384_SIGNATURE_SIZE;

    type Digest = sha2::Sha384;
    type SigningKey = SigningKey;
    type VerifyingKey = VerifyingKey;

    fn import(material: KeyMaterial) -> Option<EcKey<Self>> {
        match material {
            KeyMaterial::P384Private(secret) => Some(EcKey::Signing(SigningKey::from(&secret))),
            KeyMaterial::P384Public(public) => Some(EcKey::Verifying(VerifyingKey::from(&public))),
            _ => None,
        }
    }

    fn sign_prehash(key: &SigningKey, prehash: &[u8]) -> Result<Vec<u8>> {
        let signature: Signature = key.sign_prehash(prehash).or_fail("p384 signer")?;
        Ok(signature.to_bytes().to_vec())
    }

    fn verify_prehash(key: &VerifyingKey, prehash: &[u8], signature: &[u8]) -> Verdict {
        let Ok(signature) = Signature::from_slice(signature) else {
            return Verdict::NoMatch;
        };
        match key.verify_prehash(prehash, &signature) {
            Ok(()) => Verdict::Match,
            Err(_) => Verdict::NoMatch,
        }
    }
}
