//! RSASSA-PSS over SHA-256 with MGF1-SHA-256
//!
//! The salt length comes from [`PssSaltLength`](streamsig_api::PssSaltLength)
//! in the context options and is fixed at `init`.

use rand::rngs::OsRng;
use rsa::pss::{Signature, SigningKey, VerifyingKey};
use rsa::signature::{DigestVerifier, RandomizedDigestSigner, SignatureEncoding};
use rsa::traits::PublicKeyParts;
use sha2::{Digest, Sha256};
use streamsig_api::{AlgorithmParams, Error, Family, Result, ResultExt, SignatureEngine, Verdict};
use streamsig_keys::KeyMaterial;

const CONTEXT: &str = "rsa-pss engine";

enum PssKey {
    Signing(SigningKey<Sha256>),
    Verifying(VerifyingKey<Sha256>),
}

/// RSA-PSS engine handle: running digest plus key object
pub struct RsaPssEngine {
    key: Option<PssKey>,
    digest: Option<Sha256>,
    modulus_len: usize,
}

impl RsaPssEngine {
    fn take_digest(&mut self) -> Result<Sha256> {
        self.digest
            .take()
            .ok_or_else(|| Error::fail(CONTEXT, "engine already finalized"))
    }
}

impl SignatureEngine for RsaPssEngine {
    type KeyMaterial = KeyMaterial;

    fn init(params: &AlgorithmParams, key: KeyMaterial) -> Result<Self> {
        if params.algorithm.family() != Family::RsaPss {
            return Err(Error::fail(
                CONTEXT,
                format!("{} is not an RSA-PSS algorithm", params.algorithm),
            ));
        }

        let salt_len = params
            .options
            .pss_salt_len
            .resolve(params.algorithm)
            .ok_or_else(|| {
                Error::fail(
                    CONTEXT,
                    format!(
                        "salt policy {:?} does not fit {}",
                        params.options.pss_salt_len, params.algorithm
                    ),
                )
            })?;

        let (key, modulus_bits) = match key {
            KeyMaterial::RsaPrivate(private) => {
                let modulus_bits = private.n().bits();
                (
                    PssKey::Signing(SigningKey::new_with_salt_len(*private, salt_len)),
                    modulus_bits,
                )
            }
            KeyMaterial::RsaPublic(public) => {
                let modulus_bits = public.n().bits();
                (
                    PssKey::Verifying(VerifyingKey::new_with_salt_len(public, salt_len)),
                    modulus_bits,
                )
            }
            #[allow(unreachable_patterns)]
            other => {
                return Err(Error::fail(
                    CONTEXT,
                    format!("{:?} is not an RSA key", other),
                ))
            }
        };

        if modulus_bits != params.algorithm.key_bits() {
            return Err(Error::fail(
                CONTEXT,
                format!("key modulus does not match {}", params.algorithm),
            ));
        }

        log::trace!("rsa-pss engine ready, salt length {}", salt_len);

        Ok(Self {
            key: Some(key),
            digest: Some(Sha256::new()),
            modulus_len: Self::required_signature_length(params),
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
        let digest = self.take_digest()?;
        let signer = match self.key.as_ref() {
            Some(PssKey::Signing(signer)) => signer,
            Some(PssKey::Verifying(_)) => {
                return Err(Error::fail(CONTEXT, "a public key cannot sign"))
            }
            None => return Err(Error::fail(CONTEXT, "engine released")),
        };

        let signature = signer
            .try_sign_digest_with_rng(&mut OsRng, digest)
            .or_fail(CONTEXT)?;
        let signature = signature.to_vec();

        if signature.len() != self.modulus_len {
            return Err(Error::fail(CONTEXT, "signature length does not match modulus"));
        }
        Ok(signature)
    }

    fn final_verify(&mut self, signature: &[u8]) -> Result<Verdict> {
        let digest = self.take_digest()?;
        let verifier = match self.key.as_ref() {
            Some(PssKey::Verifying(verifier)) => verifier,
            Some(PssKey::Signing(_)) => {
                return Err(Error::fail(CONTEXT, "verification needs a public key"))
            }
            None => return Err(Error::fail(CONTEXT, "engine released")),
        };

        let signature = match Signature::try_from(signature) {
            Ok(signature) => signature,
            Err(_) => return Ok(Verdict::NoMatch),
        };

        Ok(match verifier.verify_digest(digest, &signature) {
            Ok(()) => Verdict::Match,
            Err(_) => Verdict::NoMatch,
        })
    }

    fn required_signature_length(params: &AlgorithmParams) -> usize {
        params.algorithm.key_bits() / 8
    }

    fn cleanup(&mut self) {
        // RsaPrivateKey zeroizes its private components on drop
        self.key = None;
        self.digest = None;
    }

    fn is_active(&self) -> bool {
        self.key.is_some() && self.digest.is_some()
    }
}

impl Drop for RsaPssEngine {
    fn drop(&mut self) {
        self.cleanup();
    }
}
