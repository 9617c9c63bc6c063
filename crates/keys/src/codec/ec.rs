//! Raw payloads for NIST curve keys
//!
//! Private keys are the big-endian scalar at full field width, public keys
//! the SEC1 compressed point. Both lengths are exact.

use crate::KeyMaterial;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use streamsig_api::{AlgorithmId, Error, KeyKind, Result, ResultExt};
use streamsig_params::traditional::ecdsa::{
    P256_COMPRESSED_POINT_SIZE, P256_SCALAR_SIZE, P384_COMPRESSED_POINT_SIZE, P384_SCALAR_SIZE,
};
use zeroize::{Zeroize, Zeroizing};

const CONTEXT: &str = "ec key";

pub(crate) fn decode(kind: KeyKind, algorithm: AlgorithmId, payload: &[u8]) -> Result<KeyMaterial> {
    match (algorithm, kind) {
        (AlgorithmId::EcdsaP256, KeyKind::Private) => {
            expect_len(algorithm, payload, P256_SCALAR_SIZE)?;
            let key = p256::SecretKey::from_slice(payload).or_fail(CONTEXT)?;
            Ok(KeyMaterial::P256Private(key))
        }
        (AlgorithmId::EcdsaP256, KeyKind::Public) => {
            expect_len(algorithm, payload, P256_COMPRESSED_POINT_SIZE)?;
            let key = p256::PublicKey::from_sec1_bytes(payload).or_fail(CONTEXT)?;
            Ok(KeyMaterial::P256Public(key))
        }
        (AlgorithmId::EcdsaP384, KeyKind::Private) => {
            expect_len(algorithm, payload, P384_SCALAR_SIZE)?;
            let key = p384::SecretKey::from_slice(payload).or_fail(CONTEXT)?;
            Ok(KeyMaterial::P384Private(key))
        }
        (AlgorithmId::EcdsaP384, KeyKind::Public) => {
            expect_len(algorithm, payload, P384_COMPRESSED_POINT_SIZE)?;
            let key = p384::PublicKey::from_sec1_bytes(payload).or_fail(CONTEXT)?;
            Ok(KeyMaterial::P384Public(key))
        }
        _ => Err(Error::fail(
            CONTEXT,
            format!("{} is not an elliptic-curve algorithm", algorithm),
        )),
    }
}

pub(crate) fn encode(material: &KeyMaterial) -> Result<Zeroizing<Vec<u8>>> {
    let out = match material {
        KeyMaterial::P256Private(key) => {
            let mut scalar = key.to_bytes();
            let out = scalar.to_vec();
            scalar.zeroize();
            out
        }
        KeyMaterial::P384Private(key) => {
            let mut scalar = key.to_bytes();
            let out = scalar.to_vec();
            scalar.zeroize();
            out
        }
        KeyMaterial::P256Public(key) => key.to_encoded_point(true).as_bytes().to_vec(),
        KeyMaterial::P384Public(key) => key.to_encoded_point(true).as_bytes().to_vec(),
        #[allow(unreachable_patterns)]
        _ => return Err(Error::fail(CONTEXT, "not an elliptic-curve key")),
    };
    Ok(Zeroizing::new(out))
}

fn expect_len(algorithm: AlgorithmId, payload: &[u8], expected: usize) -> Result<()> {
    if payload.len() != expected {
        return Err(Error::fail(
            CONTEXT,
            format!(
                "{} payload is {} bytes, expected {}",
                algorithm,
                payload.len(),
                expected
            ),
        ));
    }
    Ok(())
}
