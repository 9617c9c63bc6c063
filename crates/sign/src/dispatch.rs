//! Dispatcher: one lookup from algorithm to engine binding
//!
//! Adding an algorithm means adding a [`Binding`] variant and one arm in
//! each match below; nothing else in the crate knows which engines exist.

use streamsig_api::{AlgorithmId, AlgorithmParams, Result, SignatureEngine, Verdict};
use streamsig_keys::KeyMaterial;

#[cfg(feature = "ecdsa")]
use streamsig_engine::{P256Engine, P384Engine};
#[cfg(feature = "rsa")]
use streamsig_engine::RsaPssEngine;

/// Closed set of engine bindings
pub(crate) enum Binding {
    #[cfg(feature = "rsa")]
    RsaPss(RsaPssEngine),
    #[cfg(feature = "ecdsa")]
    P256(P256Engine),
    #[cfg(feature = "ecdsa")]
    P384(P384Engine),
}

macro_rules! delegate {
    ($self:expr, $engine:ident => $body:expr) => {
        match $self {
            #[cfg(feature = "rsa")]
            Binding::RsaPss($engine) => $body,
            #[cfg(feature = "ecdsa")]
            Binding::P256($engine) => $body,
            #[cfg(feature = "ecdsa")]
            Binding::P384($engine) => $body,
        }
    };
}

impl SignatureEngine for Binding {
    type KeyMaterial = KeyMaterial;

    fn init(params: &AlgorithmParams, key: KeyMaterial) -> Result<Self> {
        match params.algorithm {
            #[cfg(feature = "rsa")]
            AlgorithmId::RsaPss1024 | AlgorithmId::RsaPss2048 | AlgorithmId::RsaPss4096 => {
                RsaPssEngine::init(params, key).map(Binding::RsaPss)
            }
            #[cfg(feature = "ecdsa")]
            AlgorithmId::EcdsaP256 => P256Engine::init(params, key).map(Binding::P256),
            #[cfg(feature = "ecdsa")]
            AlgorithmId::EcdsaP384 => P384Engine::init(params, key).map(Binding::P384),
            #[allow(unreachable_patterns)]
            other => Err(streamsig_api::Error::fail(
                "dispatcher",
                format!("{} support is not compiled in", other),
            )),
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        delegate!(self, engine => engine.update(data))
    }

    fn final_sign(&mut self) -> Result<Vec<u8>> {
        delegate!(self, engine => engine.final_sign())
    }

    fn final_verify(&mut self, signature: &[u8]) -> Result<Verdict> {
        delegate!(self, engine => engine.final_verify(signature))
    }

    fn required_signature_length(params: &AlgorithmParams) -> usize {
        match params.algorithm.family() {
            #[cfg(feature = "rsa")]
            streamsig_api::Family::RsaPss => RsaPssEngine::required_signature_length(params),
            #[cfg(feature = "ecdsa")]
            streamsig_api::Family::Ecdsa => match params.algorithm {
                AlgorithmId::EcdsaP256 => P256Engine::required_signature_length(params),
                AlgorithmId::EcdsaP384 => P384Engine::required_signature_length(params),
                #[allow(unreachable_patterns)]
                other => nominal_signature_length(other.family(), other),
            },
            #[allow(unreachable_patterns)]
            family => nominal_signature_length(family, params.algorithm),
        }
    }

    fn cleanup(&mut self) {
        delegate!(self, engine => engine.cleanup())
    }

    fn is_active(&self) -> bool {
        delegate!(self, engine => engine.is_active())
    }
}

/// Signature length of a family whose engine is not compiled in
#[allow(dead_code)]
fn nominal_signature_length(family: streamsig_api::Family, algorithm: AlgorithmId) -> usize {
    let field_len = algorithm.key_bits() / 8;
    match family {
        streamsig_api::Family::RsaPss => field_len,
        streamsig_api::Family::Ecdsa => 2 * field_len,
    }
}
