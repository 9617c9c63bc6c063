//! Core types shared by the resolver, the engines and the contexts
//!
//! An [`AlgorithmId`] is derived once from a key blob and never changes
//! for the lifetime of the context built from it. Everything that depends
//! on the algorithm (signature length, digest, salt policy) is a function
//! of the identifier plus the caller's [`ContextOptions`].

use core::fmt;
use streamsig_params::traditional::{ecdsa, rsa};
use streamsig_params::utils::hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Algorithm family of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Family {
    /// RSASSA-PSS with SHA-256 and MGF1-SHA-256
    RsaPss,
    /// ECDSA over a NIST prime curve
    Ecdsa,
}

/// Whether a key blob carries a private or a public key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyKind {
    Private,
    Public,
}

/// Signature scheme plus key size or curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlgorithmId {
    RsaPss1024,
    RsaPss2048,
    RsaPss4096,
    EcdsaP256,
    EcdsaP384,
}

impl AlgorithmId {
    /// Every identifier the resolver can produce
    pub const ALL: [AlgorithmId; 5] = [
        AlgorithmId::RsaPss1024,
        AlgorithmId::RsaPss2048,
        AlgorithmId::RsaPss4096,
        AlgorithmId::EcdsaP256,
        AlgorithmId::EcdsaP384,
    ];

    pub fn family(self) -> Family {
        match self {
            AlgorithmId::RsaPss1024 | AlgorithmId::RsaPss2048 | AlgorithmId::RsaPss4096 => {
                Family::RsaPss
            }
            AlgorithmId::EcdsaP256 | AlgorithmId::EcdsaP384 => Family::Ecdsa,
        }
    }

    /// Modulus size for RSA, field size for ECDSA
    pub fn key_bits(self) -> usize {
        match self {
            AlgorithmId::RsaPss1024 => rsa::RSA_MODULUS_1024,
            AlgorithmId::RsaPss2048 => rsa::RSA_MODULUS_2048,
            AlgorithmId::RsaPss4096 => rsa::RSA_MODULUS_4096,
            AlgorithmId::EcdsaP256 => ecdsa::P256_SCALAR_SIZE * 8,
            AlgorithmId::EcdsaP384 => ecdsa::P384_SCALAR_SIZE * 8,
        }
    }

    /// Output size of the message digest the scheme runs over
    pub fn digest_len(self) -> usize {
        match self {
            AlgorithmId::EcdsaP384 => hash::SHA384_OUTPUT_SIZE,
            _ => hash::SHA256_OUTPUT_SIZE,
        }
    }

    /// The RSA identifier for a modulus size, if it is supported
    pub fn rsa_from_bits(bits: usize) -> Option<Self> {
        match bits {
            rsa::RSA_MODULUS_1024 => Some(AlgorithmId::RsaPss1024),
            rsa::RSA_MODULUS_2048 => Some(AlgorithmId::RsaPss2048),
            rsa::RSA_MODULUS_4096 => Some(AlgorithmId::RsaPss4096),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmId::RsaPss1024 => "RSA-PSS-1024-SHA256",
            AlgorithmId::RsaPss2048 => "RSA-PSS-2048-SHA256",
            AlgorithmId::RsaPss4096 => "RSA-PSS-4096-SHA256",
            AlgorithmId::EcdsaP256 => "ECDSA-P256-SHA256",
            AlgorithmId::EcdsaP384 => "ECDSA-P384-SHA384",
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Salt-length policy for RSA-PSS
///
/// Signer and verifier must use the same policy; verification with a
/// different salt length reports an invalid signature. The verifier does
/// not auto-detect the salt.
///
/// Peers built on OpenSSL's "maximum salt" PSS mode (salt length `-2`)
/// sign with [`PssSaltLength::Max`]. Their signatures do not verify under
/// the default [`PssSaltLength::Digest`]; select `Max` to interoperate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PssSaltLength {
    /// Salt as long as the digest output
    #[default]
    Digest,
    /// Largest salt the modulus admits: `k - hLen - 2`
    Max,
    /// Explicit salt length in bytes
    Fixed(usize),
}

impl PssSaltLength {
    /// Resolve the policy to a byte count for `algorithm`
    ///
    /// Returns `None` when the policy does not fit the modulus.
    pub fn resolve(self, algorithm: AlgorithmId) -> Option<usize> {
        let modulus_len = algorithm.key_bits() / 8;
        let max = modulus_len.checked_sub(algorithm.digest_len() + rsa::PSS_ENCODING_OVERHEAD)?;
        let len = match self {
            PssSaltLength::Digest => algorithm.digest_len(),
            PssSaltLength::Max => max,
            PssSaltLength::Fixed(n) => n,
        };
        (len <= max).then_some(len)
    }
}

/// Caller-tunable options applied when a context is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContextOptions {
    /// Salt policy used by RSA-PSS; ignored by other families
    pub pss_salt_len: PssSaltLength,
}

impl ContextOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pss_salt_len(mut self, salt_len: PssSaltLength) -> Self {
        self.pss_salt_len = salt_len;
        self
    }
}

/// Everything an engine needs to know about the algorithm it runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmParams {
    pub algorithm: AlgorithmId,
    pub options: ContextOptions,
}

impl AlgorithmParams {
    pub fn new(algorithm: AlgorithmId, options: ContextOptions) -> Self {
        Self { algorithm, options }
    }
}

/// Outcome of a cryptographic verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    NoMatch,
}
