//! Capability interface every engine binding implements
//!
//! An engine owns one native handle: the running message digest plus the
//! key object that finalizes it. The context layer drives it strictly in
//! the order `init → update* → final_sign | final_verify` and calls
//! `cleanup` on every exit path, so implementations can rely on that
//! sequence but must tolerate `cleanup` at any point, any number of times.

use crate::types::{AlgorithmParams, Verdict};
use crate::Result;

/// Streaming signature engine for one algorithm family
pub trait SignatureEngine: Sized {
    /// Parsed key material the engine imports at `init`
    type KeyMaterial;

    /// Acquire the digest and key handles for `params`
    ///
    /// The role (sign or verify) follows from the kind of key material.
    /// On failure every handle acquired so far must already be released.
    fn init(params: &AlgorithmParams, key: Self::KeyMaterial) -> Result<Self>;

    /// Append bytes to the running digest
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Consume the digest and produce a signature of exactly
    /// [`required_signature_length`](Self::required_signature_length) bytes
    fn final_sign(&mut self) -> Result<Vec<u8>>;

    /// Consume the digest and check `signature` against it
    ///
    /// A signature that is well-formed but wrong is `Ok(Verdict::NoMatch)`,
    /// not an error.
    fn final_verify(&mut self, signature: &[u8]) -> Result<Verdict>;

    /// Signature length for `params`; computable without any handle
    fn required_signature_length(params: &AlgorithmParams) -> usize;

    /// Release every handle that is still held
    fn cleanup(&mut self);

    /// Whether the digest handle is still live
    fn is_active(&self) -> bool;
}
