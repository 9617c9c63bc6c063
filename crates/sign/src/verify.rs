//! Streaming signature verification

use crate::context::{Core, Role};
use crate::state::State;
use streamsig_api::{AlgorithmId, ContextOptions, Error, Result, SignatureEngine, Verdict};

/// Verification context over one public key
///
/// A private key blob is accepted too; only its public half is used.
pub struct VerifyContext {
    core: Core,
}

impl VerifyContext {
    /// Create a context from a key blob with default options
    pub fn new(public_key: &[u8]) -> Result<Self> {
        Self::with_options(public_key, ContextOptions::default())
    }

    pub fn with_options(public_key: &[u8], options: ContextOptions) -> Result<Self> {
        Core::open(Role::Verify, public_key, options).map(|core| Self { core })
    }

    pub fn algorithm(&self) -> AlgorithmId {
        self.core.algorithm()
    }

    pub fn state(&self) -> State {
        self.core.state()
    }

    /// Length a signature must have to be checked at all
    pub fn signature_len(&self) -> usize {
        self.core.signature_len()
    }

    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        self.core.update(data)
    }

    /// Check `signature` against everything fed so far
    ///
    /// # Errors
    ///
    /// * `Fail` if the signature length differs from
    ///   [`signature_len`](Self::signature_len); the context stays usable
    /// * `InvalidSignature` if the signature does not match
    ///
    /// Any outcome past the length check finalizes the context.
    pub fn verify(&mut self, signature: &[u8]) -> Result<()> {
        let context = self.core.context();
        let expected = self.signature_len();
        self.core.streaming()?;
        if signature.len() != expected {
            return Err(Error::fail(
                context,
                format!(
                    "signature is {} bytes, {} expects {}",
                    signature.len(),
                    self.algorithm(),
                    expected
                ),
            ));
        }

        let result = self.core.streaming()?.final_verify(signature);
        self.core.finalize();

        match result {
            Ok(Verdict::Match) => {
                log::debug!("{}: {} signature verified", context, self.algorithm());
                Ok(())
            }
            Ok(Verdict::NoMatch) => {
                log::debug!("{}: {} signature mismatch", context, self.algorithm());
                Err(Error::invalid_signature(context))
            }
            Err(e) => {
                log::warn!("{}: {} verification failed: {}", context, self.algorithm(), e);
                Err(e)
            }
        }
    }

    /// Release the engine and key; calling again is a no-op
    pub fn destroy(&mut self) -> Result<()> {
        self.core.destroy();
        Ok(())
    }
}
