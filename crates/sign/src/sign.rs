//! Streaming signature generation

use crate::context::{Core, Role};
use crate::negotiate;
use crate::state::State;
use streamsig_api::{AlgorithmId, ContextOptions, Error, Result, SignatureEngine};

/// Signing context over one private key
///
/// Feed the message with [`update`](Self::update) in as many chunks as
/// convenient, then [`finish`](Self::finish) into a buffer of
/// [`signature_len`](Self::signature_len) bytes.
///
/// ```no_run
/// # fn demo(private_key_blob: &[u8]) -> streamsig_api::Result<()> {
/// use streamsig_sign::SignContext;
///
/// let mut ctx = SignContext::new(private_key_blob)?;
/// ctx.update(b"hello, ")?;
/// ctx.update(b"world")?;
///
/// let mut signature = vec![0u8; ctx.signature_len()];
/// let written = ctx.finish(Some(&mut signature))?;
/// signature.truncate(written);
/// # Ok(())
/// # }
/// ```
pub struct SignContext {
    core: Core,
}

impl SignContext {
    /// Create a context from a private key blob with default options
    pub fn new(private_key: &[u8]) -> Result<Self> {
        Self::with_options(private_key, ContextOptions::default())
    }

    pub fn with_options(private_key: &[u8], options: ContextOptions) -> Result<Self> {
        Core::open(Role::Sign, private_key, options).map(|core| Self { core })
    }

    pub fn algorithm(&self) -> AlgorithmId {
        self.core.algorithm()
    }

    pub fn state(&self) -> State {
        self.core.state()
    }

    /// Bytes [`finish`](Self::finish) will write; fixed for the context's lifetime
    pub fn signature_len(&self) -> usize {
        self.core.signature_len()
    }

    /// Append `data` to the message being signed
    ///
    /// Empty chunks are rejected with `InvalidParameter`.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        self.core.update(data)
    }

    /// Produce the signature into `signature`
    ///
    /// With no buffer, or one shorter than [`signature_len`](Self::signature_len),
    /// returns `BufferTooSmall` carrying the required length and leaves the
    /// context untouched. Otherwise writes the signature, returns its length
    /// and moves to [`State::Finalized`]. Finishing without any update signs
    /// the empty message.
    pub fn finish(&mut self, signature: Option<&mut [u8]>) -> Result<usize> {
        let context = self.core.context();
        let required = self.signature_len();
        self.core.streaming()?;
        let out = negotiate::claim(context, required, signature)?;

        let result = self.core.streaming()?.final_sign();
        self.core.finalize();

        let produced = result.map_err(|e| {
            log::warn!("{}: {} signing failed: {}", context, self.algorithm(), e);
            e
        })?;
        if produced.len() != out.len() {
            return Err(Error::fail(context, "engine produced a signature of the wrong length"));
        }
        out.copy_from_slice(&produced);

        log::debug!("{}: produced {} signature", context, self.algorithm());
        Ok(produced.len())
    }

    /// Produce the signature into a freshly allocated vector
    pub fn finish_vec(&mut self) -> Result<Vec<u8>> {
        let mut signature = Vec::new();
        signature.try_reserve_exact(self.signature_len())?;
        signature.resize(self.signature_len(), 0);
        let written = self.finish(Some(signature.as_mut_slice()))?;
        signature.truncate(written);
        Ok(signature)
    }

    /// Release the engine and key; calling again is a no-op
    pub fn destroy(&mut self) -> Result<()> {
        self.core.destroy();
        Ok(())
    }
}
