//! Two-phase output sizing
//!
//! A caller asks for the signature length, allocates, then finalizes into
//! the buffer. Finalizing with no buffer or a short one answers the first
//! question through [`Error::BufferTooSmall`] without touching the
//! context.

use crate::dispatch::Binding;
use streamsig_api::{AlgorithmId, AlgorithmParams, ContextOptions, Error, Result, SignatureEngine};

/// Signature length produced and expected for `algorithm`
///
/// Depends on the algorithm alone, never on streaming state or options.
pub fn signature_len(algorithm: AlgorithmId) -> usize {
    Binding::required_signature_length(&AlgorithmParams::new(
        algorithm,
        ContextOptions::default(),
    ))
}

/// The first `required` bytes of `out`, or `BufferTooSmall` if it has fewer
pub(crate) fn claim<'a>(
    context: &'static str,
    required: usize,
    out: Option<&'a mut [u8]>,
) -> Result<&'a mut [u8]> {
    match out {
        Some(out) if out.len() >= required => Ok(&mut out[..required]),
        other => Err(Error::buffer_too_small(
            context,
            required,
            other.map_or(0, |out| out.len()),
        )),
    }
}
