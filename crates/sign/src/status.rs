//! Status-code surface
//!
//! The same operations as [`SignContext`] and [`VerifyContext`] in the
//! shape session-protocol bindings expect: every argument optional, an
//! in/out length for the signature buffer and a [`Status`] return. A
//! missing context, key, data or length is `InvalidParameter`.

use crate::{SignContext, VerifyContext};
use streamsig_api::{Error, Result, Status};

fn status<T>(result: Result<T>) -> Status {
    Status::from(&result)
}

fn missing(what: &'static str) -> Status {
    Status::from(&Error::invalid_parameter("status surface", what))
}

/// Create a signing context into `out`
///
/// `out` is left untouched on failure.
pub fn sign_create(private_key: Option<&[u8]>, out: &mut Option<SignContext>) -> Status {
    let Some(private_key) = private_key else {
        return missing("no key blob");
    };
    match SignContext::new(private_key) {
        Ok(ctx) => {
            *out = Some(ctx);
            Status::Success
        }
        Err(e) => Status::from(&e),
    }
}

pub fn sign_update(ctx: Option<&mut SignContext>, data: Option<&[u8]>) -> Status {
    match (ctx, data) {
        (Some(ctx), Some(data)) => status(ctx.update(data)),
        (None, _) => missing("no context"),
        (_, None) => missing("no data"),
    }
}

/// Finalize a signature into `signature`
///
/// `signature_len` holds the usable capacity on entry and the written length
/// on success. On `BufferTooSmall` it holds the required length.
pub fn sign_final(
    ctx: Option<&mut SignContext>,
    signature: Option<&mut [u8]>,
    signature_len: Option<&mut usize>,
) -> Status {
    let Some(ctx) = ctx else {
        return missing("no context");
    };
    let Some(signature_len) = signature_len else {
        return missing("no signature length");
    };

    let capacity = *signature_len;
    let buffer = signature.map(|buf| {
        let usable = capacity.min(buf.len());
        &mut buf[..usable]
    });

    match ctx.finish(buffer) {
        Ok(written) => {
            *signature_len = written;
            Status::Success
        }
        Err(e) => {
            if let Some(required) = e.required_len() {
                *signature_len = required;
            }
            Status::from(&e)
        }
    }
}

pub fn sign_destroy(ctx: Option<&mut SignContext>) -> Status {
    match ctx {
        Some(ctx) => status(ctx.destroy()),
        None => missing("no context"),
    }
}

/// Create a verification context into `out`
///
/// `out` is left untouched on failure.
pub fn verify_create(public_key: Option<&[u8]>, out: &mut Option<VerifyContext>) -> Status {
    let Some(public_key) = public_key else {
        return missing("no key blob");
    };
    match VerifyContext::new(public_key) {
        Ok(ctx) => {
            *out = Some(ctx);
            Status::Success
        }
        Err(e) => Status::from(&e),
    }
}

pub fn verify_update(ctx: Option<&mut VerifyContext>, data: Option<&[u8]>) -> Status {
    match (ctx, data) {
        (Some(ctx), Some(data)) => status(ctx.update(data)),
        (None, _) => missing("no context"),
        (_, None) => missing("no data"),
    }
}

pub fn verify_final(ctx: Option<&mut VerifyContext>, signature: Option<&[u8]>) -> Status {
    match (ctx, signature) {
        (Some(ctx), Some(signature)) => status(ctx.verify(signature)),
        (None, _) => missing("no context"),
        (_, None) => missing("no signature"),
    }
}

pub fn verify_destroy(ctx: Option<&mut VerifyContext>) -> Status {
    match ctx {
        Some(ctx) => status(ctx.destroy()),
        None => missing("no context"),
    }
}
