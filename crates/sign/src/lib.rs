//! Streaming sign and verify contexts
//!
//! This crate is the lifecycle layer of streamsig. A context is created
//! from an opaque key blob, the dispatcher binds exactly one engine
//! for the resolved algorithm, and the context drives that engine through
//! `Ready → Updated* → Finalized`, releasing it on every exit path.
//!
//! Two surfaces are offered:
//!
//! * [`SignContext`] / [`VerifyContext`] with `Result` returns
//! * [`status`]: free functions over optional arguments returning
//!   [`Status`](streamsig_api::Status) codes

mod context;
mod dispatch;
pub mod negotiate;
pub mod sign;
pub mod state;
pub mod status;
pub mod verify;

#[cfg(test)]
mod testing;

pub use negotiate::signature_len;
pub use sign::SignContext;
pub use state::State;
pub use verify::VerifyContext;
