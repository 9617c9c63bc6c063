//! Trait definitions for streamsig

pub mod engine;

pub use engine::SignatureEngine;
