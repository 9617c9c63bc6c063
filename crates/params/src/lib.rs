//! Constant values for streamsig
//!
//! Key sizes, signature sizes and key-container layout shared by the
//! resolver, the engine bindings and the buffer negotiator.

#![no_std]

pub mod container;
pub mod traditional;
pub mod utils;
