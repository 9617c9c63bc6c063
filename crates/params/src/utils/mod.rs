//! Constants shared across algorithm families

pub mod hash;
