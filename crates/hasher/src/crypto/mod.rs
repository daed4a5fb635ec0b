//! Cryptographic services module
//!
//! This module provides:
//! - bcrypt password hashing and verification
//! - Random secret generation from a fixed alphabet
//! - Pluggable secure random sources

mod entropy;
mod hasher;
#[cfg(feature = "tokio")]
mod offload;
mod password;
mod secret;

pub use entropy::{EntropySource, OsEntropy};
pub use hasher::{Hasher, HasherInterface};
#[cfg(feature = "tokio")]
pub use offload::{hash_blocking, verify_blocking};
pub use password::{
    VerifyOutcome, cost_of, hash_secret, needs_rehash, validate_cost, verify_detailed,
    verify_secret,
};
pub use secret::{alphabet_char, generate_secret, generate_with};
