//! The hasher service

use super::entropy::OsEntropy;
use super::password::{VerifyOutcome, hash_secret, verify_detailed, verify_secret};
use super::secret::generate_with;
use crate::error::Result;

/// Hashing, verification and secret generation
///
/// Implementations hold no mutable state and can be shared freely between
/// threads.
pub trait HasherInterface: Send + Sync {
    /// Hash `secret` at the given bcrypt work factor
    fn hash(&self, secret: &[u8], cost: u32) -> Result<String>;

    /// Check `plain` against an encoded hash; every failure is `false`
    fn verify(&self, plain: &str, hashed: &str) -> bool;

    /// Generate a random secret of `length` characters
    fn generate(&self, length: usize) -> Result<String>;
}

/// bcrypt-backed [`HasherInterface`] drawing entropy from the operating system
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hasher;

impl Hasher {
    /// Create a new hasher
    pub fn new() -> Self {
        Self
    }

    /// Like [`HasherInterface::verify`], but reports why verification failed
    pub fn verify_detailed(&self, plain: &str, hashed: &str) -> VerifyOutcome {
        verify_detailed(plain, hashed)
    }
}

impl HasherInterface for Hasher {
    fn hash(&self, secret: &[u8], cost: u32) -> Result<String> {
        hash_secret(secret, cost)
    }

    fn verify(&self, plain: &str, hashed: &str) -> bool {
        verify_secret(plain, hashed)
    }

    fn generate(&self, length: usize) -> Result<String> {
        generate_with(&OsEntropy, length)
    }
}
