//! Secure random byte sources

use crate::error::{Error, Result};
use rand::TryRngCore;
use rand::rngs::OsRng;

/// A source of cryptographically secure random bytes
///
/// Implementations must be safe to share between threads.
pub trait EntropySource: Send + Sync {
    /// Fill `dest` entirely, or fail without a usable result
    fn fill(&self, dest: &mut [u8]) -> Result<()>;
}

/// The operating system's secure random generator
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(dest).map_err(|e| {
            Error::random_source_with_source("operating system random source failed", e)
        })
    }
}
