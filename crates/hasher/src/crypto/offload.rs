//! Blocking-pool offload for async callers
//!
//! Hashing blocks for time proportional to 2^cost. These helpers move the
//! work onto Tokio's blocking pool so async executors keep making progress.
//!
//! Tests run with: `cargo test -p hasher --features tokio`

use super::password::{hash_secret, verify_secret};
use crate::error::{Error, Result};

/// Hash `secret` on the blocking pool
pub async fn hash_blocking(secret: Vec<u8>, cost: u32) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_secret(&secret, cost))
        .await
        .map_err(|e| Error::internal(format!("Hashing task failed: {}", e)))?
}

/// Verify `plain` against `hashed` on the blocking pool
///
/// A task that fails to complete counts as a failed verification.
pub async fn verify_blocking(plain: String, hashed: String) -> bool {
    tokio::task::spawn_blocking(move || verify_secret(&plain, &hashed))
        .await
        .unwrap_or(false)
}
