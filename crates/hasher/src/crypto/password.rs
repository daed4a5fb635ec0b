//! bcrypt hashing and verification
//!
//! Cost validation happens here, before bcrypt is ever called. Secrets longer
//! than [`BCRYPT_MAX_SECRET_LEN`] bytes are rejected instead of silently
//! truncated; a secret of exactly that length is accepted.

use crate::constants::{BCRYPT_MAX_COST, BCRYPT_MAX_SECRET_LEN, BCRYPT_MIN_COST};
use crate::error::{Error, Result};
use bcrypt::HashParts;
use tracing::{debug, trace};

/// Result of checking a candidate secret against an encoded hash
///
/// Diagnostic counterpart of [`verify_secret`]. Only [`VerifyOutcome::Match`]
/// counts as a successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The candidate produced the embedded digest
    Match,
    /// The hash is well formed but the candidate does not match it
    Mismatch,
    /// The hash could not be parsed, or bcrypt refused the candidate
    Unverifiable {
        /// Error reported by bcrypt
        reason: String,
    },
}

impl VerifyOutcome {
    /// Whether the candidate matched
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match)
    }
}

/// Check that `cost` lies within bcrypt's supported range
pub fn validate_cost(cost: u32) -> Result<()> {
    if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&cost) {
        debug!(cost, "Rejected bcrypt cost outside supported range");
        return Err(Error::invalid_parameter("invalid cost value"));
    }
    Ok(())
}

/// Hash `secret` with a fresh random salt at the given work factor
///
/// Returns the encoded `$2b$` hash, which embeds cost and salt.
pub fn hash_secret(secret: &[u8], cost: u32) -> Result<String> {
    validate_cost(cost)?;
    check_secret_len(secret)?;
    trace!(cost, "Hashing secret");
    // Within the limit bcrypt's truncation only drops the NUL terminator
    Ok(bcrypt::hash(secret, cost)?)
}

/// Reject secrets bcrypt cannot digest in full
fn check_secret_len(secret: &[u8]) -> std::result::Result<(), bcrypt::BcryptError> {
    if secret.len() > BCRYPT_MAX_SECRET_LEN {
        debug!(len = secret.len(), "Rejected secret longer than bcrypt input limit");
        return Err(bcrypt::BcryptError::Truncation(secret.len()));
    }
    Ok(())
}

/// Verify `plain` against `hashed`, keeping the reason for a failure
pub fn verify_detailed(plain: &str, hashed: &str) -> VerifyOutcome {
    let checked = check_secret_len(plain.as_bytes()).and_then(|()| bcrypt::verify(plain, hashed));
    match checked {
        Ok(true) => VerifyOutcome::Match,
        Ok(false) => VerifyOutcome::Mismatch,
        Err(e) => {
            // The error text may quote the stored hash, keep it out of the logs
            debug!("Encoded hash could not be verified");
            VerifyOutcome::Unverifiable {
                reason: e.to_string(),
            }
        }
    }
}

/// Verify `plain` against `hashed`
///
/// Any failure, including a malformed hash, yields `false`.
pub fn verify_secret(plain: &str, hashed: &str) -> bool {
    verify_detailed(plain, hashed).is_match()
}

/// Work factor embedded in an encoded hash
pub fn cost_of(hashed: &str) -> Option<u32> {
    hashed.parse::<HashParts>().ok().map(|parts| parts.get_cost())
}

/// Whether a stored hash was produced below `cost` or cannot be read
pub fn needs_rehash(hashed: &str, cost: u32) -> bool {
    cost_of(hashed).is_none_or(|current| current < cost)
}
