//! Random secret generation
//!
//! Each character is picked by reducing one random byte modulo the alphabet
//! size. 256 is not a multiple of 77, so the first 25 alphabet characters
//! are slightly more likely than the rest. Consumers rely on this exact
//! distribution, so it must stay modulo-based.

use super::entropy::{EntropySource, OsEntropy};
use crate::constants::{SECRET_ALPHABET, SECRET_ALPHABET_LEN};
use crate::error::{Error, Result};
use tracing::{debug, trace};

/// Map one random byte onto the secret alphabet
pub fn alphabet_char(byte: u8) -> char {
    char::from(SECRET_ALPHABET[usize::from(byte) % SECRET_ALPHABET_LEN])
}

/// Generate a secret of `length` characters from the operating system source
pub fn generate_secret(length: usize) -> Result<String> {
    generate_with(&OsEntropy, length)
}

/// Generate a secret of `length` characters using `source`
///
/// Consumes exactly `length` bytes of entropy. Nothing is returned if the
/// source fails.
pub fn generate_with<E>(source: &E, length: usize) -> Result<String>
where
    E: EntropySource + ?Sized,
{
    if length == 0 {
        debug!("Rejected secret length of zero");
        return Err(Error::invalid_parameter("invalid length"));
    }

    let mut bytes = vec![0u8; length];
    source.fill(&mut bytes)?;
    let secret = bytes.iter().copied().map(alphabet_char).collect();
    bytes.fill(0);

    trace!(length, "Generated secret");
    Ok(secret)
}
