//! # hasher
//!
//! Password hashing, verification and random secret generation.
//!
//! The heavy lifting is delegated: bcrypt computes and checks hashes, the
//! operating system supplies randomness. This crate validates parameters,
//! shapes results and reports typed errors.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`crypto`] | bcrypt hashing, verification, secret generation |
//! | [`error`] | Error type and `Result` alias |
//! | [`config`] | Figment-based configuration loading |
//! | [`logging`] | Structured logging with tracing |
//! | [`constants`] | Cost bounds, alphabet and defaults |
//!
//! ## Example
//!
//! ```
//! use hasher::{Hasher, HasherInterface};
//!
//! let hasher = Hasher::new();
//! let hash = hasher.hash(b"correct horse", 4).unwrap();
//! assert!(hasher.verify("correct horse", &hash));
//! assert!(!hasher.verify("wrong horse", &hash));
//!
//! let secret = hasher.generate(16).unwrap();
//! assert_eq!(secret.chars().count(), 16);
//! ```

pub mod config;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use crypto::{EntropySource, Hasher, HasherInterface, OsEntropy, VerifyOutcome};
pub use error::{Error, Result};
pub use error_ext::ErrorContext;
