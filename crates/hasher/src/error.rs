//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the hasher
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied argument violates a documented precondition
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the violated precondition
        message: String,
    },

    /// The bcrypt primitive rejected the input or failed internally
    #[error("Hashing failed: {source}")]
    HashingFailed {
        /// The primitive's error, unchanged
        #[from]
        source: bcrypt::BcryptError,
    },

    /// The secure random source could not yield entropy
    #[error("Random source unavailable: {message}")]
    RandomSourceUnavailable {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid parameter error
    pub fn invalid_parameter<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create a random source error without an underlying cause
    pub fn random_source<S: Into<String>>(message: S) -> Self {
        Self::RandomSourceUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create a random source error wrapping the platform failure
    pub fn random_source_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::RandomSourceUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Kind predicates
impl Error {
    /// True for precondition violations detected before any delegated call
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// True when the bcrypt primitive itself failed
    pub fn is_hashing_failed(&self) -> bool {
        matches!(self, Self::HashingFailed { .. })
    }

    /// True when the secure random source failed
    pub fn is_random_source_unavailable(&self) -> bool {
        matches!(self, Self::RandomSourceUnavailable { .. })
    }
}
