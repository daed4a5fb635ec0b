//! Hasher constants
//!
//! Cost bounds and alphabet used by the crypto module, plus the
//! configuration and logging defaults.

// ============================================================================
// BCRYPT CONSTANTS
// ============================================================================

/// Lowest work factor accepted by bcrypt
pub const BCRYPT_MIN_COST: u32 = 4;

/// Highest work factor accepted by bcrypt
pub const BCRYPT_MAX_COST: u32 = 31;

/// Recommended work factor for new hashes
pub const BCRYPT_DEFAULT_COST: u32 = 12;

/// Longest secret bcrypt digests in full (bytes)
pub const BCRYPT_MAX_SECRET_LEN: usize = 72;

// ============================================================================
// SECRET GENERATION CONSTANTS
// ============================================================================

/// Characters a generated secret is drawn from
pub const SECRET_ALPHABET: &[u8; SECRET_ALPHABET_LEN] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890!@#$%&()[]{}<>?";

/// Number of characters in [`SECRET_ALPHABET`]
pub const SECRET_ALPHABET_LEN: usize = 77;

/// Default length of a generated secret
pub const DEFAULT_SECRET_LENGTH: usize = 16;

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "hasher.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "hasher";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "HASHER";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a full `EnvFilter` directive
pub const LOG_ENV_FILTER: &str = "HASHER_LOG";

/// File stem used for rolling log files
pub const LOG_FILE_STEM: &str = "hasher";
