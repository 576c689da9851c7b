//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `rescache_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "rescache.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "rescache";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "RESCACHE";

/// Separator between nested keys in environment variables
/// (`RESCACHE_CACHE__DEFAULT_TTL_SECS`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default region time-to-live in seconds (1 hour)
pub const CACHE_DEFAULT_TTL_SECS: u64 = 3600;

/// Default region time-to-idle in seconds (1 hour)
pub const CACHE_DEFAULT_TTI_SECS: u64 = 3600;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "RESCACHE_LOG";

/// File stem used when the configured log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "rescache";
