//! Infrastructure constants

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Configuration file searched for when no path is given
pub const DEFAULT_CONFIG_FILENAME: &str = "align.toml";

/// Directory name used under the user config dir
pub const DEFAULT_CONFIG_DIR: &str = "align";

/// Prefix for environment overrides (`ALIGN_EMBEDDING__PROVIDER=hash`)
pub const CONFIG_ENV_PREFIX: &str = "ALIGN";

/// Separator between nested keys in environment overrides
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Conventional variable read when no embedding API key is configured
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

// ============================================================================
// LOGGING
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding an `EnvFilter` directive that overrides the level
pub const LOG_FILTER_ENV: &str = "ALIGN_LOG";

/// File stem used when the log file path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "align";

// ============================================================================
// PROVIDER SELECTION
// ============================================================================

/// Embedding provider used when none is configured
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "openai";

/// Provider name that disables the external embedding service
pub const EMBEDDING_PROVIDER_NONE: &str = "none";

/// Cache provider used when caching is enabled
pub const DEFAULT_CACHE_PROVIDER: &str = "moka";

/// Cache provider used when caching is disabled
pub const NULL_CACHE_PROVIDER: &str = "null";

// ============================================================================
// WORKER
// ============================================================================

/// Messages processed concurrently by one worker
pub const DEFAULT_WORKER_MAX_IN_FLIGHT: usize = 8;

/// Client name reported to the NATS server
pub const DEFAULT_NATS_CLIENT_NAME: &str = "align-map-worker";
