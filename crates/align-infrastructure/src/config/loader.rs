//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables and
//! default values using Figment.

use std::env;
use std::path::{Path, PathBuf};

use align_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    OPENAI_API_KEY_ENV,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, else the first default location found)
    /// 3. Environment variables with prefix (e.g., `ALIGN_EMBEDDING__PROVIDER`)
    ///
    /// When no embedding API key is configured, `OPENAI_API_KEY` is used.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore separates nested keys so field names keep their
        // own underscores (ALIGN_EMBEDDING__TIMEOUT_SECS)
        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let mut app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        if app_config.embedding.api_key.is_none() {
            app_config.embedding.api_key = env::var(OPENAI_API_KEY_ENV)
                .ok()
                .filter(|key| !key.trim().is_empty());
        }

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = to_toml(config)?;

        std::fs::write(path.as_ref(), toml_string)
            .io_context(format!("Failed to write config file {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First existing file among the default configuration locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

/// Render configuration as pretty TOML
pub fn to_toml(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config to TOML")
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    validate_embedding_config(config)?;
    validate_cache_config(config)?;
    validate_nats_config(config)?;
    validate_worker_config(config)?;
    Ok(())
}

fn validate_embedding_config(config: &AppConfig) -> Result<()> {
    let embedding = &config.embedding;
    if embedding.dimensions == 0 {
        return Err(Error::configuration("Embedding dimensions cannot be 0"));
    }
    if embedding.timeout_secs == 0 {
        return Err(Error::configuration("Embedding timeout cannot be 0"));
    }
    if embedding.max_concurrent_requests == 0 {
        return Err(Error::configuration(
            "Embedding max_concurrent_requests cannot be 0",
        ));
    }
    Ok(())
}

fn validate_cache_config(config: &AppConfig) -> Result<()> {
    if config.cache.enabled && config.cache.max_entries == 0 {
        return Err(Error::configuration(
            "Cache max_entries cannot be 0 when cache is enabled",
        ));
    }
    Ok(())
}

fn validate_nats_config(config: &AppConfig) -> Result<()> {
    let nats = &config.nats;
    if nats.url.trim().is_empty() {
        return Err(Error::configuration("NATS url cannot be empty"));
    }
    if nats.request_subject.trim().is_empty() || nats.result_subject.trim().is_empty() {
        return Err(Error::configuration("NATS subjects cannot be empty"));
    }
    if nats.queue_group.trim().is_empty() {
        return Err(Error::configuration("NATS queue group cannot be empty"));
    }
    Ok(())
}

fn validate_worker_config(config: &AppConfig) -> Result<()> {
    if config.worker.max_in_flight == 0 {
        return Err(Error::configuration("Worker max_in_flight cannot be 0"));
    }
    Ok(())
}
