//! Configuration loading, layering and validation

use align_infrastructure::config::{AppConfig, ConfigLoader};
use figment::Jail;
use tempfile::TempDir;

fn load(loader: &ConfigLoader) -> figment::error::Result<AppConfig> {
    loader.load().map_err(|e| e.to_string().into())
}

#[test]
fn test_defaults_without_file_or_env() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        let config = load(&ConfigLoader::new())?;

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.embedding.provider, "openai");
        assert_eq!(config.embedding.dimensions, 1536);
        assert_eq!(config.embedding.timeout_secs, 30);
        assert_eq!(config.embedding.max_concurrent_requests, 4);
        assert_eq!(config.nats.request_subject, "align.map");
        assert_eq!(config.nats.result_subject, "align.map.result");
        assert_eq!(config.nats.queue_group, "map-workers");
        assert_eq!(config.worker.max_in_flight, 8);
        assert!(config.cache.enabled);
        Ok(())
    });
}

#[test]
fn test_file_in_working_directory_is_discovered() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(
            "align.toml",
            r#"
            [embedding]
            provider = "hash"
            dimensions = 64

            [nats]
            url = "nats://broker:4222"
            "#,
        )?;

        let config = load(&ConfigLoader::new())?;

        assert_eq!(config.embedding.provider, "hash");
        assert_eq!(config.embedding.dimensions, 64);
        assert_eq!(config.embedding.timeout_secs, 30);
        assert_eq!(config.nats.url, "nats://broker:4222");
        assert_eq!(config.nats.request_subject, "align.map");
        Ok(())
    });
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file("align.toml", "[worker]\nmax_in_flight = 2\n")?;
        jail.set_env("ALIGN_WORKER__MAX_IN_FLIGHT", "16");
        jail.set_env("ALIGN_EMBEDDING__TIMEOUT_SECS", "5");
        jail.set_env("ALIGN_LOGGING__LEVEL", "debug");

        let config = load(&ConfigLoader::new())?;

        assert_eq!(config.worker.max_in_flight, 16);
        assert_eq!(config.embedding.timeout_secs, 5);
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("MAPPER_CACHE__ENABLED", "false");
        jail.set_env("ALIGN_CACHE__MAX_ENTRIES", "1");

        let config = load(&ConfigLoader::new().with_env_prefix("MAPPER"))?;

        assert!(!config.cache.enabled);
        assert_eq!(config.cache.max_entries, 10_000);
        Ok(())
    });
}

#[test]
fn test_openai_api_key_fallback() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("OPENAI_API_KEY", "sk-from-env");

        let config = load(&ConfigLoader::new())?;
        assert_eq!(config.embedding.api_key.as_deref(), Some("sk-from-env"));

        jail.set_env("ALIGN_EMBEDDING__API_KEY", "sk-configured");
        let config = load(&ConfigLoader::new())?;
        assert_eq!(config.embedding.api_key.as_deref(), Some("sk-configured"));
        Ok(())
    });
}

#[test]
fn test_explicit_path_and_missing_file() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        let dir = TempDir::new().map_err(|e| e.to_string())?;
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[cache]\nttl_secs = 600\n").map_err(|e| e.to_string())?;

        let loader = ConfigLoader::new().with_config_path(&path);
        assert_eq!(loader.config_path(), Some(path.as_path()));
        assert_eq!(load(&loader)?.cache.ttl_secs, 600);

        let missing = ConfigLoader::new().with_config_path(dir.path().join("absent.toml"));
        assert_eq!(load(&missing)?, AppConfig::default());
        Ok(())
    });
}

#[test]
fn test_invalid_values_are_rejected() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        for contents in [
            "[worker]\nmax_in_flight = 0\n",
            "[embedding]\ndimensions = 0\n",
            "[embedding]\ntimeout_secs = 0\n",
            "[embedding]\nmax_concurrent_requests = 0\n",
            "[cache]\nmax_entries = 0\n",
            "[nats]\nrequest_subject = \"\"\n",
            "[nats]\nqueue_group = \" \"\n",
            "[logging]\nlevel = \"loud\"\n",
            "[worker]\nmax_in_flight = \"many\"\n",
        ] {
            jail.create_file("align.toml", contents)?;
            assert!(ConfigLoader::new().load().is_err(), "accepted: {contents}");
        }
        Ok(())
    });
}

#[test]
fn test_disabled_cache_may_have_zero_entries() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file("align.toml", "[cache]\nenabled = false\nmax_entries = 0\n")?;

        let config = load(&ConfigLoader::new())?;
        assert_eq!(config.cache.to_provider_config().provider, "null");
        Ok(())
    });
}

#[test]
fn test_save_then_load_preserves_values() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        let dir = TempDir::new().map_err(|e| e.to_string())?;
        let path = dir.path().join("saved.toml");

        let mut config = AppConfig::default();
        config.embedding.provider = "ollama".to_string();
        config.embedding.model = Some("nomic-embed-text".to_string());
        config.embedding.dimensions = 768;
        config.nats.client_name = None;

        let loader = ConfigLoader::new().with_config_path(&path);
        loader
            .save_to_file(&config, &path)
            .map_err(|e| e.to_string())?;

        assert_eq!(load(&loader)?.embedding, config.embedding);
        Ok(())
    });
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no/such/dir/align.toml");

    let result = ConfigLoader::new().save_to_file(&AppConfig::default(), &path);

    assert!(result.is_err());
}

#[test]
fn test_embedding_provider_config_mapping() {
    let mut config = AppConfig::default();
    config.embedding.api_key = Some("sk-test".to_string());
    config.embedding.base_url = Some("http://localhost:9999".to_string());

    let registry = config.embedding.to_provider_config().unwrap();
    assert_eq!(registry.provider, "openai");
    assert_eq!(registry.api_key.as_deref(), Some("sk-test"));
    assert_eq!(registry.dimensions, Some(1536));
    assert_eq!(registry.timeout, Some(std::time::Duration::from_secs(30)));

    config.embedding.provider = "None".to_string();
    assert!(config.embedding.to_provider_config().is_none());
}
