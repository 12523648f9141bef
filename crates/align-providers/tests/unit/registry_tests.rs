//! Tests that providers register themselves and resolve by name

use std::time::Duration;

use align_application::ports::registry::{
    CacheProviderConfig, EmbeddingProviderConfig, list_cache_providers, list_embedding_providers,
    resolve_cache_provider, resolve_embedding_provider,
};

#[test]
fn test_all_embedding_providers_registered() {
    let names: Vec<&str> = list_embedding_providers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();

    for expected in ["openai", "ollama", "hash"] {
        assert!(names.contains(&expected), "{expected} missing from {names:?}");
    }
}

#[test]
fn test_all_cache_providers_registered() {
    let names: Vec<&str> = list_cache_providers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert!(names.contains(&"moka"));
    assert!(names.contains(&"null"));
}

#[test]
fn test_resolve_hash_provider_uses_configured_dimensions() {
    let provider =
        resolve_embedding_provider(&EmbeddingProviderConfig::new("hash").with_dimensions(128))
            .expect("hash provider");
    assert_eq!(provider.provider_name(), "hash");
    assert_eq!(provider.dimensions(), 128);
}

#[test]
fn test_resolve_openai_requires_api_key() {
    let err = resolve_embedding_provider(&EmbeddingProviderConfig::new("openai"))
        .err()
        .expect("missing key must fail");
    assert!(err.contains("api_key"));

    let provider = resolve_embedding_provider(
        &EmbeddingProviderConfig::new("openai")
            .with_api_key("sk-test")
            .with_dimensions(512)
            .with_timeout(Duration::from_secs(3)),
    )
    .expect("openai provider");
    assert_eq!(provider.provider_name(), "openai");
    assert_eq!(provider.dimensions(), 512);
}

#[test]
fn test_resolve_ollama_defaults() {
    let provider = resolve_embedding_provider(&EmbeddingProviderConfig::new("ollama"))
        .expect("ollama provider");
    assert_eq!(provider.provider_name(), "ollama");
    assert_eq!(provider.dimensions(), 768);
}

#[test]
fn test_resolve_caches() {
    let moka = resolve_cache_provider(
        &CacheProviderConfig::new("moka")
            .with_max_entries(100)
            .with_ttl_secs(60),
    )
    .expect("moka cache");
    assert_eq!(moka.provider_name(), "moka");

    let null = resolve_cache_provider(&CacheProviderConfig::new("null")).expect("null cache");
    assert_eq!(null.provider_name(), "null");

    let err = resolve_cache_provider(&CacheProviderConfig::new("moka").with_max_entries(0))
        .err()
        .expect("zero capacity must fail");
    assert!(err.contains("max_entries"));
}

#[test]
fn test_unknown_cache_provider() {
    let err = resolve_cache_provider(&CacheProviderConfig::new("redis"))
        .err()
        .expect("unknown provider");
    assert!(err.contains("Unknown cache provider 'redis'"));
}
