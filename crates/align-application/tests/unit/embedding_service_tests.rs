//! Embedding service: caching, fallback and bounded concurrency

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use align_application::domain_services::EmbeddingService;
use align_domain::value_objects::Embedding;
use align_providers::cache::MokaEmbeddingCache;

use crate::test_utils::{DIMS, FailingProvider, ScriptedProvider, fallback_service, service_with};

#[tokio::test]
async fn test_repeat_embed_is_bit_identical() {
    let service = fallback_service();

    let first = service.embed("Name: getUser").await;
    let second = service.embed("Name: getUser").await;

    assert_eq!(first.vector, second.vector);
    assert_eq!(first.vector.len(), DIMS);
}

#[tokio::test]
async fn test_fallback_matches_deterministic_embedding() {
    let a = fallback_service().embed("Title: Users").await;
    let b = fallback_service().embed("Title: Users").await;

    assert_eq!(a, Embedding::deterministic("Title: Users", DIMS));
    assert_eq!(a, b);
    assert!(a.is_fallback());
}

#[tokio::test]
async fn test_failing_provider_falls_back() {
    let provider = Arc::new(FailingProvider::new());
    let service = service_with(provider.clone());

    let embedding = service.embed("anything").await;

    assert!(embedding.is_fallback());
    assert_eq!(embedding, Embedding::deterministic("anything", DIMS));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_slow_provider_times_out_to_fallback() {
    let provider = Arc::new(ScriptedProvider::new(DIMS).with_delay(Duration::from_millis(500)));
    let service = service_with(provider).with_timeout(Duration::from_millis(20));

    let embedding = service.embed("slow").await;

    assert!(embedding.is_fallback());
}

#[tokio::test]
async fn test_wrong_dimensions_fall_back() {
    let provider = Arc::new(ScriptedProvider::new(DIMS + 1));
    let service = service_with(provider);

    let embedding = service.embed("text").await;

    assert!(embedding.is_fallback());
    assert_eq!(embedding.vector.len(), DIMS);
}

#[tokio::test]
async fn test_provider_vector_is_used_when_valid() {
    let provider = Arc::new(ScriptedProvider::new(DIMS));
    let service = service_with(provider);

    let embedding = service.embed("text").await;

    assert!(!embedding.is_fallback());
    assert_eq!(embedding.vector, vec![0.5; DIMS]);
}

#[tokio::test]
async fn test_cache_shares_results_across_calls() {
    let provider = Arc::new(ScriptedProvider::new(DIMS));
    let service = EmbeddingService::new(
        Some(provider.clone()),
        Arc::new(MokaEmbeddingCache::new()),
        DIMS,
    );

    let texts = ["a", "b", "a", "c", "b"].map(String::from);
    let first = service.embed_all(texts.clone()).await;
    let second = service.embed_all(texts).await;

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 3);

    let stats = service.cache_stats().await;
    assert_eq!(stats.misses, 3);
    assert_eq!(stats.hits, 3);
}

#[tokio::test]
async fn test_embed_all_bounds_concurrency() {
    let provider = Arc::new(ScriptedProvider::new(DIMS).with_delay(Duration::from_millis(20)));
    let service = service_with(provider.clone()).with_max_concurrent_requests(2);

    let texts: Vec<String> = (0..10).map(|i| format!("text {i}")).collect();
    let embedded = service.embed_all(texts).await;

    assert_eq!(embedded.len(), 10);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 10);
    assert!(provider.peak_in_flight.load(Ordering::SeqCst) <= 2);
}

#[tokio::test]
async fn test_one_failure_does_not_block_others() {
    let service = service_with(Arc::new(FailingProvider::new()));

    let embedded = service
        .embed_all(vec!["x".to_string(), "y".to_string()])
        .await;

    assert_eq!(embedded.len(), 2);
    assert!(embedded.values().all(Embedding::is_fallback));
}

#[test]
fn test_provider_name_without_provider() {
    assert_eq!(fallback_service().provider_name(), "none");
}
