//! Tests for the embedding caches

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use align_domain::ports::EmbeddingCacheProvider;
use align_domain::value_objects::Embedding;
use align_providers::cache::{MokaEmbeddingCache, NullEmbeddingCache};

fn vector(value: f32) -> Embedding {
    Embedding::new(vec![value; 4], "test")
}

#[tokio::test]
async fn test_moka_miss_then_hit() {
    let cache = MokaEmbeddingCache::new();

    assert!(cache.get("k").await.is_none());

    let first = cache
        .get_or_insert_with("k", Box::pin(async { vector(1.0) }))
        .await;
    let second = cache
        .get_or_insert_with("k", Box::pin(async { vector(2.0) }))
        .await;

    assert_eq!(first, vector(1.0));
    assert_eq!(second, vector(1.0));
    assert_eq!(cache.get("k").await, Some(vector(1.0)));

    let stats = cache.stats().await;
    assert_eq!(stats.entries, 1);
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.hit_rate, 0.5);
}

#[tokio::test]
async fn test_moka_concurrent_misses_share_one_initialiser() {
    let cache = Arc::new(MokaEmbeddingCache::new());
    let calls = Arc::new(AtomicUsize::new(0));

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let cache = Arc::clone(&cache);
            let calls = Arc::clone(&calls);
            tokio::spawn(async move {
                cache
                    .get_or_insert_with(
                        "shared",
                        Box::pin(async move {
                            calls.fetch_add(1, Ordering::SeqCst);
                            tokio::time::sleep(Duration::from_millis(20)).await;
                            vector(i as f32)
                        }),
                    )
                    .await
            })
        })
        .collect();

    let mut results = Vec::new();
    for task in tasks {
        results.push(task.await.expect("task"));
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn test_moka_clear_drops_entries() {
    let cache = MokaEmbeddingCache::with_config(10, Some(Duration::from_secs(60)));
    cache
        .get_or_insert_with("a", Box::pin(async { vector(1.0) }))
        .await;
    cache.clear().await;

    assert!(cache.get("a").await.is_none());
    assert_eq!(cache.stats().await.entries, 0);
    assert_eq!(cache.max_entries(), 10);
}

#[tokio::test]
async fn test_null_cache_always_runs_initialiser() {
    let cache = NullEmbeddingCache::new();
    let calls = AtomicUsize::new(0);

    for _ in 0..3 {
        cache
            .get_or_insert_with(
                "k",
                Box::pin(async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    vector(1.0)
                }),
            )
            .await;
    }

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert!(cache.get("k").await.is_none());
    let stats = cache.stats().await;
    assert_eq!(stats.entries, 0);
    assert_eq!(stats.misses, 4);
    assert_eq!(cache.provider_name(), "null");
}
