//! Tests for the HTTP and hash embedding providers

use std::time::Duration;

use align_domain::ports::EmbeddingProvider;
use align_providers::embedding::{
    HashEmbeddingProvider, OllamaEmbeddingProvider, OpenAIEmbeddingProvider,
};
use mockito::{Matcher, Server};
use reqwest::Client;
use serde_json::json;

fn client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("http client")
}

fn openai(base_url: String, model: &str) -> OpenAIEmbeddingProvider {
    OpenAIEmbeddingProvider::new(
        "test-key".to_string(),
        Some(base_url),
        model.to_string(),
        Duration::from_secs(5),
        client(),
    )
}

#[test]
fn test_openai_dimensions_by_model() {
    let models_and_dims = vec![
        ("text-embedding-3-small", 1536),
        ("text-embedding-3-large", 3072),
        ("text-embedding-ada-002", 1536),
        ("unknown-model", 1536),
    ];

    for (model, expected_dims) in models_and_dims {
        let provider = openai("http://localhost".to_string(), model);
        assert_eq!(
            provider.dimensions(),
            expected_dims,
            "Model {model} should have {expected_dims} dimensions"
        );
    }

    let reduced = openai("http://localhost".to_string(), "text-embedding-3-large")
        .with_dimensions(256);
    assert_eq!(reduced.dimensions(), 256);
}

#[test]
fn test_openai_base_url_defaults_and_trims() {
    let default = OpenAIEmbeddingProvider::new(
        "k".to_string(),
        None,
        "text-embedding-3-small".to_string(),
        Duration::from_secs(5),
        client(),
    );
    assert_eq!(default.base_url(), "https://api.openai.com/v1");

    let custom = openai("https://proxy.local/v1/".to_string(), "m");
    assert_eq!(custom.base_url(), "https://proxy.local/v1");
}

#[tokio::test]
async fn test_openai_embed_batch_with_mock_server() {
    let mut server = Server::new_async().await;
    let body = json!({
        "data": [
            {"index": 0, "embedding": [0.1, 0.2, 0.3]},
            {"index": 1, "embedding": [0.4, 0.5, 0.6]}
        ]
    });
    let mock = server
        .mock("POST", "/embeddings")
        .match_header("authorization", "Bearer test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let provider = openai(server.url(), "text-embedding-3-small");
    let embeddings = provider
        .embed_batch(&["a".to_string(), "b".to_string()])
        .await
        .expect("embeddings");

    mock.assert_async().await;
    assert_eq!(embeddings.len(), 2);
    assert_eq!(embeddings[0].vector, vec![0.1, 0.2, 0.3]);
    assert_eq!(embeddings[1].dimensions, 3);
    assert_eq!(embeddings[1].model, "text-embedding-3-small");
}

#[tokio::test]
async fn test_openai_server_error_is_embedding_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/embeddings")
        .with_status(503)
        .with_body("overloaded")
        .create_async()
        .await;

    let provider = openai(server.url(), "text-embedding-3-small");
    let err = provider.embed("text").await.expect_err("must fail");

    let message = err.to_string();
    assert!(message.contains("server error (503)"), "{message}");
    assert!(message.contains("overloaded"), "{message}");
}

#[tokio::test]
async fn test_openai_count_mismatch_is_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/embeddings")
        .with_status(200)
        .with_body(json!({"data": [{"embedding": [1.0]}]}).to_string())
        .create_async()
        .await;

    let provider = openai(server.url(), "text-embedding-3-small");
    let err = provider
        .embed_batch(&["a".to_string(), "b".to_string()])
        .await
        .expect_err("count mismatch");
    assert!(err.to_string().contains("1 embeddings for 2 inputs"));
}

#[tokio::test]
async fn test_openai_empty_batch_makes_no_request() {
    let provider = openai("http://127.0.0.1:9".to_string(), "text-embedding-3-small");
    let embeddings = provider.embed_batch(&[]).await.expect("empty batch");
    assert!(embeddings.is_empty());
}

#[tokio::test]
async fn test_ollama_embed_batch_with_mock_server() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/embed")
        .match_body(Matcher::PartialJson(json!({
            "model": "nomic-embed-text",
            "input": ["x", "y"]
        })))
        .with_status(200)
        .with_body(json!({"embeddings": [[0.5, -0.5], [0.25, 0.75]]}).to_string())
        .expect(1)
        .create_async()
        .await;

    let provider = OllamaEmbeddingProvider::new(
        format!("{}/", server.url()),
        "nomic-embed-text".to_string(),
        Duration::from_secs(5),
        client(),
    );
    let embeddings = provider
        .embed_batch(&["x".to_string(), "y".to_string()])
        .await
        .expect("embeddings");

    mock.assert_async().await;
    assert_eq!(embeddings.len(), 2);
    assert_eq!(embeddings[0].vector, vec![0.5, -0.5]);
    assert_eq!(embeddings[1].vector, vec![0.25, 0.75]);
    assert_eq!(provider.dimensions(), 768);
    assert_eq!(provider.provider_name(), "ollama");
}

#[tokio::test]
async fn test_ollama_error_body_is_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/embed")
        .with_status(200)
        .with_body(json!({"error": "model not found"}).to_string())
        .create_async()
        .await;

    let provider = OllamaEmbeddingProvider::new(
        server.url(),
        "missing".to_string(),
        Duration::from_secs(5),
        client(),
    );
    let err = provider.embed("x").await.unwrap_err();
    assert!(err.to_string().contains("model not found"));
}

#[tokio::test]
async fn test_ollama_count_mismatch_is_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/embed")
        .with_status(200)
        .with_body(json!({"embeddings": [[1.0]]}).to_string())
        .create_async()
        .await;

    let provider = OllamaEmbeddingProvider::new(
        server.url(),
        "all-minilm".to_string(),
        Duration::from_secs(5),
        client(),
    )
    .with_dimensions(1);

    assert_eq!(provider.dimensions(), 1);
    assert!(
        provider
            .embed_batch(&["a".to_string(), "b".to_string()])
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_hash_provider_matches_requested_dimensions() {
    let provider = HashEmbeddingProvider::new(1536);
    let embedding = provider.embed("Name: getUser").await.expect("hash");
    assert_eq!(embedding.vector.len(), 1536);
    assert!(embedding.vector.iter().all(|v| (-1.0..=1.0).contains(v)));
}
