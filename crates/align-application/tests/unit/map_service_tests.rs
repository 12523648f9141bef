//! Map service: request validation, filtering and result bookkeeping

use std::sync::Arc;

use align_application::ports::MapServiceInterface;
use align_application::use_cases::MapServiceImpl;
use align_domain::value_objects::{MapOptions, MapRequest};
use serde_json::json;

use crate::test_utils::{doc, engine, function, heading};

fn service() -> MapServiceImpl {
    MapServiceImpl::new(Arc::new(engine()))
}

fn request() -> MapRequest {
    MapRequest::new(
        "proj-1",
        vec![
            function("e1", "getUser", "src/users.py"),
            function("e2", "listOrders", "src/orders.py"),
        ],
        vec![
            doc("d1", "docs/users.md", "Get User").with_heading(heading("getUser")),
            doc("d2", "docs/orders.md", "List Orders"),
        ],
    )
    .with_request_id("req-7")
    .with_options(MapOptions::default().with_embeddings(false))
}

#[tokio::test]
async fn test_successful_request_bookkeeping() {
    let result = service().map(&request()).await;

    assert!(result.success);
    assert_eq!(result.error_message, None);
    assert_eq!(result.project_id, "proj-1");
    assert_eq!(result.request_id, "req-7");
    assert_eq!(result.entities_processed, 2);
    assert_eq!(result.docs_processed, 2);
    assert_eq!(result.mappings_created, result.mappings.len());
    assert!(result.map_duration >= 0.0);
    assert!(result.mappings.iter().all(|m| m.project_id == "proj-1"));
}

#[tokio::test]
async fn test_blank_project_id_fails_request() {
    let mut invalid = request();
    invalid.project_id = "  ".to_string();

    let result = service().map(&invalid).await;

    assert!(!result.success);
    assert!(result.mappings.is_empty());
    assert_eq!(result.mappings_created, 0);
    assert!(result.error_message.unwrap().contains("project_id"));
}

#[tokio::test]
async fn test_invalid_options_fail_request() {
    for options in [
        MapOptions::default().with_min_score_threshold(1.5),
        MapOptions::default().with_min_score_threshold(-0.1),
        MapOptions::default().with_min_score_threshold(f64::NAN),
        MapOptions::default().with_max_mappings_per_entity(0),
    ] {
        let result = service().map(&request().with_options(options)).await;
        assert!(!result.success);
        assert!(result.mappings.is_empty());
        assert!(result.error_message.is_some());
        assert_eq!(result.request_id, "req-7");
    }
}

#[tokio::test]
async fn test_both_scorers_disabled_is_empty_success() {
    let options = MapOptions::default()
        .with_embeddings(false)
        .with_heuristics(false);

    let result = service().map(&request().with_options(options)).await;

    assert!(result.success);
    assert!(result.mappings.is_empty());
    assert_eq!(result.mappings_created, 0);
}

#[tokio::test]
async fn test_id_filters_restrict_processing() {
    let mut filtered = request();
    filtered.entity_ids = Some(vec!["e1".to_string()]);
    filtered.doc_ids = Some(vec!["d1".to_string(), "missing".to_string()]);

    let result = service().map(&filtered).await;

    assert_eq!(result.entities_processed, 1);
    assert_eq!(result.docs_processed, 1);
    assert!(
        result
            .mappings
            .iter()
            .all(|m| m.entity_id == "e1" && m.doc_id == "d1")
    );
}

#[tokio::test]
async fn test_payload_with_bad_record_still_maps_the_rest() {
    let payload = json!({
        "project_id": "proj-2",
        "request_id": "r1",
        "use_embeddings": false,
        "entities": [
            {"id": "e1", "kind": "function", "name": "getUser", "path": "src/users.py", "lang": "python"},
            {"id": "e2", "kind": "widget", "name": "broken", "path": "src/x.py"}
        ],
        "docs": [
            {"id": "d1", "path": "docs/users.md", "title": "Get User", "headings": [{"text": "getUser", "anchor": "getuser"}]}
        ]
    });

    let result = service()
        .handle_payload(&serde_json::to_vec(&payload).unwrap())
        .await;

    assert!(result.success);
    assert_eq!(result.entities_processed, 1);
    assert_eq!(result.mappings.len(), 1);
    assert_eq!(result.mappings[0].anchor.as_deref(), Some("getuser"));
}

#[tokio::test]
async fn test_undecodable_payload_fails_with_salvaged_ids() {
    let result = service()
        .handle_payload(br#"{"project_id": "proj-3", "request_id": "r2", "max_mappings_per_entity": "many"}"#)
        .await;

    assert!(!result.success);
    assert_eq!(result.project_id, "proj-3");
    assert_eq!(result.request_id, "r2");
    assert!(result.error_message.is_some());

    let garbage = service().handle_payload(b"\x00not json").await;
    assert!(!garbage.success);
    assert_eq!(garbage.project_id, "");
}
