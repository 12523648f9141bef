//! Tests for code and doc entity records

use align_domain::entities::{CodeEntity, DocEntity, EntityKind, Heading, Signature};

#[test]
fn test_entity_embedding_text_includes_parameters() {
    let entity = CodeEntity::new("e1", EntityKind::Function, "getUser", "src/users.py", "python")
        .with_signature(Signature::new(["user_id: int", "verbose"]));

    assert_eq!(
        entity.embedding_text(),
        "Name: getUser. Type: function. Language: python. Path: src/users.py. \
         Parameters: user_id: int, verbose"
    );
}

#[test]
fn test_entity_embedding_text_without_signature() {
    let entity = CodeEntity::new("e1", EntityKind::Env, "DATABASE_URL", ".env.example", "shell");

    assert_eq!(
        entity.embedding_text(),
        "Name: DATABASE_URL. Type: env. Language: shell. Path: .env.example"
    );
}

#[test]
fn test_doc_embedding_text_limits_headings() {
    let mut doc = DocEntity::new("d1", "docs/users.md");
    for i in 0..7 {
        doc = doc.with_heading(Heading::new(format!("H{i}"), format!("h{i}")));
    }

    assert_eq!(
        doc.embedding_text(),
        "Title: Untitled. Path: docs/users.md. Headings: H0, H1, H2, H3, H4"
    );
}

#[test]
fn test_entity_validation_rejects_blank_fields() {
    let blank_name = CodeEntity::new("e1", EntityKind::Function, "  ", "src/a.py", "python");
    let blank_path = CodeEntity::new("e2", EntityKind::Function, "run", "", "python");
    let blank_id = CodeEntity::new("", EntityKind::Function, "run", "src/a.py", "python");

    assert!(blank_name.validate().is_err());
    assert!(blank_path.validate().is_err());
    assert!(blank_id.validate().is_err());
}

#[test]
fn test_doc_validation_allows_missing_title() {
    let doc = DocEntity::new("d1", "docs/readme.md");
    assert!(doc.validate().is_ok());
    assert!(DocEntity::new("d2", " ").validate().is_err());
}

#[test]
fn test_doc_deserializes_headings_without_anchor() {
    let doc: DocEntity = serde_json::from_str(
        r#"{"id":"d1","path":"docs/a.md","headings":[{"text":"Intro"}]}"#,
    )
    .unwrap();

    assert_eq!(doc.headings.len(), 1);
    assert_eq!(doc.headings[0].anchor, None);
    assert_eq!(doc.title, None);
}
