//! Documentation entity records

use serde::{Deserialize, Serialize};

use crate::constants::DOC_TEXT_MAX_HEADINGS;
use crate::error::{Error, Result};

/// A heading inside a documentation file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading text as rendered
    #[serde(default)]
    pub text: String,
    /// In-document anchor (slug) for the heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

impl Heading {
    /// Create a heading with an anchor
    pub fn new(text: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            anchor: Some(anchor.into()),
        }
    }
}

/// Entity: a documentation file with optional title and ordered headings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocEntity {
    /// Identifier, unique and stable across a scan
    pub id: String,
    /// Owning project, when the scanner provides it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Docs-tree-relative path
    pub path: String,
    /// Document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Headings in document order
    #[serde(default)]
    pub headings: Vec<Heading>,
    /// Pre-computed embedding vector
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
    /// Scanner metadata, carried but not interpreted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl DocEntity {
    /// Create a doc without title, headings or embedding
    pub fn new(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            project_id: None,
            path: path.into(),
            title: None,
            headings: Vec::new(),
            embedding: None,
            metadata: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a heading
    pub fn with_heading(mut self, heading: Heading) -> Self {
        self.headings.push(heading);
        self
    }

    /// Attach a pre-computed embedding
    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// Title or the empty string
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Check that the fields the scorers depend on are present
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::invalid_argument("doc entity has an empty id"));
        }
        if self.path.trim().is_empty() {
            return Err(Error::invalid_argument(format!(
                "doc entity '{}' has an empty path",
                self.id
            )));
        }
        Ok(())
    }

    /// Text representation submitted to the embedding provider
    pub fn embedding_text(&self) -> String {
        let mut parts = vec![
            format!("Title: {}", self.title.as_deref().unwrap_or("Untitled")),
            format!("Path: {}", self.path),
        ];

        if !self.headings.is_empty() {
            let headings: Vec<&str> = self
                .headings
                .iter()
                .take(DOC_TEXT_MAX_HEADINGS)
                .map(|h| h.text.as_str())
                .collect();
            parts.push(format!("Headings: {}", headings.join(", ")));
        }

        parts.join(". ")
    }
}
