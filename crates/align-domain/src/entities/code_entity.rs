//! Code entity records

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Kind of source entity produced by the code scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Free function
    Function,
    /// Method bound to a type
    Method,
    /// Class or struct
    Class,
    /// HTTP/RPC endpoint
    Endpoint,
    /// Type alias, interface or schema type
    Type,
    /// CLI command
    Cli,
    /// CLI flag
    Flag,
    /// Environment variable
    Env,
}

impl EntityKind {
    /// Lowercase wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Method => "method",
            Self::Class => "class",
            Self::Endpoint => "endpoint",
            Self::Type => "type",
            Self::Cli => "cli",
            Self::Flag => "flag",
            Self::Env => "env",
        }
    }

    /// Whether entities of this kind carry a parameter signature
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Function | Self::Method)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared parameters of a callable entity
///
/// Each descriptor is the scanner's rendering of one parameter, e.g.
/// `"user_id: int"` or `"ctx"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    /// Ordered parameter descriptors
    #[serde(default)]
    pub parameters: Vec<String>,
}

impl Signature {
    /// Create a signature from parameter descriptors
    pub fn new<I, S>(parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }

    /// Parameter names: the part of each descriptor before the first `:`
    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters
            .iter()
            .filter_map(|p| p.split(':').next())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Whether no parameters are declared
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

/// Entity: a named, located unit of source code
///
/// ## Example
///
/// ```rust
/// use align_domain::entities::{CodeEntity, EntityKind, Signature};
///
/// let entity = CodeEntity::new("e1", EntityKind::Function, "getUser", "src/users.py", "python")
///     .with_signature(Signature::new(["user_id: int"]));
/// assert!(entity.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeEntity {
    /// Identifier, unique and stable across a scan
    pub id: String,
    /// Owning project, when the scanner provides it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Entity kind
    pub kind: EntityKind,
    /// Entity name as written in source
    pub name: String,
    /// Source-tree-relative path
    pub path: String,
    /// Source language
    #[serde(default)]
    pub lang: String,
    /// Declared parameters (callables only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<Signature>,
    /// Pre-computed embedding vector
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
    /// Scanner metadata, carried but not interpreted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl CodeEntity {
    /// Create an entity without signature, embedding or metadata
    pub fn new(
        id: impl Into<String>,
        kind: EntityKind,
        name: impl Into<String>,
        path: impl Into<String>,
        lang: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            project_id: None,
            kind,
            name: name.into(),
            path: path.into(),
            lang: lang.into(),
            signature: None,
            embedding: None,
            metadata: None,
        }
    }

    /// Attach a parameter signature
    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = Some(signature);
        self
    }

    /// Attach a pre-computed embedding
    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// Parameter names when the entity is callable and declares parameters
    pub fn parameter_names(&self) -> Option<Vec<&str>> {
        match (&self.kind, &self.signature) {
            (EntityKind::Function | EntityKind::Method, Some(signature)) => {
                let names = signature.parameter_names();
                (!names.is_empty()).then_some(names)
            }
            _ => None,
        }
    }

    /// Check that the fields the scorers depend on are present
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::invalid_argument("code entity has an empty id"));
        }
        if self.name.trim().is_empty() {
            return Err(Error::invalid_argument(format!(
                "code entity '{}' has an empty name",
                self.id
            )));
        }
        if self.path.trim().is_empty() {
            return Err(Error::invalid_argument(format!(
                "code entity '{}' has an empty path",
                self.id
            )));
        }
        Ok(())
    }

    /// Text representation submitted to the embedding provider
    pub fn embedding_text(&self) -> String {
        let mut parts = vec![
            format!("Name: {}", self.name),
            format!("Type: {}", self.kind),
            format!("Language: {}", self.lang),
            format!("Path: {}", self.path),
        ];

        if let Some(signature) = self.signature.as_ref().filter(|s| !s.is_empty()) {
            parts.push(format!("Parameters: {}", signature.parameters.join(", ")));
        }

        parts.join(". ")
    }
}
