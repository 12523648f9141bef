//! Provider-specific constants

// ============================================================================
// EMBEDDING CONSTANTS
// ============================================================================

/// OpenAI text-embedding-3-small dimensions
pub const EMBEDDING_DIMENSION_OPENAI_SMALL: usize = 1536;

/// OpenAI text-embedding-3-large dimensions
pub const EMBEDDING_DIMENSION_OPENAI_LARGE: usize = 3072;

/// OpenAI text-embedding-ada-002 dimensions
pub const EMBEDDING_DIMENSION_OPENAI_ADA: usize = 1536;

/// Ollama nomic-embed-text dimensions
pub const EMBEDDING_DIMENSION_OLLAMA_NOMIC: usize = 768;

/// Ollama all-minilm dimensions
pub const EMBEDDING_DIMENSION_OLLAMA_MINILM: usize = 384;

/// Ollama mxbai-embed-large dimensions
pub const EMBEDDING_DIMENSION_OLLAMA_MXBAI: usize = 1024;

/// Ollama default dimensions for unknown models
pub const EMBEDDING_DIMENSION_OLLAMA_DEFAULT: usize = 768;

/// Default OpenAI API base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default OpenAI embedding model
pub const OPENAI_DEFAULT_MODEL: &str = "text-embedding-3-small";

/// Default Ollama server URL
pub const OLLAMA_DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default Ollama embedding model
pub const OLLAMA_DEFAULT_MODEL: &str = "nomic-embed-text";

/// Model label of the hash provider
pub const HASH_PROVIDER_MODEL: &str = "sha256-hash";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default number of cached embedding vectors
pub const CACHE_DEFAULT_MAX_ENTRIES: u64 = 10_000;

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP request timeout in seconds (for embedding API calls)
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP request timeout error message prefix
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

// ============================================================================
// NATS CONSTANTS
// ============================================================================

/// Subject map requests arrive on
pub const NATS_DEFAULT_REQUEST_SUBJECT: &str = "align.map";

/// Subject results are published on when a request has no reply subject
pub const NATS_DEFAULT_RESULT_SUBJECT: &str = "align.map.result";

/// Queue group shared by all map workers
pub const NATS_DEFAULT_QUEUE_GROUP: &str = "map-workers";

/// Default NATS server URL
pub const NATS_DEFAULT_URL: &str = "nats://localhost:4222";
