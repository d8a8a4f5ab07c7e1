use thiserror::Error;

/// Result type for ingest operations
pub type Result<T> = std::result::Result<T, IngestError>;

/// Errors that can occur while building and chunking documents
#[derive(Error, Debug)]
pub enum IngestError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Example project has nothing to summarize
    #[error("Example project {project}: no README.md or package.json to summarize")]
    MissingManifest { project: String },

    /// Summarizer returned an empty response
    #[error("Example project {project}: summarizer returned an empty response")]
    EmptySummary { project: String },

    /// Summarizer payload violates the summary schema
    #[error("Example project {project}: invalid summary payload {payload:?}: {reason}")]
    InvalidSummary {
        project: String,
        payload: String,
        reason: String,
    },

    /// The summarization call itself failed
    #[error("Summarizer failed for {project}: {reason}")]
    Summarizer { project: String, reason: String },

    /// Chunk profile error
    #[error("Chunking error: {0}")]
    Chunk(#[from] corpus_chunker::ChunkError),

    /// Glob pattern error
    #[error("Pattern error: {0}")]
    Pattern(#[from] globset::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Persisted segment batch from an incompatible writer
    #[error("Unsupported segment batch schema_version {found} (expected {expected})")]
    SchemaVersion { found: u32, expected: u32 },

    /// Operation the backing index does not support
    #[error("Unsupported index operation: {0}")]
    Unsupported(String),
}

impl IngestError {
    /// Create a missing-manifest error
    pub fn missing_manifest(project: impl Into<String>) -> Self {
        Self::MissingManifest {
            project: project.into(),
        }
    }

    /// Create an empty-summary error
    pub fn empty_summary(project: impl Into<String>) -> Self {
        Self::EmptySummary {
            project: project.into(),
        }
    }

    /// Create an invalid-summary error carrying the offending payload
    pub fn invalid_summary(
        project: impl Into<String>,
        payload: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidSummary {
            project: project.into(),
            payload: payload.into(),
            reason: reason.into(),
        }
    }

    /// Create a summarizer failure error
    pub fn summarizer(project: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Summarizer {
            project: project.into(),
            reason: reason.into(),
        }
    }
}
