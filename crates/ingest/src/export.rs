use crate::error::{IngestError, Result};
use corpus_chunker::{Document, FieldValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const SEGMENT_BATCH_SCHEMA_VERSION: u32 = 1;

/// One segment as the external indexer consumes it: content plus the
/// flattened scalar metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSegment {
    pub content: String,
    pub fields: BTreeMap<String, FieldValue>,
}

/// The hand-off artifact between an ingestion run and the external index
#[derive(Debug, Clone, Default)]
pub struct SegmentBatch {
    segments: Vec<PersistedSegment>,
}

#[derive(Serialize, Deserialize)]
struct PersistedSegmentBatch {
    schema_version: u32,
    segments: Vec<PersistedSegment>,
}

impl SegmentBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten chunk documents into persistable segments
    pub fn from_chunks(chunks: &[Document]) -> Self {
        let segments = chunks
            .iter()
            .map(|chunk| PersistedSegment {
                content: chunk.content.clone(),
                fields: chunk.meta.index_fields(),
            })
            .collect();
        Self { segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PersistedSegment] {
        &self.segments
    }

    /// Write the batch atomically (tmp file + rename)
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let persisted = PersistedSegmentBatch {
            schema_version: SEGMENT_BATCH_SCHEMA_VERSION,
            segments: self.segments.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&persisted)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path.as_ref())?;
        let persisted: PersistedSegmentBatch = serde_json::from_slice(&bytes)?;
        if persisted.schema_version != SEGMENT_BATCH_SCHEMA_VERSION {
            return Err(IngestError::SchemaVersion {
                found: persisted.schema_version,
                expected: SEGMENT_BATCH_SCHEMA_VERSION,
            });
        }
        Ok(Self {
            segments: persisted.segments,
        })
    }
}
