use crate::document::{DocKind, DocMeta};
use crate::error::{ChunkError, Result};
use serde::{Deserialize, Serialize};

/// A (target size, overlap) pair governing how a document is split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkProfile {
    /// Soft target in characters per chunk
    pub target_chars: usize,

    /// Characters carried over between adjacent chunks
    pub overlap_chars: usize,
}

impl ChunkProfile {
    pub const fn new(target_chars: usize, overlap_chars: usize) -> Self {
        Self {
            target_chars,
            overlap_chars,
        }
    }

    /// Enforce `0 <= overlap < target`
    pub fn validate(&self) -> Result<()> {
        if self.target_chars == 0 || self.overlap_chars >= self.target_chars {
            return Err(ChunkError::invalid_profile(
                self.target_chars,
                self.overlap_chars,
            ));
        }
        Ok(())
    }
}

/// What the selector decided for one document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitDecision {
    /// Emit the document unchanged as a single chunk
    Atomic,

    /// Split with the given profile
    Split(ChunkProfile),
}

/// The per-content-kind splitting profiles, evaluated in a fixed order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkProfiles {
    /// Fallback profile for anything not matched below
    pub default: ChunkProfile,

    /// Larger window for typed sources, so interfaces stay whole
    pub typed_source: ChunkProfile,

    /// Larger window for documentation, so worked examples stay intact
    pub docs: ChunkProfile,

    /// Largest window for example projects
    pub example: ChunkProfile,

    /// Relpath name patterns (substring match) emitted without splitting,
    /// preserving complete type/interface definitions
    pub atomic_patterns: Vec<String>,
}

impl Default for ChunkProfiles {
    fn default() -> Self {
        Self {
            default: ChunkProfile::new(4000, 400),
            typed_source: ChunkProfile::new(6000, 600),
            docs: ChunkProfile::new(8000, 800),
            example: ChunkProfile::new(10_000, 1000),
            atomic_patterns: vec!["Props.ts".to_string(), "Props.tsx".to_string()],
        }
    }
}

impl ChunkProfiles {
    /// Validate every profile
    pub fn validate(&self) -> Result<()> {
        self.default.validate()?;
        self.typed_source.validate()?;
        self.docs.validate()?;
        self.example.validate()?;
        Ok(())
    }

    /// Choose the splitting policy for one document. Deterministic ordered
    /// evaluation, first match wins.
    pub fn select(&self, meta: &DocMeta) -> SplitDecision {
        if self
            .atomic_patterns
            .iter()
            .any(|pattern| meta.relpath.contains(pattern.as_str()))
        {
            return SplitDecision::Atomic;
        }

        match meta.kind() {
            DocKind::Example => return SplitDecision::Split(self.example),
            DocKind::Docs => return SplitDecision::Split(self.docs),
            DocKind::Code => {}
        }

        match meta.ext.as_str() {
            ".md" | ".mdx" => SplitDecision::Split(self.docs),
            ".ts" | ".tsx" => SplitDecision::Split(self.typed_source),
            _ => SplitDecision::Split(self.default),
        }
    }
}
