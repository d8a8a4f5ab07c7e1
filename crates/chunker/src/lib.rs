//! # Corpus Chunker
//!
//! Document model and line-accurate splitting for citation-addressable
//! retrieval segments.
//!
//! A [`Document`] is one source file's content plus typed metadata tying it
//! back to its origin (`relpath`, `ext`, kind-specific detail). The
//! [`LineAwareSplitter`] explodes a document into size-bounded chunks that
//! carry exact 1-based line ranges of the original file, so every chunk can
//! be cited as `relpath:start_line-end_line`. [`ChunkProfiles`] picks the
//! window/overlap pair (or no splitting at all) per document kind,
//! extension and path.

mod document;
mod error;
mod profile;
mod splitter;

pub use document::{
    CodeMeta, DocDetail, DocKind, DocMeta, Document, DocsMeta, ExampleMeta, FieldValue, FileType,
    LineRange,
};
pub use error::{ChunkError, Result};
pub use profile::{ChunkProfile, ChunkProfiles, SplitDecision};
pub use splitter::{chunk_document, LineAwareSplitter};
