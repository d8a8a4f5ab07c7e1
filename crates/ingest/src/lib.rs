//! # Corpus Ingest
//!
//! Turns a heterogeneous source tree into citation-addressable retrieval
//! segments.
//!
//! ```text
//! Roots (code / docs / examples)
//!     │
//!     ├──> File discovery (gitignore-aware, extension filters)
//!     │
//!     ├──> Document Builder (per kind)
//!     │    ├─> code:    symbol extraction + registry tagging
//!     │    ├─> docs:    front-matter title/description/component
//!     │    └─> example: project summary + per-file classification
//!     │
//!     ├──> Profile selection + line-aware chunking
//!     │
//!     └──> Segments → external index boundary (SegmentIndex / SegmentBatch)
//! ```
//!
//! Processing is strictly sequential; the [`ComponentRegistry`] is the only
//! state shared across files and is passed by mutable reference. Per-file
//! failures are logged and skipped; a failed example-project summary aborts
//! only that project.

mod builder;
mod config;
mod error;
mod examples;
mod export;
mod frontmatter;
mod index;
mod pipeline;
mod registry;
mod report;
mod sources;
mod walker;

pub use builder::{build_code_document, build_docs_document};
pub use config::IngestConfig;
pub use error::{IngestError, Result};
pub use examples::{process_example_project, ExampleSummarizer, ExampleSummary, SummaryRequest};
pub use export::{PersistedSegment, SegmentBatch, SEGMENT_BATCH_SCHEMA_VERSION};
pub use frontmatter::{parse_front_matter, FrontMatter};
pub use index::{Retriever, SearchOptions, SegmentIndex, DEFAULT_SEARCH_K};
pub use pipeline::{run, IngestOutcome, SourceRoot};
pub use registry::ComponentRegistry;
pub use report::{DocsStats, IngestReport};
pub use sources::format_sources;
pub use walker::{discover_files, WalkOutcome};
