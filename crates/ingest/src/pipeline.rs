use crate::builder::{build_code_document, build_docs_document};
use crate::config::IngestConfig;
use crate::error::Result;
use crate::examples::{process_example_project, ExampleSummarizer};
use crate::registry::ComponentRegistry;
use crate::report::IngestReport;
use crate::walker::discover_files;
use corpus_chunker::{chunk_document, DocDetail, DocKind, Document};
use std::fs;
use std::path::{Path, PathBuf};

/// One processing root and the kind of documents it yields
#[derive(Debug, Clone)]
pub struct SourceRoot {
    pub path: PathBuf,
    pub kind: DocKind,
}

impl SourceRoot {
    pub fn code(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: DocKind::Code,
        }
    }

    pub fn docs(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: DocKind::Docs,
        }
    }

    pub fn examples(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: DocKind::Example,
        }
    }
}

/// Everything one ingestion run produced
#[derive(Debug)]
pub struct IngestOutcome {
    /// The final segment set, ready for the external index
    pub chunks: Vec<Document>,

    pub report: IngestReport,
}

/// Run one ingestion pass over the given roots.
///
/// Strictly sequential: each file is read, extracted and chunked to
/// completion before the next. The registry is the only state shared across
/// files. Per-file errors are logged and skipped; a failed example project
/// is recorded in the report and the remaining roots continue.
pub fn run(
    config: &IngestConfig,
    roots: &[SourceRoot],
    summarizer: &dyn ExampleSummarizer,
    registry: &mut ComponentRegistry,
) -> Result<IngestOutcome> {
    config.validate()?;

    let mut documents = Vec::new();
    let mut report = IngestReport::new();

    for root in roots {
        match root.kind {
            DocKind::Example => {
                ingest_examples_root(root, config, summarizer, &mut documents, &mut report);
            }
            DocKind::Code | DocKind::Docs => {
                ingest_files_root(root, config, registry, &mut documents, &mut report);
            }
        }
    }

    report.documents = documents.len();
    log::info!("total source documents (pre-chunk): {}", documents.len());

    let mut chunks = Vec::new();
    for document in &documents {
        let exploded = chunk_document(document, &config.profiles)?;
        report.add_chunks(document.kind(), exploded.len());
        chunks.extend(exploded);
    }
    log::info!("chunked into {} segments", chunks.len());

    Ok(IngestOutcome { chunks, report })
}

fn ingest_files_root(
    root: &SourceRoot,
    config: &IngestConfig,
    registry: &mut ComponentRegistry,
    documents: &mut Vec<Document>,
    report: &mut IngestReport,
) {
    let kind = root.kind;
    if !root.path.exists() {
        log::warn!("[{}] root not found: {}", kind.as_str(), root.path.display());
        return;
    }

    // Docs sites conventionally keep pages under content/
    let base = if kind == DocKind::Docs && root.path.join("content").is_dir() {
        root.path.join("content")
    } else {
        root.path.clone()
    };

    let outcome = discover_files(&base, config, kind);
    log::info!(
        "[{}] {} -> files included: {}, skipped: {}",
        kind.as_str(),
        base.display(),
        outcome.included.len(),
        outcome.skipped
    );
    report.add_root(outcome.included.len(), outcome.skipped);

    for file in &outcome.included {
        if let Some(document) = ingest_file(file, &base, kind, registry) {
            if let DocDetail::Docs(docs) = &document.meta.detail {
                report.docs_stats.add_page(!docs.title.is_empty());
            }
            documents.push(document);
        }
    }
}

/// Build the document for one discovered file; any failure skips the file
/// without aborting the batch
fn ingest_file(
    file: &Path,
    base: &Path,
    kind: DocKind,
    registry: &mut ComponentRegistry,
) -> Option<Document> {
    let text = match fs::read_to_string(file) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("error processing {}: {e}", file.display());
            return None;
        }
    };

    let relpath = file
        .strip_prefix(base)
        .unwrap_or(file)
        .to_string_lossy()
        .to_string();
    let ext = file
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default();

    match kind {
        DocKind::Code => build_code_document(&text, &relpath, &ext, registry),
        DocKind::Docs => build_docs_document(&text, &relpath, &ext, registry),
        DocKind::Example => None,
    }
}

fn ingest_examples_root(
    root: &SourceRoot,
    config: &IngestConfig,
    summarizer: &dyn ExampleSummarizer,
    documents: &mut Vec<Document>,
    report: &mut IngestReport,
) {
    if !root.path.exists() {
        log::warn!("[example] root not found: {}", root.path.display());
        return;
    }

    let mut projects: Vec<PathBuf> = match fs::read_dir(&root.path) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_dir()
                    && path
                        .file_name()
                        .map(|name| !name.to_string_lossy().starts_with('.'))
                        .unwrap_or(false)
            })
            .collect(),
        Err(e) => {
            log::warn!("[example] cannot read {}: {e}", root.path.display());
            return;
        }
    };
    projects.sort();

    for project in projects {
        match process_example_project(&project, &root.path, config, summarizer) {
            Ok(project_documents) => {
                report.add_root(project_documents.len(), 0);
                documents.extend(project_documents);
            }
            Err(e) => {
                // Fatal for this project only; the run continues
                log::error!("{e}");
                report.add_error(e.to_string());
            }
        }
    }
}
