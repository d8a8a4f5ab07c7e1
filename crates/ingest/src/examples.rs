use crate::config::IngestConfig;
use crate::error::{IngestError, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use corpus_chunker::{DocDetail, DocMeta, Document, ExampleMeta, FileType};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Inputs handed to the summarization service for one example project
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub project_name: String,
    pub readme: String,
    pub manifest: String,
}

/// Boundary to the external chat-completion/summarization service.
///
/// Implementations return the raw response payload; schema validation
/// happens here, on this side of the boundary.
pub trait ExampleSummarizer {
    fn summarize(&self, request: &SummaryRequest) -> std::result::Result<String, String>;
}

/// Project-level metadata produced by the summarization service
#[derive(Debug, Clone, Deserialize)]
pub struct ExampleSummary {
    #[serde(default)]
    pub description: String,

    #[serde(default = "unknown")]
    pub framework: String,

    #[serde(default = "unknown")]
    pub build_tool: String,

    #[serde(default = "default_complexity")]
    pub complexity: u8,

    #[serde(default)]
    pub example_type: String,

    #[serde(default)]
    pub key_features: Vec<String>,
}

fn unknown() -> String {
    "unknown".to_string()
}

const fn default_complexity() -> u8 {
    1
}

impl ExampleSummary {
    /// Parse and validate a summarizer payload.
    ///
    /// An empty response, invalid JSON, or a complexity outside 1–5 is a
    /// schema violation and fails the project.
    pub fn from_payload(project: &str, payload: &str) -> Result<Self> {
        if payload.trim().is_empty() {
            return Err(IngestError::empty_summary(project));
        }

        let summary: Self = serde_json::from_str(payload.trim())
            .map_err(|e| IngestError::invalid_summary(project, payload, e.to_string()))?;

        if !(1..=5).contains(&summary.complexity) {
            return Err(IngestError::invalid_summary(
                project,
                payload,
                format!("complexity {} outside 1-5", summary.complexity),
            ));
        }

        Ok(summary)
    }
}

/// Process one example project directory into documents.
///
/// The summarization call is mandatory: any failure (nothing to summarize,
/// empty or invalid payload) is fatal for this project and produces no
/// partial document set. On success, one document per matched project file,
/// all carrying the shared project metadata.
pub fn process_example_project(
    project_dir: &Path,
    project_root: &Path,
    config: &IngestConfig,
    summarizer: &dyn ExampleSummarizer,
) -> Result<Vec<Document>> {
    let project_name = project_dir
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| project_dir.display().to_string());

    let readme = fs::read_to_string(project_dir.join("README.md")).unwrap_or_default();
    let manifest = fs::read_to_string(project_dir.join("package.json")).unwrap_or_default();
    if readme.trim().is_empty() && manifest.trim().is_empty() {
        return Err(IngestError::missing_manifest(&project_name));
    }

    log::info!("analyzing example {project_name} with summarizer");
    let request = SummaryRequest {
        project_name: project_name.clone(),
        readme,
        manifest,
    };
    let payload = summarizer
        .summarize(&request)
        .map_err(|reason| IngestError::summarizer(&project_name, reason))?;
    let summary = ExampleSummary::from_payload(&project_name, &payload)?;

    let matcher = project_globs(config)?;
    let mut documents = Vec::new();

    for entry in WalkDir::new(project_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("failed to read entry in {project_name}: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(project_dir) else {
            continue;
        };
        if has_hidden_component(relative) || !matcher.is_match(relative) {
            continue;
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("failed to read {}: {e}", path.display());
                continue;
            }
        };
        if content.trim().is_empty() {
            continue;
        }

        let filename = entry.file_name().to_string_lossy().to_string();
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_lowercase()))
            .unwrap_or_default();
        let file_type = classify_file(&filename, &ext);

        let relpath = path
            .strip_prefix(project_root)
            .unwrap_or(relative)
            .to_string_lossy()
            .to_string();

        documents.push(Document::new(
            content,
            DocMeta {
                relpath,
                ext,
                lines: None,
                detail: DocDetail::Example(ExampleMeta {
                    example_type: summary.example_type.clone(),
                    build_tool: summary.build_tool.clone(),
                    framework: summary.framework.clone(),
                    complexity: summary.complexity,
                    description: file_description(file_type, &summary),
                    key_features: summary.key_features.clone(),
                    file_type,
                    filename,
                }),
            },
        ));
    }

    log::info!(
        "processed example {project_name}: {} documents",
        documents.len()
    );
    Ok(documents)
}

/// The fixed glob set selecting project files worth indexing
fn project_globs(config: &IngestConfig) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    let mut add = |pattern: &str| -> Result<()> {
        // Literal separators keep a bare `*` within one directory; only the
        // explicit `src/**` patterns descend.
        builder.add(GlobBuilder::new(pattern).literal_separator(true).build()?);
        Ok(())
    };

    add("package.json")?;
    add("README.md")?;
    add("*.config.*")?;
    for ext in &config.include_exts {
        if ext == ".json" {
            continue; // package.json already covers the manifest
        }
        add(&format!("*{ext}"))?;
        add(&format!("src/**/*{ext}"))?;
    }

    Ok(builder.build()?)
}

fn has_hidden_component(path: &Path) -> bool {
    path.components().any(|component| {
        component
            .as_os_str()
            .to_string_lossy()
            .starts_with('.')
    })
}

/// Per-file classification within an example project
fn classify_file(filename: &str, ext: &str) -> FileType {
    if filename == "package.json" {
        return FileType::Dependencies;
    }
    match ext {
        ".ts" | ".tsx" | ".js" | ".jsx" => FileType::Implementation,
        ".css" | ".scss" | ".sass" => FileType::Stylesheet,
        ".md" | ".mdx" => FileType::Documentation,
        ".html" => FileType::Html,
        ".json" => FileType::Configuration,
        _ if filename.contains(".config.") => FileType::Configuration,
        _ => FileType::Other,
    }
}

fn file_description(file_type: FileType, summary: &ExampleSummary) -> String {
    let example_type = &summary.example_type;
    match file_type {
        FileType::Dependencies => format!("Dependencies and scripts for {example_type} example"),
        FileType::Implementation => format!("Implementation code for {example_type} example"),
        FileType::Stylesheet => format!("Styling and CSS for {example_type} example"),
        FileType::Documentation => format!("Documentation for {example_type} example"),
        FileType::Html => format!("HTML template for {example_type} example"),
        FileType::Configuration => format!("Build configuration for {example_type} example"),
        FileType::Other => summary.description.clone(),
    }
}
