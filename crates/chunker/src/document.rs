use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Origin category of a document; fixed at creation, never mutated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    Code,
    Docs,
    Example,
}

impl DocKind {
    /// Get human-readable name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Docs => "docs",
            Self::Example => "example",
        }
    }
}

/// 1-based inclusive line range within the original file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of lines covered by this range
    pub const fn line_count(&self) -> usize {
        self.end.saturating_sub(self.start) + 1
    }
}

/// One normalized document: content plus citation metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    pub meta: DocMeta,
}

impl Document {
    pub fn new(content: impl Into<String>, meta: DocMeta) -> Self {
        Self {
            content: content.into(),
            meta,
        }
    }

    /// Origin category
    pub fn kind(&self) -> DocKind {
        self.meta.kind()
    }
}

/// Metadata shared by every document, with kind-specific detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMeta {
    /// Path relative to its processing root; stable identity for citation
    pub relpath: String,

    /// Lowercase file extension including the leading dot
    pub ext: String,

    /// Line range in the original file; set by the chunker, not the builder
    pub lines: Option<LineRange>,

    /// Kind-specific descriptive fields
    pub detail: DocDetail,
}

/// Kind-specific metadata, dispatched as a closed set of variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DocDetail {
    Code(CodeMeta),
    Docs(DocsMeta),
    Example(ExampleMeta),
}

/// Metadata for implementation files
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CodeMeta {
    /// All extracted symbol names, sorted; the first is the primary component
    pub components: Vec<String>,
}

/// Metadata for documentation files
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocsMeta {
    pub title: String,
    pub description: String,

    /// Declared in front matter only; never inferred from body headings
    pub component: Option<String>,

    // Reserved slots for a later header-aware splitting step
    pub h1: String,
    pub h2: String,
    pub h3: String,
}

/// Metadata shared by every file of one example project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleMeta {
    pub example_type: String,
    pub build_tool: String,
    pub framework: String,

    /// 1 (simple) to 5 (advanced)
    pub complexity: u8,

    pub description: String,
    pub key_features: Vec<String>,
    pub file_type: FileType,
    pub filename: String,
}

/// Per-file classification within an example project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Dependencies,
    Implementation,
    Stylesheet,
    Documentation,
    Html,
    Configuration,
    Other,
}

impl FileType {
    /// Get human-readable name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies",
            Self::Implementation => "implementation",
            Self::Stylesheet => "stylesheet",
            Self::Documentation => "documentation",
            Self::Html => "html",
            Self::Configuration => "configuration",
            Self::Other => "other",
        }
    }
}

/// Scalar value accepted by the external index for metadata filtering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Str(String),
    Int(i64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
        }
    }
}

impl DocMeta {
    pub fn kind(&self) -> DocKind {
        match self.detail {
            DocDetail::Code(_) => DocKind::Code,
            DocDetail::Docs(_) => DocKind::Docs,
            DocDetail::Example(_) => DocKind::Example,
        }
    }

    /// Primary symbol name associated with this content, if any
    pub fn primary_component(&self) -> Option<&str> {
        match &self.detail {
            DocDetail::Code(code) => code.components.first().map(String::as_str),
            DocDetail::Docs(docs) => docs.component.as_deref(),
            DocDetail::Example(_) => None,
        }
    }

    /// Render the citation string: `relpath:start_line-end_line`
    pub fn citation(&self) -> String {
        match self.lines {
            Some(range) => format!("{}:{}-{}", self.relpath, range.start, range.end),
            None => format!("{}:?-?", self.relpath),
        }
    }

    /// Render the tag block appended to a citation, e.g.
    /// `[code, .tsx, component=Button]`
    pub fn tag_block(&self) -> String {
        let mut parts = vec![self.kind().as_str().to_string()];
        if !self.ext.is_empty() {
            parts.push(self.ext.clone());
        }

        match &self.detail {
            DocDetail::Code(code) => {
                if let Some(primary) = code.components.first() {
                    parts.push(format!("component={primary}"));
                }
            }
            DocDetail::Docs(docs) => {
                if let Some(component) = &docs.component {
                    parts.push(format!("component={component}"));
                }
            }
            DocDetail::Example(example) => {
                parts.push("component=none".to_string());
                if !example.example_type.is_empty() {
                    parts.push(format!("example={}", example.example_type));
                }
                if !example.build_tool.is_empty() {
                    parts.push(format!("build={}", example.build_tool));
                }
                if !example.framework.is_empty() {
                    parts.push(format!("framework={}", example.framework));
                }
                parts.push(format!("complexity={}", example.complexity));
                parts.push(format!("file_type={}", example.file_type.as_str()));
                if !example.key_features.is_empty() {
                    let features: Vec<&str> = example
                        .key_features
                        .iter()
                        .take(3)
                        .map(String::as_str)
                        .collect();
                    parts.push(format!("features={}", features.join(",")));
                }
            }
        }

        format!("[{}]", parts.join(", "))
    }

    /// Flatten to the scalar mapping the external index accepts.
    ///
    /// List-valued fields are comma-joined here and only here; internal
    /// logic always works on the typed representation.
    pub fn index_fields(&self) -> BTreeMap<String, FieldValue> {
        let mut fields = BTreeMap::new();
        fields.insert("kind".into(), FieldValue::Str(self.kind().as_str().into()));
        fields.insert("relpath".into(), FieldValue::Str(self.relpath.clone()));
        fields.insert("ext".into(), FieldValue::Str(self.ext.clone()));

        if let Some(range) = self.lines {
            fields.insert("start_line".into(), FieldValue::Int(range.start as i64));
            fields.insert("end_line".into(), FieldValue::Int(range.end as i64));
        }

        match &self.detail {
            DocDetail::Code(code) => {
                if let Some(primary) = code.components.first() {
                    fields.insert("component".into(), FieldValue::Str(primary.clone()));
                }
                // Always present so metadata filters never miss the key
                fields.insert(
                    "components".into(),
                    FieldValue::Str(code.components.join(", ")),
                );
            }
            DocDetail::Docs(docs) => {
                fields.insert("title".into(), FieldValue::Str(docs.title.clone()));
                fields.insert(
                    "description".into(),
                    FieldValue::Str(docs.description.clone()),
                );
                fields.insert("h1".into(), FieldValue::Str(docs.h1.clone()));
                fields.insert("h2".into(), FieldValue::Str(docs.h2.clone()));
                fields.insert("h3".into(), FieldValue::Str(docs.h3.clone()));
                if let Some(component) = &docs.component {
                    fields.insert("component".into(), FieldValue::Str(component.clone()));
                }
                fields.insert(
                    "components".into(),
                    FieldValue::Str(docs.component.clone().unwrap_or_default()),
                );
            }
            DocDetail::Example(example) => {
                fields.insert("component".into(), FieldValue::Str("none".into()));
                fields.insert(
                    "example_type".into(),
                    FieldValue::Str(example.example_type.clone()),
                );
                fields.insert(
                    "build_tool".into(),
                    FieldValue::Str(example.build_tool.clone()),
                );
                fields.insert(
                    "framework".into(),
                    FieldValue::Str(example.framework.clone()),
                );
                fields.insert(
                    "complexity".into(),
                    FieldValue::Int(i64::from(example.complexity)),
                );
                fields.insert(
                    "description".into(),
                    FieldValue::Str(example.description.clone()),
                );
                fields.insert(
                    "key_features".into(),
                    FieldValue::Str(example.key_features.join(", ")),
                );
                fields.insert(
                    "file_type".into(),
                    FieldValue::Str(example.file_type.as_str().into()),
                );
                fields.insert("filename".into(), FieldValue::Str(example.filename.clone()));
            }
        }

        fields
    }
}
