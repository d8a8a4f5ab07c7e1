use crate::error::{Result, SymbolError};
use std::path::Path;

/// Source language as declared by a file's extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceLanguage {
    TypeScript,
    Tsx,
    JavaScript,
    Jsx,
    Css,
    Scss,
    Sass,
    Markdown,
    Mdx,
    Json,
    Html,
    Unknown,
}

impl SourceLanguage {
    /// Detect language from a file extension (with or without the leading dot)
    pub fn from_extension(ext: &str) -> Self {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "ts" => Self::TypeScript,
            "tsx" => Self::Tsx,
            "js" | "mjs" | "cjs" => Self::JavaScript,
            "jsx" => Self::Jsx,
            "css" => Self::Css,
            "scss" => Self::Scss,
            "sass" => Self::Sass,
            "md" => Self::Markdown,
            "mdx" => Self::Mdx,
            "json" => Self::Json,
            "html" => Self::Html,
            _ => Self::Unknown,
        }
    }

    /// Detect language from a file path
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::Unknown)
    }

    /// Get language name as string
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
            Self::JavaScript => "javascript",
            Self::Jsx => "jsx",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Sass => "sass",
            Self::Markdown => "markdown",
            Self::Mdx => "mdx",
            Self::Json => "json",
            Self::Html => "html",
            Self::Unknown => "unknown",
        }
    }

    /// Check if this is a JS/TS family member with a structural grammar
    pub fn is_scripted(self) -> bool {
        matches!(
            self,
            Self::TypeScript | Self::Tsx | Self::JavaScript | Self::Jsx
        )
    }

    /// Check if this is a stylesheet language
    pub fn is_stylesheet(self) -> bool {
        matches!(self, Self::Css | Self::Scss | Self::Sass)
    }

    /// Check if this is a documentation format
    pub fn is_documentation(self) -> bool {
        matches!(self, Self::Markdown | Self::Mdx)
    }

    /// Get the Tree-sitter grammar for this language
    pub fn grammar(self) -> Result<tree_sitter::Language> {
        match self {
            Self::TypeScript => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
            Self::Tsx => Ok(tree_sitter_typescript::LANGUAGE_TSX.into()),
            Self::JavaScript | Self::Jsx => Ok(tree_sitter_javascript::LANGUAGE.into()),
            _ => Err(SymbolError::unsupported_language(self.as_str())),
        }
    }
}
