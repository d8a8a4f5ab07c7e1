use thiserror::Error;

/// Result type for symbol extraction internals
pub type Result<T> = std::result::Result<T, SymbolError>;

/// Errors produced by the structural extraction pass.
///
/// These never escape [`crate::extract`]; they exist so the fallback to
/// textual extraction is a visible branch rather than a swallowed panic.
#[derive(Error, Debug)]
pub enum SymbolError {
    /// Failed to parse the source text
    #[error("Parse error: {0}")]
    Parse(String),

    /// Language has no structural grammar
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Tree-sitter refused the grammar
    #[error("Tree-sitter error: {0}")]
    Grammar(String),
}

impl SymbolError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an unsupported language error
    pub fn unsupported_language(lang: impl Into<String>) -> Self {
        Self::UnsupportedLanguage(lang.into())
    }

    /// Create a tree-sitter error
    pub fn grammar(msg: impl Into<String>) -> Self {
        Self::Grammar(msg.into())
    }
}
