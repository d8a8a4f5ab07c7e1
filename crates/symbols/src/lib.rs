//! # Corpus Symbols
//!
//! Exported-symbol extraction for retrieval tagging.
//!
//! Given file text and its language, [`extract`] returns the set of
//! exported/public names found in it. Extraction is layered:
//!
//! ```text
//! Source Text
//!     │
//!     ├──> JS/TS family? → Tree-sitter parse → structural export patterns
//!     │                       (falls through on parse failure or no hits)
//!     ├──> Stylesheet?   → custom properties / class selectors / layers
//!     │                       (kebab-case tokens normalized to PascalCase)
//!     └──> Textual fallback → export-statement regexes (PascalCase only)
//! ```
//!
//! The structural pass is precise but optional: it reports an explicit
//! [`StructuralOutcome`] instead of an error, so degraded input can never
//! fail the pipeline; the textual fallback always produces an answer
//! (possibly empty).

mod ast;
mod error;
mod extractor;
mod language;
mod stylesheet;
mod textual;

pub use ast::{extract_exports, StructuralOutcome};
pub use error::{Result, SymbolError};
pub use extractor::{extract, is_identifier};
pub use language::SourceLanguage;
pub use stylesheet::extract_tokens;
pub use textual::infer_exports;
