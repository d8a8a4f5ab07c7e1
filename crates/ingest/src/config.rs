use crate::error::Result;
use corpus_chunker::{ChunkProfiles, DocKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Configuration for one ingestion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// File extensions to include (lowercase, with leading dot)
    pub include_exts: BTreeSet<String>,

    /// Directory names excluded from every root
    pub exclude_dirs: BTreeSet<String>,

    /// Filename fragments excluded everywhere (matched as substrings, so
    /// `.stories` also drops `Button.stories.tsx`)
    pub exclude_exts: BTreeSet<String>,

    /// Additional directory names excluded from code roots only
    pub source_exclude_dirs: BTreeSet<String>,

    /// Splitting profiles
    pub profiles: ChunkProfiles,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            include_exts: string_set(&[
                ".ts", ".tsx", ".js", ".jsx", ".css", ".scss", ".sass", ".md", ".mdx", ".json",
                ".html",
            ]),
            exclude_dirs: string_set(&[
                ".git",
                "node_modules",
                "dist",
                "build",
                ".next",
                "out",
                "__pycache__",
                ".turbo",
                ".cache",
            ]),
            exclude_exts: string_set(&[
                ".lock", ".log", ".png", ".jpg", ".jpeg", ".gif", ".svg", ".ico", ".map",
                ".stories",
            ]),
            source_exclude_dirs: string_set(&[
                "icons", "images", "assets", "fonts", "static", "public",
            ]),
            profiles: ChunkProfiles::default(),
        }
    }
}

impl IngestConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.profiles.validate()?;
        Ok(())
    }

    /// Check whether a directory name is excluded for the given root kind
    pub fn dir_excluded(&self, name: &str, kind: DocKind) -> bool {
        if self.exclude_dirs.contains(name) {
            return true;
        }
        kind == DocKind::Code && self.source_exclude_dirs.contains(name)
    }

    /// Check whether an extension is in the include set
    pub fn ext_included(&self, ext: &str) -> bool {
        self.include_exts.contains(ext)
    }

    /// Check whether a filename carries any excluded fragment
    pub fn name_excluded(&self, file_name: &str) -> bool {
        self.exclude_exts
            .iter()
            .any(|fragment| file_name.contains(fragment.as_str()))
    }
}

fn string_set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}
