use crate::config::IngestConfig;
use corpus_chunker::DocKind;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Result of discovering files under one root
#[derive(Debug, Default)]
pub struct WalkOutcome {
    pub included: Vec<PathBuf>,
    pub skipped: usize,
}

/// Find the files under a root that should reach the document builder.
///
/// Gitignore-aware (`.gitignore`, global excludes) and hidden-file-free via
/// the walker itself; on top of that the configured directory, extension and
/// filename-fragment filters apply. Nested `package.json` manifests are
/// dropped; only the root-level one survives.
pub fn discover_files(root: &Path, config: &IngestConfig, kind: DocKind) -> WalkOutcome {
    let mut outcome = WalkOutcome::default();

    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(true)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true);
    {
        let root = root.to_path_buf();
        let config = config.clone();
        builder.filter_entry(move |entry| !is_excluded_scope(entry.path(), &root, &config, kind));
    }

    for result in builder.build() {
        match result {
            Ok(entry) => {
                let Some(file_type) = entry.file_type() else {
                    continue;
                };
                if !file_type.is_file() {
                    continue;
                }

                let path = entry.path();
                if keep_file(path, root, config) {
                    outcome.included.push(path.to_path_buf());
                } else {
                    outcome.skipped += 1;
                }
            }
            Err(e) => {
                log::warn!("failed to read entry: {e}");
                outcome.skipped += 1;
            }
        }
    }

    // Walk order is platform-dependent; keep output deterministic
    outcome.included.sort();
    outcome
}

fn keep_file(path: &Path, root: &Path, config: &IngestConfig) -> bool {
    let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };

    if config.name_excluded(file_name) {
        return false;
    }

    // Keep only the root-level manifest; deeper ones are noise
    if file_name == "package.json" && path.parent() != Some(root) {
        return false;
    }

    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default();
    config.ext_included(&ext)
}

fn is_excluded_scope(path: &Path, root: &Path, config: &IngestConfig, kind: DocKind) -> bool {
    if let Ok(relative) = path.strip_prefix(root) {
        for component in relative.components() {
            if let std::path::Component::Normal(name) = component {
                if config.dir_excluded(&name.to_string_lossy(), kind) {
                    return true;
                }
            }
        }
    }
    false
}
