use corpus_symbols::is_identifier;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Run-scoped accumulator of symbol occurrence counts and originating files.
///
/// Used for reporting only; never consulted for retrieval correctness.
/// Explicit state: callers thread it through by mutable reference instead of
/// relying on an ambient singleton.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComponentRegistry {
    counts: BTreeMap<String, usize>,
    files: BTreeMap<String, BTreeSet<String>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a symbol in a file.
    ///
    /// Only non-empty identifier-shaped names are accepted; anything else
    /// (including stray truthy/falsy front-matter values rendered as text)
    /// is dropped. Returns whether the name was recorded.
    pub fn record(&mut self, name: &str, relpath: &str) -> bool {
        if name.is_empty() || !is_identifier(name) {
            log::debug!("dropping non-identifier component name {name:?}");
            return false;
        }
        *self.counts.entry(name.to_string()).or_insert(0) += 1;
        self.files
            .entry(name.to_string())
            .or_default()
            .insert(relpath.to_string());
        true
    }

    /// Occurrence count for one name
    pub fn count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Files a name was seen in
    pub fn files_for(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.files.get(name)
    }

    /// Number of distinct names recorded
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Top names by occurrence count (ties broken by name)
    pub fn top(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(limit);
        entries
    }
}
