use corpus_chunker::DocKind;
use serde::Serialize;
use std::collections::BTreeMap;

/// Documentation-specific counters
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocsStats {
    pub pages: usize,
    pub sections: usize,
    pub titled_pages: usize,
}

impl DocsStats {
    pub fn add_page(&mut self, titled: bool) {
        self.pages += 1;
        self.sections += 1;
        if titled {
            self.titled_pages += 1;
        }
    }
}

/// Statistics about one ingestion run
#[derive(Debug, Clone, Default, Serialize)]
pub struct IngestReport {
    /// Files that reached the document builder
    pub files_included: usize,

    /// Files dropped by discovery filters
    pub files_skipped: usize,

    /// Documents built (pre-chunk)
    pub documents: usize,

    /// Segments produced
    pub chunks: usize,

    /// Segments per origin kind
    pub chunks_by_kind: BTreeMap<String, usize>,

    pub docs_stats: DocsStats,

    /// Per-project failures (example summarization); run policy is the
    /// caller's decision
    pub errors: Vec<String>,
}

impl IngestReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root(&mut self, included: usize, skipped: usize) {
        self.files_included += included;
        self.files_skipped += skipped;
    }

    pub fn add_chunks(&mut self, kind: DocKind, count: usize) {
        self.chunks += count;
        *self
            .chunks_by_kind
            .entry(kind.as_str().to_string())
            .or_insert(0) += count;
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_counts() {
        let mut report = IngestReport::new();
        report.add_root(10, 3);
        report.add_root(5, 0);
        report.add_chunks(DocKind::Code, 7);
        report.add_chunks(DocKind::Docs, 2);
        report.add_chunks(DocKind::Code, 1);
        report.docs_stats.add_page(true);
        report.docs_stats.add_page(false);

        assert_eq!(report.files_included, 15);
        assert_eq!(report.files_skipped, 3);
        assert_eq!(report.chunks, 10);
        assert_eq!(report.chunks_by_kind.get("code"), Some(&8));
        assert_eq!(report.docs_stats.pages, 2);
        assert_eq!(report.docs_stats.titled_pages, 1);
    }
}
