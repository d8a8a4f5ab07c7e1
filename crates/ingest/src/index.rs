use crate::error::Result;
use corpus_chunker::{Document, FieldValue};
use std::collections::BTreeMap;

/// Default number of segments returned by searches
pub const DEFAULT_SEARCH_K: usize = 20;

/// Options for constructing a retriever handle
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub k: usize,

    /// Scalar metadata filters (`kind`, `component`, `complexity`, …)
    pub filter: BTreeMap<String, FieldValue>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            k: DEFAULT_SEARCH_K,
            filter: BTreeMap::new(),
        }
    }
}

/// Queryable handle bound to one set of search options
pub trait Retriever {
    fn retrieve(&self, query: &str) -> Result<Vec<Document>>;
}

/// Boundary to the persisted vector index.
///
/// This pipeline only produces the `add_documents` input; embedding and
/// storage live entirely behind this trait.
pub trait SegmentIndex {
    /// Add chunked documents to the index
    fn add_documents(&mut self, chunks: &[Document]) -> Result<()>;

    /// Ranked similarity search
    fn similarity_search(&self, query: &str, k: usize) -> Result<Vec<Document>>;

    /// Build a queryable handle for the given options
    fn retriever(&self, options: SearchOptions) -> Box<dyn Retriever + '_>;

    /// Drop all indexed segments
    fn clear(&mut self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpus_chunker::{CodeMeta, DocDetail, DocMeta};

    /// Minimal in-memory double standing in for the external index
    #[derive(Default)]
    struct FakeIndex {
        segments: Vec<Document>,
    }

    struct FakeRetriever<'a> {
        index: &'a FakeIndex,
        options: SearchOptions,
    }

    impl SegmentIndex for FakeIndex {
        fn add_documents(&mut self, chunks: &[Document]) -> Result<()> {
            self.segments.extend_from_slice(chunks);
            Ok(())
        }

        fn similarity_search(&self, query: &str, k: usize) -> Result<Vec<Document>> {
            Ok(self
                .segments
                .iter()
                .filter(|d| d.content.contains(query))
                .take(k)
                .cloned()
                .collect())
        }

        fn retriever(&self, options: SearchOptions) -> Box<dyn Retriever + '_> {
            Box::new(FakeRetriever {
                index: self,
                options,
            })
        }

        fn clear(&mut self) -> Result<()> {
            self.segments.clear();
            Ok(())
        }
    }

    impl Retriever for FakeRetriever<'_> {
        fn retrieve(&self, query: &str) -> Result<Vec<Document>> {
            let matches = self
                .index
                .segments
                .iter()
                .filter(|d| d.content.contains(query))
                .filter(|d| {
                    let fields = d.meta.index_fields();
                    self.options
                        .filter
                        .iter()
                        .all(|(key, value)| fields.get(key) == Some(value))
                })
                .take(self.options.k)
                .cloned()
                .collect();
            Ok(matches)
        }
    }

    fn chunk(relpath: &str, content: &str) -> Document {
        Document::new(
            content,
            DocMeta {
                relpath: relpath.to_string(),
                ext: ".ts".to_string(),
                lines: None,
                detail: DocDetail::Code(CodeMeta::default()),
            },
        )
    }

    #[test]
    fn add_search_clear_round_trip() {
        let mut index = FakeIndex::default();
        index
            .add_documents(&[chunk("a.ts", "alpha beta"), chunk("b.ts", "gamma")])
            .unwrap();

        let hits = index.similarity_search("beta", 10).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].meta.relpath, "a.ts");

        index.clear().unwrap();
        assert!(index.similarity_search("beta", 10).unwrap().is_empty());
    }

    #[test]
    fn retriever_applies_metadata_filter() {
        let mut index = FakeIndex::default();
        index
            .add_documents(&[chunk("a.ts", "shared term"), chunk("b.ts", "shared term")])
            .unwrap();

        let mut options = SearchOptions::default();
        options.filter.insert(
            "relpath".to_string(),
            FieldValue::Str("b.ts".to_string()),
        );
        let retriever = index.retriever(options);

        let hits = retriever.retrieve("shared").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].meta.relpath, "b.ts");
    }
}
