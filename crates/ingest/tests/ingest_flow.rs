use corpus_chunker::{DocKind, FieldValue};
use corpus_ingest::{
    run, ComponentRegistry, ExampleSummarizer, IngestConfig, SegmentBatch, SourceRoot,
    SummaryRequest,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

struct FakeSummarizer;

impl ExampleSummarizer for FakeSummarizer {
    fn summarize(&self, request: &SummaryRequest) -> Result<String, String> {
        if request.project_name == "broken" {
            return Err("model unavailable".to_string());
        }
        Ok(r#"{
            "description": "A console demo",
            "framework": "react",
            "build_tool": "vite",
            "complexity": 2,
            "example_type": "console",
            "key_features": ["audio", "transcripts"]
        }"#
        .to_string())
    }
}

fn touch(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn seed_tree(root: &Path) {
    // Code root
    touch(
        &root.join("src/Button.tsx"),
        "export const Button = () => null;\nexport interface ButtonProps { label: string }\n",
    );
    touch(&root.join("src/theme.css"), ":root { --primary-color: #333; }\n.btn-large {}\n");
    touch(
        &root.join("src/ButtonProps.tsx"),
        "export interface ButtonProps { label: string; size: number }\n",
    );
    touch(&root.join("src/notes.md"), "# Internal notes\n");

    // Docs root (site convention: pages under content/)
    touch(
        &root.join("docs/content/button.mdx"),
        "---\ntitle: Button\ndescription: Press it\ncomponent: Button\n---\n\nUse the button.\n",
    );
    touch(&root.join("docs/content/intro.md"), "Just prose, no front matter.\n");

    // Examples root: one healthy project, one that fails summarization
    touch(&root.join("examples/console/package.json"), "{\"name\": \"console\"}");
    touch(&root.join("examples/console/README.md"), "# Console\n");
    touch(
        &root.join("examples/console/src/App.tsx"),
        "export const App = () => null;\n",
    );
    touch(&root.join("examples/broken/package.json"), "{\"name\": \"broken\"}");
}

#[test]
fn full_ingest_produces_chunks_registry_and_report() {
    let temp = TempDir::new().unwrap();
    seed_tree(temp.path());

    let config = IngestConfig::default();
    let roots = [
        SourceRoot::code(temp.path().join("src")),
        SourceRoot::docs(temp.path().join("docs")),
        SourceRoot::examples(temp.path().join("examples")),
    ];
    let mut registry = ComponentRegistry::new();

    let outcome = run(&config, &roots, &FakeSummarizer, &mut registry).unwrap();

    // The markdown file under the code root is discovered but skipped by the
    // code builder; docs pages and example files all became documents.
    assert_eq!(outcome.report.docs_stats.pages, 2);
    assert_eq!(outcome.report.docs_stats.titled_pages, 1);
    assert!(outcome.report.documents >= 7);
    assert_eq!(outcome.report.chunks, outcome.chunks.len());

    // The broken project is a recorded error, not a run failure
    assert_eq!(outcome.report.errors.len(), 1);
    assert!(outcome.report.errors[0].contains("broken"));

    // Registry collected the component from code and docs
    assert!(registry.count("Button") >= 2);
    assert!(registry.files_for("Button").unwrap().len() >= 2);

    // Small files chunk 1:1 and carry line stamps
    let button_chunk = outcome
        .chunks
        .iter()
        .find(|c| c.meta.relpath.ends_with("Button.tsx") && c.kind() == DocKind::Code)
        .unwrap();
    assert_eq!(button_chunk.meta.citation(), "Button.tsx:1-2");

    // Atomic props file came through as a single untouched chunk
    let props_chunks: Vec<_> = outcome
        .chunks
        .iter()
        .filter(|c| c.meta.relpath.ends_with("ButtonProps.tsx"))
        .collect();
    assert_eq!(props_chunks.len(), 1);
    assert_eq!(props_chunks[0].meta.lines, None);

    // Example chunks carry the shared project metadata
    let app_chunk = outcome
        .chunks
        .iter()
        .find(|c| c.meta.relpath.ends_with("App.tsx"))
        .unwrap();
    assert_eq!(app_chunk.kind(), DocKind::Example);
    let fields = app_chunk.meta.index_fields();
    assert_eq!(
        fields.get("framework"),
        Some(&FieldValue::Str("react".to_string()))
    );
    assert_eq!(fields.get("complexity"), Some(&FieldValue::Int(2)));
}

#[test]
fn segment_batch_round_trips_through_disk() {
    let temp = TempDir::new().unwrap();
    seed_tree(temp.path());

    let config = IngestConfig::default();
    let roots = [SourceRoot::code(temp.path().join("src"))];
    let mut registry = ComponentRegistry::new();
    let outcome = run(&config, &roots, &FakeSummarizer, &mut registry).unwrap();

    let batch = SegmentBatch::from_chunks(&outcome.chunks);
    let path = temp.path().join(".corpus/segments.json");
    batch.save(&path).unwrap();

    let loaded = SegmentBatch::load(&path).unwrap();
    assert_eq!(loaded.len(), outcome.chunks.len());
    assert!(loaded
        .segments()
        .iter()
        .all(|segment| segment.fields.contains_key("kind")));
}

#[test]
fn missing_roots_are_warnings_not_errors() {
    let temp = TempDir::new().unwrap();
    let config = IngestConfig::default();
    let roots = [
        SourceRoot::code(temp.path().join("no-src")),
        SourceRoot::examples(temp.path().join("no-examples")),
    ];
    let mut registry = ComponentRegistry::new();

    let outcome = run(&config, &roots, &FakeSummarizer, &mut registry).unwrap();
    assert!(outcome.chunks.is_empty());
    assert!(outcome.report.errors.is_empty());
}
