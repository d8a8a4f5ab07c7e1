use corpus_chunker::DocKind;
use corpus_ingest::{ComponentRegistry, IngestOutcome};
use std::collections::BTreeMap;

const TOP_COMPONENT_COUNT: usize = 15;

/// Print the dry-run summary: files, per-file chunk counts, docs stats,
/// detected components and chunk-size statistics.
pub fn print_summary(outcome: &IngestOutcome, registry: &ComponentRegistry) {
    let report = &outcome.report;

    println!("{}", "=".repeat(80));
    println!("DRY RUN DOCUMENT SUMMARY");
    println!("{}", "=".repeat(80));

    let mut per_file: BTreeMap<&str, (DocKind, usize)> = BTreeMap::new();
    for chunk in &outcome.chunks {
        let entry = per_file
            .entry(chunk.meta.relpath.as_str())
            .or_insert((chunk.kind(), 0));
        entry.1 += 1;
    }

    println!("\nFILES PROCESSED ({} files):", per_file.len());
    println!("{}", "-".repeat(40));
    for (relpath, (kind, chunks)) in &per_file {
        println!("  {relpath} ({}) - {chunks} chunks", kind.as_str());
    }

    if report.docs_stats.pages > 0 {
        println!("\nDOCS STATS:");
        println!("{}", "-".repeat(40));
        println!("  Pages: {}", report.docs_stats.pages);
        println!("  Sections: {}", report.docs_stats.sections);
        println!("  Titled pages: {}", report.docs_stats.titled_pages);
    }

    println!("\nCOMPONENT DETECTION:");
    println!("{}", "-".repeat(40));
    for (name, count) in registry.top(TOP_COMPONENT_COUNT) {
        let files = registry
            .files_for(name)
            .map(|files| {
                files
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_else(|| "unknown".to_string());
        println!("  {name} ({count} occurrences) - files: {files}");
    }

    println!("\nCHUNK STATISTICS:");
    println!("{}", "-".repeat(40));
    println!("  Total chunks: {}", outcome.chunks.len());
    for (kind, count) in &report.chunks_by_kind {
        println!("  {kind}: {count}");
    }

    let sizes: Vec<usize> = outcome.chunks.iter().map(|c| c.content.len()).collect();
    if !sizes.is_empty() {
        let total: usize = sizes.iter().sum();
        let min = sizes.iter().min().copied().unwrap_or(0);
        let max = sizes.iter().max().copied().unwrap_or(0);
        println!("  Average chunk size: {} chars", total / sizes.len());
        println!("  Chunk size range: {min} - {max} chars");
    }

    if !report.errors.is_empty() {
        println!("\nERRORS ({}):", report.errors.len());
        println!("{}", "-".repeat(40));
        for error in &report.errors {
            println!("  {error}");
        }
    }

    println!("{}", "=".repeat(80));
}
