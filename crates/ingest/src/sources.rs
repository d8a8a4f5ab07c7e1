use corpus_chunker::Document;

/// Format retrieved segments into the source block consumed by downstream
/// prompt assembly: one citation line per segment
/// (`relpath:start_line-end_line` plus the tag block), the content, and a
/// divider.
pub fn format_sources(chunks: &[Document]) -> String {
    let mut lines = Vec::new();
    for chunk in chunks {
        lines.push(format!(
            "- {} {}",
            chunk.meta.citation(),
            chunk.meta.tag_block()
        ));
        lines.push(format!("Content:\n{}", chunk.content));
        lines.push("-".repeat(80));
    }
    lines.join("\n")
}
