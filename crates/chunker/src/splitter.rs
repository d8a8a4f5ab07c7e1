use crate::document::{DocMeta, Document, LineRange};
use crate::error::Result;
use crate::profile::{ChunkProfile, ChunkProfiles, SplitDecision};

/// Size-bounded splitter that preserves exact source line ranges.
///
/// The size bound is a soft target: a single line longer than the target is
/// still emitted whole, never truncated.
#[derive(Debug, Clone, Copy)]
pub struct LineAwareSplitter {
    chunk_chars: usize,
    chunk_overlap: usize,
}

impl LineAwareSplitter {
    /// Create a splitter; the profile contract `0 <= overlap < target` holds
    pub fn new(chunk_chars: usize, chunk_overlap: usize) -> Result<Self> {
        ChunkProfile::new(chunk_chars, chunk_overlap).validate()?;
        Ok(Self {
            chunk_chars,
            chunk_overlap,
        })
    }

    pub fn from_profile(profile: ChunkProfile) -> Result<Self> {
        Self::new(profile.target_chars, profile.overlap_chars)
    }

    /// Split one document into ordered, line-stamped chunks.
    ///
    /// Walks the content's lines keeping a running buffer; each line counts
    /// its length plus one newline. When appending a line would exceed the
    /// target and the buffer is non-empty, the buffer is closed as a chunk
    /// and the next buffer is seeded with a tail of lines whose cumulative
    /// length stays within the overlap budget. Empty input yields no chunks.
    pub fn split(&self, document: &Document) -> Vec<Document> {
        let lines: Vec<&str> = document.content.lines().collect();
        let mut chunks = Vec::new();

        let mut buffer: Vec<&str> = Vec::new();
        let mut buffered_chars = 0usize;
        let mut start_idx = 0usize;
        let mut i = 0usize;

        while i < lines.len() {
            let line = lines[i];
            let extra = line.len() + 1;

            if buffered_chars + extra > self.chunk_chars && !buffer.is_empty() {
                chunks.push(close_chunk(&document.meta, &buffer, start_idx));

                let mut carry = carry_tail(&buffer, self.chunk_overlap);
                // A carry spanning the whole closed buffer cannot make
                // forward progress (only possible around over-long lines);
                // drop it rather than loop.
                if carry.len() == buffer.len() {
                    carry.clear();
                }
                buffered_chars = carry.iter().map(|l| l.len() + 1).sum();
                start_idx = i - carry.len();
                buffer = carry;
            } else {
                buffer.push(line);
                buffered_chars += extra;
                i += 1;
            }
        }

        if !buffer.is_empty() {
            chunks.push(close_chunk(&document.meta, &buffer, start_idx));
        }

        chunks
    }
}

/// Close the buffered lines into a chunk document.
///
/// Line stamps are 1-based and inclusive; a line range already present on
/// the source metadata (e.g. from an upstream header splitter) wins over
/// the computed one.
fn close_chunk(source: &DocMeta, buffer: &[&str], start_idx: usize) -> Document {
    let content = buffer.join("\n").trim_end().to_string();
    let computed = LineRange::new(start_idx + 1, start_idx + buffer.len());

    let mut meta = source.clone();
    meta.lines = Some(source.lines.unwrap_or(computed));
    Document::new(content, meta)
}

/// Scan backward from the end of a closed buffer, accumulating lines while
/// the overlap budget lasts; the returned tail preserves source order.
fn carry_tail<'a>(buffer: &[&'a str], overlap: usize) -> Vec<&'a str> {
    let mut carry = Vec::new();
    let mut remaining = overlap as i64;

    for line in buffer.iter().rev() {
        if remaining <= 0 {
            break;
        }
        remaining -= line.len() as i64 + 1;
        carry.push(*line);
    }

    carry.reverse();
    carry
}

/// Apply the selector and splitter to one document: atomic documents pass
/// through unchanged as a single chunk, everything else is split with the
/// selected profile.
pub fn chunk_document(document: &Document, profiles: &ChunkProfiles) -> Result<Vec<Document>> {
    match profiles.select(&document.meta) {
        SplitDecision::Atomic => Ok(vec![document.clone()]),
        SplitDecision::Split(profile) => {
            let splitter = LineAwareSplitter::from_profile(profile)?;
            Ok(splitter.split(document))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{CodeMeta, DocDetail};
    use pretty_assertions::assert_eq;

    fn code_document(content: &str) -> Document {
        Document::new(
            content,
            DocMeta {
                relpath: "src/widget.ts".to_string(),
                ext: ".ts".to_string(),
                lines: None,
                detail: DocDetail::Code(CodeMeta::default()),
            },
        )
    }

    /// 300 lines of 29 visible chars each: 9000 chars counting newlines
    fn nine_thousand_chars() -> String {
        let line = "abcdefghijklmnopqrstuvwxyz012";
        let lines: Vec<&str> = std::iter::repeat(line).take(300).collect();
        lines.join("\n")
    }

    #[test]
    fn splits_into_three_chunks_with_bounded_overlap() {
        let document = code_document(&nine_thousand_chars());
        let splitter = LineAwareSplitter::new(4000, 400).unwrap();
        let chunks = splitter.split(&document);

        assert_eq!(chunks.len(), 3);
        for chunk in &chunks {
            // Soft bound: target plus at most one line
            assert!(chunk.content.len() <= 4000 + 30);
        }

        let first = chunks[0].meta.lines.unwrap();
        let second = chunks[1].meta.lines.unwrap();
        // Carry-over duplicates at most ~400 chars of trailing lines
        let carried = first.end.saturating_sub(second.start) + 1;
        assert!(carried * 30 <= 400 + 30);
    }

    #[test]
    fn line_ranges_slice_back_to_source() {
        let document = code_document(&nine_thousand_chars());
        let source_lines: Vec<&str> = document.content.lines().collect();
        let splitter = LineAwareSplitter::new(4000, 400).unwrap();

        for chunk in splitter.split(&document) {
            let range = chunk.meta.lines.unwrap();
            assert!(range.start >= 1);
            assert!(range.start <= range.end);
            assert!(range.end <= source_lines.len());

            let sliced = source_lines[range.start - 1..range.end].join("\n");
            assert_eq!(chunk.content, sliced.trim_end());
        }
    }

    #[test]
    fn chunks_cover_every_source_line() {
        let document = code_document(&nine_thousand_chars());
        let total_lines = document.content.lines().count();
        let splitter = LineAwareSplitter::new(4000, 400).unwrap();
        let chunks = splitter.split(&document);

        let mut covered = vec![false; total_lines];
        for chunk in &chunks {
            let range = chunk.meta.lines.unwrap();
            for line in range.start..=range.end {
                covered[line - 1] = true;
            }
        }
        assert!(covered.iter().all(|c| *c));
    }

    #[test]
    fn empty_input_produces_zero_chunks() {
        let document = code_document("");
        let splitter = LineAwareSplitter::new(4000, 400).unwrap();
        assert!(splitter.split(&document).is_empty());
    }

    #[test]
    fn short_input_is_a_single_chunk() {
        let document = code_document("const x = 1;\nconst y = 2;\n");
        let splitter = LineAwareSplitter::new(4000, 400).unwrap();
        let chunks = splitter.split(&document);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "const x = 1;\nconst y = 2;");
        assert_eq!(chunks[0].meta.lines, Some(LineRange::new(1, 2)));
    }

    #[test]
    fn overlong_line_is_emitted_whole() {
        let long_line = "x".repeat(5000);
        let content = format!("short\n{long_line}\ntail");
        let document = code_document(&content);
        let splitter = LineAwareSplitter::new(4000, 400).unwrap();
        let chunks = splitter.split(&document);

        assert!(chunks.iter().any(|c| c.content.contains(&long_line)));
        // Coverage still holds
        let last = chunks.last().unwrap().meta.lines.unwrap();
        assert_eq!(last.end, 3);
    }

    #[test]
    fn zero_overlap_seeds_nothing() {
        let document = code_document(&nine_thousand_chars());
        let splitter = LineAwareSplitter::new(4000, 0).unwrap();
        let chunks = splitter.split(&document);

        for window in chunks.windows(2) {
            let prev = window[0].meta.lines.unwrap();
            let next = window[1].meta.lines.unwrap();
            assert_eq!(next.start, prev.end + 1);
        }
    }

    #[test]
    fn preexisting_line_annotation_wins() {
        let mut document = code_document("a\nb\nc");
        document.meta.lines = Some(LineRange::new(50, 52));
        let splitter = LineAwareSplitter::new(4000, 400).unwrap();
        let chunks = splitter.split(&document);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].meta.lines, Some(LineRange::new(50, 52)));
    }

    #[test]
    fn trailing_whitespace_is_trimmed_per_chunk() {
        let document = code_document("const x = 1;   \n\n\n");
        let splitter = LineAwareSplitter::new(4000, 400).unwrap();
        let chunks = splitter.split(&document);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "const x = 1;");
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        assert!(LineAwareSplitter::new(4000, 4000).is_err());
        assert!(LineAwareSplitter::new(0, 0).is_err());
        assert!(LineAwareSplitter::new(4000, 0).is_ok());
    }

    #[test]
    fn atomic_documents_pass_through_unchanged() {
        let big = nine_thousand_chars();
        let mut document = code_document(&big);
        document.meta.relpath = "src/ButtonProps.tsx".to_string();
        document.meta.ext = ".tsx".to_string();

        let chunks = chunk_document(&document, &ChunkProfiles::default()).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], document);
    }

    #[test]
    fn chunk_document_uses_selected_profile() {
        let document = code_document(&nine_thousand_chars());
        let chunks = chunk_document(&document, &ChunkProfiles::default()).unwrap();
        // Typed-source profile (6000) needs only two chunks for 9000 chars
        assert_eq!(chunks.len(), 2);
    }
}
