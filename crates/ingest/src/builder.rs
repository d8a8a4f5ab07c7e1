use crate::frontmatter::parse_front_matter;
use crate::registry::ComponentRegistry;
use corpus_chunker::{CodeMeta, DocDetail, DocMeta, Document, DocsMeta};
use corpus_symbols::{extract, SourceLanguage};

/// Build the document for one implementation file.
///
/// Documentation formats are skipped here (they belong to the docs builder);
/// every extracted symbol updates the registry. The content is the full
/// file, not pre-split.
pub fn build_code_document(
    text: &str,
    relpath: &str,
    ext: &str,
    registry: &mut ComponentRegistry,
) -> Option<Document> {
    let ext = ext.to_lowercase();
    let language = SourceLanguage::from_extension(&ext);
    if language.is_documentation() {
        return None;
    }

    // BTreeSet iteration keeps the component list sorted
    let components: Vec<String> = extract(text, language).into_iter().collect();
    for name in &components {
        registry.record(name, relpath);
    }

    Some(Document::new(
        text,
        DocMeta {
            relpath: relpath.to_string(),
            ext,
            lines: None,
            detail: DocDetail::Code(CodeMeta { components }),
        },
    ))
}

/// Build the document for one documentation file.
///
/// `title`, `description` and `component` come from front matter only;
/// the subject of a page is declared, never guessed from body headings.
/// Header-level fields stay empty for a later header-aware splitting step.
pub fn build_docs_document(
    text: &str,
    relpath: &str,
    ext: &str,
    registry: &mut ComponentRegistry,
) -> Option<Document> {
    let ext = ext.to_lowercase();
    if !SourceLanguage::from_extension(&ext).is_documentation() {
        return None;
    }

    let fm = parse_front_matter(text);
    if let Some(component) = &fm.component {
        registry.record(component, relpath);
    }

    Some(Document::new(
        text,
        DocMeta {
            relpath: relpath.to_string(),
            ext,
            lines: None,
            detail: DocDetail::Docs(DocsMeta {
                title: fm.title.unwrap_or_default(),
                description: fm.description.unwrap_or_default(),
                component: fm.component,
                h1: String::new(),
                h2: String::new(),
                h3: String::new(),
            }),
        },
    ))
}
