use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Export-statement shapes recognized by the textual fallback
static EXPORT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // export function Component / export default class Component
        r"export\s+(?:default\s+)?(?:function|const|class)\s+([A-Z][A-Za-z0-9]*)\b",
        // export { Component }
        r"export\s+\{\s*([A-Z][A-Za-z0-9]*)\s*\}",
        // export { Component as Other }
        r"export\s+\{\s*([A-Z][A-Za-z0-9]*)\s+as\s+[A-Za-z0-9]+\s*\}",
        // export const Component =
        r"export\s+(?:default\s+)?(?:const|let|var)\s+([A-Z][A-Za-z0-9]*)\s*=",
        // export interface Component
        r"export\s+interface\s+([A-Z][A-Za-z0-9]*)\b",
        // export type Component
        r"export\s+type\s+([A-Z][A-Za-z0-9]*)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("export pattern is valid"))
    .collect()
});

static PASCAL_CASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").expect("pascal-case pattern is valid"));

/// Infer component names from export statements in raw text.
///
/// Only PascalCase captures are kept: a capitalized identifier is taken to
/// name a component or type, so lowercase exports (hooks, utilities) are
/// dropped here on purpose.
pub fn infer_exports(text: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();

    for pattern in EXPORT_PATTERNS.iter() {
        for capture in pattern.captures_iter(text) {
            let name = &capture[1];
            if PASCAL_CASE.is_match(name) {
                names.insert(name.to_string());
            }
        }
    }

    if !names.is_empty() {
        log::debug!("found {} exports via regex fallback", names.len());
    }
    names
}
