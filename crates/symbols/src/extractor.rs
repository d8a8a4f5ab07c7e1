use crate::ast::{self, StructuralOutcome};
use crate::language::SourceLanguage;
use crate::stylesheet;
use crate::textual;
use std::collections::BTreeSet;

/// Extract exported/public names from file text.
///
/// Policy, first non-empty result wins:
/// 1. JS/TS family: structural extraction via Tree-sitter.
/// 2. Stylesheets: token regex families.
/// 3. Everything else (or an empty/failed structural pass): textual
///    export-statement fallback.
///
/// Never fails and never panics on malformed input.
pub fn extract(text: &str, language: SourceLanguage) -> BTreeSet<String> {
    if language.is_scripted() {
        match ast::extract_exports(text, language) {
            StructuralOutcome::Parsed(names) if !names.is_empty() => return names,
            StructuralOutcome::Parsed(_) | StructuralOutcome::ParseFailed => {}
        }
    }

    if language.is_stylesheet() {
        let tokens = stylesheet::extract_tokens(text);
        if !tokens.is_empty() {
            return tokens;
        }
    }

    textual::infer_exports(text)
}

/// Check that a name is identifier-shaped (letters/digits/underscore,
/// not starting with a digit). Non-conforming captures are dropped before
/// they can pollute metadata or the component registry.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn structural_result_wins_for_typed_source() {
        let source = "export const Foo = 1;\nexport function Bar() {}\nexport interface Baz {}\n";
        let names = extract(source, SourceLanguage::TypeScript);
        let expected: BTreeSet<String> =
            ["Foo", "Bar", "Baz"].iter().map(|s| (*s).to_string()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn structural_pass_captures_lowercase_exports() {
        // The regex fallback would drop these; the AST pass keeps them.
        let source = "export const useToggle = () => {};\n";
        let names = extract(source, SourceLanguage::TypeScript);
        assert!(names.contains("useToggle"));
    }

    #[test]
    fn invalid_source_matches_textual_fallback() {
        let source = "<<<<<export class 123 %% not a program";
        assert_eq!(
            extract(source, SourceLanguage::TypeScript),
            textual::infer_exports(source)
        );
    }

    #[test]
    fn unrecognized_language_uses_textual_fallback() {
        let source = "export const Widget = makeWidget();";
        assert_eq!(
            extract(source, SourceLanguage::Unknown),
            textual::infer_exports(source)
        );
        assert!(extract(source, SourceLanguage::Unknown).contains("Widget"));
    }

    #[test]
    fn stylesheet_tokens_before_fallback() {
        let css = ".btn-large {}\n";
        assert!(extract(css, SourceLanguage::Css).contains("BtnLarge"));
    }

    #[test]
    fn empty_stylesheet_falls_through_to_textual() {
        let css = "/* export { Button } hidden in a comment */";
        assert_eq!(
            extract(css, SourceLanguage::Css),
            textual::infer_exports(css)
        );
    }

    #[test]
    fn identifier_shapes() {
        assert!(is_identifier("Button"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("use_toggle2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("kebab-case"));
        assert!(!is_identifier("has space"));
    }
}
