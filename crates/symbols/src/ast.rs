use crate::error::{Result, SymbolError};
use crate::extractor::is_identifier;
use crate::language::SourceLanguage;
use std::collections::BTreeSet;
use tree_sitter::{Node, Parser};

/// Type annotation treated as "this binding is a component"
const COMPONENT_TYPE_ALIAS: &str = "FC";

/// Outcome of the structural extraction pass.
///
/// `Parsed` carries whatever the export patterns matched (possibly nothing);
/// `ParseFailed` means the grammar or parser gave up and the caller should
/// take the textual fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralOutcome {
    Parsed(BTreeSet<String>),
    ParseFailed,
}

/// Extract exported names from JS/TS source via Tree-sitter.
///
/// Never fails: any parser-level problem is reported as `ParseFailed`.
pub fn extract_exports(text: &str, language: SourceLanguage) -> StructuralOutcome {
    match parse_exports(text, language) {
        Ok(names) => StructuralOutcome::Parsed(names),
        Err(e) => {
            log::warn!(
                "structural parse failed for {}, falling back to regex: {e}",
                language.as_str()
            );
            StructuralOutcome::ParseFailed
        }
    }
}

fn parse_exports(text: &str, language: SourceLanguage) -> Result<BTreeSet<String>> {
    let grammar = language.grammar()?;
    let mut parser = Parser::new();
    parser
        .set_language(&grammar)
        .map_err(|e| SymbolError::grammar(format!("Failed to set language: {e}")))?;

    let tree = parser
        .parse(text, None)
        .ok_or_else(|| SymbolError::parse("Failed to parse source text"))?;

    let mut names = BTreeSet::new();
    collect(text, tree.root_node(), &mut names);
    Ok(names)
}

/// Walk the whole tree, matching the export patterns at every node
fn collect(src: &str, node: Node, names: &mut BTreeSet<String>) {
    match node.kind() {
        "export_statement" => collect_export(src, node, names),
        "lexical_declaration" => collect_declarators(src, node, names),
        "call_expression" => collect_wrapper_call(src, node, names),
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(src, child, names);
    }
}

/// Exported declarations, named re-exports and default-exported identifiers
fn collect_export(src: &str, node: Node, names: &mut BTreeSet<String>) {
    if let Some(decl) = node.child_by_field_name("declaration") {
        match decl.kind() {
            "function_declaration"
            | "class_declaration"
            | "interface_declaration"
            | "type_alias_declaration" => add_field_name(src, decl, names),
            "lexical_declaration" | "variable_declaration" => {
                let mut cursor = decl.walk();
                for declarator in decl.named_children(&mut cursor) {
                    if declarator.kind() == "variable_declarator" {
                        add_field_name(src, declarator, names);
                    }
                }
            }
            _ => {}
        }
    }

    // export default Foo;
    if let Some(value) = node.child_by_field_name("value") {
        if value.kind() == "identifier" {
            add_name(src, value, names);
        }
    }

    // export { Foo, Bar as Baz };  (the local name, not the alias)
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() != "export_clause" {
            continue;
        }
        let mut clause_cursor = child.walk();
        for specifier in child.named_children(&mut clause_cursor) {
            if specifier.kind() == "export_specifier" {
                if let Some(name) = specifier.child_by_field_name("name") {
                    add_name(src, name, names);
                }
            }
        }
    }
}

/// Bare `const Name = () => …` bindings and `const Name: FC = …` declarations
fn collect_declarators(src: &str, node: Node, names: &mut BTreeSet<String>) {
    let mut cursor = node.walk();
    for declarator in node.named_children(&mut cursor) {
        if declarator.kind() != "variable_declarator" {
            continue;
        }
        let Some(name) = declarator.child_by_field_name("name") else {
            continue;
        };
        if name.kind() != "identifier" {
            continue;
        }

        let arrow_bound = declarator
            .child_by_field_name("value")
            .is_some_and(|value| value.kind() == "arrow_function");
        let component_typed = declarator
            .child_by_field_name("type")
            .is_some_and(|annotation| annotation_is_component_alias(src, annotation));

        if arrow_bound || component_typed {
            add_name(src, name, names);
        }
    }
}

fn annotation_is_component_alias(src: &str, annotation: Node) -> bool {
    let mut cursor = annotation.walk();
    let result = annotation
        .named_children(&mut cursor)
        .any(|ty| ty.kind() == "type_identifier" && node_text(src, ty) == COMPONENT_TYPE_ALIAS);
    result
}

/// `React.memo(Name)` and `forwardRef(Name)`: capture the argument identifiers
fn collect_wrapper_call(src: &str, node: Node, names: &mut BTreeSet<String>) {
    let Some(callee) = node.child_by_field_name("function") else {
        return;
    };

    let is_wrapper = match callee.kind() {
        "member_expression" => {
            let object_is_react = callee
                .child_by_field_name("object")
                .is_some_and(|object| {
                    object.kind() == "identifier" && node_text(src, object) == "React"
                });
            let property_is_memo = callee
                .child_by_field_name("property")
                .is_some_and(|property| node_text(src, property) == "memo");
            object_is_react && property_is_memo
        }
        "identifier" => node_text(src, callee) == "forwardRef",
        _ => false,
    };

    if !is_wrapper {
        return;
    }

    if let Some(arguments) = node.child_by_field_name("arguments") {
        let mut cursor = arguments.walk();
        for argument in arguments.named_children(&mut cursor) {
            if argument.kind() == "identifier" {
                add_name(src, argument, names);
            }
        }
    }
}

fn add_field_name(src: &str, node: Node, names: &mut BTreeSet<String>) {
    if let Some(name) = node.child_by_field_name("name") {
        add_name(src, name, names);
    }
}

fn add_name(src: &str, node: Node, names: &mut BTreeSet<String>) {
    let text = node_text(src, node);
    if !text.is_empty() && is_identifier(text) {
        names.insert(text.to_string());
    }
}

fn node_text<'a>(src: &'a str, node: Node) -> &'a str {
    src.get(node.byte_range()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parsed(text: &str, language: SourceLanguage) -> BTreeSet<String> {
        match extract_exports(text, language) {
            StructuralOutcome::Parsed(names) => names,
            StructuralOutcome::ParseFailed => panic!("parse failed"),
        }
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn exported_declarations() {
        let source = "export const Foo = 1;\nexport function Bar() {}\nexport interface Baz {}\n";
        assert_eq!(
            parsed(source, SourceLanguage::TypeScript),
            set(&["Foo", "Bar", "Baz"])
        );
    }

    #[test]
    fn exported_class_and_type_alias() {
        let source = "export class Widget {}\nexport type WidgetProps = { size: number };\n";
        assert_eq!(
            parsed(source, SourceLanguage::TypeScript),
            set(&["Widget", "WidgetProps"])
        );
    }

    #[test]
    fn named_reexports_capture_local_name() {
        let source = "export { Button };\nexport { Card as Panel };\n";
        assert_eq!(
            parsed(source, SourceLanguage::TypeScript),
            set(&["Button", "Card"])
        );
    }

    #[test]
    fn default_exported_identifier() {
        let source = "const App = () => null;\nexport default App;\n";
        assert_eq!(parsed(source, SourceLanguage::Tsx), set(&["App"]));
    }

    #[test]
    fn arrow_bindings_found_without_export() {
        let source = "const Header = () => {\n  return null;\n};\n";
        assert_eq!(parsed(source, SourceLanguage::JavaScript), set(&["Header"]));
    }

    #[test]
    fn component_alias_annotation() {
        let source = "const Card: FC = () => null;\nconst helper: Helper = make();\n";
        assert_eq!(parsed(source, SourceLanguage::Tsx), set(&["Card"]));
    }

    #[test]
    fn memo_and_forward_ref_capture_arguments() {
        let source = "const Wrapped = React.memo(Inner);\nconst Field = forwardRef(FieldInner);\n";
        let names = parsed(source, SourceLanguage::Tsx);
        assert!(names.contains("Inner"));
        assert!(names.contains("FieldInner"));
    }

    #[test]
    fn plain_member_call_is_not_a_wrapper() {
        let source = "const x = Other.memo(Inner);\nconst y = ref(Target);\n";
        let names = parsed(source, SourceLanguage::JavaScript);
        assert!(!names.contains("Inner"));
        assert!(!names.contains("Target"));
    }

    #[test]
    fn malformed_source_still_parses() {
        // Tree-sitter produces a tree with error nodes; no hits, no panic.
        let outcome = extract_exports("<<<<<export class 123", SourceLanguage::TypeScript);
        assert!(matches!(outcome, StructuralOutcome::Parsed(_)));
    }

    #[test]
    fn unsupported_language_reports_parse_failed() {
        assert_eq!(
            extract_exports("export const Foo = 1;", SourceLanguage::Css),
            StructuralOutcome::ParseFailed
        );
    }
}
