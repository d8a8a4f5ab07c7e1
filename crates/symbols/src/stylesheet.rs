use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

// Custom properties (design tokens): --primary-color:
static CUSTOM_PROPERTY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--([a-zA-Z][a-zA-Z0-9-]*):").expect("property pattern is valid"));

// Class selectors: .btn-large
static CLASS_SELECTOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.([a-zA-Z][a-zA-Z0-9_-]*)").expect("selector pattern is valid"));

// Named layers: @layer base
static LAYER_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@layer\s+([a-zA-Z][a-zA-Z0-9_-]*)").expect("layer pattern is valid")
});

/// Extract stylesheet tokens (custom properties, class selectors, layer
/// names), each normalized from kebab-case to a PascalCase identifier.
pub fn extract_tokens(text: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();

    for family in [&CUSTOM_PROPERTY, &CLASS_SELECTOR, &LAYER_NAME] {
        for capture in family.captures_iter(text) {
            names.insert(pascal_case(&capture[1]));
        }
    }

    names
}

fn pascal_case(token: &str) -> String {
    token.split('-').map(capitalize).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_all_three_families() {
        let css = concat!(
            "@layer base;\n",
            ":root {\n",
            "  --primary-color: #336;\n",
            "  --spacing-sm: 4px;\n",
            "}\n",
            ".btn-large { padding: var(--spacing-sm); }\n",
        );
        let names = extract_tokens(css);
        assert!(names.contains("Base"));
        assert!(names.contains("PrimaryColor"));
        assert!(names.contains("SpacingSm"));
        assert!(names.contains("BtnLarge"));
    }

    #[test]
    fn kebab_case_normalization() {
        assert_eq!(pascal_case("primary-color"), "PrimaryColor");
        assert_eq!(pascal_case("btn"), "Btn");
        assert_eq!(pascal_case("myColor"), "Mycolor");
    }

    #[test]
    fn empty_stylesheet_yields_nothing() {
        assert!(extract_tokens("/* nothing here */").is_empty());
    }
}
