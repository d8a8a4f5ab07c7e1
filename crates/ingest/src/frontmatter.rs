use serde_yaml::Value;

/// Descriptive fields declared in a documentation file's front matter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,

    /// Only a string-valued `component` field counts; a boolean one (a known
    /// upstream authoring mistake) is discarded here so it can never be
    /// mistaken for a symbol name.
    pub component: Option<String>,
}

/// Parse the YAML front-matter preamble of a documentation file, if present.
///
/// Anything that fails to parse is treated as absent front matter; the body
/// is never rejected because of it.
pub fn parse_front_matter(text: &str) -> FrontMatter {
    let Some(block) = front_matter_block(text) else {
        return FrontMatter::default();
    };

    let value: Value = match serde_yaml::from_str(&block) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("unparseable front matter ignored: {e}");
            return FrontMatter::default();
        }
    };

    let component = match value.get("component") {
        Some(Value::String(name)) => Some(name.clone()),
        Some(Value::Bool(flag)) => {
            log::debug!("discarding boolean front-matter component: {flag}");
            None
        }
        _ => None,
    };

    FrontMatter {
        title: string_field(&value, "title"),
        description: string_field(&value, "description"),
        component,
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Extract the text between the opening and closing `---` fences
fn front_matter_block(text: &str) -> Option<String> {
    let mut lines = text.lines();
    if lines.next()?.trim_end() != "---" {
        return None;
    }

    let mut block = Vec::new();
    for line in lines {
        if line.trim_end() == "---" {
            return Some(block.join("\n"));
        }
        block.push(line);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_title_description_component() {
        let text = "---\ntitle: Button\ndescription: Press it\ncomponent: Button\n---\n# Body\n";
        let fm = parse_front_matter(text);
        assert_eq!(fm.title.as_deref(), Some("Button"));
        assert_eq!(fm.description.as_deref(), Some("Press it"));
        assert_eq!(fm.component.as_deref(), Some("Button"));
    }

    #[test]
    fn boolean_component_is_discarded() {
        let text = "---\ntitle: Intro\ncomponent: true\n---\nbody\n";
        let fm = parse_front_matter(text);
        assert_eq!(fm.title.as_deref(), Some("Intro"));
        assert_eq!(fm.component, None);
    }

    #[test]
    fn missing_front_matter_yields_defaults() {
        assert_eq!(parse_front_matter("# Just a heading\n"), FrontMatter::default());
    }

    #[test]
    fn unterminated_fence_is_ignored() {
        assert_eq!(
            parse_front_matter("---\ntitle: Dangling\n"),
            FrontMatter::default()
        );
    }

    #[test]
    fn malformed_yaml_is_ignored() {
        let text = "---\ntitle: [unclosed\n---\nbody\n";
        assert_eq!(parse_front_matter(text), FrontMatter::default());
    }
}
