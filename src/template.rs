//! Placeholder substitution for link templates
//!
//! Handles `[+name+]` placeholders in pagination templates. Substitution is
//! literal string replacement: no expressions, no escaping, no nesting.

use regex::Regex;
use std::fmt::Display;
use std::sync::LazyLock;

/// Regex for matching well-formed placeholders: [+name+]
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\+([a-zA-Z_][a-zA-Z0-9_]*)\+\]").unwrap());

/// Regex for clearing leftover tokens, whatever sits between the markers
static UNRESOLVED_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\+.*?\+\]").unwrap());

/// Build the token for a placeholder name
pub fn token(name: &str) -> String {
    format!("[+{name}+]")
}

/// Ordered set of placeholder values
///
/// Values are applied in insertion order, so a value that itself contains a
/// placeholder (such as rendered `content` carrying `[+base_url+]`) is
/// resolved by any key inserted after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    values: Vec<(String, String)>,
}

impl Placeholders {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing an earlier one with the same name in place
    pub fn set(&mut self, name: impl Into<String>, value: impl Display) -> &mut Self {
        let name = name.into();
        let value = value.to_string();
        match self.values.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.values.push((name, value)),
        }
        self
    }

    /// Iterate over the values in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Render a template, leaving unknown placeholders in place
pub fn render(template: &str, placeholders: &Placeholders) -> String {
    let mut result = template.to_string();
    for (name, value) in placeholders.iter() {
        result = result.replace(&token(name), value);
    }
    result
}

/// Render a template, then remove any placeholder left unresolved
pub fn render_clean(template: &str, placeholders: &Placeholders) -> String {
    strip_unresolved(&render(template, placeholders))
}

/// Remove every `[+...+]` token from a string
pub fn strip_unresolved(s: &str) -> String {
    UNRESOLVED_REGEX.replace_all(s, "").into_owned()
}

/// Check if a string contains placeholders
pub fn has_placeholders(s: &str) -> bool {
    PLACEHOLDER_REGEX.is_match(s)
}

/// Extract all placeholder names from a template, in order of appearance
pub fn extract_placeholders(template: &str) -> Vec<String> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_substitution() {
        let mut values = Placeholders::new();
        values.set("page_number", 3);

        assert_eq!(render("<span>[+page_number+]</span>", &values), "<span>3</span>");
    }

    #[test]
    fn test_multiple_substitutions() {
        let mut values = Placeholders::new();
        values.set("base_url", "?").set("offset", 20).set("page_number", 3);

        let result = render(
            r#"<a href="[+base_url+]&offset=[+offset+]">[+page_number+]</a>"#,
            &values,
        );
        assert_eq!(result, r#"<a href="?&offset=20">3</a>"#);
    }

    #[test]
    fn test_repeated_placeholder() {
        let mut values = Placeholders::new();
        values.set("n", 7);
        assert_eq!(render("[+n+]/[+n+]", &values), "7/7");
    }

    #[test]
    fn test_unknown_placeholder_left_in_place() {
        let mut values = Placeholders::new();
        values.set("offset", 0);

        assert_eq!(
            render("offset=[+offset+] [+extra+]", &values),
            "offset=0 [+extra+]"
        );
    }

    #[test]
    fn test_render_clean_removes_unresolved() {
        let mut values = Placeholders::new();
        values.set("offset", 10);

        assert_eq!(
            render_clean(r#"<a href="?&offset=[+offset+]" [+extra+]>2</a>"#, &values),
            r#"<a href="?&offset=10" >2</a>"#
        );
    }

    #[test]
    fn test_strip_unresolved_any_content() {
        // Cleanup is not limited to identifiers
        assert_eq!(strip_unresolved("a[+not an ident+]b[+x.y+]c"), "abc");
        assert_eq!(strip_unresolved("no tokens"), "no tokens");
        // Lazy matching keeps text between separate tokens
        assert_eq!(strip_unresolved("[+a+]keep[+b+]"), "keep");
    }

    #[test]
    fn test_insertion_order_resolves_nested_values() {
        let mut values = Placeholders::new();
        values
            .set("content", r#"<a href="[+base_url+]">1</a>"#)
            .set("base_url", "/list?");

        assert_eq!(
            render("<div>[+content+]</div>", &values),
            r#"<div><a href="/list?">1</a></div>"#
        );
    }

    #[test]
    fn test_set_replaces_existing_value() {
        let mut values = Placeholders::new();
        values.set("offset", 0).set("page_number", 1).set("offset", 25);

        let pairs: Vec<(&str, &str)> = values.iter().collect();
        assert_eq!(pairs, vec![("offset", "25"), ("page_number", "1")]);
    }

    #[test]
    fn test_has_placeholders() {
        assert!(has_placeholders("[+content+]"));
        assert!(has_placeholders("prefix [+offset+] suffix"));
        assert!(!has_placeholders("no placeholders here"));
        assert!(!has_placeholders("{{ not_ours }}"));
        assert!(!has_placeholders("[+ spaced +]"));
    }

    #[test]
    fn test_extract_placeholders() {
        let names = extract_placeholders("[+base_url+]&offset=[+offset+] [+extra+]");
        assert_eq!(names, vec!["base_url", "offset", "extra"]);
    }

    #[test]
    fn test_no_placeholders() {
        let values = Placeholders::new();
        assert_eq!(values.iter().count(), 0);
        assert_eq!(render("plain", &values), "plain");
    }
}
