//! Built-in style presets embedded in the binary
//!
//! Each preset is a YAML [`TemplateSet`] under `styles/`. Selecting an
//! unknown style is not an error: it falls back to the default preset.

use crate::renderer::TemplateSet;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Name of the preset used when none (or an unknown one) is selected
pub const DEFAULT_STYLE: &str = "default";

/// Built-in style YAML definitions
pub static BUILTIN_STYLES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert("default", include_str!("../styles/default.yaml"));
    m.insert("raw", include_str!("../styles/raw.yaml"));

    // Presets bundling their own CSS
    m.insert("digg", include_str!("../styles/digg.yaml"));
    m.insert("apple", include_str!("../styles/apple.yaml"));
    m.insert("flickr", include_str!("../styles/flickr.yaml"));

    m
});

/// Parsed presets
static PRESETS: LazyLock<HashMap<&'static str, TemplateSet>> = LazyLock::new(|| {
    BUILTIN_STYLES
        .iter()
        .filter_map(|(name, yaml)| match serde_yaml::from_str::<TemplateSet>(yaml) {
            Ok(set) => Some((*name, set)),
            Err(e) => {
                warn!("Skipping built-in style '{}': {}", name, e);
                None
            }
        })
        .collect()
});

/// Get the raw YAML of a built-in style
pub fn get_builtin(name: &str) -> Option<&'static str> {
    BUILTIN_STYLES.get(name).copied()
}

/// Check if a name is a built-in style
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_STYLES.contains_key(name)
}

/// List built-in style names, sorted
pub fn list_styles() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = BUILTIN_STYLES.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Get the templates for a style, falling back to the default preset
pub fn get_style(name: &str) -> TemplateSet {
    if let Some(set) = PRESETS.get(name) {
        return set.clone();
    }

    debug!("Unknown style '{}', using '{}'", name, DEFAULT_STYLE);
    PRESETS
        .get(DEFAULT_STYLE)
        .cloned()
        .unwrap_or_else(TemplateSet::empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DEFAULT_OUTER;
    use crate::types::LinkRole;

    #[test]
    fn test_builtin_styles_exist() {
        for name in ["default", "raw", "digg", "apple", "flickr"] {
            assert!(is_builtin(name), "missing style {name}");
            assert!(get_builtin(name).is_some());
        }
    }

    #[test]
    fn test_builtin_styles_parse() {
        for name in list_styles() {
            let yaml = get_builtin(name).unwrap();
            let set: TemplateSet = serde_yaml::from_str(yaml).unwrap();
            assert!(!set.current.is_empty(), "style {name} has no current template");
            assert!(
                set.outer.contains("[+content+]"),
                "style {name} outer has no content slot"
            );
        }
    }

    #[test]
    fn test_default_style_uses_builtin_outer() {
        let set = get_style("default");
        assert_eq!(set.outer, DEFAULT_OUTER);
        assert_eq!(set.get(LinkRole::Current), "<span>[+page_number+]</span>");
        assert_eq!(TemplateSet::default(), set);
    }

    #[test]
    fn test_css_presets_bundle_styles() {
        for name in ["digg", "apple", "flickr"] {
            let set = get_style(name);
            assert!(set.outer.starts_with("<style>"));
            assert!(set.outer.contains(&format!("class=\"{name}_pagination\"")));
        }
        assert!(!get_style("raw").outer.contains("<style>"));
    }

    #[test]
    fn test_unknown_style_falls_back_to_default() {
        assert_eq!(get_style("no-such-style"), get_style(DEFAULT_STYLE));
        assert_eq!(get_style(""), get_style(DEFAULT_STYLE));
        assert!(!is_builtin("no-such-style"));
    }

    #[test]
    fn test_list_styles() {
        assert_eq!(
            list_styles(),
            vec!["apple", "default", "digg", "flickr", "raw"]
        );
    }
}
