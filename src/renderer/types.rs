//! Template sets
//!
//! A `TemplateSet` holds one template per [`LinkRole`]. Unset roles render as
//! nothing, except `outer`, which falls back to [`DEFAULT_OUTER`].

use crate::error::{Error, Result};
use crate::template::has_placeholders;
use crate::types::LinkRole;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Built-in layout wrapping the links and the record summary
pub const DEFAULT_OUTER: &str = r#"<div id="pagination">[+content+]<br/>Page [+current_page+] of [+page_count+]<br/>Displaying records [+first_record+] thru [+last_record+] of [+record_count+]</div>"#;

fn default_outer() -> String {
    DEFAULT_OUTER.to_string()
}

/// One template per link role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateSet {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub prev: String,
    #[serde(default)]
    pub page: String,
    #[serde(default)]
    pub current: String,
    #[serde(default)]
    pub next: String,
    #[serde(default)]
    pub last: String,
    #[serde(default = "default_outer")]
    pub outer: String,
}

/// The `default` style preset
impl Default for TemplateSet {
    fn default() -> Self {
        crate::styles::get_style(crate::styles::DEFAULT_STYLE)
    }
}

impl TemplateSet {
    /// A set where every role is empty except the built-in outer layout
    pub fn empty() -> Self {
        Self {
            first: String::new(),
            prev: String::new(),
            page: String::new(),
            current: String::new(),
            next: String::new(),
            last: String::new(),
            outer: default_outer(),
        }
    }

    /// Build a complete set from role names; missing roles are empty
    pub fn from_map<I, K, V>(templates: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut set = Self::empty();
        set.set_templates(templates)?;
        Ok(set)
    }

    /// Build a complete set from a JSON object of role names to strings
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::config("Templates must be an object of role names"))?;

        let mut set = Self::empty();
        for (name, content) in object {
            let content = content.as_str().ok_or_else(|| {
                Error::invalid_value(name.clone(), "template content must be a string")
            })?;
            set.set_template(name, content)?;
        }
        Ok(set)
    }

    /// Template for a role
    pub fn get(&self, role: LinkRole) -> &str {
        match role {
            LinkRole::First => &self.first,
            LinkRole::Prev => &self.prev,
            LinkRole::Page => &self.page,
            LinkRole::Current => &self.current,
            LinkRole::Next => &self.next,
            LinkRole::Last => &self.last,
            LinkRole::Outer => &self.outer,
        }
    }

    /// Link roles whose template is set but has no placeholders
    ///
    /// Such a link cannot carry a page number or offset, so every copy of it
    /// points at the same place.
    pub fn static_link_roles(&self) -> Vec<LinkRole> {
        [
            LinkRole::First,
            LinkRole::Prev,
            LinkRole::Page,
            LinkRole::Next,
            LinkRole::Last,
        ]
        .into_iter()
        .filter(|role| {
            let template = self.get(*role);
            !template.trim().is_empty() && !has_placeholders(template)
        })
        .collect()
    }

    /// Replace the template for a role
    pub fn set(&mut self, role: LinkRole, content: impl Into<String>) -> &mut Self {
        let slot = match role {
            LinkRole::First => &mut self.first,
            LinkRole::Prev => &mut self.prev,
            LinkRole::Page => &mut self.page,
            LinkRole::Current => &mut self.current,
            LinkRole::Next => &mut self.next,
            LinkRole::Last => &mut self.last,
            LinkRole::Outer => &mut self.outer,
        };
        *slot = content.into();
        self
    }

    /// Replace the template for a role given by name
    pub fn set_template(&mut self, role: &str, content: impl Into<String>) -> Result<&mut Self> {
        let role: LinkRole = role.parse()?;
        Ok(self.set(role, content))
    }

    /// Replace several templates by role name
    ///
    /// All names are checked before anything is changed.
    pub fn set_templates<I, K, V>(&mut self, templates: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let parsed = templates
            .into_iter()
            .map(|(name, content)| -> Result<(LinkRole, String)> {
                Ok((name.as_ref().parse()?, content.into()))
            })
            .collect::<Result<Vec<_>>>()?;

        for (role, content) in parsed {
            self.set(role, content);
        }
        Ok(self)
    }
}
