//! Pager configuration files
//!
//! Settings that rarely change between renders (page size, window, style,
//! templates, base URL) can live in a YAML file. JSON documents are valid
//! YAML and load the same way.
//!
//! ```yaml
//! per_page: 20
//! link_cnt: 5
//! style: digg
//! base_url: "/articles?"
//! templates:
//!   outer: "<nav>[+content+]</nav>"
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::pagination::{WindowConfig, DEFAULT_JUMP_SIZE, DEFAULT_LINK_CNT, DEFAULT_PER_PAGE};
use crate::pager::Pager;
use crate::renderer::TemplateSet;
use crate::styles;
use crate::template::extract_placeholders;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

// ============================================================================
// Pager Config
// ============================================================================

/// Pager settings loaded from a config file
///
/// Integers are signed so that zero and negative values are reported as
/// invalid configuration rather than parse errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PagerConfig {
    /// Records per page
    #[serde(default = "default_per_page")]
    pub per_page: i64,

    /// Maximum number of page links shown at once
    #[serde(default = "default_link_cnt")]
    pub link_cnt: i64,

    /// Pages skipped per Prev/Next click
    #[serde(default = "default_jump_size")]
    pub jump_size: i64,

    /// Named style preset
    #[serde(default)]
    pub style: Option<String>,

    /// Per-role template overrides applied on top of the style
    #[serde(default)]
    pub templates: BTreeMap<String, Value>,

    /// Base URL for every link
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_per_page() -> i64 {
    i64::try_from(DEFAULT_PER_PAGE).unwrap_or(i64::MAX)
}

fn default_link_cnt() -> i64 {
    i64::try_from(DEFAULT_LINK_CNT).unwrap_or(i64::MAX)
}

fn default_jump_size() -> i64 {
    i64::try_from(DEFAULT_JUMP_SIZE).unwrap_or(i64::MAX)
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            link_cnt: default_link_cnt(),
            jump_size: default_jump_size(),
            style: None,
            templates: BTreeMap::new(),
            base_url: None,
        }
    }
}

impl PagerConfig {
    /// Check every setting, reporting the first invalid one
    pub fn validate(&self) -> Result<()> {
        positive("per_page", self.per_page)?;
        self.window()?;
        self.template_set()?;
        Ok(())
    }

    /// Records per page as a validated count
    pub fn per_page(&self) -> Result<u64> {
        positive("per_page", self.per_page)
    }

    /// Window settings
    pub fn window(&self) -> Result<WindowConfig> {
        WindowConfig::new(
            positive("link_cnt", self.link_cnt)?,
            positive("jump_size", self.jump_size)?,
        )
    }

    /// The selected style with any template overrides applied
    pub fn template_set(&self) -> Result<TemplateSet> {
        let mut set = styles::get_style(self.style.as_deref().unwrap_or(styles::DEFAULT_STYLE));

        for (role, content) in &self.templates {
            let content = content.as_str().ok_or_else(|| {
                Error::invalid_value(
                    format!("templates.{role}"),
                    "template content must be a string",
                )
            })?;
            set.set_template(role, content)?;
        }

        if !extract_placeholders(&set.outer).iter().any(|name| name == "content") {
            warn!("Outer template has no [+content+] slot; page links will not be shown");
        }
        for role in set.static_link_roles() {
            warn!(%role, "Template has no placeholders; every {role} link will be identical");
        }
        Ok(set)
    }

    /// Build a pager for a record count and offset using these settings
    pub fn pager(&self, record_count: u64, offset: u64) -> Result<Pager> {
        let mut pager = Pager::links(record_count, offset, self.per_page()?)
            .window(self.window()?)
            .template_set(self.template_set()?);
        if let Some(url) = &self.base_url {
            pager = pager.base_url(url.clone());
        }
        Ok(pager)
    }
}

fn positive(field: &str, value: i64) -> Result<u64> {
    if value <= 0 {
        return Err(Error::not_positive(field));
    }
    Ok(value as u64)
}

// ============================================================================
// Loading
// ============================================================================

/// Load and validate a config file
pub fn load_config(path: impl AsRef<Path>) -> Result<PagerConfig> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read config file '{}'", path.display()));
        }
    };

    debug!("Loaded pager config from {}", path.display());
    load_config_from_str(&content)
}

/// Parse and validate a config document
pub fn load_config_from_str(yaml: &str) -> Result<PagerConfig> {
    // An empty document means all defaults
    if yaml.trim().is_empty() {
        return Ok(PagerConfig::default());
    }

    let config: PagerConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse pager config: {e}")))?;

    config.validate()?;
    Ok(config)
}
