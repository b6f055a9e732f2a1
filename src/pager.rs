//! Fluent pagination builder
//!
//! `Pager` accumulates the inputs for one render and owns all of its
//! configuration, so independent pagers never share state.
//!
//! ```
//! use pagelinks::Pager;
//!
//! let html = Pager::links(100, 0, 10)
//!     .base_url("/articles?")
//!     .link_window_size(3)?
//!     .style("digg")
//!     .render()?;
//! assert!(html.contains(r#"href="/articles?&offset=10""#));
//! # Ok::<(), pagelinks::Error>(())
//! ```

use crate::error::Result;
use crate::pagination::{
    page_to_offset, PageLinks, PaginationState, WindowConfig, DEFAULT_PER_PAGE,
};
use crate::renderer::{self, TemplateSet, DEFAULT_BASE_URL};
use crate::styles;
use crate::types::LinkRole;

/// Render pagination links with the default window and style
///
/// Returns an empty string when all records fit on one page.
pub fn render(
    record_count: u64,
    offset: u64,
    per_page: u64,
    base_url: Option<&str>,
) -> Result<String> {
    let mut pager = Pager::links(record_count, offset, per_page);
    if let Some(url) = base_url {
        pager = pager.base_url(url);
    }
    pager.render()
}

/// Builder for a single pagination render
#[derive(Debug, Clone)]
pub struct Pager {
    record_count: u64,
    offset: u64,
    per_page: u64,
    base_url: Option<String>,
    window: WindowConfig,
    templates: TemplateSet,
}

impl Pager {
    /// Start a pager positioned by record offset
    pub fn links(record_count: u64, offset: u64, per_page: u64) -> Self {
        Self {
            record_count,
            offset,
            per_page,
            base_url: None,
            window: WindowConfig::default(),
            templates: TemplateSet::default(),
        }
    }

    /// Start a pager positioned by one-based page number
    pub fn from_page(record_count: u64, page: u64, per_page: u64) -> Self {
        Self::links(record_count, page_to_offset(page, per_page), per_page)
    }

    /// Start a pager at offset 0 with the default page size
    pub fn new(record_count: u64) -> Self {
        Self::links(record_count, 0, DEFAULT_PER_PAGE)
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn per_page(mut self, per_page: u64) -> Self {
        self.per_page = per_page;
        self
    }

    /// Base URL every link starts with
    ///
    /// Embedded verbatim into the markup: sanitize it before passing it in.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Number of page links shown at once
    pub fn link_window_size(mut self, link_cnt: u64) -> Result<Self> {
        self.window.set_link_window_size(link_cnt)?;
        Ok(self)
    }

    /// Pages skipped per Prev/Next click
    pub fn jump_size(mut self, jump_size: u64) -> Result<Self> {
        self.window.set_jump_size(jump_size)?;
        Ok(self)
    }

    pub fn window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Replace one template by role name
    pub fn template(mut self, role: &str, content: impl Into<String>) -> Result<Self> {
        self.templates.set_template(role, content)?;
        Ok(self)
    }

    /// Replace one template by role
    pub fn template_for(mut self, role: LinkRole, content: impl Into<String>) -> Self {
        self.templates.set(role, content);
        self
    }

    /// Replace the whole template set; roles missing from `templates` are empty
    pub fn templates<I, K, V>(mut self, templates: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.templates = TemplateSet::from_map(templates)?;
        Ok(self)
    }

    pub fn template_set(mut self, templates: TemplateSet) -> Self {
        self.templates = templates;
        self
    }

    /// Switch to a named preset; unknown names use the default preset
    pub fn style(mut self, name: &str) -> Self {
        self.templates = styles::get_style(name);
        self
    }

    pub fn get_window(&self) -> &WindowConfig {
        &self.window
    }

    pub fn get_templates(&self) -> &TemplateSet {
        &self.templates
    }

    pub fn get_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Validated pagination state
    pub fn state(&self) -> Result<PaginationState> {
        PaginationState::new(self.record_count, self.offset, self.per_page)
    }

    /// Computed link metadata, `None` when all records fit on one page
    pub fn page_links(&self) -> Result<Option<PageLinks>> {
        Ok(PageLinks::compute(&self.state()?, &self.window))
    }

    /// Render the markup
    pub fn render(&self) -> Result<String> {
        let state = self.state()?;
        Ok(renderer::render(
            &state,
            &self.window,
            &self.templates,
            self.get_base_url(),
        ))
    }
}
