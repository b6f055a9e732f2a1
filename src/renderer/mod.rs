//! Link renderer
//!
//! Renders [`PageLinks`] through a [`TemplateSet`]. Each link becomes one
//! fragment from its role's template; the fragments are joined into
//! `[+content+]` of the outer template together with the summary counts.
//! Placeholders nobody supplied (such as `[+extra+]`) are removed at the end.

mod types;

pub use types::{TemplateSet, DEFAULT_OUTER};

use crate::pagination::{Link, PageLinks, PaginationState, WindowConfig};
use crate::template::{self, Placeholders};

/// Base URL used when the caller supplies none
pub const DEFAULT_BASE_URL: &str = "?";

/// Render the pagination markup for a state
///
/// Returns an empty string when all records fit on one page.
pub fn render(
    state: &PaginationState,
    window: &WindowConfig,
    templates: &TemplateSet,
    base_url: &str,
) -> String {
    match PageLinks::compute(state, window) {
        Some(links) => render_links(&links, templates, base_url),
        None => String::new(),
    }
}

/// Render already computed links
pub fn render_links(links: &PageLinks, templates: &TemplateSet, base_url: &str) -> String {
    let content: String = links
        .links
        .iter()
        .map(|link| render_fragment(link, templates))
        .collect();

    // content goes first so the summary values also resolve inside fragments
    let mut values = Placeholders::new();
    values
        .set("content", content)
        .set("record_count", links.record_count)
        .set("per_page", links.per_page)
        .set("offset", links.offset)
        .set("page_count", links.page_count)
        .set("current_page", links.current_page)
        .set("first_record", links.first_record)
        .set("last_record", links.last_record)
        .set("base_url", base_url);

    template::render_clean(&templates.outer, &values)
        .trim()
        .to_string()
}

/// Render one link with its role's template
fn render_fragment(link: &Link, templates: &TemplateSet) -> String {
    let mut values = Placeholders::new();
    values
        .set("offset", link.offset)
        .set("page_number", link.page_number);

    template::render(templates.get(link.role), &values)
        .trim()
        .to_string()
}
