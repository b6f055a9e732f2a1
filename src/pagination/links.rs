//! Computed page links
//!
//! `PageLinks` is everything a renderer needs: the summary counts and the
//! ordered list of links to emit. It holds no markup.

use super::types::{PaginationState, WindowConfig};
use super::window::{
    highest_visible_page, lowest_visible_page, next_page, page_to_offset, prev_page,
};
use crate::types::LinkRole;
use serde::Serialize;
use std::ops::RangeInclusive;
use tracing::debug;

/// A single link to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Template role used to render this link
    pub role: LinkRole,
    /// One-based page the link points at
    pub page_number: u64,
    /// Offset of the first record on that page
    pub offset: u64,
}

impl Link {
    fn for_page(role: LinkRole, page_number: u64, per_page: u64) -> Self {
        Self {
            role,
            page_number,
            offset: page_to_offset(page_number, per_page),
        }
    }
}

/// Pagination metadata for one render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    pub record_count: u64,
    pub per_page: u64,
    pub offset: u64,
    pub page_count: u64,
    pub current_page: u64,
    pub lowest_visible_page: u64,
    pub highest_visible_page: u64,
    pub first_record: u64,
    pub last_record: u64,
    /// Links in rendering order: first, prev, the window, next, last
    pub links: Vec<Link>,
}

impl PageLinks {
    /// Compute the links for a state, or `None` when everything fits on one page
    pub fn compute(state: &PaginationState, window: &WindowConfig) -> Option<Self> {
        if state.is_suppressed() {
            debug!(
                record_count = state.record_count(),
                per_page = state.per_page(),
                "Pagination suppressed"
            );
            return None;
        }

        let per_page = state.per_page();
        let page_count = state.page_count();
        let current_page = state.current_page();

        let lowest = lowest_visible_page(current_page, window.link_cnt(), page_count);
        let highest = highest_visible_page(current_page, window.link_cnt(), page_count);
        debug!(current_page, page_count, lowest, highest, "Computed page window");

        let mut links = Vec::new();

        if state.has_previous() {
            links.push(Link::for_page(LinkRole::First, 1, per_page));
            let prev = prev_page(current_page, window.jump_size());
            links.push(Link::for_page(LinkRole::Prev, prev, per_page));
        }

        for page in lowest..=highest {
            let role = if page == current_page {
                LinkRole::Current
            } else {
                LinkRole::Page
            };
            links.push(Link::for_page(role, page, per_page));
        }

        if state.has_next() {
            let next = next_page(current_page, page_count, window.jump_size());
            links.push(Link::for_page(LinkRole::Next, next, per_page));
            links.push(Link::for_page(LinkRole::Last, page_count, per_page));
        }

        Some(Self {
            record_count: state.record_count(),
            per_page,
            offset: state.offset(),
            page_count,
            current_page,
            lowest_visible_page: lowest,
            highest_visible_page: highest,
            first_record: state.first_record(),
            last_record: state.last_record(),
            links,
        })
    }

    /// The page numbers shown as clickable links
    pub fn visible_pages(&self) -> RangeInclusive<u64> {
        self.lowest_visible_page..=self.highest_visible_page
    }

    /// First link with the given role
    pub fn link(&self, role: LinkRole) -> Option<&Link> {
        self.links.iter().find(|link| link.role == role)
    }

    /// All links with the given role
    pub fn links_with_role(&self, role: LinkRole) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |link| link.role == role)
    }
}
