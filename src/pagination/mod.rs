//! Pagination module
//!
//! # Overview
//!
//! Turns a record count, page size and offset into the set of links to show:
//! the visible window of page numbers around the current page, plus
//! First/Prev/Next/Last targets. Everything here is pure arithmetic; markup
//! lives in [`crate::renderer`].

mod links;
mod types;
mod window;

pub use links::{Link, PageLinks};
pub use types::{
    PaginationState, WindowConfig, DEFAULT_JUMP_SIZE, DEFAULT_LINK_CNT, DEFAULT_PER_PAGE,
};
pub use window::{
    highest_visible_page, lowest_visible_page, next_page, offset_to_page, page_count,
    page_to_offset, prev_page,
};
