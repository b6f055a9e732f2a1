//! Page window arithmetic
//!
//! Pure functions over page numbers and offsets. Pages are one-based,
//! offsets are zero-based.

/// Lowest page number in the visible window, e.g. the "4" in `4 5 6 7 8`
///
/// Keeps the current page floating in the center, and pins the window flush
/// against the last page when the current page is near the end.
pub fn lowest_visible_page(current_page: u64, link_cnt: u64, page_count: u64) -> u64 {
    let mut low = current_page.saturating_sub(link_cnt / 2).max(1);
    if low > page_count.saturating_sub(link_cnt) {
        low = page_count.saturating_sub(link_cnt).saturating_add(1);
    }
    low.max(1)
}

/// Highest page number in the visible window, e.g. the "8" in `4 5 6 7 8`
///
/// Near the start the window is widened to `link_cnt`. The comparison is
/// against `link_cnt` itself, not against `lowest + link_cnt - 1`, so an even
/// `link_cnt` shows `link_cnt + 1` pages once the current page leaves the
/// start.
pub fn highest_visible_page(current_page: u64, link_cnt: u64, page_count: u64) -> u64 {
    let high = current_page.saturating_add(link_cnt / 2);
    let high = if high < link_cnt { link_cnt } else { high };
    high.min(page_count)
}

/// The page targeted by the Next link
pub fn next_page(current_page: u64, page_count: u64, jump_size: u64) -> u64 {
    current_page.saturating_add(jump_size).min(page_count)
}

/// The page targeted by the Prev link
pub fn prev_page(current_page: u64, jump_size: u64) -> u64 {
    current_page.saturating_sub(jump_size).max(1)
}

/// Convert a record offset to the page containing it
///
/// A zero `per_page` has no meaningful page, so it maps to page 1.
pub fn offset_to_page(offset: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        (offset / per_page).saturating_add(1)
    } else {
        1
    }
}

/// Convert a page number to the offset of its first record
pub fn page_to_offset(page: u64, per_page: u64) -> u64 {
    if page > 1 {
        (page - 1).saturating_mul(per_page)
    } else {
        0
    }
}

/// Number of pages needed for `record_count` records
pub fn page_count(record_count: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        record_count.div_ceil(per_page)
    } else {
        0
    }
}
