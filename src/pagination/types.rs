//! Pagination state and window configuration
//!
//! Both are plain values built per render call. Constructors and setters
//! validate their input, so a value that exists is always usable.

use super::window::{offset_to_page, page_count, page_to_offset};
use crate::error::{Error, Result};

/// Default number of page links shown at once
pub const DEFAULT_LINK_CNT: u64 = 10;

/// Default number of pages skipped by Prev/Next
pub const DEFAULT_JUMP_SIZE: u64 = 1;

/// Default number of records per page
pub const DEFAULT_PER_PAGE: u64 = 25;

// ============================================================================
// Pagination State
// ============================================================================

/// Where the caller is within a set of records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    record_count: u64,
    per_page: u64,
    offset: u64,
    page_count: u64,
    current_page: u64,
}

impl PaginationState {
    /// Create state from a record offset
    ///
    /// An offset past the last record puts the current page on the last page.
    pub fn new(record_count: u64, offset: u64, per_page: u64) -> Result<Self> {
        if per_page == 0 {
            return Err(Error::not_positive("per_page"));
        }

        let page_count = page_count(record_count, per_page);
        let current_page = offset_to_page(offset, per_page).min(page_count.max(1));

        Ok(Self {
            record_count,
            per_page,
            offset,
            page_count,
            current_page,
        })
    }

    /// Create state from a one-based page number
    pub fn from_page(record_count: u64, page: u64, per_page: u64) -> Result<Self> {
        Self::new(record_count, page_to_offset(page, per_page), per_page)
    }

    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn page_count(&self) -> u64 {
        self.page_count
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    /// True when everything fits on one page and nothing should be rendered
    pub fn is_suppressed(&self) -> bool {
        self.record_count <= self.per_page
    }

    /// One-based index of the first record on the current page
    pub fn first_record(&self) -> u64 {
        self.offset.saturating_add(1)
    }

    /// One-based index of the last record on the current page
    pub fn last_record(&self) -> u64 {
        self.offset.saturating_add(self.per_page).min(self.record_count)
    }

    /// Whether First/Prev links apply
    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    /// Whether Next/Last links apply
    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count
    }
}

// ============================================================================
// Window Config
// ============================================================================

/// How many page links to show and how far Prev/Next jump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    link_cnt: u64,
    jump_size: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            link_cnt: DEFAULT_LINK_CNT,
            jump_size: DEFAULT_JUMP_SIZE,
        }
    }
}

impl WindowConfig {
    /// Create a validated window config
    pub fn new(link_cnt: u64, jump_size: u64) -> Result<Self> {
        let mut config = Self::default();
        config.set_link_window_size(link_cnt)?;
        config.set_jump_size(jump_size)?;
        Ok(config)
    }

    /// Maximum number of page links shown at once
    pub fn link_cnt(&self) -> u64 {
        self.link_cnt
    }

    /// Pages skipped per Prev/Next click
    pub fn jump_size(&self) -> u64 {
        self.jump_size
    }

    /// Set the number of page links shown at once
    pub fn set_link_window_size(&mut self, link_cnt: u64) -> Result<&mut Self> {
        if link_cnt == 0 {
            return Err(Error::not_positive("link_cnt"));
        }
        self.link_cnt = link_cnt;
        Ok(self)
    }

    /// Set the number of pages skipped per Prev/Next click
    pub fn set_jump_size(&mut self, jump_size: u64) -> Result<&mut Self> {
        if jump_size == 0 {
            return Err(Error::not_positive("jump_size"));
        }
        self.jump_size = jump_size;
        Ok(self)
    }
}
