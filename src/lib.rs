//! # pagelinks
//!
//! Pagination links for any URL: compute which page numbers to show around
//! the current page, then render them through simple `[+placeholder+]`
//! templates.
//!
//! ```text
//!     << First  < Prev.  3 4 [5] 6 7  Next >  Last >>
//! ```
//!
//! ## Features
//!
//! - **Window Arithmetic**: Current page kept centered, clamped to the valid range
//! - **Offset or Page**: Convert between `?offset=N` and `?page=N` styles
//! - **Templates**: One template per link role, plain placeholder substitution
//! - **Style Presets**: `default`, `raw`, `digg`, `apple`, `flickr`
//! - **No Shared State**: Every render takes its configuration by value
//!
//! ## Quick Start
//!
//! ```rust
//! use pagelinks::Pager;
//!
//! // 100 records, 10 per page, currently at offset 50
//! let html = Pager::links(100, 50, 10)
//!     .base_url("/articles?sort=date")
//!     .style("apple")
//!     .render()?;
//! assert!(html.contains(r#"<em class="current">6</em>"#));
//!
//! // Nothing to paginate
//! assert_eq!(pagelinks::render(20, 0, 25, None)?, "");
//! # Ok::<(), pagelinks::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────┐   ┌──────────────┐   ┌───────────────────┐
//! │ PaginationState       │   │              │   │ LinkRenderer      │
//! │ record_count, offset, ├──►│  PageLinks   ├──►│ TemplateSet       │
//! │ per_page              │   │  (metadata)  │   │ [+placeholders+]  │
//! │ WindowConfig          │   │              │   │                   │
//! └───────────────────────┘   └──────────────┘   └───────────────────┘
//! ```
//!
//! The base URL is embedded verbatim. It must be sanitized by the caller.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// Page window arithmetic and link metadata
pub mod pagination;

/// Placeholder substitution
pub mod template;

/// Link rendering
pub mod renderer;

/// Built-in style presets
pub mod styles;

/// Fluent builder and primary entry point
pub mod pager;

/// Configuration files
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::LinkRole;

pub use config::{load_config, load_config_from_str, PagerConfig};
pub use pager::{render, Pager};
pub use pagination::{offset_to_page, page_to_offset, PageLinks, PaginationState, WindowConfig};
pub use renderer::TemplateSet;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
