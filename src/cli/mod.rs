//! CLI module
//!
//! Command-line interface for rendering pagination.
//!
//! # Commands
//!
//! - `render` - Render links (HTML) or link metadata (JSON) for a record count
//! - `styles` - List built-in style presets
//! - `offset-to-page` / `page-to-offset` - Convert between query parameter styles

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{RenderArgs, Runner};
