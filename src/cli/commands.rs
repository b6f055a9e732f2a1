//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Render pagination links from a record count
#[derive(Parser, Debug)]
#[command(name = "pagelinks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pager configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render pagination for a record count
    Render {
        /// Total number of records being paginated
        record_count: u64,

        /// Offset of the first record on the current page
        #[arg(long, conflicts_with = "page")]
        offset: Option<u64>,

        /// Current page number (one-based)
        #[arg(long)]
        page: Option<u64>,

        /// Records per page (overrides the config file)
        #[arg(long)]
        per_page: Option<u64>,

        /// Base URL for every link; must already be sanitized
        #[arg(long)]
        base_url: Option<String>,

        /// Style preset (see `styles`)
        #[arg(long)]
        style: Option<String>,

        /// Number of page links shown at once
        #[arg(long)]
        link_cnt: Option<u64>,

        /// Pages skipped per Prev/Next click
        #[arg(long)]
        jump_size: Option<u64>,

        /// Output format
        #[arg(short, long, default_value = "html")]
        format: OutputFormat,
    },

    /// List built-in style presets
    Styles,

    /// Convert a record offset to a page number
    OffsetToPage {
        offset: u64,

        #[arg(long)]
        per_page: u64,
    },

    /// Convert a page number to a record offset
    PageToOffset {
        page: u64,

        #[arg(long)]
        per_page: u64,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Rendered markup
    Html,
    /// Link metadata as JSON
    Json,
}
