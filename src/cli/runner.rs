//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_config, PagerConfig};
use crate::error::{Error, Result};
use crate::pagination::{offset_to_page, page_to_offset};
use crate::styles;
use tracing::debug;

/// Overrides for a single `render` invocation
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    pub record_count: u64,
    pub offset: Option<u64>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub base_url: Option<String>,
    pub style: Option<String>,
    pub link_cnt: Option<u64>,
    pub jump_size: Option<u64>,
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, printing its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        if !output.is_empty() {
            println!("{output}");
        }
        Ok(())
    }

    /// Run the CLI command and return what it would print
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::Render {
                record_count,
                offset,
                page,
                per_page,
                base_url,
                style,
                link_cnt,
                jump_size,
                format,
            } => {
                let args = RenderArgs {
                    record_count: *record_count,
                    offset: *offset,
                    page: *page,
                    per_page: *per_page,
                    base_url: base_url.clone(),
                    style: style.clone(),
                    link_cnt: *link_cnt,
                    jump_size: *jump_size,
                };
                self.render(&args, *format)
            }
            Commands::Styles => Ok(styles::list_styles().join("\n")),
            Commands::OffsetToPage { offset, per_page } => {
                Ok(offset_to_page(*offset, require_per_page(*per_page)?).to_string())
            }
            Commands::PageToOffset { page, per_page } => {
                Ok(page_to_offset(*page, require_per_page(*per_page)?).to_string())
            }
        }
    }

    /// Load configuration, or defaults when no file was given
    fn load_config(&self) -> Result<PagerConfig> {
        match &self.cli.config {
            Some(path) => load_config(path),
            None => Ok(PagerConfig::default()),
        }
    }

    /// Render pagination markup or metadata
    fn render(&self, args: &RenderArgs, format: OutputFormat) -> Result<String> {
        let mut config = self.load_config()?;

        // Command-line values win over the config file
        if let Some(per_page) = args.per_page {
            config.per_page = config_value("per_page", per_page)?;
        }
        if let Some(link_cnt) = args.link_cnt {
            config.link_cnt = config_value("link_cnt", link_cnt)?;
        }
        if let Some(jump_size) = args.jump_size {
            config.jump_size = config_value("jump_size", jump_size)?;
        }
        if let Some(style) = &args.style {
            config.style = Some(style.clone());
        }
        if let Some(base_url) = &args.base_url {
            config.base_url = Some(base_url.clone());
        }

        let per_page = config.per_page()?;
        let offset = match (args.offset, args.page) {
            (_, Some(page)) => page_to_offset(page, per_page),
            (Some(offset), None) => offset,
            (None, None) => 0,
        };
        debug!(
            record_count = args.record_count,
            offset, per_page, "Rendering pagination"
        );

        let pager = config.pager(args.record_count, offset)?;
        match format {
            OutputFormat::Html => pager.render(),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&pager.page_links()?)?),
        }
    }
}

/// Convert a command-line count to the config file's signed range
fn config_value(field: &str, value: u64) -> Result<i64> {
    i64::try_from(value)
        .map_err(|_| Error::invalid_value(field, format!("{value} is larger than {}", i64::MAX)))
}

fn require_per_page(per_page: u64) -> Result<u64> {
    if per_page == 0 {
        return Err(Error::not_positive("per_page"));
    }
    Ok(per_page)
}
