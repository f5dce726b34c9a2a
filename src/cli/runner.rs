//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::codec::{decode_cursor, decode_cursor_single, encode_cursor};
use crate::config::Config;
use crate::error::Result;
use crate::pagination::PageRequest;
use crate::types::OutputFormat;
use serde_json::json;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
    output: OutputFormat,
}

impl Runner {
    /// Create a new runner. `--format` wins over the configured output.
    pub fn new(cli: Cli, config: &Config) -> Self {
        let output = cli.format.unwrap_or(config.output);
        Self { cli, output }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let rendered = self.execute()?;
        info!(command = self.cli.command.name(), "Command completed");
        println!("{rendered}");
        Ok(())
    }

    /// Run the CLI command and return what it would print
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::Encode { values } => self.encode(values),
            Commands::Decode { token, single } => self.decode(token, *single),
            Commands::Page {
                page,
                page_size,
                total,
            } => self.page(*page, *page_size, *total),
        }
    }

    /// Encode values into a token
    fn encode(&self, values: &[String]) -> Result<String> {
        debug!(count = values.len(), "Encoding cursor");
        let token = encode_cursor(values);

        Ok(match self.output {
            OutputFormat::Json => json!({ "cursor": token }).to_string(),
            OutputFormat::Pretty => token,
        })
    }

    /// Decode a token into its values
    fn decode(&self, token: &str, single: bool) -> Result<String> {
        debug!(single, len = token.len(), "Decoding cursor");
        let values = if single {
            vec![decode_cursor_single(token)?]
        } else {
            decode_cursor(token)?
        };
        debug!(count = values.len(), "Decoded cursor");

        Ok(match self.output {
            OutputFormat::Json => json!({ "values": values }).to_string(),
            OutputFormat::Pretty => values.join("\n"),
        })
    }

    /// Validate a page request and describe the resulting page
    fn page(&self, page: i64, page_size: i64, total: u64) -> Result<String> {
        let request = PageRequest::new(page, page_size)?;
        let meta = request.to_result::<()>(Vec::new(), total).meta();
        debug!(
            page = meta.page,
            total_pages = meta.total_pages,
            "Computed page metadata"
        );

        Ok(match self.output {
            OutputFormat::Json => json!({
                "offset": request.offset(),
                "limit": request.limit(),
                "meta": meta,
            })
            .to_string(),
            OutputFormat::Pretty => format!(
                "page:        {} of {}\n\
                 page size:   {}\n\
                 offset:      {}\n\
                 limit:       {}\n\
                 total:       {}\n\
                 has next:    {}\n\
                 has prev:    {}",
                meta.page,
                meta.total_pages,
                meta.page_size,
                request.offset(),
                request.limit(),
                meta.total,
                meta.has_next,
                meta.has_prev,
            ),
        })
    }
}
