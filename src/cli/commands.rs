//! CLI commands and argument parsing

use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pagination toolkit CLI
#[derive(Parser, Debug)]
#[command(name = "pagekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode values into a cursor token
    Encode {
        /// Values in sort-key order
        values: Vec<String>,
    },

    /// Decode a cursor token
    Decode {
        /// Cursor token
        token: String,

        /// Require exactly one value
        #[arg(long)]
        single: bool,
    },

    /// Show offset and navigation for a page request
    Page {
        /// Page number (starting at 1)
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Page size
        #[arg(long, default_value_t = i64::from(DEFAULT_PAGE_SIZE), allow_negative_numbers = true)]
        page_size: i64,

        /// Total number of rows in the dataset
        #[arg(long, default_value = "0")]
        total: u64,
    },
}

impl Commands {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Encode { .. } => "encode",
            Self::Decode { .. } => "decode",
            Self::Page { .. } => "page",
        }
    }
}
