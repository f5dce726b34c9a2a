//! CLI module
//!
//! Command-line interface for working with pagination values.
//!
//! # Commands
//!
//! - `encode` - Build a cursor token from values
//! - `decode` - Read the values inside a cursor token
//! - `page` - Validate an offset request and show its navigation metadata

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
