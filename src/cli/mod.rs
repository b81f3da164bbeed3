//! CLI module
//!
//! Command-line wrapper around the paginator.
//!
//! # Commands
//!
//! - `page` - Print the records on one page
//! - `hyper` - Print one page with navigation metadata
//! - `info` - Show dataset size, columns and page count

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, PageArgs};
pub use runner::Runner;
