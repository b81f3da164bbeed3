//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Page through a static tabular dataset
#[derive(Parser, Debug)]
#[command(name = "hyperpage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset file (overrides the config file)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Field delimiter (overrides the config file)
    #[arg(long, global = true)]
    pub delimiter: Option<char>,

    /// Treat the first row as data instead of a header
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Reject rows whose field count differs from the header
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the records on one page
    Page {
        #[command(flatten)]
        args: PageArgs,
    },

    /// Print one page with next/prev page numbers and the page count
    Hyper {
        #[command(flatten)]
        args: PageArgs,
    },

    /// Show record count, column names and page count
    Info {
        /// Records per page used to count pages
        #[arg(short = 's', long, allow_negative_numbers = true)]
        page_size: Option<i64>,
    },
}

/// Page selection shared by `page` and `hyper`
///
/// Values are signed so that zero and negative input reach the paginator's
/// validation instead of failing inside the argument parser.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct PageArgs {
    /// Page number, starting at 1
    #[arg(short, long, allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Records per page
    #[arg(short = 's', long, allow_negative_numbers = true)]
    pub page_size: Option<i64>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
