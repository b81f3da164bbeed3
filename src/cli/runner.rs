//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, PageArgs};
use crate::config::PagerConfig;
use crate::dataset::{CsvDatasetProvider, DatasetProvider};
use crate::error::Result;
use crate::pagination::{PageRequest, Paginator};
use serde::Serialize;
use serde_json::json;
use std::io::Write;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the config file, if any, and apply command-line overrides
    pub fn load_config(&self) -> Result<PagerConfig> {
        let mut config = match &self.cli.config {
            Some(path) => PagerConfig::from_file(path)?,
            None => PagerConfig::default(),
        };

        if let Some(data) = &self.cli.data {
            config.dataset.path.clone_from(data);
        }
        if let Some(delimiter) = self.cli.delimiter {
            config.dataset.decoder.delimiter = delimiter;
        }
        if self.cli.no_header {
            config.dataset.decoder.has_header = false;
        }
        if self.cli.strict {
            config.dataset.decoder.strict_columns = true;
        }

        config.validate()?;
        Ok(config)
    }

    /// Log level for this invocation
    pub fn log_level(&self, config: &PagerConfig) -> tracing::Level {
        if self.cli.verbose {
            tracing::Level::DEBUG
        } else {
            config.log_level.into()
        }
    }

    /// Run the CLI command against a loaded config
    pub fn run_with<W: Write>(&self, config: &PagerConfig, out: &mut W) -> Result<()> {
        let provider = CsvDatasetProvider::from_config(&config.dataset)?;
        let paginator = Paginator::new(provider);

        match &self.cli.command {
            Commands::Page { args } => {
                let request = request(config, *args)?;
                let rows = paginator.page(request)?;
                self.emit(out, rows)
            }
            Commands::Hyper { args } => {
                let request = request(config, *args)?;
                let hyper = paginator.hyper(request)?;
                self.emit(out, &hyper)
            }
            Commands::Info { page_size } => {
                let args = PageArgs {
                    page: None,
                    page_size: *page_size,
                };
                let request = request(config, args)?;
                self.info(&paginator, request, out)
            }
        }
    }

    /// Summarize the dataset
    fn info<W: Write>(
        &self,
        paginator: &Paginator<CsvDatasetProvider>,
        request: PageRequest,
        out: &mut W,
    ) -> Result<()> {
        let provider = paginator.provider();
        let records = provider.length()?;
        let columns = provider.header()?;

        let summary = json!({
            "path": provider.path().display().to_string(),
            "records": records,
            "columns": columns,
            "page_size": request.page_size(),
            "total_pages": paginator.total_pages(request.page_size())?,
        });
        self.emit(out, &summary)
    }

    /// Write a value in the selected output format
    fn emit<W: Write, T: Serialize + ?Sized>(&self, out: &mut W, value: &T) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => serde_json::to_writer(&mut *out, value)?,
            OutputFormat::Pretty => serde_json::to_writer_pretty(&mut *out, value)?,
        }
        writeln!(out)?;
        Ok(())
    }
}

/// Build a request from arguments, falling back to the configured defaults
fn request(config: &PagerConfig, args: PageArgs) -> Result<PageRequest> {
    let defaults = config.defaults;
    PageRequest::from_signed(
        args.page.unwrap_or_else(|| saturating_i64(defaults.page)),
        args.page_size
            .unwrap_or_else(|| saturating_i64(defaults.page_size)),
    )
}

fn saturating_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
