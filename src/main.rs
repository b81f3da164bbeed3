//! hyperpage CLI
//!
//! Command-line interface for paging through a dataset file

use clap::Parser;
use hyperpage::cli::{Cli, Runner};

fn main() {
    let cli = Cli::parse();
    let runner = Runner::new(cli);

    let result = runner.load_config().and_then(|config| {
        // Initialize logging; stdout carries the JSON output
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(runner.log_level(&config).into()),
            )
            .init();

        runner.run_with(&config, &mut std::io::stdout().lock())
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(if e.is_client_error() { 2 } else { 1 });
    }
}
