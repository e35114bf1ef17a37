//! fer-compose: build and sign a Factom FER entry.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use fer_compose::config::ConfigError;
use fer_compose::env::Env;
use fer_compose::factom::FactomComposer;
use fer_compose::pipeline::{self, PipelineError};

use cli::args::Cli;

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        cli::print_error(&err);
        if let Some(PipelineError::Config(ConfigError::FileMissing { path })) =
            err.downcast_ref::<PipelineError>()
        {
            cli::print_sample_config(path);
        }
        process::exit(1);
    }
}

/// Logs go to stderr so prompts and the banner on stdout stay clean.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.run_options();
    let mut composer = FactomComposer::new();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout().lock();

    let report = pipeline::run(&options, &Env::process(), &mut reader, &mut stdout, &mut composer)?;

    writeln!(stdout).context("failed to write to stdout")?;
    write!(stdout, "{}", report.rendered).context("failed to write to stdout")?;
    stdout.flush().context("failed to write to stdout")?;
    drop(stdout);

    cli::print_written(&report.output_path, report.bytes_written);
    Ok(())
}
