//! Clap argument types.

use clap::Parser;
use std::path::PathBuf;

use fer_compose::constants;
use fer_compose::pipeline::RunOptions;

/// Build and sign a Factom FER entry and write ready-to-run commit/reveal calls.
#[derive(Parser, Debug)]
#[command(
    name = constants::APP_NAME,
    version = constants::VERSION,
    about = super::ABOUT_STYLED,
)]
pub struct Cli {
    /// Config file holding the payment and signing keys.
    #[arg(long, default_value = constants::CONFIG_FILENAME)]
    pub config: PathBuf,

    /// File the rendered commands are written to (overwritten).
    #[arg(long, default_value = constants::OUTPUT_FILENAME)]
    pub output: PathBuf,

    /// factomd API endpoint the `curl` lines post to.
    #[arg(long, default_value = constants::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Chain to write the entry to (64 hex characters).
    /// Overrides `ChainId` in the config file and FER_CHAIN_ID.
    #[arg(long, value_parser = parse_chain_id)]
    pub chain_id: Option<String>,

    /// Log pipeline steps to stderr (RUST_LOG takes precedence).
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,

    /// Disable colored status output.
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

fn parse_chain_id(s: &str) -> Result<String, String> {
    fer_compose::factom::parse_chain_id(s)
        .map(|_| s.to_string())
        .map_err(|e| e.to_string())
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            config_path: self.config.clone(),
            output_path: self.output.clone(),
            endpoint: self.endpoint.clone(),
            chain_id: self.chain_id.clone(),
        }
    }
}
