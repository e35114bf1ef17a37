//! The end-to-end run: config, keys, prompts, signing, composing, rendering, writing.
//!
//! Each stage's error aborts the run; nothing is retried and no partial
//! output is written.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::builder::{BuildError, EntryBuilder};
use crate::config::{Config, ConfigError};
use crate::constants;
use crate::env::Env;
use crate::factom::EntryComposer;
use crate::models::SubmissionPayloads;
use crate::output::{self, CurlRenderer, OutputError, OutputRenderer};
use crate::submission::{self, ComposeError};

/// Any failure of a run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Where to read from and write to.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config_path: PathBuf,
    pub output_path: PathBuf,
    pub endpoint: String,
    /// Overrides the chain id from config and environment.
    pub chain_id: Option<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(constants::CONFIG_FILENAME),
            output_path: PathBuf::from(constants::OUTPUT_FILENAME),
            endpoint: constants::DEFAULT_ENDPOINT.to_string(),
            chain_id: None,
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub payloads: SubmissionPayloads,
    /// Text printed to the terminal and written to `output_path`.
    pub rendered: String,
    pub output_path: PathBuf,
    pub bytes_written: usize,
}

/// Run the whole pipeline once.
///
/// Prompts go to `prompt_out` and answers are read from `reader`.
pub fn run<R, W, C>(
    options: &RunOptions,
    env: &Env,
    reader: &mut R,
    prompt_out: &mut W,
    composer: &mut C,
) -> Result<RunReport, PipelineError>
where
    R: BufRead,
    W: Write,
    C: EntryComposer + ?Sized,
{
    let config = Config::load(&options.config_path, env)?;

    let mut builder = EntryBuilder::from_config(&config)?;
    if let Some(chain_id) = &options.chain_id {
        builder = builder.with_chain_id(chain_id.clone())?;
    }

    let signed = builder.build(reader, prompt_out)?;
    let paying = builder.paying_address();
    let payloads = submission::compose(signed, &paying, composer)?;

    let rendered = CurlRenderer::new(options.endpoint.clone()).render(&payloads);
    let bytes_written = output::persist(&options.output_path, &rendered)?;

    tracing::info!(
        path = %options.output_path.display(),
        bytes = bytes_written,
        "submission commands written"
    );

    Ok(RunReport {
        payloads,
        rendered,
        output_path: options.output_path.clone(),
        bytes_written,
    })
}
