//! Output rendering and the `FERComposeCurls.dat` file.
//!
//! The rendered text is plain (no ANSI styling) so the terminal and the
//! file carry exactly the same bytes.

pub mod curl;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::SubmissionPayloads;

pub use curl::CurlRenderer;

/// Trait for rendering composed payloads to text.
pub trait OutputRenderer {
    fn render(&self, payloads: &SubmissionPayloads) -> String;
}

/// Errors writing the output file.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("could not open output file {}", .path.display())]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not write to the output file {}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Create or truncate `path` and write `rendered` to it. Returns the byte count.
pub fn persist(path: &Path, rendered: &str) -> Result<usize, OutputError> {
    let file = File::create(path).map_err(|source| OutputError::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;

    let write_err = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(file);
    writer.write_all(rendered.as_bytes()).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    tracing::debug!(path = %path.display(), bytes = rendered.len(), "output written");
    Ok(rendered.len())
}
