use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for corpus discovery, parsing, configuration, and output failures.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("no '.{}' corpus files found under '{}'", .extension, .dir.display())]
    NoInputFiles { dir: PathBuf, extension: String },
    #[error("corpus files under '{}' contained no sentences", .dir.display())]
    EmptyCorpus { dir: PathBuf },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
}
