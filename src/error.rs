// std imports
use std::io::{self, Write};

// third-party imports
use config::ConfigError;
use thiserror::Error;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to serialize compiled pattern: {0}")]
    Json(#[from] json::Error),
    #[error("{count} diagnostic(s) reported in strict mode")]
    Diagnostics { count: usize },
}

impl Error {
    /// Prints the error to stderr.
    pub fn log(&self) {
        self.log_to(&mut io::stderr()).ok();
    }

    pub fn log_to(&self, target: &mut dyn Write) -> io::Result<()> {
        writeln!(target, "error: {}", self)
    }

    /// Returns `true` if the error is caused by the reader side of the output going away.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
