// std imports
use std::path::PathBuf;

// third-party imports
use clap::{Parser, ValueEnum};

// local imports
use crate::settings;

// ---

/// Shell-style glob pattern compiler.
///
/// Compiles each pattern and prints its compiled representation.
/// Patterns are read from stdin, one per line, if none are given.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Configuration file path, can be specified multiple times.
    #[arg(long, value_name = "FILE", number_of_values = 1)]
    pub config: Vec<PathBuf>,

    /// Output format [default from configuration: debug].
    #[arg(long, short = 'f', env = "JOKER_OUTPUT_FORMAT", overrides_with = "output_format")]
    #[arg(value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Fail if any pattern had to be repaired.
    #[arg(long, short = 's', env = "JOKER_STRICT", overrides_with = "strict")]
    pub strict: bool,

    /// Do not print diagnostics for repaired patterns.
    #[arg(long, short = 'q', overrides_with = "quiet")]
    pub quiet: bool,

    /// Patterns to compile.
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Debug,
    Pattern,
    Json,
}

impl From<OutputFormat> for settings::OutputFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Debug => Self::Debug,
            OutputFormat::Pattern => Self::Pattern,
            OutputFormat::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests;
