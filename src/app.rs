// std imports
use std::io::Write;

// third-party imports
use joker_wildcard::{Diagnostic, compile_with};

// local imports
use crate::{error::*, output, settings::OutputFormat};

pub struct Options {
    pub output_format: OutputFormat,
    pub strict: bool,
    pub quiet: bool,
}

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Compiles each pattern and writes the result to `output`.
    ///
    /// Diagnostics go to `warnings` unless the quiet mode is enabled.
    /// In strict mode the run fails after all patterns are written if any diagnostic was reported.
    pub fn run<I, S>(&self, patterns: I, output: &mut dyn Write, warnings: &mut dyn Write) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut total = 0;

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let mut diagnostics: Vec<Diagnostic> = Vec::new();
            let wildcard = compile_with(pattern, &mut diagnostics);
            log::debug!(
                "compiled {:?} into {} part(s) with {} diagnostic(s)",
                pattern,
                wildcard.len(),
                diagnostics.len()
            );

            output::write(self.options.output_format, pattern, &wildcard, output)?;

            if !self.options.quiet {
                for diagnostic in &diagnostics {
                    writeln!(warnings, "warning: pattern {:?}: {}", pattern, diagnostic)?;
                }
            }
            total += diagnostics.len();
        }

        output.flush()?;

        if self.options.strict && total != 0 {
            return Err(Error::Diagnostics { count: total });
        }

        Ok(())
    }
}
