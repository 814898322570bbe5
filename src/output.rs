// std imports
use std::fmt;
use std::io::Write;

// third-party imports
use joker_wildcard::{Wildcard, Wildpart};

// local imports
use crate::{error::Result, settings::OutputFormat};

// ---

/// Writes a compiled pattern in the requested format.
///
/// - `debug` writes the quoted source pattern followed by one indented line per part
/// - `pattern` writes the canonical pattern text
/// - `json` writes the serialized part sequence
pub fn write(format: OutputFormat, pattern: &str, wildcard: &Wildcard, target: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Debug => {
            writeln!(target, "{:?}", pattern)?;
            for part in wildcard {
                writeln!(target, "  {}", PartView(part))?;
            }
        }
        OutputFormat::Pattern => {
            writeln!(target, "{}", wildcard)?;
        }
        OutputFormat::Json => {
            writeln!(target, "{}", json::to_string(wildcard)?)?;
        }
    }
    Ok(())
}

// ---

struct PartView<'a>(&'a Wildpart);

impl fmt::Display for PartView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Wildpart::Fixed(text) => write!(f, "fixed {:?}", text),
            Wildpart::Wild => write!(f, "wild"),
            Wildpart::Kleene => write!(f, "kleene"),
            Wildpart::Group(text) => write!(f, "group {:?}", text),
        }
    }
}
