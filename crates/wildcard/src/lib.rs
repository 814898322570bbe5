//! Compiler of shell-style glob patterns.
//!
//! This crate turns a pattern into a [`Wildcard`], an ordered sequence of
//! [`Wildpart`]s ready to be consumed by a matcher. It does not match anything
//! by itself, and it does not interpret the contents of bracket groups.
//!
//! # Pattern Syntax
//!
//! - `*` - Zero or more characters, compiled to [`Wildpart::Kleene`]
//! - `?` - Exactly one character, compiled to [`Wildpart::Wild`]
//! - `[...]` - One character of a class, compiled to [`Wildpart::Group`] holding the raw class text
//! - `\*`, `\?`, `\[`, `\]`, `\\` - Escaped literal characters
//! - `\` followed by any other character keeps both characters literally
//! - Any other character matches itself, runs of them become one [`Wildpart::Fixed`]
//!
//! # Malformed Patterns
//!
//! Compilation never fails. A stray `]`, a `[` inside of a group, an unfinished
//! group or a trailing `\` are repaired, and a [`Diagnostic`] is reported to a [`Sink`].
//!
//! ```
//! use joker_wildcard::{compile_collect, DiagnosticKind, Wildpart};
//!
//! let result = compile_collect("a]b");
//! assert_eq!(result.wildcard.parts(), &[Wildpart::Fixed("a]b".into())]);
//! assert_eq!(result.diagnostics[0].kind, DiagnosticKind::UnescapedCloseBracket);
//! ```
//!
//! # Pattern Display
//!
//! Compiled wildcards can be converted back to canonical patterns:
//!
//! ```
//! use joker_wildcard::Wildcard;
//!
//! assert_eq!(Wildcard::new("?*x*?").to_string(), "*x*");
//! assert_eq!(Wildcard::new(r"\a[\*]").to_string(), r"\\a[\\*]");
//! ```

mod classify;
mod compile;
mod diagnostic;
mod part;

pub use classify::Class;
pub use compile::{Compilation, compile, compile_collect, compile_with};
pub use diagnostic::{Diagnostic, DiagnosticKind, Ignore, LogSink, Sink};
pub use part::{PartKind, Wildcard, Wildpart};
