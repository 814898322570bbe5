use std::fmt;

/// A condition detected and repaired while compiling a pattern.
///
/// None of them stops compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// `]` outside of a group, kept as a literal character.
    UnescapedCloseBracket,
    /// `[` inside of a group, kept as a class character.
    UnescapedOpenBracketInGroup,
    /// The pattern ended inside of a group, the group is kept as seen so far.
    UnfinishedGroup,
    /// The pattern ended right after `\`, which is kept as a literal character.
    TrailingEscape,
}

impl DiagnosticKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::UnescapedCloseBracket => "unescaped ]",
            Self::UnescapedOpenBracketInGroup => "unescaped [ in group",
            Self::UnfinishedGroup => "unfinished group",
            Self::TrailingEscape => "trailing escape",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A diagnostic with the character offset in the pattern it refers to.
///
/// Conditions detected at the end of the pattern refer to the offset
/// equal to the number of characters in the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub offset: usize,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.offset)
    }
}

// ---

/// Receiver of diagnostics produced during compilation.
///
/// Every call is advisory, the compiler never looks at what the sink does with it.
pub trait Sink {
    fn warn(&mut self, diagnostic: Diagnostic);
}

impl<F: FnMut(Diagnostic)> Sink for F {
    #[inline]
    fn warn(&mut self, diagnostic: Diagnostic) {
        self(diagnostic)
    }
}

impl Sink for Vec<Diagnostic> {
    #[inline]
    fn warn(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic)
    }
}

/// Sink that drops every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ignore;

impl Sink for Ignore {
    #[inline]
    fn warn(&mut self, _: Diagnostic) {}
}

/// Sink that forwards diagnostics to [`log::warn!`].
#[derive(Debug, Clone, Copy)]
pub struct LogSink<'a> {
    pattern: &'a str,
}

impl<'a> LogSink<'a> {
    pub fn new(pattern: &'a str) -> Self {
        Self { pattern }
    }

    /// Text of the log record emitted for the diagnostic.
    pub fn message(&self, diagnostic: Diagnostic) -> String {
        format!("pattern {:?}: {}", self.pattern, diagnostic)
    }
}

impl Sink for LogSink<'_> {
    fn warn(&mut self, diagnostic: Diagnostic) {
        log::warn!("{}", self.message(diagnostic));
    }
}
