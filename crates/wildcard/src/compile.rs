use crate::{
    classify::Class,
    diagnostic::{Diagnostic, DiagnosticKind, LogSink, Sink},
    part::{Builder, Wildcard},
};

/// Compiles a pattern, forwarding diagnostics to the `log` facade.
///
/// # Examples
///
/// ```
/// use joker_wildcard::{compile, Wildpart};
///
/// let wildcard = compile(r"\*.[ch]");
/// assert_eq!(
///     wildcard.parts(),
///     &[Wildpart::Fixed("*.".into()), Wildpart::Group("ch".into())]
/// );
/// ```
pub fn compile(pattern: &str) -> Wildcard {
    compile_with(pattern, &mut LogSink::new(pattern))
}

/// Compiles a pattern, reporting diagnostics to the given sink.
///
/// # Examples
///
/// ```
/// use joker_wildcard::{compile_with, Diagnostic, DiagnosticKind, Wildpart};
///
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
/// let wildcard = compile_with("[ab", &mut diagnostics);
/// assert_eq!(wildcard.parts(), &[Wildpart::Group("ab".into())]);
/// assert_eq!(diagnostics, [Diagnostic::new(DiagnosticKind::UnfinishedGroup, 3)]);
/// ```
pub fn compile_with<S: Sink + ?Sized>(pattern: &str, sink: &mut S) -> Wildcard {
    let mut compiler = Compiler::new(sink);
    for ch in pattern.chars() {
        compiler.feed(ch);
    }
    compiler.finish()
}

/// Compiles a pattern, collecting diagnostics along with the result.
pub fn compile_collect(pattern: &str) -> Compilation {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let wildcard = compile_with(pattern, &mut diagnostics);
    Compilation { wildcard, diagnostics }
}

/// Result of [`compile_collect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    pub wildcard: Wildcard,
    pub diagnostics: Vec<Diagnostic>,
}

impl Compilation {
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    Normal,
    Escape,
    InGroup,
    GroupEscape,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    BeginEscape,
    OpenGroup,
    StrayClose,
    Kleene,
    Wild,
    Fixed,
    Finish,
    Escaped,
    NoopEscape,
    DanglingEscape,
    BeginGroupEscape,
    StrayOpen,
    CloseGroup,
    GroupChar,
    Unfinished,
    GroupEscaped,
    GroupNoopEscape,
}

use Transition::*;

/// Maps (state, class) to a transition; columns follow [`Class::index`].
#[rustfmt::skip]
pub(crate) const TABLE: [[Transition; Class::COUNT]; 4] = [
    // \                 [             ]             *                ?                any              end
    [BeginEscape,      OpenGroup,    StrayClose,   Kleene,          Wild,            Fixed,           Finish],
    [Escaped,          Escaped,      Escaped,      Escaped,         Escaped,         NoopEscape,      DanglingEscape],
    [BeginGroupEscape, StrayOpen,    CloseGroup,   GroupChar,       GroupChar,       GroupChar,       Unfinished],
    [GroupEscaped,     GroupEscaped, GroupEscaped, GroupNoopEscape, GroupNoopEscape, GroupNoopEscape, Unfinished],
];

pub(crate) struct Compiler<'s, S: Sink + ?Sized> {
    builder: Builder,
    state: State,
    offset: usize,
    sink: &'s mut S,
}

impl<'s, S: Sink + ?Sized> Compiler<'s, S> {
    pub fn new(sink: &'s mut S) -> Self {
        Self {
            builder: Builder::new(),
            state: State::Normal,
            offset: 0,
            sink,
        }
    }

    pub fn feed(&mut self, ch: char) {
        self.step(Class::of(ch), ch);
        self.offset += 1;
    }

    pub fn finish(mut self) -> Wildcard {
        // input is never looked at by end-of-input transitions
        self.step(Class::EndOfInput, '\0');
        debug_assert_eq!(self.state, State::Done);
        self.builder.build()
    }

    #[cfg(test)]
    pub fn steps(&self) -> usize {
        self.offset + (self.state == State::Done) as usize
    }

    fn step(&mut self, class: Class, input: char) {
        let row = match self.state {
            State::Normal => 0,
            State::Escape => 1,
            State::InGroup => 2,
            State::GroupEscape => 3,
            State::Done => return,
        };
        let transition = TABLE[row][class.index()];
        let before = self.state;
        self.execute(transition, input);
        log::trace!(
            "step {}: {:?} --{:?}/{:?}--> {:?}",
            self.offset,
            before,
            class,
            transition,
            self.state
        );
    }

    fn execute(&mut self, transition: Transition, input: char) {
        match transition {
            BeginEscape => {
                self.state = State::Escape;
            }
            OpenGroup => {
                self.state = State::InGroup;
                self.builder.open_group();
            }
            StrayClose => {
                self.builder.append_fixed(input);
                self.warn(DiagnosticKind::UnescapedCloseBracket);
            }
            Kleene => {
                self.builder.append_kleene();
            }
            Wild => {
                self.builder.append_wild();
            }
            Fixed => {
                self.builder.append_fixed(input);
            }
            Finish => {
                self.state = State::Done;
            }
            Escaped => {
                self.state = State::Normal;
                self.builder.append_fixed(input);
            }
            NoopEscape => {
                self.state = State::Normal;
                self.builder.append_fixed('\\');
                self.builder.append_fixed(input);
            }
            DanglingEscape => {
                self.state = State::Done;
                self.builder.append_fixed('\\');
                self.warn(DiagnosticKind::TrailingEscape);
            }
            BeginGroupEscape => {
                self.state = State::GroupEscape;
            }
            StrayOpen => {
                self.builder.append_group(input);
                self.warn(DiagnosticKind::UnescapedOpenBracketInGroup);
            }
            CloseGroup => {
                self.state = State::Normal;
            }
            GroupChar => {
                self.builder.append_group(input);
            }
            Unfinished => {
                self.state = State::Done;
                self.warn(DiagnosticKind::UnfinishedGroup);
            }
            GroupEscaped => {
                self.state = State::InGroup;
                self.builder.append_group(input);
            }
            GroupNoopEscape => {
                self.state = State::InGroup;
                self.builder.append_group('\\');
                self.builder.append_group(input);
            }
        }
    }

    fn warn(&mut self, kind: DiagnosticKind) {
        self.sink.warn(Diagnostic::new(kind, self.offset));
    }
}
