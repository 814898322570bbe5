use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::classify::Class;

/// A compiled glob pattern.
///
/// The parts are ordered as they must be matched. Adjacent literal characters
/// are always merged into a single [`Wildpart::Fixed`], and runs of wildcards
/// that include a `*` collapse into a single [`Wildpart::Kleene`].
///
/// # Examples
///
/// ```
/// use joker_wildcard::{Wildcard, Wildpart};
///
/// let wildcard = Wildcard::new("a*b");
/// assert_eq!(
///     wildcard.parts(),
///     &[Wildpart::Fixed("a".into()), Wildpart::Kleene, Wildpart::Fixed("b".into())]
/// );
/// ```
///
/// - Wildcards can be displayed back as canonical patterns via the `Display` trait
#[derive(Debug, PartialEq, Eq, Clone, Default, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct Wildcard {
    parts: Vec<Wildpart>,
}

impl Wildcard {
    /// Compiles a pattern, forwarding diagnostics to the `log` facade.
    ///
    /// This function is infallible; malformed patterns are repaired.
    pub fn new(pattern: impl AsRef<str>) -> Self {
        crate::compile(pattern.as_ref())
    }

    #[inline]
    pub fn parts(&self) -> &[Wildpart] {
        &self.parts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Wildpart> {
        self.parts.iter()
    }

    #[inline]
    pub fn into_parts(self) -> Vec<Wildpart> {
        self.parts
    }
}

impl<'a> IntoIterator for &'a Wildcard {
    type Item = &'a Wildpart;
    type IntoIter = std::slice::Iter<'a, Wildpart>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Wildcard {
    type Item = Wildpart;
    type IntoIter = std::vec::IntoIter<Wildpart>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.into_iter()
    }
}

impl fmt::Display for Wildcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

// ---

/// One unit of a compiled [`Wildcard`].
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "kebab-case"))]
pub enum Wildpart {
    /// Non-empty literal text matched verbatim.
    Fixed(String),
    /// Exactly one arbitrary character.
    Wild,
    /// Zero or more arbitrary characters.
    Kleene,
    /// Exactly one character of the raw class text found between `[` and `]`.
    Group(String),
}

impl Wildpart {
    #[inline]
    pub fn kind(&self) -> PartKind {
        match self {
            Self::Fixed(_) => PartKind::Fixed,
            Self::Wild => PartKind::Wild,
            Self::Kleene => PartKind::Kleene,
            Self::Group(_) => PartKind::Group,
        }
    }
}

impl fmt::Display for Wildpart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(text) => {
                for ch in text.chars() {
                    if Class::of(ch).is_special() {
                        write!(f, "\\{}", ch)?;
                    } else {
                        write!(f, "{}", ch)?;
                    }
                }
                Ok(())
            }
            Self::Wild => write!(f, "?"),
            Self::Kleene => write!(f, "*"),
            Self::Group(text) => {
                write!(f, "[")?;
                for ch in text.chars() {
                    match ch {
                        '\\' | '[' | ']' => write!(f, "\\{}", ch)?,
                        _ => write!(f, "{}", ch)?,
                    }
                }
                write!(f, "]")
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PartKind {
    Fixed,
    Wild,
    Kleene,
    Group,
}

// ---

/// Accumulates parts applying the merge rules.
///
/// The kind of the last part is always read from the sequence itself.
#[derive(Debug, Default)]
pub(crate) struct Builder {
    parts: Vec<Wildpart>,
    fresh_group: bool,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_fixed(&mut self, ch: char) {
        match self.parts.last_mut() {
            Some(Wildpart::Fixed(text)) => text.push(ch),
            _ => self.parts.push(Wildpart::Fixed(ch.into())),
        }
    }

    pub fn append_wild(&mut self) {
        // *? --> *
        if self.last_kind() != Some(PartKind::Kleene) {
            self.parts.push(Wildpart::Wild);
        }
    }

    pub fn append_kleene(&mut self) {
        // ?* --> *, repeated so that no wild is left in front of the kleene
        while self.last_kind() == Some(PartKind::Wild) {
            self.parts.pop();
        }

        // ** --> *
        if self.last_kind() != Some(PartKind::Kleene) {
            self.parts.push(Wildpart::Kleene);
        }
    }

    /// Makes the next [`Builder::append_group`] start a new group part.
    pub fn open_group(&mut self) {
        self.fresh_group = true;
    }

    pub fn append_group(&mut self, ch: char) {
        match self.parts.last_mut() {
            Some(Wildpart::Group(text)) if !self.fresh_group => text.push(ch),
            _ => self.parts.push(Wildpart::Group(ch.into())),
        }
        self.fresh_group = false;
    }

    pub fn build(self) -> Wildcard {
        Wildcard { parts: self.parts }
    }

    #[inline]
    fn last_kind(&self) -> Option<PartKind> {
        self.parts.last().map(Wildpart::kind)
    }
}

#[cfg(test)]
mod tests;
