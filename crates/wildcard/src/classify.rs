/// Column of the transition table a character falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Backslash,
    OpenBracket,
    CloseBracket,
    Star,
    Question,
    Other,
    /// Never produced by [`Class::of`], selected once after the last character.
    EndOfInput,
}

impl Class {
    pub const COUNT: usize = 7;

    #[inline]
    pub fn of(ch: char) -> Self {
        match ch {
            '\\' => Self::Backslash,
            '[' => Self::OpenBracket,
            ']' => Self::CloseBracket,
            '*' => Self::Star,
            '?' => Self::Question,
            _ => Self::Other,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns `true` for the characters that have a meaning of their own in a pattern.
    #[inline]
    pub fn is_special(self) -> bool {
        !matches!(self, Self::Other | Self::EndOfInput)
    }
}
