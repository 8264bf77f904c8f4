use std::str::Chars;

use crate::TextSize;

/// A view into the characters of a string that tracks how much of it was consumed.
pub(crate) struct Cursor<'s> {
    text: &'s str,
    len: TextSize,
}

impl<'s> Cursor<'s> {
    pub fn new(text: &'s str) -> Cursor<'s> {
        Cursor {
            text,
            len: 0.into(),
        }
    }

    /// Consumes the cursor, returning the number of bytes that were consumed.
    pub fn into_len(self) -> TextSize {
        self.len
    }

    /// Gets the current character, if one exists
    pub fn current(&self) -> Option<char> {
        self.chars().next()
    }

    /// Checks whether the current character is `c`.
    pub fn matches(&self, c: char) -> bool {
        self.current() == Some(c)
    }

    /// Checks whether the remaining text starts with `s`.
    pub fn matches_str(&self, s: &str) -> bool {
        self.chars().as_str().starts_with(s)
    }

    /// Move to the next character
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.chars().next()?;
        self.len += TextSize::of(ch);
        Some(ch)
    }

    /// Moves to the next character as long as `predicate` is satisfied.
    pub fn bump_while<F: Fn(char) -> bool>(&mut self, predicate: F) {
        while self.current().is_some_and(&predicate) {
            self.bump();
        }
    }

    /// Returns the text consumed so far.
    pub fn current_token_text(&self) -> &str {
        &self.text[..usize::from(self.len)]
    }

    fn chars(&self) -> Chars<'_> {
        self.text[usize::from(self.len)..].chars()
    }
}
