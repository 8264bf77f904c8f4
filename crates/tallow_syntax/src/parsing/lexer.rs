//! Splits Tallow source text into tokens. Every character of the input ends up in exactly one
//! token, so the concatenated token texts always reproduce the input.

mod classes;
mod comments;
mod cursor;
mod numbers;

use self::{
    classes::{is_dec_digit, is_ident_continue, is_ident_start, is_whitespace},
    comments::scan_comment,
    cursor::Cursor,
    numbers::scan_number,
};
use crate::{
    SyntaxKind::{self, ERROR, IDENT, WHITESPACE},
    TextSize,
};

/// A token of Tallow source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token {
    /// The kind of token
    pub kind: SyntaxKind,

    /// The length of the token
    pub len: TextSize,
}

/// Break a string up into its component tokens
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut text = text;
    let mut result = Vec::new();
    while !text.is_empty() {
        let token = next_token(text);
        result.push(token);
        text = &text[usize::from(token.len)..];
    }
    log::trace!("tokenized input into {} tokens", result.len());
    result
}

/// Get the next token from a non-empty string
pub fn next_token(text: &str) -> Token {
    assert!(!text.is_empty(), "cannot take a token from empty text");
    let mut cursor = Cursor::new(text);
    let kind = match cursor.bump() {
        Some(c) => next_token_inner(c, &mut cursor),
        None => ERROR,
    };
    Token {
        kind,
        len: cursor.into_len(),
    }
}

fn next_token_inner(c: char, cursor: &mut Cursor<'_>) -> SyntaxKind {
    if is_whitespace(c) {
        cursor.bump_while(is_whitespace);
        return WHITESPACE;
    }

    if c == '/' {
        if let Some(kind) = scan_comment(cursor) {
            return kind;
        }
    }

    if is_ident_start(c) {
        return scan_identifier_or_keyword(cursor);
    }

    if is_dec_digit(c) {
        return scan_number(cursor);
    }

    SyntaxKind::from_char(c).unwrap_or(ERROR)
}

fn scan_identifier_or_keyword(cursor: &mut Cursor<'_>) -> SyntaxKind {
    cursor.bump_while(is_ident_continue);
    SyntaxKind::from_keyword(cursor.current_token_text()).unwrap_or(IDENT)
}
