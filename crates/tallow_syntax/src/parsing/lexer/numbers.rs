use crate::{
    parsing::lexer::cursor::Cursor,
    SyntaxKind::{self, INT_NUMBER},
};

/// Scans the remainder of a decimal integer literal whose first digit was already consumed.
/// Underscores may be used to group digits, e.g. `1_000_000`.
pub(crate) fn scan_number(cursor: &mut Cursor<'_>) -> SyntaxKind {
    cursor.bump_while(|c| c.is_ascii_digit() || c == '_');
    INT_NUMBER
}
