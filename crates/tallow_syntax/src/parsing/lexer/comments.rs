use crate::{
    parsing::lexer::cursor::Cursor,
    SyntaxKind::{self, COMMENT},
};

/// Scans a comment after a leading `/`. Returns `None` if the `/` does not start a comment, in
/// which case nothing was consumed.
pub(crate) fn scan_comment(cursor: &mut Cursor<'_>) -> Option<SyntaxKind> {
    if cursor.matches('/') {
        bump_until_eol(cursor);
        Some(COMMENT)
    } else {
        scan_block_comment(cursor)
    }
}

fn scan_block_comment(cursor: &mut Cursor<'_>) -> Option<SyntaxKind> {
    if !cursor.matches('*') {
        return None;
    }
    cursor.bump();

    // Block comments nest; an unterminated comment runs to the end of the input.
    let mut depth: u32 = 1;
    while depth > 0 {
        if cursor.matches_str("*/") {
            depth -= 1;
            cursor.bump();
            cursor.bump();
        } else if cursor.matches_str("/*") {
            depth += 1;
            cursor.bump();
            cursor.bump();
        } else if cursor.bump().is_none() {
            break;
        }
    }
    Some(COMMENT)
}

fn bump_until_eol(cursor: &mut Cursor<'_>) {
    while !(cursor.matches('\n') || cursor.matches_str("\r\n")) {
        if cursor.bump().is_none() {
            return;
        }
    }
}
