//! The kinds of tokens and nodes that can occur in a Tallow syntax tree.

/// The kind of a token or node in the syntax tree. Token kinds are produced by the lexer, node
/// kinds are assigned by the grammar when a `Marker` is completed.
#[allow(bad_style, missing_docs, unreachable_pub)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // Punctuation
    PLUS,
    MINUS,
    STAR,
    SLASH,
    EQ,
    L_PAREN,
    R_PAREN,
    SEMI,

    // Keywords
    LET_KW,

    // Literals and other tokens
    INT_NUMBER,
    IDENT,
    WHITESPACE,
    COMMENT,
    ERROR,

    // Nodes
    SOURCE_FILE,
    VARIABLE_DEF,
    NAME,
    NAME_REF,
    LITERAL,
    PREFIX_EXPR,
    BIN_EXPR,
    PAREN_EXPR,

    #[doc(hidden)]
    __LAST,
}

use self::SyntaxKind::{
    EQ, LET_KW, L_PAREN, MINUS, PLUS, R_PAREN, SEMI, SLASH, STAR, __LAST,
};

impl SyntaxKind {
    /// Returns true if this kind carries no meaning for the grammar: whitespace and comments.
    pub fn is_trivia(self) -> bool {
        matches!(self, SyntaxKind::WHITESPACE | SyntaxKind::COMMENT)
    }

    pub fn is_keyword(self) -> bool {
        matches!(self, LET_KW)
    }

    pub fn is_punct(self) -> bool {
        matches!(
            self,
            PLUS | MINUS | STAR | SLASH | EQ | L_PAREN | R_PAREN | SEMI
        )
    }

    pub fn from_keyword(ident: &str) -> Option<SyntaxKind> {
        let kw = match ident {
            "let" => LET_KW,
            _ => return None,
        };
        Some(kw)
    }

    pub fn from_char(c: char) -> Option<SyntaxKind> {
        let tok = match c {
            '+' => PLUS,
            '-' => MINUS,
            '*' => STAR,
            '/' => SLASH,
            '=' => EQ,
            '(' => L_PAREN,
            ')' => R_PAREN,
            ';' => SEMI,
            _ => return None,
        };
        Some(tok)
    }
}

impl From<u16> for SyntaxKind {
    fn from(d: u16) -> SyntaxKind {
        assert!(d <= (__LAST as u16), "invalid syntax kind: {d}");
        // SAFETY: `SyntaxKind` is `repr(u16)` and `d` was checked to be in range.
        unsafe { std::mem::transmute::<u16, SyntaxKind>(d) }
    }
}

impl From<SyntaxKind> for u16 {
    fn from(k: SyntaxKind) -> u16 {
        k as u16
    }
}

/// Names a punctuation or keyword token kind by its source text.
#[macro_export]
macro_rules! T {
    (+) => {
        $crate::SyntaxKind::PLUS
    };
    (-) => {
        $crate::SyntaxKind::MINUS
    };
    (*) => {
        $crate::SyntaxKind::STAR
    };
    (/) => {
        $crate::SyntaxKind::SLASH
    };
    (=) => {
        $crate::SyntaxKind::EQ
    };
    ('(') => {
        $crate::SyntaxKind::L_PAREN
    };
    (')') => {
        $crate::SyntaxKind::R_PAREN
    };
    (;) => {
        $crate::SyntaxKind::SEMI
    };
    (let) => {
        $crate::SyntaxKind::LET_KW
    };
}

#[cfg(test)]
mod tests {
    use super::SyntaxKind;

    #[test]
    fn raw_round_trip() {
        for raw in 0..(SyntaxKind::__LAST as u16) {
            let kind = SyntaxKind::from(raw);
            assert_eq!(u16::from(kind), raw);
        }
    }

    #[test]
    fn keywords_and_punctuation() {
        assert_eq!(SyntaxKind::from_keyword("let"), Some(T![let]));
        assert_eq!(SyntaxKind::from_keyword("lets"), None);
        assert_eq!(SyntaxKind::from_char('('), Some(T!['(']));
        assert_eq!(SyntaxKind::from_char('%'), None);
        assert!(T![let].is_keyword());
        assert!(T![;].is_punct());
        assert!(SyntaxKind::COMMENT.is_trivia());
        assert!(!SyntaxKind::IDENT.is_trivia());
    }
}
