use crate::SyntaxKind;

/// A bit-set of `SyntaxKind`s
#[derive(Clone, Copy)]
pub(crate) struct TokenSet(u64);

impl TokenSet {
    pub(crate) const fn empty() -> TokenSet {
        TokenSet(0)
    }

    pub(crate) const fn singleton(kind: SyntaxKind) -> TokenSet {
        TokenSet(mask(kind))
    }

    pub(crate) const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }

    pub(crate) fn contains(&self, kind: SyntaxKind) -> bool {
        self.0 & mask(kind) != 0
    }
}

const fn mask(kind: SyntaxKind) -> u64 {
    1u64 << (kind as u16)
}

// Every kind must fit in the mask.
const _: () = assert!((SyntaxKind::__LAST as u16) < 64);

macro_rules! token_set {
    ($($t:expr),*) => { TokenSet::empty()$(.union(TokenSet::singleton($t)))* };
    ($($t:expr),* ,) => { token_set!($($t),*) };
}

#[test]
fn token_set_works_for_tokens() {
    use crate::SyntaxKind::{EQ, IDENT, SEMI, WHITESPACE};
    let ts = token_set![EQ, SEMI];
    assert!(ts.contains(EQ));
    assert!(ts.contains(SEMI));
    assert!(!ts.contains(IDENT));
    assert!(!ts.contains(WHITESPACE));
}
