use crate::{
    parsing::{lexer::Token, TokenSource},
    SyntaxKind,
};

/// An implementation of `TokenSource` over the tokens of a piece of text. Trivia tokens are
/// skipped transparently; the tree sink puts them back into the tree.
pub(crate) struct TextTokenSource<'t> {
    tokens: &'t [Token],

    /// Index of the next token that has not been consumed yet
    cursor: usize,
}

impl TokenSource for TextTokenSource<'_> {
    fn next_kind(&mut self) -> Option<SyntaxKind> {
        self.eat_trivia();
        self.tokens.get(self.cursor).map(|token| token.kind)
    }

    fn advance(&mut self) -> Option<Token> {
        self.eat_trivia();
        let token = *self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token)
    }
}

impl<'t> TextTokenSource<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        TextTokenSource { tokens, cursor: 0 }
    }

    fn eat_trivia(&mut self) {
        while self
            .tokens
            .get(self.cursor)
            .is_some_and(|token| token.kind.is_trivia())
        {
            self.cursor += 1;
        }
    }
}
