use std::mem;

use crate::{
    parsing::{lexer::Token, ParseError, TreeSink},
    syntax_node::GreenNode,
    SyntaxError, SyntaxKind, SyntaxTreeBuilder, TextRange, TextSize,
};

/// Builds a `rowan` tree from the parser's events and the full token sequence of the text.
///
/// The grammar never sees trivia, so the sink re-inserts it: trivia preceding a token or node is
/// emitted right before it. Finishing a node is deferred until the next token or node start so
/// that trivia between two siblings ends up in their common parent instead of dangling at the end
/// of the left sibling.
pub(crate) struct TextTreeSink<'a> {
    text: &'a str,
    tokens: &'a [Token],
    text_pos: TextSize,
    token_pos: usize,
    state: State,
    inner: SyntaxTreeBuilder,
}

enum State {
    PendingStart,
    Normal,
    PendingFinish,
}

impl TreeSink for TextTreeSink<'_> {
    fn token(&mut self) {
        match mem::replace(&mut self.state, State::Normal) {
            State::PendingStart => unreachable!("token outside of the root node"),
            State::PendingFinish => self.inner.finish_node(),
            State::Normal => (),
        }
        self.eat_trivias();
        let token = self
            .tokens
            .get(self.token_pos)
            .copied()
            .unwrap_or_else(|| unreachable!("the parser consumed more tokens than were lexed"));
        self.do_token(token);
    }

    fn start_node(&mut self, kind: SyntaxKind) {
        match mem::replace(&mut self.state, State::Normal) {
            State::PendingStart => {
                self.inner.start_node(kind);
                // The root node also covers leading trivia.
                return;
            }
            State::PendingFinish => self.inner.finish_node(),
            State::Normal => (),
        }
        self.eat_trivias();
        self.inner.start_node(kind);
    }

    fn finish_node(&mut self) {
        match mem::replace(&mut self.state, State::PendingFinish) {
            State::PendingStart => unreachable!("finished a node that was never started"),
            State::PendingFinish => self.inner.finish_node(),
            State::Normal => (),
        }
    }

    fn error(&mut self, error: ParseError) {
        self.inner.error(error, self.text_pos);
    }
}

impl<'a> TextTreeSink<'a> {
    pub(super) fn new(text: &'a str, tokens: &'a [Token]) -> TextTreeSink<'a> {
        TextTreeSink {
            text,
            tokens,
            text_pos: 0.into(),
            token_pos: 0,
            state: State::PendingStart,
            inner: SyntaxTreeBuilder::default(),
        }
    }

    /// Closes the root node, attaching any trailing trivia to it, and returns the tree.
    pub(super) fn finish(mut self) -> (GreenNode, Vec<SyntaxError>) {
        match mem::replace(&mut self.state, State::Normal) {
            State::PendingFinish => {
                self.eat_trivias();
                self.inner.finish_node();
            }
            State::PendingStart | State::Normal => {
                unreachable!("the root node was not closed exactly once")
            }
        }
        debug_assert_eq!(
            self.token_pos,
            self.tokens.len(),
            "not all tokens were added to the tree"
        );

        self.inner.finish_raw()
    }

    fn eat_trivias(&mut self) {
        while let Some(&token) = self.tokens.get(self.token_pos) {
            if !token.kind.is_trivia() {
                break;
            }
            self.do_token(token);
        }
    }

    fn do_token(&mut self, token: Token) {
        let range = TextRange::at(self.text_pos, token.len);
        let text = &self.text[range];
        self.text_pos += token.len;
        self.token_pos += 1;
        self.inner.token(token.kind, text);
    }
}
