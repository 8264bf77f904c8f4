use drop_bomb::DropBomb;

use crate::{
    parsing::{event::Event, token_set::TokenSet, ParseError, TokenSource},
    SyntaxKind::{self, ERROR},
};

/// The maximum number of lookaheads without consuming a token before the parser is considered to
/// be stuck in a loop.
const STEP_LIMIT: u32 = 10_000;

/// `Parser` struct provides the low-level API for navigating through the stream of tokens and
/// constructing the parse tree. The actual parsing happens in the `grammar` module.
///
/// However, the result of this `Parser` is not a real tree, but rather a flat stream of events of
/// the form 'start expression, consume number literal, finish expression'. See `Event` docs for
/// more info.
pub(crate) struct Parser<'t> {
    token_source: &'t mut dyn TokenSource,
    events: Vec<Event>,
    steps: u32,
}

impl<'t> Parser<'t> {
    pub(super) fn new(token_source: &'t mut dyn TokenSource) -> Parser<'t> {
        Parser {
            token_source,
            events: Vec::new(),
            steps: 0,
        }
    }

    pub(crate) fn finish(self) -> Vec<Event> {
        self.events
    }

    /// Returns the kind of the current token, or `None` if the end of the input was reached.
    pub(crate) fn current(&mut self) -> Option<SyntaxKind> {
        self.steps += 1;
        assert!(self.steps <= STEP_LIMIT, "the parser seems stuck");
        self.token_source.next_kind()
    }

    /// Checks if the current token is `kind`
    pub(crate) fn at(&mut self, kind: SyntaxKind) -> bool {
        self.current() == Some(kind)
    }

    /// Checks if the current token is in `kinds`
    pub(crate) fn at_set(&mut self, kinds: TokenSet) -> bool {
        self.current().is_some_and(|kind| kinds.contains(kind))
    }

    /// Returns true if all input was consumed
    pub(crate) fn at_end(&mut self) -> bool {
        self.current().is_none()
    }

    /// Starts a new node in the syntax tree. All nodes and tokens consumed between the `start` and
    /// the corresponding `Marker::complete` belong to the same node.
    pub(crate) fn start(&mut self) -> Marker {
        let pos = self.events.len() as u32;
        self.push_event(Event::Placeholder);
        Marker::new(pos)
    }

    /// Consumes the current token. Does nothing at the end of the input.
    pub(crate) fn bump(&mut self) {
        if self.token_source.advance().is_some() {
            self.steps = 0;
            self.push_event(Event::AddToken);
        }
    }

    /// Consume the next token if `kind` matches.
    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume the next token if it is `kind` or emit an error otherwise.
    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.error(format!("expected {kind:?}"));
        false
    }

    /// Emit error with the `message`
    pub(crate) fn error<T: Into<String>>(&mut self, message: T) {
        let msg = ParseError(message.into());
        self.push_event(Event::Error { msg });
    }

    /// Emits an error and wraps the current token in an `ERROR` node, unless the current token is
    /// in the `recovery` set (or there is no current token), in which case nothing is consumed so
    /// an enclosing rule can pick up from there.
    pub(crate) fn error_recover(&mut self, message: &str, recovery: TokenSet) {
        if self.at_end() || self.at_set(recovery) {
            self.error(message);
        } else {
            let m = self.start();
            self.error(message);
            self.bump();
            m.complete(self, ERROR);
        }
    }

    fn push_event(&mut self, event: Event) {
        // Completing a node is progress as well: while nested rules unwind, every level looks at
        // the current token again without consuming it.
        if event == Event::FinishNode {
            self.steps = 0;
        }
        self.events.push(event);
    }
}

/// An open node in the event stream, see `Parser::start`. A `Marker` must be completed; dropping
/// one without calling `complete` panics because it would leave the tree unbalanced.
pub(crate) struct Marker {
    pos: u32,
    bomb: DropBomb,
}

impl Marker {
    fn new(pos: u32) -> Marker {
        Marker {
            pos,
            bomb: DropBomb::new("Marker must be completed"),
        }
    }

    /// Finishes the syntax tree node and assigns `kind` to it, and create a `CompletedMarker` for
    /// possible future operation like `.precede()` to deal with forward_parent.
    pub(crate) fn complete(mut self, p: &mut Parser<'_>, kind: SyntaxKind) -> CompletedMarker {
        self.bomb.defuse();
        let idx = self.pos as usize;
        match p.events[idx] {
            Event::Placeholder => {
                p.events[idx] = Event::StartNode {
                    kind,
                    forward_parent: None,
                };
            }
            ref other => {
                unreachable!("marker at {idx} refers to {other:?} instead of a placeholder")
            }
        }
        p.push_event(Event::FinishNode);
        CompletedMarker::new(self.pos, kind)
    }
}

/// A node that was completed, see `Marker::complete`.
pub(crate) struct CompletedMarker {
    pos: u32,
    kind: SyntaxKind,
}

impl CompletedMarker {
    fn new(pos: u32, kind: SyntaxKind) -> Self {
        CompletedMarker { pos, kind }
    }

    /// This method allows to create a new node which starts *before* the current one. That is,
    /// the parser could start node `A`, then complete it, and then after parsing the whole `A`,
    /// decide that it should have started some node `B` before starting `A`. `precede` allows to
    /// do exactly that. See also docs about `forward_parent` in `Event::StartNode`.
    ///
    /// Given completed events `[START, FINISH]` and its corresponding `CompletedMarker(pos: 0, _)`,
    /// append a new `START` event as `[START, FINISH, NEWSTART]`, then mark `NEWSTART` as `START`'s
    /// parent with saving its relative distance to `NEWSTART` into forward_parent(=2 in this case).
    pub(crate) fn precede(self, p: &mut Parser<'_>) -> Marker {
        let new_marker = p.start();
        let idx = self.pos as usize;
        match &mut p.events[idx] {
            Event::StartNode { forward_parent, .. } => {
                *forward_parent = Some(new_marker.pos - self.pos);
            }
            other => unreachable!("completed marker at {idx} refers to {other:?}"),
        }
        new_marker
    }

    pub(crate) fn kind(&self) -> SyntaxKind {
        self.kind
    }
}
