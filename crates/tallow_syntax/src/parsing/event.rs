//! The parser does not build a tree directly. Instead it records a flat list of `Event`s which
//! are converted into a tree in a separate pass by a `TreeSink`. This decouples the grammar from
//! the tree representation and allows a node to be wrapped in a parent *after* the node was
//! completed (see `CompletedMarker::precede`) without moving any recorded event.

use std::mem;

use crate::{
    parsing::{ParseError, TreeSink},
    SyntaxKind,
};

/// A single structural instruction recorded by the `Parser`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    /// The start of a node. All tokens and nodes between a `StartNode` and its matching
    /// `FinishNode` become children of the node.
    ///
    /// `forward_parent` is the distance (in events) to a later `StartNode` that must become the
    /// parent of this node. Consider parsing `1 + 2`: the literal `1` is started and completed
    /// before the parser sees the `+` and learns that it is the left operand of a binary
    /// expression. The events at that point are
    ///
    /// ```text
    /// 0: StartNode { kind: LITERAL, forward_parent: Some(3) }
    /// 1: AddToken
    /// 2: FinishNode
    /// 3: StartNode { kind: BIN_EXPR, forward_parent: None }
    /// ```
    ///
    /// and the sink opens `BIN_EXPR` before `LITERAL` even though it was recorded later.
    StartNode {
        kind: SyntaxKind,
        forward_parent: Option<u32>,
    },

    /// Adds the next non-trivia token to the current node.
    AddToken,

    /// Completes the most recently started node.
    FinishNode,

    /// A slot reserved by a `Marker` that has not been completed yet. After processing, a slot
    /// that was consumed as part of a forward parent chain is also left as a placeholder.
    Placeholder,

    /// A parse error at the current position.
    Error { msg: ParseError },
}

/// Replays `events` into `sink`, resolving forward parents on the way.
pub(super) fn process(sink: &mut dyn TreeSink, mut events: Vec<Event>) {
    let mut forward_parents = Vec::new();

    for i in 0..events.len() {
        match mem::replace(&mut events[i], Event::Placeholder) {
            Event::StartNode {
                kind,
                forward_parent,
            } => {
                // Walk the entire chain of forward parents: the node started here might have been
                // wrapped by `precede` more than once.
                forward_parents.push(kind);
                let mut idx = i;
                let mut fp = forward_parent;
                while let Some(offset) = fp {
                    idx += offset as usize;
                    fp = match mem::replace(&mut events[idx], Event::Placeholder) {
                        Event::StartNode {
                            kind,
                            forward_parent,
                        } => {
                            forward_parents.push(kind);
                            forward_parent
                        }
                        other => unreachable!(
                            "forward parent of event {i} points at {other:?} at {idx}, expected a \
                             StartNode"
                        ),
                    };
                }

                // The outermost parent was found last, so it must be opened first.
                for kind in forward_parents.drain(..).rev() {
                    sink.start_node(kind);
                }
            }
            Event::AddToken => sink.token(),
            Event::FinishNode => sink.finish_node(),
            Event::Error { msg } => sink.error(msg),
            // Either consumed by a forward parent chain above or never completed, which the
            // `Marker` drop bomb already reports.
            Event::Placeholder => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{process, Event};
    use crate::{
        parsing::{ParseError, TreeSink},
        SyntaxKind::{self, BIN_EXPR, LITERAL, PAREN_EXPR, SOURCE_FILE},
    };

    /// Records the calls made on a `TreeSink` as a flat string.
    #[derive(Default)]
    struct RecordingSink(Vec<String>);

    impl TreeSink for RecordingSink {
        fn token(&mut self) {
            self.0.push("token".to_owned());
        }

        fn start_node(&mut self, kind: SyntaxKind) {
            self.0.push(format!("start {kind:?}"));
        }

        fn finish_node(&mut self) {
            self.0.push("finish".to_owned());
        }

        fn error(&mut self, error: ParseError) {
            self.0.push(format!("error {}", error.0));
        }
    }

    fn start(kind: SyntaxKind, forward_parent: Option<u32>) -> Event {
        Event::StartNode {
            kind,
            forward_parent,
        }
    }

    #[test]
    fn single_forward_parent() {
        let events = vec![
            start(LITERAL, Some(3)),
            Event::AddToken,
            Event::FinishNode,
            start(BIN_EXPR, None),
            Event::AddToken,
            Event::FinishNode,
        ];
        let mut sink = RecordingSink::default();
        process(&mut sink, events);
        assert_eq!(
            sink.0,
            [
                "start BIN_EXPR",
                "start LITERAL",
                "token",
                "finish",
                "token",
                "finish"
            ]
        );
    }

    #[test]
    fn forward_parent_chain_is_fully_resolved() {
        // LITERAL is wrapped in PAREN_EXPR which is in turn wrapped in BIN_EXPR.
        let events = vec![
            start(SOURCE_FILE, None),
            start(LITERAL, Some(3)),
            Event::AddToken,
            Event::FinishNode,
            start(PAREN_EXPR, Some(2)),
            Event::FinishNode,
            start(BIN_EXPR, None),
            Event::FinishNode,
            Event::FinishNode,
        ];
        let mut sink = RecordingSink::default();
        process(&mut sink, events);
        assert_eq!(
            sink.0,
            [
                "start SOURCE_FILE",
                "start BIN_EXPR",
                "start PAREN_EXPR",
                "start LITERAL",
                "token",
                "finish",
                "finish",
                "finish",
                "finish",
            ]
        );
    }

    #[test]
    fn placeholders_and_errors() {
        let events = vec![
            start(SOURCE_FILE, None),
            Event::Placeholder,
            Event::Error {
                msg: ParseError("expected expression".to_owned()),
            },
            Event::FinishNode,
        ];
        let mut sink = RecordingSink::default();
        process(&mut sink, events);
        assert_eq!(
            sink.0,
            ["start SOURCE_FILE", "error expected expression", "finish"]
        );
    }

    #[test]
    #[should_panic(expected = "expected a StartNode")]
    fn forward_parent_to_non_start_is_fatal() {
        let events = vec![start(LITERAL, Some(1)), Event::AddToken];
        process(&mut RecordingSink::default(), events);
    }
}
