use crate::{syntax_node::GreenNode, SyntaxError, SyntaxKind};

#[macro_use]
mod token_set;

mod event;
mod grammar;
pub mod lexer;
mod parser;
mod text_token_source;
mod text_tree_sink;

pub use lexer::{tokenize, Token};

/// A message describing why the parser could not make sense of its input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParseError(pub String);

/// `TokenSource` abstracts the source of the tokens the parser consumes. Implementations hide
/// trivia: the grammar never sees whitespace or comments.
trait TokenSource {
    /// Returns the kind of the next non-trivia token without consuming it, or `None` at the end
    /// of the input.
    fn next_kind(&mut self) -> Option<SyntaxKind>;

    /// Consumes and returns the next non-trivia token, or `None` at the end of the input.
    fn advance(&mut self) -> Option<Token>;
}

/// `TreeSink` abstracts details of a particular syntax tree implementation.
trait TreeSink {
    /// Adds the next non-trivia token to the current branch.
    fn token(&mut self);

    /// Starts a new branch and makes it current.
    fn start_node(&mut self, kind: SyntaxKind);

    /// Finishes the current branch and restores the previous branch as current.
    fn finish_node(&mut self);

    /// Notes an error at the current position.
    fn error(&mut self, error: ParseError);
}

pub(crate) fn parse_text(text: &str) -> (GreenNode, Vec<SyntaxError>) {
    let tokens = tokenize(text);
    let mut token_source = text_token_source::TextTokenSource::new(&tokens);
    let mut tree_sink = text_tree_sink::TextTreeSink::new(text, &tokens);
    parse(&mut token_source, &mut tree_sink);
    let (green, errors) = tree_sink.finish();
    log::debug!(
        "parsed {} bytes with {} syntax error(s)",
        text.len(),
        errors.len()
    );
    (green, errors)
}

fn parse_from_tokens<F>(token_source: &mut dyn TokenSource, tree_sink: &mut dyn TreeSink, f: F)
where
    F: FnOnce(&mut parser::Parser<'_>),
{
    let mut p = parser::Parser::new(token_source);
    f(&mut p);
    let events = p.finish();
    log::trace!("grammar produced {} events", events.len());
    event::process(tree_sink, events);
}

/// Parse the tokens from `token_source` into `tree_sink` as a Tallow source file.
fn parse(token_source: &mut dyn TokenSource, tree_sink: &mut dyn TreeSink) {
    parse_from_tokens(token_source, tree_sink, grammar::root);
}
