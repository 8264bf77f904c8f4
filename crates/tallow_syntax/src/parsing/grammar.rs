//! The Tallow grammar. Rules are plain functions over the `Parser` that build nodes exclusively
//! through `Parser::start`, `Marker::complete` and `CompletedMarker::precede`, which keeps every
//! tree balanced and lossless.

mod expressions;
mod statements;

use super::{
    parser::{CompletedMarker, Parser},
    token_set::TokenSet,
    SyntaxKind::{
        BIN_EXPR, IDENT, INT_NUMBER, LITERAL, NAME, NAME_REF, PAREN_EXPR, PREFIX_EXPR,
        SOURCE_FILE, VARIABLE_DEF,
    },
};

pub(crate) fn root(p: &mut Parser<'_>) {
    let m = p.start();
    statements::source_file_contents(p);
    m.complete(p, SOURCE_FILE);
}

fn name_recovery(p: &mut Parser<'_>, recovery: TokenSet) {
    if p.at(IDENT) {
        let m = p.start();
        p.bump();
        m.complete(p, NAME);
    } else {
        p.error_recover("expected a name", recovery);
    }
}

fn name_ref(p: &mut Parser<'_>) -> CompletedMarker {
    assert!(p.at(IDENT));
    let m = p.start();
    p.bump();
    m.complete(p, NAME_REF)
}
