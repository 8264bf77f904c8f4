use super::{expressions, name_recovery, CompletedMarker, Parser, TokenSet, VARIABLE_DEF};

const NAME_RECOVERY_SET: TokenSet = token_set![T![=], T![let], T![;], T![')']];

/// Parses statements until the end of the input. Every iteration consumes at least one token so
/// the whole input ends up in the tree.
pub(super) fn source_file_contents(p: &mut Parser<'_>) {
    while !p.at_end() {
        if p.eat(T![;]) {
            continue;
        }

        if p.at(T![')']) {
            p.error_recover("unmatched ')'", TokenSet::empty());
            continue;
        }

        stmt(p);
    }
}

/// Parses a single statement: a variable definition or an expression.
pub(super) fn stmt(p: &mut Parser<'_>) -> Option<CompletedMarker> {
    if p.at(T![let]) {
        Some(variable_def(p))
    } else {
        expressions::expr(p)
    }
}

// let a = 1 + 2
fn variable_def(p: &mut Parser<'_>) -> CompletedMarker {
    assert!(p.at(T![let]));
    let m = p.start();
    p.bump();
    name_recovery(p, NAME_RECOVERY_SET);
    p.expect(T![=]);
    expressions::expr(p);
    m.complete(p, VARIABLE_DEF)
}
