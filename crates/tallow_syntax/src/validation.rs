//! Checks that are performed on a tree after parsing. The grammar accepts some input that is
//! well-formed syntactically but can never be valid, for example integer literals that do not fit
//! in the integer type.

use crate::{ast, AstNode, SyntaxError, SyntaxNode};

pub(crate) fn validate(root: &SyntaxNode) -> Vec<SyntaxError> {
    let mut errors = Vec::new();
    for node in root.descendants() {
        if let Some(literal) = ast::Literal::cast(node) {
            validate_literal(&literal, &mut errors);
        }
    }
    errors
}

fn validate_literal(literal: &ast::Literal, errors: &mut Vec<SyntaxError>) {
    if literal.kind() == Some(ast::LiteralKind::IntNumber) && literal.int_value().is_none() {
        errors.push(SyntaxError::parse_error(
            "integer literal is too large",
            literal.syntax().text_range(),
        ));
    }
}
