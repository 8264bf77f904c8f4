use tallow_syntax::{ast, AstNode, SourceFile, TextRange};

use crate::{ArithOp, BinaryOp, Body, BodySourceMap, Expr, Literal, Name, Stmt, UnaryOp};

fn lower(text: &str) -> (Body, BodySourceMap) {
    let file = SourceFile::parse(text).tree();
    Body::lower(&file)
}

fn pretty(text: &str) -> String {
    lower(text).0.pretty_print()
}

#[test]
fn precedence_is_preserved() {
    insta::assert_snapshot!(pretty("let a = 1 + 2 * 3\na - 4 / -b"), @r###"
    let a = (1 + (2 * 3))
    (a - (4 / (-b)))
    "###);
}

#[test]
fn parentheses_lower_to_their_contents() {
    let (body, _) = lower("((7))");
    assert_eq!(body.exprs().count(), 1);
    assert_eq!(body.statements().len(), 1);
    let Stmt::Expr(expr) = body.statements()[0] else {
        panic!("expected an expression statement");
    };
    assert_eq!(body[expr], Expr::Literal(Literal::Int(7)));

    insta::assert_snapshot!(pretty("5 * (2 + 1)"), @"(5 * (2 + 1))");
}

#[test]
fn missing_rhs_lowers_to_missing() {
    let (body, _) = lower("let a = 1 +");
    let [Stmt::VariableDef { name, value }] = body.statements() else {
        panic!("expected a single variable definition");
    };
    assert_eq!(*name, Name::new("a"));
    let Expr::BinaryOp { lhs, rhs, op } = &body[*value] else {
        panic!("expected a binary expression");
    };
    assert_eq!(*op, Some(BinaryOp::ArithOp(ArithOp::Add)));
    assert_eq!(body[*lhs], Expr::Literal(Literal::Int(1)));
    assert_eq!(body[*rhs], Expr::Missing);
}

#[test]
fn missing_pieces() {
    insta::assert_snapshot!(pretty("let a =\nlet b = - )\n(1"), @r###"
    let a = <missing>
    let b = (-<missing>)
    1
    "###);
}

#[test]
fn nameless_definitions_are_dropped() {
    let (body, _) = lower("let = 1\nlet a = 2");
    assert_eq!(body.statements().len(), 1);
    assert!(matches!(
        &body.statements()[0],
        Stmt::VariableDef { name, .. } if name.as_str() == "a"
    ));
    // Nothing of the dropped definition is lowered.
    assert_eq!(body.exprs().count(), 1);
}

#[test]
fn too_large_literal_lowers_to_missing() {
    insta::assert_snapshot!(pretty("99999999999999999999 + 1"), @"(<missing> + 1)");
}

#[test]
fn unary_operators() {
    let (body, _) = lower("-x");
    let Stmt::Expr(expr) = body.statements()[0] else {
        panic!("expected an expression statement");
    };
    let Expr::UnaryOp { expr, op } = &body[expr] else {
        panic!("expected a unary expression");
    };
    assert_eq!(*op, UnaryOp::Neg);
    assert_eq!(body[*expr], Expr::Variable(Name::new("x")));
}

#[test]
fn children_are_allocated_before_parents() {
    let (body, _) = lower("1 * (2 + 3) - x");
    for (id, expr) in body.exprs() {
        expr.walk_child_exprs(|child| {
            assert!(
                u32::from(child.into_raw()) < u32::from(id.into_raw()),
                "{child:?} is not older than {id:?}"
            );
        });
    }
}

#[test]
fn source_map_points_back_to_syntax() {
    let file = SourceFile::parse("let a = (1 + 2) * 3").tree();
    let (body, source_map) = Body::lower(&file);

    let paren = file
        .syntax()
        .descendants()
        .find_map(ast::ParenExpr::cast)
        .unwrap();
    let inner = paren.expr().unwrap();

    let paren_id = source_map.node_expr(&paren.into()).unwrap();
    let inner_id = source_map.node_expr(&inner).unwrap();
    assert_eq!(paren_id, inner_id);
    assert!(matches!(body[inner_id], Expr::BinaryOp { .. }));

    let ptr = source_map.expr_syntax(inner_id).unwrap();
    assert_eq!(ptr.range(), TextRange::new(9.into(), 14.into()));
    assert_eq!(ptr.to_node(file.syntax()).syntax(), inner.syntax());

    for (id, expr) in body.exprs() {
        if *expr != Expr::Missing {
            assert!(source_map.expr_syntax(id).is_some());
        }
    }
}
