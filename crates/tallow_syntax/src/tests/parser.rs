use ra_ap_text_edit::Indel;

use crate::{
    ast::{self, NameOwner},
    AstNode, AstPtr, NodeOrToken, SourceFile, SyntaxNode, TextRange, TextSize, WalkEvent,
};

fn dump(text: &str) -> String {
    SourceFile::parse(text).debug_dump()
}

/// Lists the kinds and texts of all non-trivia elements in preorder, indented by depth.
fn shape(node: &SyntaxNode) -> Vec<String> {
    let mut depth = 0;
    let mut acc = Vec::new();
    for event in node.preorder_with_tokens() {
        match event {
            WalkEvent::Enter(NodeOrToken::Node(node)) => {
                acc.push(format!("{}{:?}", "  ".repeat(depth), node.kind()));
                depth += 1;
            }
            WalkEvent::Enter(NodeOrToken::Token(token)) if !token.kind().is_trivia() => {
                acc.push(format!(
                    "{}{:?} {}",
                    "  ".repeat(depth),
                    token.kind(),
                    token.text()
                ));
            }
            WalkEvent::Leave(NodeOrToken::Node(_)) => depth -= 1,
            _ => (),
        }
    }
    acc
}

#[test]
fn empty() {
    insta::assert_snapshot!(dump(""), @"SOURCE_FILE@0..0");
}

#[test]
fn addition_is_left_associative() {
    insta::assert_snapshot!(dump("1+2+3+4"), @r###"
    SOURCE_FILE@0..7
      BIN_EXPR@0..7
        BIN_EXPR@0..5
          BIN_EXPR@0..3
            LITERAL@0..1
              INT_NUMBER@0..1 "1"
            PLUS@1..2 "+"
            LITERAL@2..3
              INT_NUMBER@2..3 "2"
          PLUS@3..4 "+"
          LITERAL@4..5
            INT_NUMBER@4..5 "3"
        PLUS@5..6 "+"
        LITERAL@6..7
          INT_NUMBER@6..7 "4"
    "###);
}

#[test]
fn multiplication_binds_tighter() {
    insta::assert_snapshot!(dump("1+2*3-4"), @r###"
    SOURCE_FILE@0..7
      BIN_EXPR@0..7
        BIN_EXPR@0..5
          LITERAL@0..1
            INT_NUMBER@0..1 "1"
          PLUS@1..2 "+"
          BIN_EXPR@2..5
            LITERAL@2..3
              INT_NUMBER@2..3 "2"
            STAR@3..4 "*"
            LITERAL@4..5
              INT_NUMBER@4..5 "3"
        MINUS@5..6 "-"
        LITERAL@6..7
          INT_NUMBER@6..7 "4"
    "###);
}

#[test]
fn negation_binds_tightest() {
    insta::assert_snapshot!(dump("-20+20"), @r###"
    SOURCE_FILE@0..6
      BIN_EXPR@0..6
        PREFIX_EXPR@0..3
          MINUS@0..1 "-"
          LITERAL@1..3
            INT_NUMBER@1..3 "20"
        PLUS@3..4 "+"
        LITERAL@4..6
          INT_NUMBER@4..6 "20"
    "###);
}

#[test]
fn parentheses_override_precedence() {
    insta::assert_snapshot!(dump("5*(2+1)"), @r###"
    SOURCE_FILE@0..7
      BIN_EXPR@0..7
        LITERAL@0..1
          INT_NUMBER@0..1 "5"
        STAR@1..2 "*"
        PAREN_EXPR@2..7
          L_PAREN@2..3 "("
          BIN_EXPR@3..6
            LITERAL@3..4
              INT_NUMBER@3..4 "2"
            PLUS@4..5 "+"
            LITERAL@5..6
              INT_NUMBER@5..6 "1"
          R_PAREN@6..7 ")"
    "###);
}

#[test]
fn trivia_does_not_change_the_shape() {
    let spaced = SourceFile::parse(" 1 +   2* 3 ");
    let compact = SourceFile::parse("1+2*3");
    assert!(spaced.errors().is_empty());
    assert_eq!(shape(&spaced.syntax_node()), shape(&compact.syntax_node()));

    let commented = SourceFile::parse("/* a */ 1 + // b\n 2 * 3");
    assert_eq!(shape(&commented.syntax_node()), shape(&compact.syntax_node()));
}

#[test]
fn missing_right_operand() {
    insta::assert_snapshot!(dump("1 +"), @r###"
    SOURCE_FILE@0..3
      BIN_EXPR@0..3
        LITERAL@0..1
          INT_NUMBER@0..1 "1"
        WHITESPACE@1..2 " "
        PLUS@2..3 "+"
    error 3: expected expression
    "###);
}

#[test]
fn missing_name() {
    insta::assert_snapshot!(dump("let = 1"), @r###"
    SOURCE_FILE@0..7
      VARIABLE_DEF@0..7
        LET_KW@0..3 "let"
        WHITESPACE@3..4 " "
        EQ@4..5 "="
        WHITESPACE@5..6 " "
        LITERAL@6..7
          INT_NUMBER@6..7 "1"
    error 3: expected a name
    "###);
}

#[test]
fn unclosed_parenthesis() {
    insta::assert_snapshot!(dump("(1"), @r###"
    SOURCE_FILE@0..2
      PAREN_EXPR@0..2
        L_PAREN@0..1 "("
        LITERAL@1..2
          INT_NUMBER@1..2 "1"
    error 2: expected R_PAREN
    "###);
}

#[test]
fn unmatched_closing_parenthesis() {
    insta::assert_snapshot!(dump(")"), @r###"
    SOURCE_FILE@0..1
      ERROR@0..1
        R_PAREN@0..1 ")"
    error 0: unmatched ')'
    "###);
}

#[test]
fn unknown_character() {
    insta::assert_snapshot!(dump("1 # 2"), @r###"
    SOURCE_FILE@0..5
      LITERAL@0..1
        INT_NUMBER@0..1 "1"
      WHITESPACE@1..2 " "
      ERROR@2..3
        ERROR@2..3 "#"
      WHITESPACE@3..4 " "
      LITERAL@4..5
        INT_NUMBER@4..5 "2"
    error 2: expected expression
    "###);
}

#[test]
fn integer_literal_too_large() {
    insta::assert_snapshot!(dump("let a = 99999999999999999999"), @r###"
    SOURCE_FILE@0..28
      VARIABLE_DEF@0..28
        LET_KW@0..3 "let"
        WHITESPACE@3..4 " "
        NAME@4..5
          IDENT@4..5 "a"
        WHITESPACE@5..6 " "
        EQ@6..7 "="
        WHITESPACE@7..8 " "
        LITERAL@8..28
          INT_NUMBER@8..28 "99999999999999999999"
    error 8..28: integer literal is too large
    "###);
}

#[test]
fn invalid_input_is_lossless() {
    let inputs = [
        "",
        ")",
        "((",
        "let",
        "let let let",
        "1 + * 2",
        "-",
        "let a = (1 + ) ) 2 ;; # $",
        "/* open comment",
        "1 2 3",
        "é + ü",
        "let ünïcödé = é",
        "\r\n1\r\n",
        "let a =\r\n  // c\r\n  1 +\r\n",
    ];
    for text in inputs {
        let parse = SourceFile::parse(text);
        assert_eq!(parse.syntax_node().text().to_string(), text);
        assert_eq!(parse.syntax_node().text_range().len(), TextSize::of(text));
    }
}

/// Runs `f` on a thread with a stack large enough for deeply nested input.
fn on_large_stack<R: Send + 'static>(f: impl FnOnce() -> R + Send + 'static) -> R {
    std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap()
}

#[test]
fn deeply_nested_prefix_operators() {
    let text = format!("{}1", "-".repeat(10_001));
    let (errors, round_trip) = on_large_stack({
        let text = text.clone();
        move || {
            let parse = SourceFile::parse(&text);
            (parse.errors().len(), parse.syntax_node().text().to_string())
        }
    });
    assert_eq!(errors, 0);
    assert_eq!(round_trip, text);
}

#[test]
fn deeply_nested_parentheses() {
    let balanced = format!("{}1{}", "(".repeat(5_001), ")".repeat(5_001));
    let unclosed = format!("{}1", "(".repeat(5_001));
    let errors = on_large_stack(move || {
        [balanced, unclosed].map(|text| SourceFile::parse(&text).errors().len())
    });
    assert_eq!(errors, [0, 5_001]);
}

#[test]
fn every_node_covers_its_children() {
    let parse = SourceFile::parse("let a = -(1 + x) * 3; a / 2 )");
    for node in parse.syntax_node().descendants() {
        let mut offset = node.text_range().start();
        for child in node.children_with_tokens() {
            assert_eq!(child.text_range().start(), offset);
            offset = child.text_range().end();
        }
        assert_eq!(offset, node.text_range().end());
    }
}

#[test]
fn statements_are_children_of_the_root() {
    let file = SourceFile::parse("let a = 1; a * 2\nlet b = a").tree();
    let stmts: Vec<_> = file.statements().collect();
    assert_eq!(stmts.len(), 3);
    assert!(matches!(stmts[0].kind(), ast::StmtKind::VariableDef(_)));
    assert!(matches!(stmts[1].kind(), ast::StmtKind::Expr(_)));
    let ast::StmtKind::VariableDef(def) = stmts[2].kind() else {
        panic!("expected a variable definition");
    };
    assert_eq!(def.name().unwrap().syntax().text().to_string(), "b");
}

#[test]
fn binary_operands_are_positional() {
    let file = SourceFile::parse("1 +").tree();
    let ast::StmtKind::Expr(expr) = file.statements().next().unwrap().kind() else {
        panic!("expected an expression");
    };
    let ast::ExprKind::BinExpr(bin) = expr.kind() else {
        panic!("expected a binary expression");
    };
    assert_eq!(bin.op_kind(), Some(ast::BinOp::Add));
    assert!(bin.lhs().is_some());
    assert!(bin.rhs().is_none());
}

#[test]
fn literal_values() {
    let file = SourceFile::parse("1_000; 99999999999999999999").tree();
    let values: Vec<_> = file
        .syntax()
        .descendants()
        .filter_map(ast::Literal::cast)
        .map(|lit| lit.int_value())
        .collect();
    assert_eq!(values, [Some(1000), None]);
}

#[test]
fn ast_ptr_resolves_in_the_same_tree() {
    let file = SourceFile::parse("let a = 1 + 2").tree();
    let bin = file
        .syntax()
        .descendants()
        .find_map(ast::BinExpr::cast)
        .unwrap();
    let ptr = AstPtr::new(&bin);
    assert_eq!(ptr.range(), TextRange::new(8.into(), 13.into()));
    assert_eq!(ptr.to_node(file.syntax()).syntax(), bin.syntax());
}

#[test]
fn reparse_applies_the_edit() {
    let parse = SourceFile::parse("let a = 1 +");
    assert_eq!(parse.errors().len(), 1);
    let edit = Indel::insert(11.into(), " 2".to_owned());
    let reparsed = parse.reparse(&edit);
    assert!(reparsed.errors().is_empty());
    assert_eq!(reparsed.syntax_node().text().to_string(), "let a = 1 + 2");
}
