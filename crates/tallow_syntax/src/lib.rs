//! Syntax tree library for the Tallow language.
//!
//! Parsing happens in two passes: the grammar records a flat list of events through the markers
//! of the `Parser`, and a sink replays those events together with the tokens of the text to build
//! a `rowan` tree.
//!
//! Properties:
//!     - graceful handling of errors: a tree is produced for any input
//!     - full-fidelity representation (*any* text can be precisely represented as a syntax tree,
//!       including whitespace and comments)

#[macro_use]
mod syntax_kind;

pub mod ast;
mod parsing;
mod ptr;
mod syntax_error;
mod syntax_node;
mod validation;


use std::{fmt::Write, marker::PhantomData, sync::Arc};

use ra_ap_text_edit::Indel;
use rowan::GreenNode;
pub use rowan::{TextRange, TextSize, WalkEvent};
pub use smol_str::SmolStr;

pub use crate::{
    ast::{AstNode, SourceFile},
    parsing::{lexer::next_token, tokenize, ParseError, Token},
    ptr::{AstPtr, SyntaxNodePtr},
    syntax_error::{Location, SyntaxError, SyntaxErrorKind},
    syntax_kind::SyntaxKind,
    syntax_node::{
        Direction, NodeOrToken, SyntaxElement, SyntaxNode, SyntaxToken, SyntaxTreeBuilder,
        TallowLanguage,
    },
};

/// `Parse` is the result of the parsing: a syntax tree and a collection of errors.
///
/// Note that we always produce a syntax tree, even for completely invalid files.
#[derive(Debug, PartialEq, Eq)]
pub struct Parse<T> {
    green: GreenNode,
    errors: Arc<[SyntaxError]>,
    _ty: PhantomData<fn() -> T>,
}

impl<T> Clone for Parse<T> {
    fn clone(&self) -> Parse<T> {
        Parse {
            green: self.green.clone(),
            errors: self.errors.clone(),
            _ty: PhantomData,
        }
    }
}

impl<T> Parse<T> {
    fn new(green: GreenNode, errors: Vec<SyntaxError>) -> Parse<T> {
        Parse {
            green,
            errors: Arc::from(errors),
            _ty: PhantomData,
        }
    }

    pub fn syntax_node(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// Renders the tree, one element per line indented by depth, followed by one line per error.
    /// Nodes are printed as `KIND@start..end`, tokens additionally print their text.
    pub fn debug_dump(&self) -> String {
        let mut buf = format!("{:#?}", self.syntax_node());
        for err in self.errors.iter() {
            writeln!(buf, "error {}: {}", err.location(), err).unwrap();
        }
        buf
    }
}

impl<T: AstNode> Parse<T> {
    pub fn into_syntax(self) -> Parse<SyntaxNode> {
        Parse {
            green: self.green,
            errors: self.errors,
            _ty: PhantomData,
        }
    }

    pub fn tree(&self) -> T {
        T::cast(self.syntax_node())
            .unwrap_or_else(|| unreachable!("the root of a Parse<T> always casts to T"))
    }

    pub fn ok(self) -> Result<T, Arc<[SyntaxError]>> {
        if self.errors.is_empty() {
            Ok(self.tree())
        } else {
            Err(self.errors)
        }
    }
}

impl Parse<SyntaxNode> {
    pub fn cast<N: AstNode>(self) -> Option<Parse<N>> {
        if N::cast(self.syntax_node()).is_some() {
            Some(Parse {
                green: self.green,
                errors: self.errors,
                _ty: PhantomData,
            })
        } else {
            None
        }
    }
}

impl Parse<SourceFile> {
    /// Parses the `SourceFile` again but with the given modification applied.
    pub fn reparse(&self, indel: &Indel) -> Parse<SourceFile> {
        let mut text = self.syntax_node().text().to_string();
        indel.apply(&mut text);
        SourceFile::parse(&text)
    }
}

impl SourceFile {
    pub fn parse(text: &str) -> Parse<SourceFile> {
        let (green, mut errors) = parsing::parse_text(text);
        let root = SyntaxNode::new_root(green.clone());
        errors.extend(validation::validate(&root));
        Parse::new(green, errors)
    }
}

/// This test does not assert much and instead just shows off the crate's API.
#[test]
fn api_walkthrough() {
    use ast::NameOwner;

    let source_code = "
        // the answer
        let answer = 6 * 7
    ";

    // `SourceFile` is the main entry point.
    //
    // The `parse` method returns a `Parse` -- a pair of syntax tree and a list of errors. That is,
    // syntax tree is constructed even in presence of errors.
    let parse = SourceFile::parse(source_code);
    assert!(parse.errors().is_empty());

    // The tree is lossless: it contains every byte of the input, including comments.
    let file: SourceFile = parse.tree();
    assert_eq!(file.syntax().text().to_string(), source_code);

    // Statements are typed views over the children of the root.
    let stmt = file.statements().next().unwrap();
    let ast::StmtKind::VariableDef(def) = stmt.kind() else {
        panic!("expected a variable definition");
    };

    // Each AST node has a bunch of getters for children. All getters return `Option`s though, to
    // account for incomplete code.
    let name = def.name().and_then(|name| name.ident_token()).unwrap();
    assert_eq!(name.text(), "answer");

    let ast::ExprKind::BinExpr(bin) = def.value().unwrap().kind() else {
        panic!("expected a binary expression");
    };
    assert_eq!(bin.op_kind(), Some(ast::BinOp::Multiply));
}
