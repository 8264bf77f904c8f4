//! Typed views over the untyped `SyntaxNode`s of the concrete syntax tree.
//!
//! Every accessor returns an `Option`: trees built from invalid input may lack any piece the
//! grammar normally requires, and that must never cause a panic.

mod expr_extensions;
mod nodes;
mod traits;

use std::marker::PhantomData;

use crate::{syntax_node::SyntaxNodeChildren, SyntaxKind, SyntaxNode, SyntaxToken};

pub use self::{expr_extensions::*, nodes::*, traits::*};

/// The main trait to go from untyped `SyntaxNode` to a typed ast. The conversion itself has zero
/// runtime cost; ast and syntax nodes have exactly the same representation; a pointer to the tree
/// root and a pointer to the node itself.
pub trait AstNode: Clone {
    fn can_cast(kind: SyntaxKind) -> bool
    where
        Self: Sized;

    fn cast(syntax: SyntaxNode) -> Option<Self>
    where
        Self: Sized;

    fn syntax(&self) -> &SyntaxNode;
}

/// An iterator over `SyntaxNode` children of a particular AST type.
#[derive(Debug, Clone)]
pub struct AstChildren<N> {
    inner: SyntaxNodeChildren,
    ph: PhantomData<N>,
}

impl<N> AstChildren<N> {
    fn new(parent: &SyntaxNode) -> Self {
        AstChildren {
            inner: parent.children(),
            ph: PhantomData,
        }
    }
}

impl<N: AstNode> Iterator for AstChildren<N> {
    type Item = N;
    fn next(&mut self) -> Option<N> {
        self.inner.by_ref().find_map(N::cast)
    }
}

fn child_opt<P: AstNode + ?Sized, C: AstNode>(parent: &P) -> Option<C> {
    children(parent).next()
}

fn children<P: AstNode + ?Sized, C: AstNode>(parent: &P) -> AstChildren<C> {
    AstChildren::new(parent.syntax())
}

/// Returns the first direct child token of `parent` with the given kind.
fn token_child<P: AstNode + ?Sized>(parent: &P, kind: SyntaxKind) -> Option<SyntaxToken> {
    parent
        .syntax()
        .children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|it| it.kind() == kind)
}
