use std::{
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use crate::{syntax_node::TallowLanguage, AstNode, SyntaxKind, SyntaxNode, TextRange};

/// A pointer to a syntax node inside a file. It stays valid as long as the tree it was taken from
/// is not edited, which makes it suitable for mapping lowered items back to their syntax.
pub type SyntaxNodePtr = rowan::ast::SyntaxNodePtr<TallowLanguage>;

/// Like `SyntaxNodePtr`, but remembers the type of node it points to.
#[derive(Debug)]
pub struct AstPtr<N: AstNode> {
    raw: SyntaxNodePtr,
    _ty: PhantomData<fn() -> N>,
}

impl<N: AstNode> Clone for AstPtr<N> {
    fn clone(&self) -> AstPtr<N> {
        AstPtr {
            raw: self.raw.clone(),
            _ty: PhantomData,
        }
    }
}

impl<N: AstNode> Eq for AstPtr<N> {}

impl<N: AstNode> PartialEq for AstPtr<N> {
    fn eq(&self, other: &AstPtr<N>) -> bool {
        self.raw == other.raw
    }
}

impl<N: AstNode> Hash for AstPtr<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<N: AstNode> AstPtr<N> {
    pub fn new(node: &N) -> AstPtr<N> {
        AstPtr {
            raw: SyntaxNodePtr::new(node.syntax()),
            _ty: PhantomData,
        }
    }

    /// Resolves the pointer against the root of the tree it was created from.
    ///
    /// Panics if `root` is not the tree the pointer was taken from.
    pub fn to_node(&self, root: &SyntaxNode) -> N {
        let node = self.raw.to_node(root);
        N::cast(node).unwrap_or_else(|| panic!("AstPtr points to a node of the wrong kind"))
    }

    pub fn syntax_node_ptr(&self) -> SyntaxNodePtr {
        self.raw.clone()
    }

    pub fn kind(&self) -> SyntaxKind {
        self.raw.kind()
    }

    pub fn range(&self) -> TextRange {
        self.raw.text_range()
    }

    /// Reinterprets the pointer as pointing to another AST type, if the kind allows it.
    pub fn cast<U: AstNode>(self) -> Option<AstPtr<U>> {
        if !U::can_cast(self.raw.kind()) {
            return None;
        }
        Some(AstPtr {
            raw: self.raw,
            _ty: PhantomData,
        })
    }
}

impl<N: AstNode> From<AstPtr<N>> for SyntaxNodePtr {
    fn from(ptr: AstPtr<N>) -> SyntaxNodePtr {
        ptr.raw
    }
}
