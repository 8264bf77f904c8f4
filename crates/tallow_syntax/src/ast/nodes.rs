use crate::{
    ast::{child_opt, children, token_child, AstChildren, AstNode, NameOwner},
    SyntaxKind::{
        self, BIN_EXPR, IDENT, LITERAL, NAME, NAME_REF, PAREN_EXPR, PREFIX_EXPR, SOURCE_FILE,
        VARIABLE_DEF,
    },
    SyntaxNode, SyntaxToken,
};

/// Declares a typed wrapper around nodes of exactly one `SyntaxKind`.
macro_rules! ast_node {
    ($(#[$attr:meta])* $name:ident => $kind:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            pub(crate) syntax: SyntaxNode,
        }

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == $kind
            }

            fn cast(syntax: SyntaxNode) -> Option<Self> {
                if Self::can_cast(syntax.kind()) {
                    Some($name { syntax })
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.syntax
            }
        }
    };
}

ast_node!(
    /// The root of a parsed file.
    SourceFile => SOURCE_FILE
);

impl SourceFile {
    pub fn statements(&self) -> AstChildren<Stmt> {
        children(self)
    }
}

ast_node!(
    /// `let a = 1`
    VariableDef => VARIABLE_DEF
);

impl NameOwner for VariableDef {}

impl VariableDef {
    pub fn let_token(&self) -> Option<SyntaxToken> {
        token_child(self, T![let])
    }

    pub fn value(&self) -> Option<Expr> {
        child_opt(self)
    }
}

ast_node!(
    /// The name bound by a definition.
    Name => NAME
);

impl Name {
    pub fn ident_token(&self) -> Option<SyntaxToken> {
        token_child(self, IDENT)
    }
}

ast_node!(
    /// A reference to a previously defined name.
    NameRef => NAME_REF
);

impl NameRef {
    pub fn ident_token(&self) -> Option<SyntaxToken> {
        token_child(self, IDENT)
    }
}

ast_node!(Literal => LITERAL);

ast_node!(PrefixExpr => PREFIX_EXPR);

impl PrefixExpr {
    pub fn expr(&self) -> Option<Expr> {
        child_opt(self)
    }
}

ast_node!(BinExpr => BIN_EXPR);

ast_node!(ParenExpr => PAREN_EXPR);

impl ParenExpr {
    pub fn expr(&self) -> Option<Expr> {
        child_opt(self)
    }
}

/// Any expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expr {
    pub(crate) syntax: SyntaxNode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    Literal(Literal),
    NameRef(NameRef),
    PrefixExpr(PrefixExpr),
    BinExpr(BinExpr),
    ParenExpr(ParenExpr),
}

impl AstNode for Expr {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(kind, LITERAL | NAME_REF | PREFIX_EXPR | BIN_EXPR | PAREN_EXPR)
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if Self::can_cast(syntax.kind()) {
            Some(Expr { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl Expr {
    pub fn kind(&self) -> ExprKind {
        let syntax = self.syntax.clone();
        match syntax.kind() {
            LITERAL => ExprKind::Literal(Literal { syntax }),
            NAME_REF => ExprKind::NameRef(NameRef { syntax }),
            PREFIX_EXPR => ExprKind::PrefixExpr(PrefixExpr { syntax }),
            BIN_EXPR => ExprKind::BinExpr(BinExpr { syntax }),
            PAREN_EXPR => ExprKind::ParenExpr(ParenExpr { syntax }),
            kind => unreachable!("{kind:?} is not an expression"),
        }
    }
}

macro_rules! impl_from_for_expr {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Expr {
                fn from(node: $variant) -> Expr {
                    Expr { syntax: node.syntax }
                }
            }
        )*
    };
}

impl_from_for_expr!(Literal, NameRef, PrefixExpr, BinExpr, ParenExpr);

/// A statement: a variable definition or an expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stmt {
    pub(crate) syntax: SyntaxNode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StmtKind {
    VariableDef(VariableDef),
    Expr(Expr),
}

impl AstNode for Stmt {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind == VARIABLE_DEF || Expr::can_cast(kind)
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if Self::can_cast(syntax.kind()) {
            Some(Stmt { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl Stmt {
    pub fn kind(&self) -> StmtKind {
        let syntax = self.syntax.clone();
        match syntax.kind() {
            VARIABLE_DEF => StmtKind::VariableDef(VariableDef { syntax }),
            _ => StmtKind::Expr(Expr { syntax }),
        }
    }
}

impl From<VariableDef> for Stmt {
    fn from(node: VariableDef) -> Stmt {
        Stmt {
            syntax: node.syntax,
        }
    }
}

impl From<Expr> for Stmt {
    fn from(node: Expr) -> Stmt {
        Stmt {
            syntax: node.syntax,
        }
    }
}
