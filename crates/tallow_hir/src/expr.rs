use std::ops::Index;

use la_arena::{Arena, ArenaMap, Idx};
use rustc_hash::FxHashMap;
pub use tallow_syntax::ast::PrefixOp as UnaryOp;
use tallow_syntax::{
    ast::{self, BinOp, NameOwner},
    AstNode, AstPtr,
};

use crate::name::{AsName, Name};

pub type ExprId = Idx<Expr>;

/// A pointer to the syntax an expression was lowered from.
pub type ExprPtr = AstPtr<ast::Expr>;

/// The lowered statements of a source file together with the expressions they refer to.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct Body {
    exprs: Arena<Expr>,
    statements: Vec<Stmt>,
}

impl Body {
    /// Lowers all statements of `file`. Lowering never fails; syntax errors surface as
    /// `Expr::Missing` or, for definitions without a name, as a dropped statement.
    pub fn lower(file: &ast::SourceFile) -> (Body, BodySourceMap) {
        let mut collector = ExprCollector::default();
        collector.collect_source_file(file);
        collector.finish()
    }

    pub fn statements(&self) -> &[Stmt] {
        &self.statements
    }

    pub fn exprs(&self) -> impl Iterator<Item = (ExprId, &Expr)> {
        self.exprs.iter()
    }
}

impl Index<ExprId> for Body {
    type Output = Expr;

    fn index(&self, expr: ExprId) -> &Expr {
        &self.exprs[expr]
    }
}

/// A mapping between the expressions of a `Body` and the syntax nodes they were lowered from.
/// `Missing` expressions have no syntax. A parenthesized expression maps to the expression inside
/// of it, so several nodes can map to the same `ExprId`.
#[derive(Default)]
pub struct BodySourceMap {
    expr_map: FxHashMap<ExprPtr, ExprId>,
    expr_map_back: ArenaMap<ExprId, ExprPtr>,
}

impl BodySourceMap {
    pub fn expr_syntax(&self, expr: ExprId) -> Option<ExprPtr> {
        self.expr_map_back.get(expr).cloned()
    }

    pub fn syntax_expr(&self, ptr: &ExprPtr) -> Option<ExprId> {
        self.expr_map.get(ptr).copied()
    }

    pub fn node_expr(&self, node: &ast::Expr) -> Option<ExprId> {
        self.syntax_expr(&AstPtr::new(node))
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Stmt {
    VariableDef { name: Name, value: ExprId },
    Expr(ExprId),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Literal {
    Int(i64),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expr {
    /// Used if the syntax tree does not have a required expression piece
    Missing,
    Literal(Literal),
    Variable(Name),
    UnaryOp {
        expr: ExprId,
        op: UnaryOp,
    },
    BinaryOp {
        lhs: ExprId,
        rhs: ExprId,
        op: Option<BinaryOp>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    ArithOp(ArithOp),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Multiply,
    Subtract,
    Divide,
}

impl From<BinOp> for BinaryOp {
    fn from(op: BinOp) -> Self {
        match op {
            BinOp::Add => BinaryOp::ArithOp(ArithOp::Add),
            BinOp::Subtract => BinaryOp::ArithOp(ArithOp::Subtract),
            BinOp::Multiply => BinaryOp::ArithOp(ArithOp::Multiply),
            BinOp::Divide => BinaryOp::ArithOp(ArithOp::Divide),
        }
    }
}

impl Expr {
    pub fn walk_child_exprs(&self, mut f: impl FnMut(ExprId)) {
        match self {
            Expr::Missing | Expr::Literal(_) | Expr::Variable(_) => {}
            Expr::UnaryOp { expr, .. } => f(*expr),
            Expr::BinaryOp { lhs, rhs, .. } => {
                f(*lhs);
                f(*rhs);
            }
        }
    }
}

#[derive(Default)]
struct ExprCollector {
    exprs: Arena<Expr>,
    statements: Vec<Stmt>,
    source_map: BodySourceMap,
}

impl ExprCollector {
    fn alloc_expr(&mut self, expr: Expr, ptr: ExprPtr) -> ExprId {
        let id = self.exprs.alloc(expr);
        self.source_map.expr_map.insert(ptr.clone(), id);
        self.source_map.expr_map_back.insert(id, ptr);
        id
    }

    fn missing_expr(&mut self) -> ExprId {
        self.exprs.alloc(Expr::Missing)
    }

    fn collect_source_file(&mut self, file: &ast::SourceFile) {
        for stmt in file.statements() {
            if let Some(stmt) = self.collect_stmt(stmt) {
                self.statements.push(stmt);
            }
        }
    }

    fn collect_stmt(&mut self, stmt: ast::Stmt) -> Option<Stmt> {
        match stmt.kind() {
            ast::StmtKind::VariableDef(def) => {
                let Some(name) = def.name() else {
                    log::trace!(
                        "dropping variable definition without a name at {:?}",
                        def.syntax().text_range()
                    );
                    return None;
                };
                let value = self.collect_expr_opt(def.value());
                Some(Stmt::VariableDef {
                    name: name.as_name(),
                    value,
                })
            }
            ast::StmtKind::Expr(expr) => Some(Stmt::Expr(self.collect_expr(expr))),
        }
    }

    fn collect_expr_opt(&mut self, expr: Option<ast::Expr>) -> ExprId {
        if let Some(expr) = expr {
            self.collect_expr(expr)
        } else {
            self.missing_expr()
        }
    }

    fn collect_expr(&mut self, expr: ast::Expr) -> ExprId {
        let syntax_ptr = AstPtr::new(&expr);
        match expr.kind() {
            ast::ExprKind::Literal(e) => {
                // Literals that do not fit were already reported during validation.
                let expr = e
                    .int_value()
                    .map_or(Expr::Missing, |value| Expr::Literal(Literal::Int(value)));
                self.alloc_expr(expr, syntax_ptr)
            }
            ast::ExprKind::NameRef(e) => self.alloc_expr(Expr::Variable(e.as_name()), syntax_ptr),
            ast::ExprKind::PrefixExpr(e) => {
                let expr = self.collect_expr_opt(e.expr());
                if let Some(op) = e.op_kind() {
                    self.alloc_expr(Expr::UnaryOp { expr, op }, syntax_ptr)
                } else {
                    self.alloc_expr(Expr::Missing, syntax_ptr)
                }
            }
            ast::ExprKind::BinExpr(e) => {
                let op = e.op_kind().map(BinaryOp::from);
                let (lhs, rhs) = e.sub_exprs();
                let lhs = self.collect_expr_opt(lhs);
                let rhs = self.collect_expr_opt(rhs);
                self.alloc_expr(Expr::BinaryOp { lhs, rhs, op }, syntax_ptr)
            }
            ast::ExprKind::ParenExpr(e) => {
                let inner = self.collect_expr_opt(e.expr());
                // make the paren expr point to the inner expression as well
                self.source_map.expr_map.insert(syntax_ptr, inner);
                inner
            }
        }
    }

    fn finish(self) -> (Body, BodySourceMap) {
        log::debug!(
            "lowered {} statements into {} expressions",
            self.statements.len(),
            self.exprs.len()
        );
        let body = Body {
            exprs: self.exprs,
            statements: self.statements,
        };
        (body, self.source_map)
    }
}
