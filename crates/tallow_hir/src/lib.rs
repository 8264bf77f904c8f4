//! HIR provides a high-level representation of Tallow source. Statements and expressions are
//! lowered from the syntax tree into an arena, so that later passes can refer to expressions by a
//! cheap, typed handle instead of walking syntax nodes. Incomplete syntax never fails to lower:
//! missing pieces become `Expr::Missing`.

mod expr;
mod name;
mod pretty;

#[cfg(test)]
mod tests;

pub use la_arena::{Arena, ArenaMap, Idx};

pub use crate::{
    expr::{
        ArithOp, BinaryOp, Body, BodySourceMap, Expr, ExprId, ExprPtr, Literal, Stmt, UnaryOp,
    },
    name::{AsName, Name},
};
