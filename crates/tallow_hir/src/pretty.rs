use std::fmt::{self, Write};

use crate::{ArithOp, BinaryOp, Body, Expr, ExprId, Literal, Stmt, UnaryOp};

impl Body {
    /// Renders the body with one statement per line. Every unary and binary expression is wrapped
    /// in parentheses so the structure of the tree is visible, and `Expr::Missing` prints as
    /// `<missing>`.
    pub fn pretty_print(&self) -> String {
        BodyDisplay(self).to_string()
    }
}

struct BodyDisplay<'a>(&'a Body);

impl fmt::Display for BodyDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self.0;
        for stmt in body.statements() {
            match stmt {
                Stmt::VariableDef { name, value } => {
                    write!(f, "let {name} = ")?;
                    print_expr(body, *value, f)?;
                }
                Stmt::Expr(expr) => print_expr(body, *expr, f)?,
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn print_expr<W: Write>(body: &Body, id: ExprId, write: &mut W) -> fmt::Result {
    match &body[id] {
        Expr::Missing => write!(write, "<missing>"),
        Expr::Literal(Literal::Int(value)) => write!(write, "{value}"),
        Expr::Variable(name) => write!(write, "{name}"),
        Expr::UnaryOp { expr, op } => {
            write!(write, "({}", unary_op_str(*op))?;
            print_expr(body, *expr, write)?;
            write!(write, ")")
        }
        Expr::BinaryOp { lhs, rhs, op } => {
            write!(write, "(")?;
            print_expr(body, *lhs, write)?;
            write!(write, " {} ", op.map_or("?", binary_op_str))?;
            print_expr(body, *rhs, write)?;
            write!(write, ")")
        }
    }
}

fn unary_op_str(op: UnaryOp) -> &'static str {
    match op {
        UnaryOp::Neg => "-",
    }
}

fn binary_op_str(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::ArithOp(ArithOp::Add) => "+",
        BinaryOp::ArithOp(ArithOp::Subtract) => "-",
        BinaryOp::ArithOp(ArithOp::Multiply) => "*",
        BinaryOp::ArithOp(ArithOp::Divide) => "/",
    }
}
