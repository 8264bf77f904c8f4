use crate::{
    ast::{children, AstNode, BinExpr, Expr, Literal, PrefixExpr},
    SyntaxKind::INT_NUMBER,
    SyntaxToken,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrefixOp {
    /// The `-` operator for negation
    Neg,
}

impl PrefixExpr {
    pub fn op_kind(&self) -> Option<PrefixOp> {
        match self.op_token()?.kind() {
            T![-] => Some(PrefixOp::Neg),
            _ => None,
        }
    }

    pub fn op_token(&self) -> Option<SyntaxToken> {
        self.syntax().first_child_or_token()?.into_token()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinExpr {
    pub fn op_details(&self) -> Option<(SyntaxToken, BinOp)> {
        self.syntax()
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find_map(|c| {
                let op = match c.kind() {
                    T![+] => BinOp::Add,
                    T![-] => BinOp::Subtract,
                    T![*] => BinOp::Multiply,
                    T![/] => BinOp::Divide,
                    _ => return None,
                };
                Some((c, op))
            })
    }

    pub fn op_kind(&self) -> Option<BinOp> {
        self.op_details().map(|t| t.1)
    }

    pub fn op_token(&self) -> Option<SyntaxToken> {
        self.op_details().map(|t| t.0)
    }

    pub fn lhs(&self) -> Option<Expr> {
        self.sub_exprs().0
    }

    pub fn rhs(&self) -> Option<Expr> {
        self.sub_exprs().1
    }

    /// Returns the operands on either side of the operator token. Operands are told apart by
    /// their position relative to the operator, so `1 +` has a lhs but no rhs.
    pub fn sub_exprs(&self) -> (Option<Expr>, Option<Expr>) {
        let Some(op) = self.op_token() else {
            let mut children = children(self);
            return (children.next(), children.next());
        };
        let op_start = op.text_range().start();
        let mut lhs = None;
        let mut rhs = None;
        for expr in children::<_, Expr>(self) {
            if expr.syntax().text_range().end() <= op_start {
                lhs = Some(expr);
            } else if rhs.is_none() {
                rhs = Some(expr);
            }
        }
        (lhs, rhs)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    IntNumber,
}

impl Literal {
    pub fn token(&self) -> Option<SyntaxToken> {
        self.syntax()
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|it| !it.kind().is_trivia())
    }

    pub fn kind(&self) -> Option<LiteralKind> {
        match self.token()?.kind() {
            INT_NUMBER => Some(LiteralKind::IntNumber),
            _ => None,
        }
    }

    /// Returns the value of an integer literal, or `None` if it is not an integer or does not
    /// fit in an `i64`.
    pub fn int_value(&self) -> Option<i64> {
        let token = self.token().filter(|it| it.kind() == INT_NUMBER)?;
        let digits: String = token.text().chars().filter(|c| *c != '_').collect();
        digits.parse().ok()
    }
}
