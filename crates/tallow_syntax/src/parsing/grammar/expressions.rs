use super::{
    name_ref, CompletedMarker, Parser, TokenSet, BIN_EXPR, IDENT, INT_NUMBER, LITERAL, PAREN_EXPR,
    PREFIX_EXPR,
};
use crate::SyntaxKind;

/// Tokens at which a missing expression is reported without consuming anything, so the enclosing
/// rule can continue from there.
const EXPR_RECOVERY_SET: TokenSet = token_set![T![let], T![;], T![')']];

/// An operator that appears between its two operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InfixOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl InfixOp {
    fn from_kind(kind: SyntaxKind) -> Option<InfixOp> {
        let op = match kind {
            T![+] => InfixOp::Add,
            T![-] => InfixOp::Sub,
            T![*] => InfixOp::Mul,
            T![/] => InfixOp::Div,
            _ => return None,
        };
        Some(op)
    }

    /// Returns the left and right binding power of the operator. Higher values bind tighter. The
    /// left power is lower than the right power which makes the operators left-associative.
    fn binding_power(self) -> (u8, u8) {
        match self {
            InfixOp::Add | InfixOp::Sub => (1, 2),
            InfixOp::Mul | InfixOp::Div => (3, 4),
        }
    }
}

/// An operator that appears in front of its operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PrefixOp {
    Neg,
}

impl PrefixOp {
    /// Prefix operators only have a right binding power; it exceeds that of every infix operator.
    fn binding_power(self) -> ((), u8) {
        match self {
            PrefixOp::Neg => ((), 5),
        }
    }
}

/// Parses an expression. Returns `None` if no expression could be started at the current token.
pub(super) fn expr(p: &mut Parser<'_>) -> Option<CompletedMarker> {
    expr_bp(p, 0)
}

fn expr_bp(p: &mut Parser<'_>, min_bp: u8) -> Option<CompletedMarker> {
    let mut lhs = lhs(p)?;

    loop {
        let Some(op) = p.current().and_then(InfixOp::from_kind) else {
            break;
        };

        let (left_bp, right_bp) = op.binding_power();
        if left_bp < min_bp {
            break;
        }

        let m = lhs.precede(p);
        p.bump();

        // A missing right operand leaves the binary expression with just its lhs and operator.
        expr_bp(p, right_bp);
        lhs = m.complete(p, BIN_EXPR);
    }

    Some(lhs)
}

fn lhs(p: &mut Parser<'_>) -> Option<CompletedMarker> {
    let cm = match p.current() {
        Some(INT_NUMBER) => literal(p),
        Some(IDENT) => name_ref(p),
        Some(T![-]) => prefix_expr(p, PrefixOp::Neg),
        Some(T!['(']) => paren_expr(p),
        _ => {
            p.error_recover("expected expression", EXPR_RECOVERY_SET);
            return None;
        }
    };
    Some(cm)
}

fn literal(p: &mut Parser<'_>) -> CompletedMarker {
    assert!(p.at(INT_NUMBER));
    let m = p.start();
    p.bump();
    m.complete(p, LITERAL)
}

fn prefix_expr(p: &mut Parser<'_>, op: PrefixOp) -> CompletedMarker {
    let ((), right_bp) = op.binding_power();
    let m = p.start();
    p.bump();
    expr_bp(p, right_bp);
    m.complete(p, PREFIX_EXPR)
}

fn paren_expr(p: &mut Parser<'_>) -> CompletedMarker {
    assert!(p.at(T!['(']));
    let m = p.start();
    p.bump();
    expr_bp(p, 0);
    p.expect(T![')']);
    m.complete(p, PAREN_EXPR)
}

#[cfg(test)]
mod tests {
    use super::{InfixOp, PrefixOp};

    #[test]
    fn binding_powers() {
        let (add_l, add_r) = InfixOp::Add.binding_power();
        let (mul_l, mul_r) = InfixOp::Mul.binding_power();
        let ((), neg_r) = PrefixOp::Neg.binding_power();
        assert!(add_l < add_r);
        assert!(mul_l < mul_r);
        assert!(add_r < mul_l);
        assert!(neg_r > mul_r);
        assert_eq!(InfixOp::Sub.binding_power(), InfixOp::Add.binding_power());
        assert_eq!(InfixOp::Div.binding_power(), InfixOp::Mul.binding_power());
    }
}
