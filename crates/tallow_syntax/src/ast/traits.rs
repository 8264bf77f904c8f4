use crate::ast::{self, child_opt, AstNode};

pub trait NameOwner: AstNode {
    fn name(&self) -> Option<ast::Name> {
        child_opt(self)
    }
}
