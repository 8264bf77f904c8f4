use std::fmt;

use smol_str::SmolStr;
use tallow_syntax::{ast, AstNode};

/// `Name` is a wrapper around string, which is used in hir for both references and declarations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(SmolStr);

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Name {
    pub fn new(text: impl Into<SmolStr>) -> Name {
        Name(text.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Converts a syntax node that spells out an identifier into a `Name`.
pub trait AsName {
    fn as_name(&self) -> Name;
}

impl AsName for ast::Name {
    fn as_name(&self) -> Name {
        Name::new(self.syntax().text().to_string())
    }
}

impl AsName for ast::NameRef {
    fn as_name(&self) -> Name {
        Name::new(self.syntax().text().to_string())
    }
}
