use std::fmt;

use text_size::{TextRange, TextSize};

use crate::parsing::ParseError;

/// Where in the source text a `SyntaxError` occurred.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    Offset(TextSize),
    Range(TextRange),
}

impl From<TextSize> for Location {
    fn from(offset: TextSize) -> Self {
        Location::Offset(offset)
    }
}

impl From<TextRange> for Location {
    fn from(range: TextRange) -> Self {
        Location::Range(range)
    }
}

impl Location {
    pub fn offset(&self) -> TextSize {
        match self {
            Location::Offset(offset) => *offset,
            Location::Range(range) => range.start(),
        }
    }

    pub fn end_offset(&self) -> TextSize {
        match self {
            Location::Offset(offset) => *offset,
            Location::Range(range) => range.end(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Offset(offset) => write!(f, "{}", u32::from(*offset)),
            Location::Range(range) => {
                write!(f, "{}..{}", u32::from(range.start()), u32::from(range.end()))
            }
        }
    }
}

/// An error in the syntax of the input. Syntax errors never abort a parse; they are collected
/// next to the tree that was produced regardless.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyntaxError {
    kind: SyntaxErrorKind,
    location: Location,
}

impl SyntaxError {
    pub fn new<L: Into<Location>>(kind: SyntaxErrorKind, loc: L) -> SyntaxError {
        SyntaxError {
            kind,
            location: loc.into(),
        }
    }

    pub fn parse_error<L: Into<Location>>(msg: impl Into<String>, loc: L) -> SyntaxError {
        SyntaxError::new(SyntaxErrorKind::ParseError(ParseError(msg.into())), loc)
    }

    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    pub fn location(&self) -> Location {
        self.location.clone()
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for SyntaxError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SyntaxErrorKind {
    ParseError(ParseError),
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorKind::ParseError(msg) => f.write_str(&msg.0),
        }
    }
}
