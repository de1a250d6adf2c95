use bstr::BString;
use thiserror::Error;

use crate::cli::LineCol;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("not an integer or integer overflow `{0}`")]
    NotInteger(BString),
    #[error("arithmetic overflow")]
    Overflow,
}

/// Error raised while interpreting input, tagged with where it happened.
#[derive(Debug, Clone, Error)]
#[error("{kind}")]
pub struct InputError {
    pos: LineCol,
    kind: ErrorKind,
}

impl InputError {
    /// Construct a new input error.
    #[inline]
    pub fn new(pos: LineCol, kind: ErrorKind) -> Self {
        Self { pos, kind }
    }

    /// Where in the input the error happened.
    #[inline]
    pub fn pos(&self) -> LineCol {
        self.pos
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}
