use core::fmt;

use crate::input::InputError;

/// Attach the input path, and the position of the first [InputError] found
/// in the chain, as context to an error.
pub fn error_context<E>(path: &'static str, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);
    let pos = find_pos(&error);
    error.context(ErrorContext { path, pos })
}

/// A zero-based line and column combination, displayed one-based.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;
        let column = self.column + 1;
        write!(f, "{line}:{column}")
    }
}

/// The input error might be threaded through multiple layers of context, so
/// the whole chain is searched.
fn find_pos(error: &anyhow::Error) -> Option<LineCol> {
    error
        .chain()
        .find_map(|e| e.downcast_ref::<InputError>())
        .map(InputError::pos)
}

#[derive(Debug)]
struct ErrorContext {
    path: &'static str,
    pos: Option<LineCol>,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pos {
            Some(pos) => write!(f, "{path}:{pos}", path = self.path),
            None => f.write_str(self.path),
        }
    }
}
