//! Shared support for puzzle solutions.

pub mod cli;
pub mod grid;
pub mod input;
mod macros;

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::cli::LineCol;
    pub use crate::grid::{Grid, LineGrid};
    pub use crate::input::{ErrorKind, Input, InputError};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use bstr::ByteSlice;
    pub use log::{debug, error, info, trace, warn};
}
