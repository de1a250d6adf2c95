//! Reading and splitting puzzle input.

mod error;

use core::iter::FusedIterator;
use std::fs::File;
use std::io::Read;

use anyhow::{anyhow, Context};

pub use self::error::{ErrorKind, InputError};

pub(crate) const NL: u8 = b'\n';

/// Puzzle input loaded into memory.
#[derive(Debug, Clone)]
pub struct Input {
    /// The path being processed, relative to the solution package.
    path: &'static str,
    data: Vec<u8>,
}

impl Input {
    /// Construct input from data that has already been loaded.
    #[inline]
    pub fn new(path: &'static str, data: Vec<u8>) -> Self {
        Self { path, data }
    }

    /// The path the input was read from.
    #[inline]
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &[u8] {
        &self.data
    }
}

/// Split data on `\n` without trimming anything.
///
/// Unlike [str::lines], this always produces at least one line, keeps a
/// trailing empty line after a final `\n` and leaves any `\r` in place.
///
/// # Examples
///
/// ```
/// let lines = lib::input::lines(b"ab\r\n\nc\n").collect::<Vec<_>>();
/// assert_eq!(lines, [&b"ab\r"[..], &b""[..], &b"c"[..], &b""[..]]);
///
/// assert_eq!(lib::input::lines(b"").count(), 1);
/// ```
#[inline]
pub fn lines(data: &[u8]) -> Lines<'_> {
    Lines { data: Some(data) }
}

/// Iterator produced by [lines].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    data: Option<&'a [u8]>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let data = self.data.take()?;

        let Some(at) = memchr::memchr(NL, data) else {
            return Some(data);
        };

        self.data = data.get(at.saturating_add(1)..);
        data.get(..at)
    }
}

impl FusedIterator for Lines<'_> {}

/// Read input from `read_path`, reporting failures against `path`.
#[inline]
pub fn read(path: &'static str, read_path: &str) -> anyhow::Result<Input> {
    return inner(read_path)
        .map(|data| Input::new(path, data))
        .with_context(|| anyhow!(path));

    #[inline]
    fn inner(read_path: &str) -> anyhow::Result<Vec<u8>> {
        let mut file = File::open(read_path)?;
        let mut buf = Vec::with_capacity(4096);
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
