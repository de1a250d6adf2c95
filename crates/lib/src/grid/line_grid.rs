use core::fmt;
use core::iter::FusedIterator;
use core::ops::Range;
use core::slice;

use crate::grid::Grid;

/// An owned grid built out of lines, where every row may have its own length.
///
/// Cells are stored contiguously with one range per row.
#[derive(Clone, PartialEq, Eq)]
pub struct LineGrid<T> {
    data: Vec<T>,
    rows: Vec<Range<usize>>,
}

impl<T> LineGrid<T> {
    /// Build a grid where each line is decoded into a row of cells by `f`.
    ///
    /// Every item produced by `lines` becomes exactly one row, even if it is
    /// empty.
    pub fn from_lines<'a, I, F, R>(lines: I, mut f: F) -> Self
    where
        I: IntoIterator<Item = &'a [u8]>,
        F: FnMut(&'a [u8]) -> R,
        R: IntoIterator<Item = T>,
    {
        let mut data = Vec::new();
        let mut rows = Vec::new();

        for line in lines {
            let start = data.len();
            data.extend(f(line));
            rows.push(start..data.len());
        }

        Self { data, rows }
    }
}

impl<T> Grid<T> for LineGrid<T> {
    type Rows<'a> = Rows<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn rows(&self) -> Self::Rows<'_> {
        Rows {
            data: &self.data,
            rows: self.rows.iter(),
        }
    }

    #[inline]
    fn row(&self, row: usize) -> Option<&[T]> {
        self.data.get(self.rows.get(row)?.clone())
    }

    #[inline]
    fn rows_len(&self) -> usize {
        self.rows.len()
    }
}

impl<T> fmt::Debug for LineGrid<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

/// Iterator over the rows of a [LineGrid].
pub struct Rows<'a, T> {
    data: &'a [T],
    rows: slice::Iter<'a, Range<usize>>,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let range = self.rows.next()?;
        self.data.get(range.clone())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl<T> DoubleEndedIterator for Rows<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let range = self.rows.next_back()?;
        self.data.get(range.clone())
    }
}

impl<T> ExactSizeIterator for Rows<'_, T> {}

impl<T> FusedIterator for Rows<'_, T> {}
