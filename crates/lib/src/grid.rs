//! Row-major grids which might be jagged.

mod line_grid;

pub use self::line_grid::{LineGrid, Rows};

pub trait Grid<T> {
    /// Construct an iterator over rows in the grid.
    type Rows<'a>: Iterator<Item = &'a [T]>
    where
        Self: 'a,
        T: 'a;

    /// Iterate over rows in the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let grid = LineGrid::from_lines([&b"ab"[..], &b"c"[..]], |line| line.iter().copied());
    /// assert!(grid.rows().flatten().copied().eq(*b"abc"));
    /// ```
    fn rows(&self) -> Self::Rows<'_>;

    /// Access the specified row in the grid.
    fn row(&self, row: usize) -> Option<&[T]>;

    /// Get number of rows in the grid.
    fn rows_len(&self) -> usize;

    /// Get number of columns in the given row, or `0` if the row is out of
    /// bounds.
    #[inline]
    fn columns_len(&self, row: usize) -> usize {
        self.row(row).map_or(0, <[T]>::len)
    }

    /// Get the element at the given row and column.
    #[inline]
    #[track_caller]
    fn get(&self, row: usize, column: usize) -> &T {
        match self.try_get(row, column) {
            Some(value) => value,
            None => panic!("missing row `{row}`, column `{column}`"),
        }
    }

    /// Get the element at the given row and column.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let grid = LineGrid::from_lines([&b"12"[..], &b"3"[..]], |line| line.iter().copied());
    ///
    /// assert_eq!(grid.try_get(0, 1), Some(&b'2'));
    /// assert_eq!(grid.try_get(1, 0), Some(&b'3'));
    /// assert_eq!(grid.try_get(1, 1), None);
    /// assert_eq!(grid.try_get(2, 0), None);
    /// ```
    #[inline]
    fn try_get(&self, row: usize, column: usize) -> Option<&T> {
        self.row(row)?.get(column)
    }

    /// Apply a signed `(row, column)` delta to a position, returning the new
    /// position only if it lands inside the grid.
    ///
    /// The row bound is checked first, and the column bound is checked
    /// against the target row's own length.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let grid = LineGrid::from_lines([&b"123"[..], &b"4"[..]], |line| line.iter().copied());
    ///
    /// assert_eq!(grid.offset(0, 0, (1, 0)), Some((1, 0)));
    /// assert_eq!(grid.offset(0, 0, (-1, 0)), None);
    /// assert_eq!(grid.offset(0, 0, (0, -1)), None);
    /// assert_eq!(grid.offset(0, 2, (1, 0)), None);
    /// ```
    #[inline]
    fn offset(
        &self,
        row: usize,
        column: usize,
        (dr, dc): (isize, isize),
    ) -> Option<(usize, usize)> {
        let row = row.checked_add_signed(dr)?;

        if row >= self.rows_len() {
            return None;
        }

        let column = column.checked_add_signed(dc)?;

        if column >= self.columns_len(row) {
            return None;
        }

        Some((row, column))
    }
}

impl<G, T> Grid<T> for &G
where
    G: ?Sized + Grid<T>,
{
    type Rows<'a> = G::Rows<'a>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn rows(&self) -> Self::Rows<'_> {
        (**self).rows()
    }

    #[inline]
    fn row(&self, row: usize) -> Option<&[T]> {
        (**self).row(row)
    }

    #[inline]
    fn rows_len(&self) -> usize {
        (**self).rows_len()
    }
}
