use core::cell::Cell;
use core::cmp::Ordering;
use core::fmt;

use super::{
    BidirectionalCursor, Cursor, Distance, ForwardCursor, IntoSequence, RandomAccessCursor,
    ReadCursor, Sequence,
};
use crate::category::RandomAccess;

/// A mutably borrowed slice, viewed as a slice of cells.
///
/// Begin and end cursors of one sequence are copies that point into the same
/// storage. Going through [`Cell`] lets every copy write to the elements
/// without handing out aliasing `&mut T`s.
pub struct Cells<'a, T> {
    cells: &'a [Cell<T>],
}

impl<'a, T> Cells<'a, T> {
    /// Borrow `slice` mutably for the lifetime of the sequence.
    pub fn new(slice: &'a mut [T]) -> Self {
        Self {
            cells: Cell::from_mut(slice).as_slice_of_cells(),
        }
    }

    /// View a slice that already consists of cells.
    pub fn from_cells(cells: &'a [Cell<T>]) -> Self {
        Self { cells }
    }
}

impl<T> fmt::Debug for Cells<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cells")
            .field("len", &self.cells.len())
            .finish()
    }
}

impl<'a, T> Sequence for Cells<'a, T> {
    type Cursor = CellCursor<'a, T>;

    fn begin(&self) -> Self::Cursor {
        CellCursor {
            cells: self.cells,
            index: 0,
        }
    }

    fn end(&self) -> Self::Cursor {
        CellCursor {
            cells: self.cells,
            index: self.cells.len(),
        }
    }
}

impl<'a, T> IntoSequence for &'a mut [T] {
    type Cursor = CellCursor<'a, T>;
    type IntoSequence = Cells<'a, T>;

    fn into_sequence(self) -> Self::IntoSequence {
        Cells::new(self)
    }
}

impl<'a, T, const N: usize> IntoSequence for &'a mut [T; N] {
    type Cursor = CellCursor<'a, T>;
    type IntoSequence = Cells<'a, T>;

    fn into_sequence(self) -> Self::IntoSequence {
        Cells::new(self.as_mut_slice())
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> IntoSequence for &'a mut alloc::vec::Vec<T> {
    type Cursor = CellCursor<'a, T>;
    type IntoSequence = Cells<'a, T>;

    fn into_sequence(self) -> Self::IntoSequence {
        Cells::new(self.as_mut_slice())
    }
}

/// A random-access cursor that writes through to its source slice.
///
/// [`get`](Cursor::get) yields `&'a Cell<T>` for any `T`; [`Cell::set`],
/// [`Cell::replace`], [`Cell::take`] and [`Cell::swap`] on it mutate the
/// element in the original container. Copying the element out with
/// [`read`](ReadCursor::read) needs `T: Copy`.
pub struct CellCursor<'a, T> {
    cells: &'a [Cell<T>],
    index: usize,
}

impl<T> CellCursor<'_, T> {
    /// The position of this cursor within its slice.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for CellCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CellCursor<'_, T> {}

impl<T> Default for CellCursor<'_, T> {
    fn default() -> Self {
        Self {
            cells: &[],
            index: 0,
        }
    }
}

impl<T> fmt::Debug for CellCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellCursor")
            .field("index", &self.index)
            .field("len", &self.cells.len())
            .finish()
    }
}

impl<T> PartialEq for CellCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for CellCursor<'_, T> {}

impl<T> PartialOrd for CellCursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for CellCursor<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl<'a, T> Cursor for CellCursor<'a, T> {
    type Category = RandomAccess;
    type Reference = &'a Cell<T>;

    #[inline]
    fn get(&self) -> &'a Cell<T> {
        &self.cells[self.index]
    }

    #[inline]
    fn advance(&mut self) {
        self.index = self.index.wrapping_add(1);
    }
}

impl<T: Copy> ReadCursor for CellCursor<'_, T> {
    type Value = T;

    #[inline]
    fn read(&self) -> T {
        self.cells[self.index].get()
    }
}

impl<T> ForwardCursor for CellCursor<'_, T> {}

impl<T> BidirectionalCursor for CellCursor<'_, T> {
    #[inline]
    fn retreat(&mut self) {
        self.index = self.index.wrapping_sub(1);
    }
}

impl<T> RandomAccessCursor for CellCursor<'_, T> {
    #[inline]
    fn offset(&mut self, n: Distance) {
        self.index = self.index.wrapping_add_signed(n);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> Distance {
        other.index.wrapping_sub(self.index) as Distance
    }
}

impl_offset_ops! { impl ['a, T] CellCursor<'a, T> where [] }
