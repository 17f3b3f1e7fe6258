use core::cmp::Ordering;
use core::fmt;

use super::{
    BidirectionalCursor, Cursor, Distance, ForwardCursor, IntoSequence, RandomAccessCursor,
    ReadCursor, Sequence,
};
use crate::category::RandomAccess;

/// A random-access cursor into a shared slice.
///
/// Dereferencing with [`get`](Cursor::get) yields `&'a T`, borrowed for as
/// long as the slice is, for any `T`; [`read`](ReadCursor::read) clones and
/// needs `T: Clone`. Dereferencing a position outside the slice panics.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// A cursor at `index` within `slice`.
    pub fn new(slice: &'a [T], index: usize) -> Self {
        Self { slice, index }
    }

    /// The position of this cursor within its slice.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> Default for SliceCursor<'_, T> {
    fn default() -> Self {
        Self {
            slice: &[],
            index: 0,
        }
    }
}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> PartialOrd for SliceCursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for SliceCursor<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Category = RandomAccess;
    type Reference = &'a T;

    #[inline]
    fn get(&self) -> &'a T {
        &self.slice[self.index]
    }

    #[inline]
    fn advance(&mut self) {
        self.index = self.index.wrapping_add(1);
    }
}

impl<T: Clone> ReadCursor for SliceCursor<'_, T> {
    type Value = T;

    #[inline]
    fn read(&self) -> T {
        self.slice[self.index].clone()
    }
}

impl<T> ForwardCursor for SliceCursor<'_, T> {}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
    #[inline]
    fn retreat(&mut self) {
        self.index = self.index.wrapping_sub(1);
    }
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
    #[inline]
    fn offset(&mut self, n: Distance) {
        self.index = self.index.wrapping_add_signed(n);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> Distance {
        other.index.wrapping_sub(self.index) as Distance
    }
}

impl_offset_ops! { impl ['a, T] SliceCursor<'a, T> where [] }

impl<'a, T> Sequence for &'a [T] {
    type Cursor = SliceCursor<'a, T>;

    fn begin(&self) -> Self::Cursor {
        SliceCursor::new(*self, 0)
    }

    fn end(&self) -> Self::Cursor {
        SliceCursor::new(*self, self.len())
    }
}

impl<'a, T, const N: usize> IntoSequence for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;
    type IntoSequence = &'a [T];

    fn into_sequence(self) -> Self::IntoSequence {
        self.as_slice()
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> IntoSequence for &'a alloc::vec::Vec<T> {
    type Cursor = SliceCursor<'a, T>;
    type IntoSequence = &'a [T];

    fn into_sequence(self) -> Self::IntoSequence {
        self.as_slice()
    }
}
