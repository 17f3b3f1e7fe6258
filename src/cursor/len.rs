use core::fmt;

use super::{Cursor, ForwardCursor, ReadCursor, Span};
use crate::category::Forward;

/// A forward cursor over a cloneable, exact-size iterator.
///
/// The position is the number of elements the iterator has left, so two
/// cursors over the same sequence compare equal exactly when they have
/// advanced the same number of steps. This lifts the borrowing iterators of
/// node-based containers such as `LinkedList` or `BTreeSet` into cursors.
///
/// Dereferencing a cursor that has no elements left panics.
#[derive(Clone, Default)]
pub struct LenCursor<I> {
    iter: I,
}

impl<I> LenCursor<I>
where
    I: Iterator + ExactSizeIterator + Clone + Default,
{
    /// A cursor at the first element `iter` yields.
    pub fn new(iter: I) -> Self {
        Self { iter }
    }

    /// A cursor past the last element of any sequence over `I`.
    pub fn end() -> Self {
        Self { iter: I::default() }
    }

    /// A begin/end pair over `iter`.
    pub fn span(iter: I) -> Span<Self> {
        Span::new(Self::new(iter), Self::end())
    }

    /// The number of elements left after this position, inclusive.
    pub fn remaining(&self) -> usize {
        self.iter.len()
    }
}

impl<I: fmt::Debug> fmt::Debug for LenCursor<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LenCursor").field(&self.iter).finish()
    }
}

impl<I: ExactSizeIterator> PartialEq for LenCursor<I> {
    fn eq(&self, other: &Self) -> bool {
        self.iter.len() == other.iter.len()
    }
}

impl<I> Cursor for LenCursor<I>
where
    I: Iterator + ExactSizeIterator + Clone + Default,
{
    type Category = Forward;
    type Reference = I::Item;

    fn get(&self) -> I::Item {
        match self.iter.clone().next() {
            Some(item) => item,
            None => panic!("dereferenced a `LenCursor` past the end of its sequence"),
        }
    }

    fn advance(&mut self) {
        let stepped = self.iter.next();
        debug_assert!(stepped.is_some(), "advanced a `LenCursor` past its end");
    }
}

impl<I> ReadCursor for LenCursor<I>
where
    I: Iterator + ExactSizeIterator + Clone + Default,
{
    type Value = I::Item;

    fn read(&self) -> I::Item {
        self.get()
    }
}

impl<I> ForwardCursor for LenCursor<I> where I: Iterator + ExactSizeIterator + Clone + Default {}

#[cfg(feature = "alloc")]
mod containers {
    use alloc::collections::{btree_map, btree_set, linked_list};
    use alloc::collections::{BTreeMap, BTreeSet, LinkedList};

    use super::LenCursor;
    use crate::cursor::{IntoSequence, Span};

    impl<'a, T> IntoSequence for &'a LinkedList<T> {
        type Cursor = LenCursor<linked_list::Iter<'a, T>>;
        type IntoSequence = Span<Self::Cursor>;

        fn into_sequence(self) -> Self::IntoSequence {
            LenCursor::span(self.iter())
        }
    }

    impl<'a, T> IntoSequence for &'a BTreeSet<T> {
        type Cursor = LenCursor<btree_set::Iter<'a, T>>;
        type IntoSequence = Span<Self::Cursor>;

        fn into_sequence(self) -> Self::IntoSequence {
            LenCursor::span(self.iter())
        }
    }

    impl<'a, K, V> IntoSequence for &'a BTreeMap<K, V> {
        type Cursor = LenCursor<btree_map::Iter<'a, K, V>>;
        type IntoSequence = Span<Self::Cursor>;

        fn into_sequence(self) -> Self::IntoSequence {
            LenCursor::span(self.iter())
        }
    }
}
