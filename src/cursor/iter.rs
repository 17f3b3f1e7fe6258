use core::fmt;

use super::{Cursor, ReadCursor, Span};
use crate::category::InputOutput;

/// An input cursor over any iterator.
///
/// This is the fallback for sources that offer nothing beyond "give me the
/// next element": its category is [`InputOutput`], so any zip it takes part
/// in is single-pass too. The element under the cursor is buffered, which is
/// why dereferencing yields owned items.
///
/// Positions are only distinguishable at the end: two cursors compare equal
/// when both are exhausted, and never otherwise.
pub struct IterCursor<I: Iterator> {
    iter: Option<I>,
    current: Option<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    /// A cursor at the first element `iter` yields.
    pub fn new(mut iter: I) -> Self {
        let current = iter.next();
        Self {
            iter: Some(iter),
            current,
        }
    }

    /// The exhausted cursor.
    pub fn end() -> Self {
        Self {
            iter: None,
            current: None,
        }
    }

    /// Whether there is an element under the cursor.
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }
}

/// View any iterator as a single-pass sequence.
///
/// # Examples
///
/// ```
/// use iterzip::prelude::*;
/// use iterzip::cursor::input;
///
/// let words = ["a", "b", "c"];
/// let pairs: Vec<_> = (input(1..), &words).zip().into_iter().collect();
/// assert_eq!(pairs, [(1, &"a"), (2, &"b"), (3, &"c")]);
/// ```
pub fn input<I>(iter: I) -> Span<IterCursor<I::IntoIter>>
where
    I: IntoIterator,
    I::IntoIter: Clone,
    I::Item: Clone,
{
    Span::new(IterCursor::new(iter.into_iter()), IterCursor::end())
}

impl<I> Clone for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            current: self.current.clone(),
        }
    }
}

impl<I> fmt::Debug for IterCursor<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterCursor")
            .field("current", &self.current)
            .field("iter", &self.iter)
            .finish()
    }
}

impl<I: Iterator> PartialEq for IterCursor<I> {
    fn eq(&self, other: &Self) -> bool {
        self.is_exhausted() && other.is_exhausted()
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Category = InputOutput;
    type Reference = I::Item;

    fn get(&self) -> I::Item {
        match &self.current {
            Some(item) => item.clone(),
            None => panic!("dereferenced an exhausted `IterCursor`"),
        }
    }

    fn advance(&mut self) {
        debug_assert!(!self.is_exhausted(), "advanced an exhausted `IterCursor`");
        self.current = self.iter.as_mut().and_then(Iterator::next);
        if self.current.is_none() {
            self.iter = None;
        }
    }
}

impl<I> ReadCursor for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Value = I::Item;

    fn read(&self) -> I::Item {
        self.get()
    }
}
