//! Lockstep traversal of several sequences.
//!
//! # Examples
//!
//! ```
//! use iterzip::prelude::*;
//!
//! let a = [1, 2, 3];
//! let b = [3, 4];
//! let pairs: Vec<_> = (&a, &b).zip().values().collect();
//! assert_eq!(pairs, [(1, 3), (2, 4)]);
//! ```
//!
//! # Capability gating
//!
//! A zip only offers what every one of its constituents offers. Zipping a
//! forward-only sequence with a slice yields a forward cursor, which cannot
//! step backwards:
//!
//! ```compile_fail
//! use iterzip::prelude::*;
//! use iterzip::cursor::BidirectionalCursor;
//! use std::collections::LinkedList;
//!
//! let list: LinkedList<u8> = (0..3).collect();
//! let vec = vec![1, 2, 3];
//! let zipped = (&list, &vec).zip();
//! let mut end = zipped.end();
//! end.retreat();
//! ```
//!
//! Nor can it be ordered:
//!
//! ```compile_fail
//! use iterzip::prelude::*;
//! use std::collections::LinkedList;
//!
//! let list: LinkedList<u8> = (0..3).collect();
//! let vec = vec![1, 2, 3];
//! let zipped = (&list, &vec).zip();
//! let _ = zipped.begin() < zipped.end();
//! ```
//!
//! Characters are bidirectional, so zipping a string with a slice walks
//! both ways:
//!
//! ```
//! use iterzip::prelude::*;
//!
//! let counts = [1, 2];
//! let zipped = ("hé", &counts).zip();
//! let mut end = zipped.end();
//! end.retreat();
//! assert_eq!(end.read(), ('é', 2));
//! ```
//!
//! but cannot jump:
//!
//! ```compile_fail
//! use iterzip::prelude::*;
//!
//! let counts = [1, 2, 3];
//! let zipped = ("héllo", &counts).zip();
//! let _ = zipped.begin() + 1;
//! ```
//!
//! ```compile_fail
//! use iterzip::prelude::*;
//!
//! let counts = [1, 2, 3];
//! let zipped = ("héllo", &counts).zip();
//! let mut end = zipped.end();
//! end -= 1;
//! ```
//!
//! cannot be indexed:
//!
//! ```compile_fail
//! use iterzip::prelude::*;
//!
//! let counts = [1, 2, 3];
//! let zipped = ("héllo", &counts).zip();
//! let _ = zipped.begin().read_at(1);
//! ```
//!
//! and cannot be ordered:
//!
//! ```compile_fail
//! use iterzip::prelude::*;
//!
//! let counts = [1, 2, 3];
//! let zipped = ("héllo", &counts).zip();
//! let _ = zipped.begin() < zipped.end();
//! ```
//!
//! A single-pass source makes the whole zip single-pass. Its cursors have no
//! placeholder value:
//!
//! ```compile_fail
//! use iterzip::prelude::*;
//! use iterzip::cursor::input;
//!
//! let counts = [1, 2, 3];
//! let zipped = (input(0..3), &counts).zip();
//! let mut cursor = zipped.begin();
//! cursor = Default::default();
//! ```
//!
//! and are not forward cursors:
//!
//! ```compile_fail
//! use iterzip::prelude::*;
//! use iterzip::cursor::{input, ForwardCursor};
//!
//! fn multi_pass<C: ForwardCursor>(_: &C) {}
//!
//! let counts = [1, 2, 3];
//! let zipped = (input(0..3), &counts).zip();
//! multi_pass(&zipped.begin());
//! ```
//!
//! Arrays of sequences must not be empty:
//!
//! ```compile_fail
//! use iterzip::Zip;
//!
//! let a = [1, 2, 3];
//! let _ = Zip::zip([&a[..]; 0]);
//! ```
//!
//! Whereas two slices give a random-access zip:
//!
//! ```
//! use iterzip::prelude::*;
//! use iterzip::cursor::RandomAccessCursor;
//!
//! let a = [1, 2, 3];
//! let b = ['x', 'y', 'z'];
//! let zipped = (&a, &b).zip();
//! assert!(zipped.begin() < zipped.end());
//! assert_eq!(zipped.begin().read_at(2), (3, 'z'));
//! assert_eq!((zipped.end() - 1).read(), (3, 'z'));
//! ```

use core::fmt;
use core::iter::FusedIterator;

use crate::cursor::{Cursor, Distance, RandomAccessCursor, ReadCursor, Sequence};

mod array;
mod tuple;

/// ‘Zips up’ multiple sequences into a single range of tuples.
pub trait Zip {
    /// The tuple or array of cursors each end of the range holds.
    type Cursors;

    /// Capture the begin and end cursors of every sequence.
    fn zip(self) -> ZipRange<Self::Cursors>;
}

/// ‘Zips up’ multiple sequences into a single range of tuples.
///
/// Shorthand for [`Zip::zip`].
///
/// # Examples
///
/// ```
/// let mut a = [1, 2, 3, 4, 5];
/// let b = [6, 7, 8, 9, 10];
///
/// for (x, _) in iterzip::zip((&mut a, &b)) {
///     x.set(5);
/// }
/// assert_eq!(a, [5; 5]);
/// ```
pub fn zip<S: Zip>(sequences: S) -> ZipRange<S::Cursors> {
    sequences.zip()
}

/// A cursor that moves several cursors in lockstep.
///
/// `T` is a tuple or array of cursors. Dereferencing yields a tuple (or
/// array) with one component per constituent, advancing moves all of them.
///
/// # Equality
///
/// Two zip cursors are **equal if any pair** of corresponding constituents
/// is equal, and unequal only if every pair differs. A traversal therefore
/// stops as soon as the shortest sequence is exhausted.
///
/// # Ordering
///
/// `<`, `<=`, `>` and `>=` hold only if they hold for **every pair**.
/// Ordering is only available when every constituent is random access.
pub struct ZipCursor<T> {
    cursors: T,
}

impl<T> ZipCursor<T> {
    /// Bundle a tuple or array of cursors.
    pub fn new(cursors: T) -> Self {
        Self { cursors }
    }

    /// The constituent cursors.
    pub fn as_inner(&self) -> &T {
        &self.cursors
    }

    /// Unbundle the constituent cursors.
    pub fn into_inner(self) -> T {
        self.cursors
    }
}

impl<T: Clone> Clone for ZipCursor<T> {
    fn clone(&self) -> Self {
        Self {
            cursors: self.cursors.clone(),
        }
    }
}

impl<T: Copy> Copy for ZipCursor<T> {}

impl<T: fmt::Debug> fmt::Debug for ZipCursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ZipCursor").field(&self.cursors).finish()
    }
}

/// The step count with the smallest magnitude, i.e. the one the shortest
/// constituent dictates.
#[inline]
fn nearest(current: Distance, candidate: Distance) -> Distance {
    if candidate.unsigned_abs() < current.unsigned_abs() {
        candidate
    } else {
        current
    }
}

/// Begin and end positions over several sequences at once.
///
/// Both positions are captured when the range is created and never derived
/// from the sources again; resizing a source afterwards invalidates the
/// range the same way it invalidates the source's own cursors.
///
/// This `struct` is created by the [`zip`] method on the [`Zip`] trait. See its
/// documentation for more.
///
/// [`zip`]: trait.Zip.html#method.zip
/// [`Zip`]: trait.Zip.html
pub struct ZipRange<T> {
    begin: ZipCursor<T>,
    end: ZipCursor<T>,
}

impl<T> ZipRange<T>
where
    ZipCursor<T>: Cursor,
{
    /// A range running from `begin` up to `end`.
    pub fn new(begin: ZipCursor<T>, end: ZipCursor<T>) -> Self {
        Self { begin, end }
    }

    /// A copy of the begin position.
    pub fn begin(&self) -> ZipCursor<T> {
        self.begin.clone()
    }

    /// A copy of the end position.
    pub fn end(&self) -> ZipCursor<T> {
        self.end.clone()
    }

    /// Whether some constituent sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// The number of tuples a traversal yields: the length of the shortest
    /// sequence.
    pub fn len(&self) -> usize
    where
        ZipCursor<T>: RandomAccessCursor,
    {
        usize::try_from(self.begin.distance_to(&self.end)).unwrap_or(0)
    }

    /// Iterate over live references into the sources.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            front: self.begin(),
            back: self.end(),
        }
    }

    /// Iterate over copies of the elements.
    pub fn values(&self) -> Values<T>
    where
        ZipCursor<T>: ReadCursor,
    {
        Values { inner: self.iter() }
    }

    /// Traverse the range as a [`Stream`](futures_core::Stream).
    ///
    /// This is a synchronous adapter. Every item is ready on the first poll,
    /// nothing is awaited, and no work happens concurrently; it only lets a
    /// zip be handed to code that expects a stream.
    #[cfg(feature = "stream")]
    pub fn into_stream(
        self,
    ) -> impl futures_core::Stream<Item = <ZipCursor<T> as Cursor>::Reference> {
        futures_lite::stream::iter(self)
    }
}

impl<T: Clone> Clone for ZipRange<T> {
    fn clone(&self) -> Self {
        Self {
            begin: self.begin.clone(),
            end: self.end.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ZipRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZipRange")
            .field("begin", &self.begin)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> Sequence for ZipRange<T>
where
    ZipCursor<T>: Cursor,
{
    type Cursor = ZipCursor<T>;

    fn begin(&self) -> ZipCursor<T> {
        self.begin.clone()
    }

    fn end(&self) -> ZipCursor<T> {
        self.end.clone()
    }
}

impl<T> Sequence for &ZipRange<T>
where
    ZipCursor<T>: Cursor,
{
    type Cursor = ZipCursor<T>;

    fn begin(&self) -> ZipCursor<T> {
        self.begin.clone()
    }

    fn end(&self) -> ZipCursor<T> {
        self.end.clone()
    }
}

impl<T> IntoIterator for ZipRange<T>
where
    ZipCursor<T>: Cursor,
{
    type Item = <ZipCursor<T> as Cursor>::Reference;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            front: self.begin,
            back: self.end,
        }
    }
}

impl<T> IntoIterator for &ZipRange<T>
where
    ZipCursor<T>: Cursor,
{
    type Item = <ZipCursor<T> as Cursor>::Reference;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the live references of a [`ZipRange`].
///
/// This `struct` is created by [`ZipRange::iter`] or by iterating a range
/// directly. It is double-ended when every constituent is random access.
pub struct Iter<T> {
    front: ZipCursor<T>,
    back: ZipCursor<T>,
}

impl<T> Iter<T>
where
    ZipCursor<T>: Cursor,
{
    #[inline]
    fn step<R>(&mut self, deref: impl FnOnce(&ZipCursor<T>) -> R) -> Option<R> {
        if self.front == self.back {
            return None;
        }
        let item = deref(&self.front);
        self.front.advance();
        Some(item)
    }
}

impl<T> Iter<T>
where
    ZipCursor<T>: RandomAccessCursor,
{
    fn step_back<R>(&mut self, deref: impl FnOnce(&ZipCursor<T>) -> R) -> Option<R> {
        if self.front == self.back {
            return None;
        }
        let remaining = self.front.distance_to(&self.back);
        if remaining <= 0 {
            return None;
        }
        // Re-anchor the back on the shortest constituent so every slot of
        // the back cursor lines up with the front.
        let mut back = self.front.clone();
        back.offset(remaining - 1);
        let item = deref(&back);
        self.back = back;
        Some(item)
    }
}

impl<T: Clone> Clone for Iter<T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

impl<T> Iterator for Iter<T>
where
    ZipCursor<T>: Cursor,
{
    type Item = <ZipCursor<T> as Cursor>::Reference;

    fn next(&mut self) -> Option<Self::Item> {
        self.step(|cursor| cursor.get())
    }
}

impl<T> DoubleEndedIterator for Iter<T>
where
    ZipCursor<T>: RandomAccessCursor,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.step_back(|cursor| cursor.get())
    }
}

impl<T> FusedIterator for Iter<T> where ZipCursor<T>: Cursor {}

/// An iterator over copies of the elements of a [`ZipRange`].
///
/// This `struct` is created by [`ZipRange::values`].
pub struct Values<T> {
    inner: Iter<T>,
}

impl<T: Clone> Clone for Values<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Values<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Values").field(&self.inner).finish()
    }
}

impl<T> Iterator for Values<T>
where
    ZipCursor<T>: ReadCursor,
{
    type Item = <ZipCursor<T> as ReadCursor>::Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.step(|cursor| cursor.read())
    }
}

impl<T> DoubleEndedIterator for Values<T>
where
    ZipCursor<T>: RandomAccessCursor + ReadCursor,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.step_back(|cursor| cursor.read())
    }
}

impl<T> FusedIterator for Values<T> where ZipCursor<T>: ReadCursor {}
