//! Position markers within sequences, segregated by capability.
//!
//! A cursor points at one element of a sequence. What else it can do is
//! expressed by which of the traits in this module it implements, from the
//! single-pass [`Cursor`] up to [`RandomAccessCursor`]. Each cursor also names
//! its strongest tier as a [`Category`] type, so that composite cursors can
//! compute their own class without running any code.
//!
//! Sequences hand out a begin and an end cursor through [`Sequence`]; borrowed
//! standard containers become sequences through [`IntoSequence`]:
//!
//! | Source              | Cursor                          | Class         |
//! | ---                 | ---                             | ---           |
//! | `&[T]`, `&Vec<T>`   | [`SliceCursor`]                 | random access |
//! | `&mut [T]`, `&mut Vec<T>` | [`CellCursor`] (write-through) | random access |
//! | `&str`, `&String`   | [`CharCursor`]                  | bidirectional |
//! | `&LinkedList<T>`, `&BTreeSet<T>`, `&BTreeMap<K, V>` | [`LenCursor`] | forward |
//! | any `Iterator` via [`input`] | [`IterCursor`]         | input/output  |

use crate::category::{
    Bidirectional, BidirectionalOrAbove, Category, Forward, ForwardOrAbove, InputOutput,
    RandomAccess, RandomAccessOrAbove,
};

/// Implement `+`, `-`, `+=` and `-=` by a [`Distance`] in terms of
/// [`RandomAccessCursor::offset`].
macro_rules! impl_offset_ops {
    (impl [$($generics:tt)*] $ty:ty where [$($bounds:tt)*]) => {
        impl<$($generics)*> core::ops::AddAssign<$crate::cursor::Distance> for $ty
        where
            $($bounds)*
        {
            #[inline]
            fn add_assign(&mut self, n: $crate::cursor::Distance) {
                $crate::cursor::RandomAccessCursor::offset(self, n);
            }
        }

        impl<$($generics)*> core::ops::SubAssign<$crate::cursor::Distance> for $ty
        where
            $($bounds)*
        {
            #[inline]
            fn sub_assign(&mut self, n: $crate::cursor::Distance) {
                $crate::cursor::RandomAccessCursor::offset(self, -n);
            }
        }

        impl<$($generics)*> core::ops::Add<$crate::cursor::Distance> for $ty
        where
            $($bounds)*
        {
            type Output = Self;

            #[inline]
            fn add(mut self, n: $crate::cursor::Distance) -> Self {
                self += n;
                self
            }
        }

        impl<$($generics)*> core::ops::Sub<$crate::cursor::Distance> for $ty
        where
            $($bounds)*
        {
            type Output = Self;

            #[inline]
            fn sub(mut self, n: $crate::cursor::Distance) -> Self {
                self -= n;
                self
            }
        }
    };
}
pub(crate) use impl_offset_ops;

mod cell;
mod chars;
mod iter;
mod len;
mod slice;
mod span;

pub use cell::{CellCursor, Cells};
pub use chars::CharCursor;
pub use iter::{input, IterCursor};
pub use len::LenCursor;
pub use slice::SliceCursor;
pub use span::Span;

/// The signed offset between two positions.
pub type Distance = isize;

/// A single-pass position within a sequence.
///
/// Two cursors compare equal when they denote the same position. Cursors are
/// plain values: cloning one yields an independent position marker into the
/// same sequence.
pub trait Cursor: Clone + PartialEq {
    /// The strongest tier this cursor implements.
    ///
    /// The stronger tier traits can only be implemented when this category
    /// grants them, and [`zip`](crate::zip()) rejects cursors that declare a
    /// category they do not implement (see [`Classified`]).
    type Category: Category;

    /// A live reference to the element under the cursor. Writes through it
    /// reach the source sequence.
    type Reference;

    /// Borrow the current element from the source sequence.
    fn get(&self) -> Self::Reference;

    /// Step to the next position.
    fn advance(&mut self);

    /// Step to the next position, returning the cursor as it was before.
    fn post_advance(&mut self) -> Self {
        let previous = self.clone();
        self.advance();
        previous
    }
}

/// A cursor whose element can be copied out.
///
/// Slice cursors read when `T: Clone`. A [`CellCursor`] reads only when
/// `T: Copy`; other elements of a mutably borrowed slice are reached through
/// the `&Cell<T>` returned by [`Cursor::get`].
pub trait ReadCursor: Cursor {
    /// An owned copy of the element under the cursor.
    type Value;

    /// Read a copy of the current element.
    fn read(&self) -> Self::Value;
}

/// A multi-pass cursor.
///
/// The default value is a placeholder position: it may be compared and
/// assigned to but not dereferenced.
///
/// A counter declaring [`Forward`] is a forward cursor:
///
/// ```
/// use iterzip::category::Forward;
/// use iterzip::cursor::{Cursor, ForwardCursor};
///
/// #[derive(Clone, Default, PartialEq)]
/// struct Counter(u32);
///
/// impl Cursor for Counter {
///     type Category = Forward;
///     type Reference = u32;
///     fn get(&self) -> u32 { self.0 }
///     fn advance(&mut self) { self.0 += 1 }
/// }
///
/// impl ForwardCursor for Counter {}
/// ```
///
/// The same counter declaring a single-pass category cannot implement it:
///
/// ```compile_fail
/// use iterzip::category::InputOutput;
/// use iterzip::cursor::{Cursor, ForwardCursor};
///
/// #[derive(Clone, Default, PartialEq)]
/// struct Counter(u32);
///
/// impl Cursor for Counter {
///     type Category = InputOutput;
///     type Reference = u32;
///     fn get(&self) -> u32 { self.0 }
///     fn advance(&mut self) { self.0 += 1 }
/// }
///
/// impl ForwardCursor for Counter {}
/// ```
pub trait ForwardCursor: Cursor + Default + CategoryAtLeast<Forward> {}

/// A forward cursor that can also step backwards.
pub trait BidirectionalCursor: ForwardCursor + CategoryAtLeast<Bidirectional> {
    /// Step to the previous position.
    fn retreat(&mut self);

    /// Step to the previous position, returning the cursor as it was before.
    fn post_retreat(&mut self) -> Self {
        let previous = self.clone();
        self.retreat();
        previous
    }
}

/// A bidirectional cursor that can jump, be ordered, and be indexed.
///
/// Implementors also get `+`, `-`, `+=` and `-=` by a [`Distance`].
pub trait RandomAccessCursor:
    BidirectionalCursor + PartialOrd + CategoryAtLeast<RandomAccess>
{
    /// Move by `n` positions; negative values move backwards.
    fn offset(&mut self, n: Distance);

    /// The number of steps from `self` to `other`.
    fn distance_to(&self, other: &Self) -> Distance;

    /// Read a copy of the element `n` positions away.
    fn read_at(&self, n: Distance) -> <Self as ReadCursor>::Value
    where
        Self: ReadCursor,
    {
        let mut cursor = self.clone();
        cursor.offset(n);
        cursor.read()
    }

    /// Borrow the element `n` positions away.
    fn get_at(&self, n: Distance) -> Self::Reference {
        let mut cursor = self.clone();
        cursor.offset(n);
        cursor.get()
    }
}

/// The cursor's declared [`Category`] grants the operations of `Tier`.
///
/// This is the floor each tier trait puts on `Cursor::Category`. It is
/// implemented automatically and never needs to be named.
pub trait CategoryAtLeast<Tier: Category>: Cursor {}

impl<C> CategoryAtLeast<Forward> for C
where
    C: Cursor,
    C::Category: ForwardOrAbove,
{
}

impl<C> CategoryAtLeast<Bidirectional> for C
where
    C: Cursor,
    C::Category: BidirectionalOrAbove,
{
}

impl<C> CategoryAtLeast<RandomAccess> for C
where
    C: Cursor,
    C::Category: RandomAccessOrAbove,
{
}

/// The cursor implements the tier trait that matches `Tier`.
pub trait Provides<Tier: Category>: Cursor {}

impl<C: Cursor> Provides<InputOutput> for C {}
impl<C: ForwardCursor> Provides<Forward> for C {}
impl<C: BidirectionalCursor> Provides<Bidirectional> for C {}
impl<C: RandomAccessCursor> Provides<RandomAccess> for C {}

/// A cursor that implements every tier its [`Category`] promises.
///
/// Together with the floors on the tier traits this pins a cursor's category
/// to exactly the strongest tier it implements. Zipping requires it of every
/// constituent, so the category of a zip never claims operations the zip
/// does not have. A plain counter zips when it declares what it offers:
///
/// ```
/// use iterzip::category::InputOutput;
/// use iterzip::cursor::{Cursor, Span};
/// use iterzip::prelude::*;
///
/// #[derive(Clone, PartialEq)]
/// struct Counter(u32);
///
/// impl Cursor for Counter {
///     type Category = InputOutput;
///     type Reference = u32;
///     fn get(&self) -> u32 { self.0 }
///     fn advance(&mut self) { self.0 += 1 }
/// }
///
/// let data = [1, 2, 3];
/// let pairs: Vec<_> = (Span::new(Counter(0), Counter(3)), &data).zip().into_iter().collect();
/// assert_eq!(pairs, [(0, &1), (1, &2), (2, &3)]);
/// ```
///
/// but not when it claims random access:
///
/// ```compile_fail
/// use iterzip::category::RandomAccess;
/// use iterzip::cursor::{Cursor, Span};
/// use iterzip::prelude::*;
///
/// #[derive(Clone, PartialEq)]
/// struct Boastful(u32);
///
/// impl Cursor for Boastful {
///     type Category = RandomAccess;
///     type Reference = u32;
///     fn get(&self) -> u32 { self.0 }
///     fn advance(&mut self) { self.0 += 1 }
/// }
///
/// let data = [1, 2, 3];
/// let _ = (Span::new(Boastful(0), Boastful(3)), &data).zip();
/// ```
pub trait Classified: Cursor {}

impl<C> Classified for C where C: Cursor + Provides<<C as Cursor>::Category> {}

/// A sequence that can be traversed with cursors.
pub trait Sequence {
    /// The cursor type of this sequence.
    type Cursor: Cursor;

    /// A cursor at the first element.
    fn begin(&self) -> Self::Cursor;

    /// A cursor one past the last element.
    fn end(&self) -> Self::Cursor;
}

/// Conversion into a [`Sequence`].
///
/// By implementing `IntoSequence` for a type, you define how it will be
/// viewed as a pair of cursors. This is implemented for borrowed standard
/// containers, and for every `Sequence`.
pub trait IntoSequence {
    /// The cursor type of the resulting sequence.
    type Cursor: Cursor;

    /// Which kind of sequence are we turning this into?
    type IntoSequence: Sequence<Cursor = Self::Cursor>;

    /// Creates a sequence from a value.
    fn into_sequence(self) -> Self::IntoSequence;
}

impl<S: Sequence> IntoSequence for S {
    type Cursor = S::Cursor;
    type IntoSequence = S;

    #[inline]
    fn into_sequence(self) -> S {
        self
    }
}
