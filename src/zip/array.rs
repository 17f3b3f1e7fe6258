use super::{nearest, Zip as ZipTrait, ZipCursor, ZipRange};
use crate::category::{BidirectionalOrAbove, ForwardOrAbove, RandomAccessOrAbove, Weakest};
use crate::cursor::{
    BidirectionalCursor, Classified, Cursor, Distance, ForwardCursor, IntoSequence,
    RandomAccessCursor, ReadCursor, Sequence,
};
use crate::utils::NonEmpty;

use core::array;
use core::cmp::Ordering;

impl<C, const N: usize> ZipCursor<[C; N]> {
    /// The number of constituent cursors.
    pub const ARITY: usize = N;
}

impl<C: Default, const N: usize> Default for ZipCursor<[C; N]> {
    fn default() -> Self {
        Self::new(array::from_fn(|_| C::default()))
    }
}

impl<C: Cursor, const N: usize> PartialEq for ZipCursor<[C; N]> {
    fn eq(&self, other: &Self) -> bool {
        #[allow(clippy::let_unit_value)]
        let () = NonEmpty::<N>::ASSERT;
        self.cursors
            .iter()
            .zip(other.cursors.iter())
            .any(|(lhs, rhs)| lhs == rhs)
    }
}

impl<C: Classified, const N: usize> Cursor for ZipCursor<[C; N]> {
    type Category = <[C::Category; N] as Weakest>::Output;
    type Reference = [C::Reference; N];

    #[inline]
    fn get(&self) -> Self::Reference {
        array::from_fn(|i| self.cursors[i].get())
    }

    #[inline]
    fn advance(&mut self) {
        self.cursors.iter_mut().for_each(|cursor| cursor.advance());
    }
}

impl<C: ReadCursor + Classified, const N: usize> ReadCursor for ZipCursor<[C; N]> {
    type Value = [C::Value; N];

    #[inline]
    fn read(&self) -> Self::Value {
        array::from_fn(|i| self.cursors[i].read())
    }
}

impl<C, const N: usize> ForwardCursor for ZipCursor<[C; N]>
where
    C: ForwardCursor + Classified,
    C::Category: ForwardOrAbove,
{
}

impl<C, const N: usize> BidirectionalCursor for ZipCursor<[C; N]>
where
    C: BidirectionalCursor + Classified,
    C::Category: BidirectionalOrAbove,
{
    #[inline]
    fn retreat(&mut self) {
        self.cursors.iter_mut().for_each(|cursor| cursor.retreat());
    }
}

impl<C: RandomAccessCursor, const N: usize> ZipCursor<[C; N]> {
    fn all_pairs(&self, other: &Self, relation: impl Fn(&C, &C) -> bool) -> bool {
        self.cursors
            .iter()
            .zip(other.cursors.iter())
            .all(|(lhs, rhs)| relation(lhs, rhs))
    }
}

impl<C: RandomAccessCursor, const N: usize> PartialOrd for ZipCursor<[C; N]> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.lt(other) {
            Some(Ordering::Less)
        } else if self.gt(other) {
            Some(Ordering::Greater)
        } else if self.all_pairs(other, |lhs, rhs| lhs == rhs) {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    fn lt(&self, other: &Self) -> bool {
        self.all_pairs(other, |lhs, rhs| lhs < rhs)
    }

    fn le(&self, other: &Self) -> bool {
        self.all_pairs(other, |lhs, rhs| lhs <= rhs)
    }

    fn gt(&self, other: &Self) -> bool {
        self.all_pairs(other, |lhs, rhs| lhs > rhs)
    }

    fn ge(&self, other: &Self) -> bool {
        self.all_pairs(other, |lhs, rhs| lhs >= rhs)
    }
}

impl<C, const N: usize> RandomAccessCursor for ZipCursor<[C; N]>
where
    C: RandomAccessCursor + Classified,
    C::Category: RandomAccessOrAbove,
{
    #[inline]
    fn offset(&mut self, n: Distance) {
        self.cursors.iter_mut().for_each(|cursor| cursor.offset(n));
    }

    fn distance_to(&self, other: &Self) -> Distance {
        self.cursors
            .iter()
            .zip(other.cursors.iter())
            .map(|(lhs, rhs)| lhs.distance_to(rhs))
            .fold(Distance::MAX, nearest)
    }
}

crate::cursor::impl_offset_ops! {
    impl [C, const N: usize] ZipCursor<[C; N]>
    where [C: RandomAccessCursor + Classified, C::Category: RandomAccessOrAbove]
}

impl<S, const N: usize> ZipTrait for [S; N]
where
    S: IntoSequence,
    S::Cursor: Classified,
{
    type Cursors = [S::Cursor; N];

    fn zip(self) -> ZipRange<Self::Cursors> {
        #[allow(clippy::let_unit_value)]
        let () = NonEmpty::<N>::ASSERT;
        let sequences = self.map(|sequence| sequence.into_sequence());
        ZipRange::new(
            ZipCursor::new(array::from_fn(|i| sequences[i].begin())),
            ZipCursor::new(array::from_fn(|i| sequences[i].end())),
        )
    }
}
