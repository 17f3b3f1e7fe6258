use super::{nearest, Zip as ZipTrait, ZipCursor, ZipRange};
use crate::category::{BidirectionalOrAbove, ForwardOrAbove, RandomAccessOrAbove, Weakest};
use crate::cursor::{
    impl_offset_ops, BidirectionalCursor, Classified, Cursor, Distance, ForwardCursor,
    IntoSequence, RandomAccessCursor, ReadCursor, Sequence,
};
use crate::utils;

use core::cmp::Ordering;

macro_rules! impl_zip_tuple {
    ($($C:ident=$idx:tt)+) => {
        impl<$($C),+> ZipCursor<($($C,)+)> {
            /// The number of constituent cursors.
            pub const ARITY: usize = utils::tuple_len!($($C),+);
        }

        impl<$($C: Default),+> Default for ZipCursor<($($C,)+)> {
            fn default() -> Self {
                Self::new(($($C::default(),)+))
            }
        }

        impl<$($C),+> PartialEq for ZipCursor<($($C,)+)>
        where $(
            $C: Cursor,
        )+ {
            fn eq(&self, other: &Self) -> bool {
                // Any single pair meeting ends the traversal.
                false $(|| self.cursors.$idx == other.cursors.$idx)+
            }
        }

        impl<$($C),+> Cursor for ZipCursor<($($C,)+)>
        where
            $($C: Classified,)+
            ($($C::Category,)+): Weakest,
        {
            type Category = <($($C::Category,)+) as Weakest>::Output;
            type Reference = ($($C::Reference,)+);

            #[inline]
            fn get(&self) -> Self::Reference {
                ($(self.cursors.$idx.get(),)+)
            }

            #[inline]
            fn advance(&mut self) {
                $(self.cursors.$idx.advance();)+
            }
        }

        impl<$($C),+> ReadCursor for ZipCursor<($($C,)+)>
        where
            $($C: ReadCursor + Classified,)+
            ($($C::Category,)+): Weakest,
        {
            type Value = ($($C::Value,)+);

            #[inline]
            fn read(&self) -> Self::Value {
                ($(self.cursors.$idx.read(),)+)
            }
        }

        impl<$($C),+> ForwardCursor for ZipCursor<($($C,)+)>
        where
            $($C: ForwardCursor + Classified,)+
            ($($C::Category,)+): Weakest,
            <($($C::Category,)+) as Weakest>::Output: ForwardOrAbove,
        {}

        impl<$($C),+> BidirectionalCursor for ZipCursor<($($C,)+)>
        where
            $($C: BidirectionalCursor + Classified,)+
            ($($C::Category,)+): Weakest,
            <($($C::Category,)+) as Weakest>::Output: BidirectionalOrAbove,
        {
            #[inline]
            fn retreat(&mut self) {
                $(self.cursors.$idx.retreat();)+
            }
        }

        impl<$($C),+> PartialOrd for ZipCursor<($($C,)+)>
        where $(
            $C: RandomAccessCursor,
        )+ {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                if self.lt(other) {
                    Some(Ordering::Less)
                } else if self.gt(other) {
                    Some(Ordering::Greater)
                } else if true $(&& self.cursors.$idx == other.cursors.$idx)+ {
                    Some(Ordering::Equal)
                } else {
                    None
                }
            }

            fn lt(&self, other: &Self) -> bool {
                true $(&& self.cursors.$idx < other.cursors.$idx)+
            }

            fn le(&self, other: &Self) -> bool {
                true $(&& self.cursors.$idx <= other.cursors.$idx)+
            }

            fn gt(&self, other: &Self) -> bool {
                true $(&& self.cursors.$idx > other.cursors.$idx)+
            }

            fn ge(&self, other: &Self) -> bool {
                true $(&& self.cursors.$idx >= other.cursors.$idx)+
            }
        }

        impl<$($C),+> RandomAccessCursor for ZipCursor<($($C,)+)>
        where
            $($C: RandomAccessCursor + Classified,)+
            ($($C::Category,)+): Weakest,
            <($($C::Category,)+) as Weakest>::Output: RandomAccessOrAbove,
        {
            #[inline]
            fn offset(&mut self, n: Distance) {
                $(self.cursors.$idx.offset(n);)+
            }

            fn distance_to(&self, other: &Self) -> Distance {
                let mut distance = Distance::MAX;
                $(
                    distance = nearest(distance, self.cursors.$idx.distance_to(&other.cursors.$idx));
                )+
                distance
            }
        }

        impl_offset_ops! {
            impl [$($C),+] ZipCursor<($($C,)+)>
            where [
                $($C: RandomAccessCursor + Classified,)+
                ($($C::Category,)+): Weakest,
                <($($C::Category,)+) as Weakest>::Output: RandomAccessOrAbove,
            ]
        }

        impl<$($C),+> ZipTrait for ($($C,)+)
        where
            $($C: IntoSequence,)+
            ZipCursor<($($C::Cursor,)+)>: Cursor,
        {
            type Cursors = ($($C::Cursor,)+);

            fn zip(self) -> ZipRange<Self::Cursors> {
                let ($($C,)+) = self;
                $(let $C = $C.into_sequence();)+
                ZipRange::new(
                    ZipCursor::new(($($C.begin(),)+)),
                    ZipCursor::new(($($C.end(),)+)),
                )
            }
        }
    };
}

impl_zip_tuple! { A=0 }
impl_zip_tuple! { A=0 B=1 }
impl_zip_tuple! { A=0 B=1 C=2 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 J=9 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 J=9 K=10 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 J=9 K=10 L=11 }

#[cfg(test)]
mod tests {
    use crate::category::Category;
    use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor, SliceCursor};
    use crate::prelude::*;
    use crate::{Capability, ZipCursor};

    fn capability_of<C: Cursor>(_: &C) -> Capability {
        <C::Category as Category>::CAPABILITY
    }

    #[test]
    fn zip_tuple_3() {
        let a = [1, 2, 3];
        let b = ['a', 'b', 'c', 'd'];
        let c = [true, false, true];
        let values: Vec<_> = (&a, &b, &c).zip().values().collect();
        assert_eq!(values, [(1, 'a', true), (2, 'b', false), (3, 'c', true)]);
    }

    #[test]
    fn zip_tuple_12() {
        let a = [0u8; 2];
        let range = (&a, &a, &a, &a, &a, &a, &a, &a, &a, &a, &a, &a).zip();
        assert_eq!(range.iter().count(), 2);
    }

    #[test]
    fn arity() {
        assert_eq!(ZipCursor::<(u8,)>::ARITY, 1);
        assert_eq!(ZipCursor::<(u8, u8, u8)>::ARITY, 3);
    }

    #[test]
    fn single_slot_behaves_like_its_cursor() {
        let a = [1, 2, 3];
        let range = (&a,).zip();
        let mut cursor = range.begin();
        assert_eq!(capability_of(&cursor), Capability::RandomAccess);
        assert_eq!(cursor.read(), (1,));
        cursor.advance();
        cursor.retreat();
        assert_eq!(cursor, range.begin());
        assert!(cursor < range.end());
        assert_eq!(cursor.distance_to(&range.end()), 3);
    }

    #[test]
    fn equal_if_any_pair_is_equal() {
        let a = [1, 2, 3];
        let b = [4, 5];
        let range = (&a, &b).zip();
        let mut cursor = range.begin();
        cursor.advance();
        cursor.advance();
        // `a` has one element left, `b` is exhausted.
        assert!(cursor == range.end());
        assert!(!(cursor != range.end()));
    }

    #[test]
    fn ordering_needs_every_pair() {
        let a = [0; 4];
        let b = [0; 4];
        let range = (&a, &b).zip();
        let (a0, b0) = range.begin().into_inner();

        let x = ZipCursor::new((a0, b0 + 2));
        let y = ZipCursor::new((a0 + 1, b0 + 1));
        assert!(!(x < y));
        assert!(!(x > y));
        assert!(!(x <= y));
        assert!(!(x >= y));
        assert_eq!(x.partial_cmp(&y), None);

        let z = ZipCursor::new((a0 + 2, b0 + 3));
        assert!(x < z);
        assert!(x <= z);
        assert_eq!(x.partial_cmp(&z), Some(core::cmp::Ordering::Less));
        assert_eq!(x.partial_cmp(&x), Some(core::cmp::Ordering::Equal));
    }

    #[test]
    fn offsets_apply_to_every_slot() {
        let a = [1, 2, 3, 4];
        let b = [5, 6, 7, 8];
        let range = (&a, &b).zip();
        let mut cursor = range.begin() + 3;
        assert_eq!(cursor.read(), (4, 8));
        cursor -= 2;
        assert_eq!(cursor.read(), (2, 6));
        cursor += 1;
        assert_eq!(cursor.get(), (&3, &7));
        assert_eq!((cursor - 2).read(), (1, 5));
        assert_eq!(cursor.read_at(-1), (2, 6));
    }

    #[test]
    fn distance_follows_the_shortest() {
        let a = [0; 5];
        let b = [0; 3];
        let range = (&a, &b).zip();
        assert_eq!(range.begin().distance_to(&range.end()), 3);
        assert_eq!(range.len(), 3);
    }

    #[test]
    fn post_increment_and_decrement() {
        let a = [1, 2, 3];
        let b = [4, 5, 6];
        let range = (&a, &b).zip();
        let mut cursor = range.begin();
        let before = cursor.post_advance();
        assert_eq!(before.read(), (1, 4));
        assert_eq!(cursor.read(), (2, 5));
        let before = cursor.post_retreat();
        assert_eq!(before.read(), (2, 5));
        assert_eq!(cursor.read(), (1, 4));
    }

    #[test]
    fn default_holds_default_constituents() {
        let cursor: ZipCursor<(SliceCursor<'_, u8>, SliceCursor<'_, u8>)> = Default::default();
        let (a, b) = cursor.into_inner();
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 0);
    }
}
