use super::{Category, Meet};

/// The weakest category in a list of categories.
///
/// Implemented for tuples of up to 12 categories by folding [`Meet`] over the
/// slots, and for arrays `[C; N]`, where every slot shares one category and
/// the fold collapses to `C`. Since `Meet` is associative and commutative,
/// the order of the slots never affects the result.
pub trait Weakest {
    /// The resulting category.
    type Output: Category;
}

impl<A: Category> Weakest for (A,) {
    type Output = A;
}

macro_rules! impl_weakest_tuple {
    ($A:ident $($rest:ident)+) => {
        impl<$A, $($rest),+> Weakest for ($A, $($rest,)+)
        where
            ($($rest,)+): Weakest,
            $A: Meet<<($($rest,)+) as Weakest>::Output>,
        {
            type Output = <$A as Meet<<($($rest,)+) as Weakest>::Output>>::Output;
        }
    };
}

impl_weakest_tuple! { A B }
impl_weakest_tuple! { A B C }
impl_weakest_tuple! { A B C D }
impl_weakest_tuple! { A B C D E }
impl_weakest_tuple! { A B C D E F }
impl_weakest_tuple! { A B C D E F G }
impl_weakest_tuple! { A B C D E F G H }
impl_weakest_tuple! { A B C D E F G H I }
impl_weakest_tuple! { A B C D E F G H I J }
impl_weakest_tuple! { A B C D E F G H I J K }
impl_weakest_tuple! { A B C D E F G H I J K L }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Bidirectional, Forward, InputOutput, RandomAccess};
    use crate::Capability;

    fn weakest<T: Weakest>() -> Capability {
        <T::Output as Category>::CAPABILITY
    }

    #[test]
    fn single_slot_is_identity() {
        assert_eq!(weakest::<(InputOutput,)>(), Capability::InputOutput);
        assert_eq!(weakest::<(Forward,)>(), Capability::Forward);
        assert_eq!(weakest::<(Bidirectional,)>(), Capability::Bidirectional);
        assert_eq!(weakest::<(RandomAccess,)>(), Capability::RandomAccess);
    }

    #[test]
    fn order_does_not_matter() {
        assert_eq!(
            weakest::<(RandomAccess, Bidirectional, Forward)>(),
            Capability::Forward
        );
        assert_eq!(
            weakest::<(Forward, RandomAccess, Bidirectional)>(),
            Capability::Forward
        );
        assert_eq!(
            weakest::<(Bidirectional, Forward, RandomAccess)>(),
            Capability::Forward
        );
    }

    #[test]
    fn equal_classes_are_idempotent() {
        assert_eq!(
            weakest::<(RandomAccess, RandomAccess, RandomAccess, RandomAccess)>(),
            Capability::RandomAccess
        );
        assert_eq!(
            weakest::<(
                Bidirectional,
                Bidirectional,
                Bidirectional,
                Bidirectional,
                Bidirectional,
                Bidirectional,
                Bidirectional,
                Bidirectional,
                Bidirectional,
                Bidirectional,
                Bidirectional,
                Bidirectional,
            )>(),
            Capability::Bidirectional
        );
    }

    #[test]
    fn one_weak_slot_wins() {
        assert_eq!(
            weakest::<(RandomAccess, RandomAccess, InputOutput, RandomAccess)>(),
            Capability::InputOutput
        );
    }
}
