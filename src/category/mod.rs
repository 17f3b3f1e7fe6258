//! Capability classes as types.
//!
//! Every [`Cursor`](crate::cursor::Cursor) names one of the four marker types
//! in this module as its `Category`. Composite cursors compute theirs with
//! [`Weakest`], a fold of [`Meet`] over the categories of their constituents,
//! so the class of a zip is a property of its type and is known before any
//! range is constructed.
//!
//! # Examples
//!
//! ```
//! use iterzip::category::{Bidirectional, Category, Forward, RandomAccess, Weakest};
//! use iterzip::Capability;
//!
//! type Composite = <(RandomAccess, Forward, Bidirectional) as Weakest>::Output;
//! assert_eq!(<Composite as Category>::CAPABILITY, Capability::Forward);
//! ```

use core::fmt::Debug;

use crate::{private_decl, private_impl, Capability};

mod array;
mod tuple;

pub use tuple::Weakest;

/// A capability class, expressed as a type.
///
/// This trait is sealed: the four markers in this module are its only
/// implementors.
pub trait Category: Copy + Default + Debug + Eq + 'static {
    private_decl! {}

    /// The runtime counterpart of this class.
    const CAPABILITY: Capability;
}

/// The weaker of `Self` and `Rhs`, computed at the type level.
pub trait Meet<Rhs: Category>: Category {
    /// The resulting category.
    type Output: Category;
}

macro_rules! impl_category {
    ($($(#[$attr:meta])* $Marker:ident => $capability:ident,)+) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $Marker;

            impl Category for $Marker {
                private_impl! {}

                const CAPABILITY: Capability = Capability::$capability;
            }
        )+
    };
}

impl_category! {
    /// Single-pass cursors. Anything not known to be stronger lands here.
    InputOutput => InputOutput,
    /// Multi-pass, default-constructible cursors.
    Forward => Forward,
    /// Forward cursors that can also retreat.
    Bidirectional => Bidirectional,
    /// Bidirectional cursors with offset arithmetic, ordering and indexing.
    RandomAccess => RandomAccess,
}

/// Categories that grant at least the [`Forward`] operations.
///
/// Tier traits such as [`ForwardCursor`](crate::cursor::ForwardCursor) are
/// only implementable by cursors whose category has the matching floor, so a
/// cursor cannot offer more than it declares.
pub trait ForwardOrAbove: Category {}

/// Categories that grant at least the [`Bidirectional`] operations.
pub trait BidirectionalOrAbove: ForwardOrAbove {}

/// Categories that grant the [`RandomAccess`] operations.
pub trait RandomAccessOrAbove: BidirectionalOrAbove {}

impl ForwardOrAbove for Forward {}
impl ForwardOrAbove for Bidirectional {}
impl ForwardOrAbove for RandomAccess {}
impl BidirectionalOrAbove for Bidirectional {}
impl BidirectionalOrAbove for RandomAccess {}
impl RandomAccessOrAbove for RandomAccess {}

macro_rules! impl_meet {
    ($($Lhs:ident & $Rhs:ident => $Output:ident;)+) => {
        $(
            impl Meet<$Rhs> for $Lhs {
                type Output = $Output;
            }
        )+
    };
}

impl_meet! {
    InputOutput & InputOutput => InputOutput;
    InputOutput & Forward => InputOutput;
    InputOutput & Bidirectional => InputOutput;
    InputOutput & RandomAccess => InputOutput;

    Forward & InputOutput => InputOutput;
    Forward & Forward => Forward;
    Forward & Bidirectional => Forward;
    Forward & RandomAccess => Forward;

    Bidirectional & InputOutput => InputOutput;
    Bidirectional & Forward => Forward;
    Bidirectional & Bidirectional => Bidirectional;
    Bidirectional & RandomAccess => Bidirectional;

    RandomAccess & InputOutput => InputOutput;
    RandomAccess & Forward => Forward;
    RandomAccess & Bidirectional => Bidirectional;
    RandomAccess & RandomAccess => RandomAccess;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meet<A: Meet<B>, B: Category>() -> Capability {
        <<A as Meet<B>>::Output as Category>::CAPABILITY
    }

    macro_rules! check_pairs {
        ($($Lhs:ident)+; $rhs:tt) => {
            $( check_pairs!(@row $Lhs $rhs); )+
        };
        (@row $Lhs:ident [$($Rhs:ident)+]) => {
            $(
                assert_eq!(
                    meet::<$Lhs, $Rhs>(),
                    $Lhs::CAPABILITY.meet($Rhs::CAPABILITY),
                    concat!(stringify!($Lhs), " & ", stringify!($Rhs)),
                );
            )+
        };
    }

    #[test]
    fn type_level_meet_matches_runtime_meet() {
        check_pairs!(
            InputOutput Forward Bidirectional RandomAccess;
            [InputOutput Forward Bidirectional RandomAccess]
        );
    }

    fn floor<C: ForwardOrAbove>() -> Capability {
        C::CAPABILITY
    }

    #[test]
    fn floors_admit_only_stronger_classes() {
        assert!(floor::<Forward>() >= Capability::Forward);
        assert!(floor::<Bidirectional>() >= Capability::Forward);
        assert!(floor::<RandomAccess>() >= Capability::Forward);
    }

    #[test]
    fn markers_map_to_their_capability() {
        assert_eq!(InputOutput::CAPABILITY, Capability::InputOutput);
        assert_eq!(Forward::CAPABILITY, Capability::Forward);
        assert_eq!(Bidirectional::CAPABILITY, Capability::Bidirectional);
        assert_eq!(RandomAccess::CAPABILITY, Capability::RandomAccess);
    }
}
