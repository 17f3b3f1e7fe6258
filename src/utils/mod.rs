//! Utilities to implement the cursors and ranges of this crate.

mod array;
mod tuple;

#[doc(hidden)]
pub mod private;

pub(crate) use array::NonEmpty;
pub(crate) use tuple::tuple_len;
