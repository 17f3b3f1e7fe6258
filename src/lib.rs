//! Lockstep traversal of several sequences with cursors.
//!
//! A zip bundles one cursor per source sequence and moves them together, so
//! a single traversal visits the first elements of every source, then the
//! second elements, and so on until the shortest source runs out. What the
//! zipped cursor can do is the least of what its constituents can do, and
//! that is decided entirely by the type system: zipping a linked list with a
//! vector gives a forward cursor, and trying to step it backwards is a
//! compile error rather than a runtime failure.
//!
//! # Operations
//!
//! This library provides the following on tuples and arrays of sequences:
//!
//! - [`Zip`]: bundle sequences into a [`ZipRange`] of [`ZipCursor`]s.
//! - [`Capability`]: the four capability classes, ordered from weakest to
//!   strongest, with [`Capability::meet`] to combine them at runtime.
//! - [`category::Weakest`]: the same combination, computed on types.
//!
//! # Examples
//!
//! Zip sequences of different lengths and element types:
//! ```rust
//! use iterzip::prelude::*;
//!
//! let numbers = [1, 2, 3];
//! let letters = vec!['a', 'b'];
//! let zipped: Vec<_> = (&numbers, &letters).zip().values().collect();
//! assert_eq!(zipped, [(1, 'a'), (2, 'b')]);
//! ```
//!
//! Write through a zip into the sources:
//! ```rust
//! use iterzip::prelude::*;
//!
//! let mut a = [1, 2, 3];
//! let b = [10, 20, 30];
//! for (x, y) in (&mut a, &b).zip() {
//!     x.set(x.get() + y);
//! }
//! assert_eq!(a, [11, 22, 33]);
//! ```
//!
//! Elements that are not `Copy` are written through the same cells, by
//! replacing them:
//! ```rust
//! use iterzip::prelude::*;
//!
//! let mut names = vec![String::from("ada"), String::from("grace")];
//! let surnames = ["lovelace", "hopper"];
//! for (name, surname) in (&mut names, &surnames).zip() {
//!     let mut full = name.take();
//!     full.push(' ');
//!     full.push_str(surname);
//!     name.set(full);
//! }
//! assert_eq!(names, ["ada lovelace", "grace hopper"]);
//! ```
//!
//! # Limitations
//!
//! A zip of zero sequences has no meaningful end, so there is no `Zip`
//! implementation for `()`, and zipping an empty array fails to compile.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]
#![allow(non_snake_case)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod capability;
mod utils;

#[doc(hidden)]
pub use utils::private;

pub mod category;
pub mod cursor;
pub mod zip;

pub use capability::{Capability, ParseCapabilityError};
pub use zip::{zip, Zip, ZipCursor, ZipRange};

/// The iterzip prelude.
pub mod prelude {
    pub use super::cursor::IntoSequence as _;
    pub use super::cursor::Sequence as _;
    pub use super::zip::Zip as _;

    pub use super::cursor::BidirectionalCursor as _;
    pub use super::cursor::Cursor as _;
    pub use super::cursor::ForwardCursor as _;
    pub use super::cursor::RandomAccessCursor as _;
    pub use super::cursor::ReadCursor as _;
}
