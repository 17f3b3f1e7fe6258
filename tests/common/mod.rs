#![allow(dead_code)]

use iterzip::category::{Bidirectional, Category};
use iterzip::cursor::{
    BidirectionalCursor, Cursor, ForwardCursor, ReadCursor, Sequence, SliceCursor,
};
use iterzip::Capability;

/// The capability class a cursor reports through its type.
pub fn capability_of<C: Cursor>(_: &C) -> Capability {
    <C::Category as Category>::CAPABILITY
}

/// A slice that only admits bidirectional traversal.
#[derive(Debug)]
pub struct Bidi<'a, T>(pub &'a [T]);

impl<'a, T> Sequence for Bidi<'a, T> {
    type Cursor = BidiCursor<'a, T>;

    fn begin(&self) -> Self::Cursor {
        BidiCursor(self.0.begin())
    }

    fn end(&self) -> Self::Cursor {
        BidiCursor(self.0.end())
    }
}

#[derive(Debug)]
pub struct BidiCursor<'a, T>(SliceCursor<'a, T>);

impl<T> Clone for BidiCursor<'_, T> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}

impl<T> Default for BidiCursor<'_, T> {
    fn default() -> Self {
        Self(SliceCursor::default())
    }
}

impl<T> PartialEq for BidiCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<'a, T> Cursor for BidiCursor<'a, T> {
    type Category = Bidirectional;
    type Reference = &'a T;

    fn get(&self) -> &'a T {
        self.0.get()
    }

    fn advance(&mut self) {
        self.0.advance();
    }
}

impl<T: Clone> ReadCursor for BidiCursor<'_, T> {
    type Value = T;

    fn read(&self) -> T {
        self.0.read()
    }
}

impl<T> ForwardCursor for BidiCursor<'_, T> {}

impl<T> BidirectionalCursor for BidiCursor<'_, T> {
    fn retreat(&mut self) {
        self.0.retreat();
    }
}
