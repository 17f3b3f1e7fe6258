use core::fmt;

use super::{BidirectionalCursor, Cursor, ForwardCursor, ReadCursor, Sequence};
use crate::category::Bidirectional;

/// A bidirectional cursor over the characters of a string slice.
///
/// The position is a byte offset that always sits on a character boundary.
/// Characters vary in width, so jumping by `n` is a walk, and the cursor
/// stops short of random access.
#[derive(Clone, Copy, Default)]
pub struct CharCursor<'a> {
    text: &'a str,
    index: usize,
}

impl CharCursor<'_> {
    /// The byte offset of this cursor within its string.
    pub fn index(&self) -> usize {
        self.index
    }

    fn rest(&self) -> Option<char> {
        self.text.get(self.index..)?.chars().next()
    }
}

impl fmt::Debug for CharCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharCursor")
            .field("index", &self.index)
            .field("current", &self.rest())
            .finish()
    }
}

impl PartialEq for CharCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for CharCursor<'_> {}

impl Cursor for CharCursor<'_> {
    type Category = Bidirectional;
    type Reference = char;

    fn get(&self) -> char {
        match self.rest() {
            Some(c) => c,
            None => panic!("dereferenced a `CharCursor` past the end of its string"),
        }
    }

    fn advance(&mut self) {
        debug_assert!(self.index < self.text.len(), "advanced a `CharCursor` past its end");
        self.index += self.rest().map_or(1, char::len_utf8);
    }
}

impl ReadCursor for CharCursor<'_> {
    type Value = char;

    fn read(&self) -> char {
        self.get()
    }
}

impl ForwardCursor for CharCursor<'_> {}

impl BidirectionalCursor for CharCursor<'_> {
    fn retreat(&mut self) {
        let width = self
            .text
            .get(..self.index)
            .and_then(|head| head.chars().next_back())
            .map_or(1, char::len_utf8);
        self.index = self.index.wrapping_sub(width);
    }
}

impl<'a> Sequence for &'a str {
    type Cursor = CharCursor<'a>;

    fn begin(&self) -> Self::Cursor {
        CharCursor {
            text: *self,
            index: 0,
        }
    }

    fn end(&self) -> Self::Cursor {
        CharCursor {
            text: *self,
            index: self.len(),
        }
    }
}

#[cfg(feature = "alloc")]
impl<'a> super::IntoSequence for &'a alloc::string::String {
    type Cursor = CharCursor<'a>;
    type IntoSequence = &'a str;

    fn into_sequence(self) -> Self::IntoSequence {
        self.as_str()
    }
}
