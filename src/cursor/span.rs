use super::{Cursor, Sequence};

/// A sequence delimited by an explicit pair of cursors.
///
/// This is how cursors that don't come from a standard container take part
/// in a zip: hand over where to start and where to stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Span<C> {
    begin: C,
    end: C,
}

impl<C: Cursor> Span<C> {
    /// A sequence running from `begin` up to, but excluding, `end`.
    pub fn new(begin: C, end: C) -> Self {
        Self { begin, end }
    }

    /// Split the span back into its cursors.
    pub fn into_parts(self) -> (C, C) {
        (self.begin, self.end)
    }
}

impl<C: Cursor> Sequence for Span<C> {
    type Cursor = C;

    fn begin(&self) -> C {
        self.begin.clone()
    }

    fn end(&self) -> C {
        self.end.clone()
    }
}
