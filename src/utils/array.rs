/// Compile-time guard against zero-length arrays of cursors.
///
/// A composite with no constituents never compares equal to anything, so it
/// would never reach its end. Evaluating [`NonEmpty::ASSERT`] turns that
/// into a build failure at monomorphization time.
pub(crate) struct NonEmpty<const N: usize>;

impl<const N: usize> NonEmpty<N> {
    pub(crate) const ASSERT: () = assert!(N > 0, "cannot zip an empty array of sequences");
}
