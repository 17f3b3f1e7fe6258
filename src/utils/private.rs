//! Sealing support for traits whose implementors are fixed by this crate.

/// Returned by the hidden sealing method; unnameable outside `iterzip`
/// without reaching into a `#[doc(hidden)]` module.
#[allow(missing_debug_implementations)]
pub struct PrivateMarker;

#[doc(hidden)]
#[macro_export]
macro_rules! private_impl {
    () => {
        fn __iterzip_private__(&self) -> $crate::private::PrivateMarker {
            $crate::private::PrivateMarker
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! private_decl {
    () => {
        /// This trait is sealed; this method exists to make it
        /// impossible to implement outside the crate.
        #[doc(hidden)]
        fn __iterzip_private__(&self) -> $crate::private::PrivateMarker;
    };
}
