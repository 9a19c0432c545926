//! Crate-internal helper macros.

/// Emits a trace-level event if the `tracing` feature is enabled.
///
/// Without the feature, the arguments are still type checked but no event
/// is produced.
macro_rules! trace {
    ( $( $arg:tt )* ) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($( $arg )*);
        #[cfg(not(feature = "tracing"))]
        let _ = format_args!($( $arg )*);
    };
}
