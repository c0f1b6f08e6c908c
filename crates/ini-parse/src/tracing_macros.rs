//! Parser logging. Without the `tracing` feature, `trace!` expands to nothing
//! so the parser loop carries no logging cost.

/// Log a parser step at trace level.
#[cfg(any(test, feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

/// Disabled parser logging; the arguments are not evaluated.
#[cfg(not(any(test, feature = "tracing")))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}
