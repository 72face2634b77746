//! Logging macros that compile to nothing when tracing is disabled.
//!
//! Tracing is enabled when either:
//! - The `tracing` feature is enabled
//! - Running unit tests (`cfg(test)`)

#[cfg(any(test, feature = "tracing"))]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, trace};

/// Emit a trace-level log message (no-op version).
#[cfg(not(any(test, feature = "tracing")))]
macro_rules! trace {
    ($($tt:tt)*) => {};
}

/// Emit a debug-level log message (no-op version).
#[cfg(not(any(test, feature = "tracing")))]
macro_rules! debug {
    ($($tt:tt)*) => {};
}

#[cfg(not(any(test, feature = "tracing")))]
#[allow(unused_imports)]
pub(crate) use {debug, trace};
