#![forbid(unsafe_code)]

//! Core: pixel geometry primitives and logging shims shared by the sizing crates.

pub mod geometry;
pub mod logging;

pub use geometry::{Axis, AxisParseError, Rect, Size};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
