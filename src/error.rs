//! Error types for grid and surface operations.
//!
//! Entirely-off-grid regions are deliberately *not* errors: region operations
//! are called with loosely-computed bounds during animation, and an off-grid
//! region resolves to a documented no-op instead.

use thiserror::Error;

/// Errors raised by grid and surface operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A color value was not a 3- or 4-channel sequence.
    #[error("invalid color: expected 3 or 4 channel values, got {0}")]
    InvalidColor(usize),

    /// Contradictory partial region arguments (width/height without x/y,
    /// or exactly one of a required pair).
    #[error("invalid region: {0}")]
    InvalidRegion(&'static str),

    /// An explicit cursor set outside `[-width, width) x [-height, height)`.
    #[error("cursor ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBoundsCursor {
        /// Requested column (negative values index from the right edge).
        x: i32,
        /// Requested row (negative values index from the bottom edge).
        y: i32,
        /// Grid width at the time of the call.
        width: u16,
        /// Grid height at the time of the call.
        height: u16,
    },
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;
