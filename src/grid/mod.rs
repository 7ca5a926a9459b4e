//! The cell grid: per-cell state, the text-writing engine, and region
//! operations.

mod cell;
#[allow(clippy::module_inception)]
mod grid;
mod ops;
mod writer;

pub use cell::{is_printable, Cell, CellFlags, Rgba, PRINTABLE_MAX, PRINTABLE_MIN};
pub use grid::Grid;
pub use ops::Channels;
